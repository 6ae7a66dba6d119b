use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::password::HashedPassword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherId(Uuid);
impl TeacherId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Teacher account data, ready to be persisted.
///
/// `lattes` and `cv` are links to the teacher's academic profiles and are
/// mandatory, the contact and biography fields are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
    pub cpf: String,
    pub birth_date: Option<String>,
    pub email: String,
    pub cellphone: Option<String>,
    pub whats_app: Option<String>,
    pub photo: Option<String>,
    pub lattes: String,
    pub cv: String,
    pub about: Option<String>,
    pub password_hash: HashedPassword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    id: TeacherId,
    data: NewTeacher,
    created_at: DateTime<Utc>,
}

impl Teacher {
    pub fn reconstruct(id: TeacherId, data: NewTeacher, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            data,
            created_at,
        }
    }

    pub fn id(&self) -> &TeacherId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.data.name
    }
    pub fn cpf(&self) -> &str {
        &self.data.cpf
    }
    pub fn birth_date(&self) -> Option<&str> {
        self.data.birth_date.as_deref()
    }
    pub fn email(&self) -> &str {
        &self.data.email
    }
    pub fn cellphone(&self) -> Option<&str> {
        self.data.cellphone.as_deref()
    }
    pub fn whats_app(&self) -> Option<&str> {
        self.data.whats_app.as_deref()
    }
    pub fn photo(&self) -> Option<&str> {
        self.data.photo.as_deref()
    }
    pub fn lattes(&self) -> &str {
        &self.data.lattes
    }
    pub fn cv(&self) -> &str {
        &self.data.cv
    }
    pub fn about(&self) -> Option<&str> {
        self.data.about.as_deref()
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
