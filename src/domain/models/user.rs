use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::password::HashedPassword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(Uuid);
impl UserId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated user data, ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub cpf: String,
    pub birthdate: String,
    pub cellphone: String,
    pub email: String,
    pub password_hash: HashedPassword,
}

/// Query used by `find` / `find_one`. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
}

impl UserFilter {
    pub fn by_cpf(cpf: impl Into<String>) -> Self {
        Self {
            cpf: Some(cpf.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    data: NewUser,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn reconstruct(id: UserId, data: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            data,
            created_at,
        }
    }

    // getterのみ提供
    pub fn id(&self) -> &UserId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.data.name
    }
    pub fn cpf(&self) -> &str {
        &self.data.cpf
    }
    pub fn birthdate(&self) -> &str {
        &self.data.birthdate
    }
    pub fn cellphone(&self) -> &str {
        &self.data.cellphone
    }
    pub fn email(&self) -> &str {
        &self.data.email
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
