use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domain::{
    error::DomainError,
    models::teacher::{NewTeacher, Teacher},
    repositories::teacher_repository::TeacherRepository,
    services::{password_service::PasswordHasher, token_service::TokenGenerator},
};

/// Teacher account data as received from the client, password in plain text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddAccountTeacherParams {
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
    pub password: String,
}

/// Created teacher account. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountTeacherModel {
    pub id: String,
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
    pub token: String,
    pub created_at: String,
}

impl AddAccountTeacherModel {
    fn new(teacher: &Teacher, token: String) -> Self {
        Self {
            id: teacher.id().to_string(),
            name: teacher.name().to_string(),
            cpf: teacher.cpf().to_string(),
            birth_date: teacher.birth_date().map(str::to_string),
            email: teacher.email().to_string(),
            cellphone: teacher.cellphone().map(str::to_string),
            whats_app: teacher.whats_app().map(str::to_string),
            photo: teacher.photo().map(str::to_string),
            lattes: teacher.lattes().to_string(),
            cv: teacher.cv().to_string(),
            about: teacher.about().map(str::to_string),
            token,
            created_at: teacher.created_at().to_rfc3339(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccountTeacher: Send + Sync {
    async fn add(
        &self,
        account: AddAccountTeacherParams,
    ) -> Result<AddAccountTeacherModel, DomainError>;
}

pub struct AddAccountTeacherUsecase<R: TeacherRepository, P: PasswordHasher, T: TokenGenerator> {
    teacher_repository: R,
    password_hasher: P,
    token_generator: T,
}

impl<R: TeacherRepository, P: PasswordHasher, T: TokenGenerator> AddAccountTeacherUsecase<R, P, T> {
    pub fn new(teacher_repository: R, password_hasher: P, token_generator: T) -> Self {
        Self {
            teacher_repository,
            password_hasher,
            token_generator,
        }
    }
}

#[async_trait]
impl<R: TeacherRepository, P: PasswordHasher, T: TokenGenerator> AddAccountTeacher
    for AddAccountTeacherUsecase<R, P, T>
{
    #[instrument(skip_all)]
    async fn add(
        &self,
        account: AddAccountTeacherParams,
    ) -> Result<AddAccountTeacherModel, DomainError> {
        // Hash password
        let password_hash = self.password_hasher.hash(&account.password)?;

        let teacher = self
            .teacher_repository
            .save(NewTeacher {
                name: account.name,
                cpf: account.cpf,
                birth_date: account.birth_date,
                email: account.email,
                cellphone: account.cellphone,
                whats_app: account.whats_app,
                photo: account.photo,
                lattes: account.lattes,
                cv: account.cv,
                about: account.about,
                password_hash,
            })
            .await?;

        // Generate token
        let token = self.token_generator.generate(&teacher)?;
        info!(teacher_id = %teacher.id(), "teacher account created");

        Ok(AddAccountTeacherModel::new(&teacher, token))
    }
}
