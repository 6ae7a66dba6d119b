use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::teacher::{NewTeacher, Teacher},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn save(&self, teacher: NewTeacher) -> Result<Teacher, RepositoryError>;
}
