use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::user::{NewUser, User, UserFilter, UserId},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, filter: UserFilter) -> Result<Vec<User>, RepositoryError>;
    async fn find_one(&self, filter: UserFilter) -> Result<Option<User>, RepositoryError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    async fn save(&self, user: NewUser) -> Result<User, RepositoryError>;
    /// Fails with [`RepositoryError::NotFound`] when no row was removed
    async fn delete(&self, id: UserId) -> Result<(), RepositoryError>;
}
