use tracing::{info, instrument};

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::{
        cpf,
        user::{User, UserFilter, UserId},
    },
    repositories::user_repository::UserRepository,
};

/// Read and delete operations over registered users
pub struct UserQueryUsecase<R: UserRepository> {
    user_repository: R,
}

impl<R: UserRepository> UserQueryUsecase<R> {
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }

    pub async fn list(&self, mut filter: UserFilter) -> Result<Vec<User>, DomainError> {
        filter.cpf = filter.cpf.as_deref().map(cpf::normalize);
        Ok(self.user_repository.find(filter).await?)
    }

    /// Looks a user up by CPF, which is unique per user
    pub async fn find_by_cpf(&self, cpf: &str) -> Result<User, DomainError> {
        self.user_repository
            .find_one(UserFilter::by_cpf(cpf::normalize(cpf)))
            .await?
            .ok_or(RepositoryError::NotFound.into())
    }

    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        self.user_repository.delete(id).await?;
        info!("user deleted");
        Ok(())
    }
}
