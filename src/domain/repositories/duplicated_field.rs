use async_trait::async_trait;

use crate::domain::error::RepositoryError;

/// Checks whether a value is already taken for a given field in the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DuplicatedField: Send + Sync {
    async fn is_duplicated(&self, field: &str, value: &str) -> Result<bool, RepositoryError>;
}
