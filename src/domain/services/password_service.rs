use crate::domain::{error::DomainError, models::password::HashedPassword};

/// Service for hashing passwords before they reach a repository
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password, rejecting passwords that are too weak
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;
}
