use crate::domain::{error::DomainError, models::teacher::Teacher};

pub type Token = String;

#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    fn generate(&self, teacher: &Teacher) -> Result<Token, DomainError>;
}
