use argon2::{
    Argon2,
    password_hash::{PasswordHasher as Argon2Hasher, SaltString, rand_core::OsRng},
};

use crate::domain::{
    error::{DomainError, ValidationError},
    models::password::HashedPassword,
    services::password_service::PasswordHasher,
};

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        // Validate password strength
        if plain_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::WeakPassword.into());
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(plain_password.as_bytes(), &salt)
            .map_err(|_| DomainError::PasswordHash)?
            .to_string();

        Ok(HashedPassword::new(hash))
    }
}
