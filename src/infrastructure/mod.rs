pub mod argon2_password_hasher;
pub mod db_error;
pub mod duplicated_field;
pub mod entity;
pub mod format_validator;
pub mod jwt_token_generator;
pub mod teacher_repository;
pub mod user_repository;
