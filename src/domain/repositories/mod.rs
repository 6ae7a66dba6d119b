pub mod duplicated_field;
pub mod teacher_repository;
pub mod user_repository;
