pub mod cpf;
pub mod password;
pub mod teacher;
pub mod user;
