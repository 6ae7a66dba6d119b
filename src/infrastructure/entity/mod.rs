pub mod teachers;
pub mod users;
