pub mod teacher_handler;
pub mod user_handler;
