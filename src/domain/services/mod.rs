pub mod password_service;
pub mod token_service;
pub mod validator;
