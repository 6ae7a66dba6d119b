pub mod controllers;
pub mod handlers;
pub mod http;
pub mod presenters;
