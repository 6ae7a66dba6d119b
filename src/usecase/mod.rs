pub mod add_account_teacher_usecase;
pub mod create_user_interactor;
pub mod presenter;
pub mod user_query_usecase;
