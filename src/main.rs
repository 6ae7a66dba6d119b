mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::sync::Arc;

use axum::{Router, routing::get};
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::AppConfig,
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        duplicated_field::PostgresTeacherDuplicatedField,
        format_validator::{CpfValidation, EmailValidation, FormatValidator},
        jwt_token_generator::JwtTokenGenerator,
        teacher_repository::PostgresTeacherRepository,
        user_repository::PostgresUserRepository,
    },
    presentation::{
        controllers::add_account_teacher_controller::AddAccountTeacherController,
        handlers::{teacher_handler::create_teacher_router, user_handler::create_user_router},
    },
    usecase::{
        add_account_teacher_usecase::AddAccountTeacherUsecase,
        create_user_interactor::CreateUserInteractor, user_query_usecase::UserQueryUsecase,
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(true);

    let db = Arc::new(Database::connect(opt).await?);
    info!("connected to database");

    let user_repository = PostgresUserRepository::new(Arc::clone(&db));
    let teacher_repository = PostgresTeacherRepository::new(Arc::clone(&db));
    let duplicated_field = PostgresTeacherDuplicatedField::new(db);
    let password_hasher = Argon2PasswordHasher::new();
    let token_generator =
        JwtTokenGenerator::with_expiration(config.jwt_secret.clone(), config.jwt_expiration_hours);

    let create_user = CreateUserInteractor::new(
        user_repository.clone(),
        FormatValidator::new(),
        password_hasher.clone(),
    );
    let user_query = UserQueryUsecase::new(user_repository);
    let add_account_teacher = AddAccountTeacherController::new(
        EmailValidation::new(FormatValidator::new()),
        CpfValidation::new(FormatValidator::new()),
        duplicated_field,
        AddAccountTeacherUsecase::new(teacher_repository, password_hasher, token_generator),
    );

    let app = Router::new()
        .route("/", get(|| async { "Account API" }))
        .nest(
            "/api",
            create_user_router(create_user, user_query)
                .merge(create_teacher_router(add_account_teacher)),
        );

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
