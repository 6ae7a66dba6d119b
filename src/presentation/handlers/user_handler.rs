use std::sync::Arc;

use crate::{
    domain::{
        models::user::{User, UserFilter, UserId},
        repositories::user_repository::UserRepository,
        services::{password_service::PasswordHasher, validator::Validator},
    },
    presentation::{
        http::{error_response, no_content, ok},
        presenters::http_presenter::HttpPresenter,
    },
    usecase::{
        create_user_interactor::{CreateUserInteractor, CreateUserRequest, CreateUserResponse},
        user_query_usecase::UserQueryUsecase,
    },
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Response

/// json for user lookups, without the password hash
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub birthdate: String,
    pub cellphone: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            cpf: user.cpf().to_string(),
            birthdate: user.birthdate().to_string(),
            cellphone: user.cellphone().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested by main router
pub fn create_user_router<R, V, P>(
    create_user: CreateUserInteractor<R, V, P>,
    user_query: UserQueryUsecase<R>,
) -> Router
where
    R: UserRepository + 'static,
    V: Validator + 'static,
    P: PasswordHasher + 'static,
{
    let state = UserState {
        create_user: Arc::new(create_user),
        user_query: Arc::new(user_query),
    };

    Router::new()
        .route(
            "/users",
            post(create::<R, V, P>).get(list::<R, V, P>),
        )
        .route("/users/by-cpf/{cpf}", get(find_by_cpf::<R, V, P>))
        .route(
            "/users/{id}",
            get(find::<R, V, P>).delete(delete::<R, V, P>),
        )
        .with_state(state)
}

pub struct UserState<R: UserRepository, V: Validator, P: PasswordHasher> {
    pub create_user: Arc<CreateUserInteractor<R, V, P>>,
    pub user_query: Arc<UserQueryUsecase<R>>,
}

impl<R: UserRepository, V: Validator, P: PasswordHasher> Clone for UserState<R, V, P> {
    fn clone(&self) -> Self {
        Self {
            create_user: Arc::clone(&self.create_user),
            user_query: Arc::clone(&self.user_query),
        }
    }
}

// handler function

/// handler function for user creation
async fn create<R: UserRepository, V: Validator, P: PasswordHasher>(
    State(state): State<UserState<R, V, P>>,
    Json(payload): Json<CreateUserRequest>,
) -> Response {
    let mut presenter = HttpPresenter::<CreateUserResponse>::new();
    state.create_user.execute(payload, &mut presenter).await;
    presenter.into_response().into_response()
}

async fn list<R: UserRepository, V: Validator, P: PasswordHasher>(
    State(state): State<UserState<R, V, P>>,
    Query(filter): Query<UserFilter>,
) -> Response {
    match state.user_query.list(filter).await {
        Ok(users) => {
            let users: Vec<UserInfo> = users.into_iter().map(UserInfo::from).collect();
            ok(users).into_response()
        }
        Err(e) => error_response::<()>(e).into_response(),
    }
}

async fn find_by_cpf<R: UserRepository, V: Validator, P: PasswordHasher>(
    State(state): State<UserState<R, V, P>>,
    Path(cpf): Path<String>,
) -> Response {
    match state.user_query.find_by_cpf(&cpf).await {
        Ok(user) => ok(UserInfo::from(user)).into_response(),
        Err(e) => error_response::<()>(e).into_response(),
    }
}

async fn find<R: UserRepository, V: Validator, P: PasswordHasher>(
    State(state): State<UserState<R, V, P>>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.user_query.get(UserId::from_uuid(id)).await {
        Ok(user) => ok(UserInfo::from(user)).into_response(),
        Err(e) => error_response::<()>(e).into_response(),
    }
}

async fn delete<R: UserRepository, V: Validator, P: PasswordHasher>(
    State(state): State<UserState<R, V, P>>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.user_query.delete(UserId::from_uuid(id)).await {
        Ok(()) => no_content::<()>().into_response(),
        Err(e) => error_response::<()>(e).into_response(),
    }
}
