use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Map, Value};

use crate::presentation::{controllers::Controller, http::HttpRequest};

// Teacher Router

/// Exposes a teacher account controller under `/teachers`
pub fn create_teacher_router<C>(add_account_teacher: C) -> Router
where
    C: Controller + 'static,
{
    Router::new()
        .route("/teachers", post(add_account::<C>))
        .with_state(Arc::new(add_account_teacher))
}

/// handler function for teacher account creation
async fn add_account<C: Controller>(
    State(controller): State<Arc<C>>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    controller
        .handle(HttpRequest::from_json(body))
        .await
        .into_response()
}
