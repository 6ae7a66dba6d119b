use async_trait::async_trait;
use serde::Serialize;

use crate::presentation::http::{HttpRequest, HttpResponse};

pub mod add_account_teacher_controller;

#[async_trait]
pub trait Controller: Send + Sync {
    type Body: Serialize + Send;

    async fn handle(&self, request: HttpRequest) -> HttpResponse<Self::Body>;
}
