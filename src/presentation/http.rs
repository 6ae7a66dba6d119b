//! HTTP envelope shared by controllers and presenters.
//!
//! [`HttpRequest`] is the raw field map a controller reads, and
//! [`HttpResponse`] is the `{status_code, body}` pair every adapter below
//! builds. The axum glue at the bottom turns a response into a real one.

use std::{collections::HashMap, fmt};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::{DomainError, RepositoryError, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    pub body: HashMap<String, String>,
}

impl HttpRequest {
    pub fn new(body: HashMap<String, String>) -> Self {
        Self { body }
    }

    /// Keeps string and number values of a JSON object, dropping nulls and
    /// nested values.
    pub fn from_json(body: Map<String, Value>) -> Self {
        let body = body
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                Value::Number(n) => Some((key, n.to_string())),
                _ => None,
            })
            .collect();
        Self { body }
    }

    /// Returns the field value, treating an empty string as absent
    pub fn field(&self, name: &str) -> Option<&str> {
        self.body
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Serialized form of every error sent back to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl From<&ValidationError> for ErrorBody {
    fn from(error: &ValidationError) -> Self {
        Self {
            error: error.kind().to_string(),
            field: Some(error.field().to_string()),
            message: error.to_string(),
        }
    }
}

impl ErrorBody {
    fn server(cause: impl fmt::Display) -> Self {
        Self {
            error: "ServerError".to_string(),
            field: None,
            message: cause.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HttpBody<T> {
    Data(T),
    Error(ErrorBody),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse<T> {
    pub status_code: StatusCode,
    pub body: HttpBody<T>,
}

pub fn ok<T>(body: T) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::OK,
        body: HttpBody::Data(body),
    }
}

pub fn no_content<T>() -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::NO_CONTENT,
        body: HttpBody::Empty,
    }
}

pub fn bad_request<T>(error: ValidationError) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: HttpBody::Error(ErrorBody::from(&error)),
    }
}

pub fn duplicated_field_error<T>(error: ValidationError) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: HttpBody::Error(ErrorBody::from(&error)),
    }
}

pub fn not_found<T>(error: impl fmt::Display) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::NOT_FOUND,
        body: HttpBody::Error(ErrorBody {
            error: "NotFoundError".to_string(),
            field: None,
            message: error.to_string(),
        }),
    }
}

pub fn server_error<T>(error: impl fmt::Display) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: HttpBody::Error(ErrorBody::server(error)),
    }
}

/// Picks the adapter matching a domain error
pub fn error_response<T>(error: DomainError) -> HttpResponse<T> {
    match error {
        DomainError::Validation(error @ ValidationError::DuplicatedField(_)) => {
            duplicated_field_error(error)
        }
        DomainError::Validation(error) => bad_request(error),
        DomainError::Repository(RepositoryError::Duplicated(field)) => {
            duplicated_field_error(ValidationError::DuplicatedField(field))
        }
        DomainError::Repository(error @ RepositoryError::NotFound) => not_found(error),
        other => server_error(other),
    }
}

impl<T: Serialize> IntoResponse for HttpResponse<T> {
    fn into_response(self) -> Response {
        match self.body {
            HttpBody::Empty => self.status_code.into_response(),
            body => (self.status_code, Json(body)).into_response(),
        }
    }
}
