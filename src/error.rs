//! Caller-visible error responses.
//!
//! The redirect path never produces one of these: every resolution failure
//! ends in a default redirect. They cover the remaining surface: rejected
//! HTTP methods and unknown routes.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::ALLOW},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// The route exists but only answers `allow`.
    MethodNotAllowed { allow: &'static str },
    NotFound { details: Value },
}

impl AppError {
    pub fn method_not_allowed(allow: &'static str) -> Self {
        Self::MethodNotAllowed { allow }
    }

    pub fn not_found(details: Value) -> Self {
        Self::NotFound { details }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MethodNotAllowed { allow } => {
                let body = ErrorBody {
                    error: "Method not allowed",
                    code: "method_not_allowed",
                    details: Value::Null,
                };
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    [(ALLOW, HeaderValue::from_static(allow))],
                    Json(body),
                )
                    .into_response()
            }
            AppError::NotFound { details } => {
                let body = ErrorBody {
                    error: "Not found",
                    code: "not_found",
                    details,
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
        }
    }
}
