use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Failures surfaced by the create-order endpoints
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Server configuration error: {0}")]
    ServerMisconfigured(String),

    #[error("{0}")]
    InvalidRequest(String),

    /// Gateway rejected the order; status, content type and body are relayed untouched
    #[error("Provider error (status {status}): {body}")]
    Provider {
        status: StatusCode,
        content_type: Option<String>,
        body: String,
    },

    #[error("{message}: {detail}")]
    ServerError { message: String, detail: String },
}

impl CheckoutError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CheckoutError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CheckoutError::ServerMisconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CheckoutError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CheckoutError::Provider { status, .. } => *status,
            CheckoutError::ServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            CheckoutError::MethodNotAllowed => (
                status,
                [(header::ALLOW, HeaderValue::from_static("POST"))],
                "Method Not Allowed",
            )
                .into_response(),
            CheckoutError::ServerMisconfigured(detail) => (
                status,
                Json(ErrorResponse::new(format!(
                    "Server configuration error: {}",
                    detail
                ))),
            )
                .into_response(),
            CheckoutError::InvalidRequest(message) => {
                (status, Json(ErrorResponse::new(message))).into_response()
            }
            CheckoutError::Provider {
                content_type, body, ..
            } => {
                let content_type = content_type
                    .and_then(|ct| HeaderValue::from_str(&ct).ok())
                    .unwrap_or_else(|| HeaderValue::from_static("application/json"));
                (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
            }
            CheckoutError::ServerError { message, detail } => {
                (status, Json(ErrorResponse::with_error(message, detail))).into_response()
            }
        }
    }
}
