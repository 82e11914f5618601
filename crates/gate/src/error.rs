//! Gate and HTTP error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hostgate_shared::LookupError;
use serde_json::json;

/// Errors raised while evaluating a host.
///
/// A denied host is not an error; it is a `false` verdict.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Unknown subdomain validator: {0}")]
    UnknownValidator(String),

    #[error("Book lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

/// HTTP-facing error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Access denied: {0}")]
    HostDenied(String),
    #[error("Host gate misconfigured")]
    Configuration,
    #[error("Service unavailable")]
    LookupUnavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::HostDenied(_) => StatusCode::FORBIDDEN,
            ApiError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::LookupUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = match &self {
            ApiError::HostDenied(_) => "FORBIDDEN",
            ApiError::Configuration => "INTERNAL_ERROR",
            ApiError::LookupUnavailable => "SERVICE_UNAVAILABLE",
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<GateError> for ApiError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::UnknownValidator(name) => {
                tracing::error!(validator = %name, "Host gate configured with unknown subdomain validator");
                ApiError::Configuration
            }
            GateError::Lookup(e) => {
                tracing::error!(error = %e, "Host gate could not reach the book catalog");
                ApiError::LookupUnavailable
            }
        }
    }
}

/// Result type alias for gate evaluations
pub type GateResult<T> = Result<T, GateError>;
