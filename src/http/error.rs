//! Client-facing error responses.
//!
//! Every failure leaves the gateway as a JSON `ErrorResult` with a matching
//! HTTP status. Upstream detail is only exposed for upstream status errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::upstream::UpstreamError;

pub const TIMEOUT_DETAIL: &str = "Request to Coinbase API timed out";
pub const INTERNAL_DETAIL: &str = "Internal server error";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub status_code: u16,
    pub detail: String,
}

/// Errors returned by gateway handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Upstream exceeded its deadline.
    UpstreamTimeout,
    /// Upstream answered with a non-2xx status, passed through.
    UpstreamHttp { status: StatusCode, detail: String },
    /// Anything else; detail stays in the logs.
    Internal,
    /// Inbound query string could not be parsed.
    InvalidQuery(String),
    /// No gateway route matched.
    NotFound,
    /// Route exists but not for this method.
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::UpstreamHttp { status, .. } => *status,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::UpstreamTimeout => TIMEOUT_DETAIL.to_string(),
            Self::UpstreamHttp { detail, .. } => detail.clone(),
            Self::Internal => INTERNAL_DETAIL.to_string(),
            Self::InvalidQuery(detail) => detail.clone(),
            Self::NotFound => "Not Found".to_string(),
            Self::MethodNotAllowed => "Method Not Allowed".to_string(),
        }
    }

    pub fn to_result(&self) -> ErrorResult {
        ErrorResult {
            status_code: self.status().as_u16(),
            detail: self.detail(),
        }
    }
}

impl From<&UpstreamError> for ApiError {
    fn from(err: &UpstreamError) -> Self {
        match err {
            UpstreamError::Timeout(_) => Self::UpstreamTimeout,
            UpstreamError::Status { status, .. } => Self::UpstreamHttp {
                status: *status,
                detail: err.to_string(),
            },
            _ => Self::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_result())).into_response()
    }
}
