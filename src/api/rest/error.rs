//! API error responses.

use crate::application::error::{ApplicationError, ErrorKind};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Error returned by REST handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request carried no usable managed-club claim.
    MissingActor,
    /// A path parameter or request body could not be decoded.
    InvalidRequest {
        /// Status chosen by the rejecting extractor.
        status: StatusCode,
        /// Rejection detail.
        message: String,
    },
    /// A market operation failed.
    Application(ApplicationError),
}

/// Wire name for malformed requests.
pub const INVALID_REQUEST: &str = "invalid_request";

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingActor => StatusCode::FORBIDDEN,
            Self::InvalidRequest { status, .. } => *status,
            Self::Application(e) => status_for(e.kind()),
        }
    }
}

/// Maps an error kind to its HTTP status.
#[must_use]
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::SelfTrade
        | ErrorKind::NotForSale
        | ErrorKind::NotListed
        | ErrorKind::InvalidPrice => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::AlreadyResolved => StatusCode::CONFLICT,
        ErrorKind::Infrastructure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::MissingActor => ErrorResponse {
                error: ErrorKind::Forbidden.to_string(),
                message: "request does not identify a managed club".to_string(),
            },
            Self::InvalidRequest { message, .. } => ErrorResponse {
                error: INVALID_REQUEST.to_string(),
                message,
            },
            Self::Application(e) if e.kind() == ErrorKind::Infrastructure => {
                error!(error = %e, "request failed");
                ErrorResponse {
                    error: ErrorKind::Infrastructure.to_string(),
                    message: "internal error".to_string(),
                }
            }
            Self::Application(e) => ErrorResponse {
                error: e.kind().to_string(),
                message: e.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Helper type for handler results.
pub type ApiResult<T> = Result<T, ApiError>;
