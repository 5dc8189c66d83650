use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use todo_store::StoreError;
use todo_types::TaskId;

/// Every failure a handler can return.
///
/// `impl IntoResponse` below is the only place failures become status codes.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request body could not be deserialized. Holds the root cause
    /// message, which is sent back verbatim.
    #[error("{0}")]
    MalformedPayload(String),

    /// Any other body rejection (wrong content type, unreadable or oversized
    /// body). Answered with the framework's own response.
    #[error("request body rejected: {0}")]
    PayloadRejected(JsonRejection),

    #[error(transparent)]
    InvalidTaskId(#[from] todo_types::TypeError),

    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("store error: {0}")]
    Store(StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedPayload(_) | Self::InvalidTaskId(_) => StatusCode::BAD_REQUEST,
            Self::PayloadRejected(rejection) => rejection.status(),
            Self::TaskNotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::AlreadyExists(_)) => StatusCode::CONFLICT,
            Self::Store(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::TaskNotFound(id),
            other => Self::Store(other),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        let (_, message) = match rejection {
            JsonRejection::JsonDataError(err) => crate::translate::payload_error(&err),
            JsonRejection::JsonSyntaxError(err) => crate::translate::payload_error(&err),
            other => return Self::PayloadRejected(other),
        };
        tracing::debug!(error = %message, "rejected malformed request payload");
        Self::MalformedPayload(message)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::MalformedPayload(message) => (status, message).into_response(),
            Self::PayloadRejected(rejection) => rejection.into_response(),
            Self::InvalidTaskId(_) | Self::TaskNotFound(_) | Self::Store(StoreError::AlreadyExists(_)) => {
                (status, self.to_string()).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (status, "internal server error").into_response()
            }
        }
    }
}
