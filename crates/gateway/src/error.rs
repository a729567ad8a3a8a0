//! HTTP error boundary.
//!
//! Every handler returns `Result<T, ApiError>`; this is the one place error
//! kinds become status codes. Internal failures are logged in full and the
//! client only sees a fixed apology.

use axum::extract::rejection::BytesRejection;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use travel_assistant_core::Error;

/// Returned when the dialogue backend gives no usable reply.
pub const NO_RESPONSE_MESSAGE: &str =
    "Sorry, I couldn't get a response right now. Please try again.";

/// Returned for every unexpected internal failure.
pub const APOLOGY_MESSAGE: &str =
    "Sorry, I'm having trouble processing your request right now. Please try again later.";

#[derive(Debug)]
pub enum ApiError {
    /// The caller sent something unusable; the message is shown to them.
    BadRequest(String),
    /// Body exceeded the configured cap.
    PayloadTooLarge(String),
    /// The dialogue backend answered with nothing.
    NoDialogueResponse,
    /// Anything else.
    Internal(Error),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NoDialogueResponse | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn from_status(status: StatusCode, detail: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(detail)
        } else {
            ApiError::BadRequest(detail)
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        match e {
            Error::InvalidRequest(m) | Error::Upload(m) => ApiError::BadRequest(m),
            Error::DialogueUnavailable => ApiError::NoDialogueResponse,
            other => ApiError::Internal(other),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(r: BytesRejection) -> Self {
        Self::from_status(r.status(), r.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(r: MultipartRejection) -> Self {
        Self::from_status(r.status(), r.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::from_status(e.status(), e.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(m) | ApiError::PayloadTooLarge(m) => m,
            ApiError::NoDialogueResponse => {
                tracing::warn!("Dialogue backend returned no usable response");
                NO_RESPONSE_MESSAGE.to_string()
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Request failed");
                APOLOGY_MESSAGE.to_string()
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
