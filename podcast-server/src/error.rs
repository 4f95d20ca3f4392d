//! HTTP error responses

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use podcast_core::{ErrorEnvelope, PodcastError};

/// Error returned by handlers, rendered as `{"success": false, "error": ...}`
#[derive(Debug)]
pub enum ApiError {
    /// The body parsed but a field had the wrong type
    InvalidBody(PodcastError),

    /// The body could not be read at all (too large, connection dropped)
    UnreadableBody { status: StatusCode, message: String },

    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::UnreadableBody { status, .. } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidBody(e) => e.to_string(),
            Self::UnreadableBody { message, .. } => message.clone(),
            Self::NotFound => "Not found".to_string(),
        }
    }
}

impl From<PodcastError> for ApiError {
    fn from(err: PodcastError) -> Self {
        Self::InvalidBody(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::UnreadableBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_client_error() {
            tracing::warn!(%status, "Rejected request: {}", message);
        } else {
            tracing::error!(%status, "Request failed: {}", message);
        }

        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcast_core::types::SearchParams;

    #[test]
    fn test_invalid_body_is_bad_request() {
        let err: ApiError = podcast_core::parse_body::<SearchParams>(br#"{"limit": true}"#)
            .unwrap_err()
            .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().starts_with("Invalid request body"));
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.message(), "Not found");
    }
}
