use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::database::StoreError;
use crate::services::IdentityError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything that can go wrong while processing a webhook request.
///
/// Failures are handled locally and converted to a status plus a terse
/// plain-text body; nothing is retried or queued.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("webhook signature verification failed")]
    SignatureInvalid,

    #[error("malformed webhook payload: {0}")]
    MalformedPayload(String),

    #[error("identity lookup failed: {0}")]
    IdentityLookup(#[from] IdentityError),

    #[error("profile update failed: {0}")]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedPayload(err.to_string())
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SignatureInvalid | ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::IdentityLookup(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> &'static str {
        match self {
            ApiError::SignatureInvalid => "Webhook verification failed",
            ApiError::MalformedPayload(_) => "Invalid webhook payload",
            ApiError::IdentityLookup(_) | ApiError::Store(_) => "Error updating user profile",
        }
    }

    /// Log error with appropriate level
    fn log_error(&self, request_id: &str) {
        match self.status_code() {
            status if status.is_server_error() => {
                error!(
                    request_id = %request_id,
                    error = %self,
                    "Server error occurred"
                );
            }
            status if status.is_client_error() => {
                warn!(
                    request_id = %request_id,
                    error = %self,
                    "Client error occurred"
                );
            }
            _ => {}
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        self.log_error(&request_id);
        (self.status_code(), self.body()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_failure_maps_to_400() {
        let err = ApiError::SignatureInvalid;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body(), "Webhook verification failed");
    }

    #[test]
    fn malformed_payload_maps_to_400() {
        let err = ApiError::MalformedPayload("expected value at line 1".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body(), "Invalid webhook payload");
    }

    #[test]
    fn downstream_failures_share_the_500_body() {
        let lookup = ApiError::IdentityLookup(IdentityError::Status(StatusCode::BAD_GATEWAY));
        let store = ApiError::Store(StoreError::UserNotFound("u_1".to_string()));
        assert_eq!(lookup.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(lookup.body(), "Error updating user profile");
        assert_eq!(store.body(), "Error updating user profile");
    }
}
