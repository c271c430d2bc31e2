use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Postgres error code for a unique-constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Every failure a handler can produce, mapped to a fixed status and a
/// single-field JSON error body. Internal detail is logged, never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("No valid fields provided for update")]
    NoFieldsProvided,
    #[error("User not found")]
    UserNotFound,
    #[error("Server error")]
    Storage(#[source] sqlx::Error),
    #[error("Server error")]
    Timeout,
    #[error("Server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::DuplicateEmail
            | ApiError::InvalidCredentials
            | ApiError::NoFieldsProvided => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Timeout | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        // The users.email unique constraint is the authoritative duplicate
        // signal; the pre-insert existence check alone is racy.
        if let sqlx::Error::Database(db) = &e {
            if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return ApiError::DuplicateEmail;
            }
        }
        ApiError::Storage(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(e) => error!(error = %e, "database error"),
            ApiError::Timeout => error!("database call timed out"),
            ApiError::Internal(e) => error!(error = %e, "internal error"),
            _ => {}
        }
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(ApiError::DuplicateEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NoFieldsProvided.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_user_maps_to_404() {
        assert_eq!(ApiError::UserNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_failures_map_to_500_with_generic_message() {
        let err = ApiError::Storage(sqlx::Error::PoolClosed);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Server error");
        assert_eq!(ApiError::Timeout.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Timeout.to_string(), "Server error");
    }

    #[test]
    fn unknown_email_and_wrong_password_share_one_message() {
        // Both login failure paths produce this exact variant, so the client
        // cannot tell whether an email is registered.
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
