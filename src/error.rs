use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error returned by store operations and surfaced by the HTTP layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required field is missing or malformed (400).
    #[error("{0}")]
    Validation(String),
    /// Credentials did not match any user (401).
    #[error("{0}")]
    Unauthorized(String),
    /// No record with the requested id exists (404).
    #[error("{0}")]
    NotFound(String),
    /// A uniqueness constraint was violated (409).
    #[error("{0}")]
    Conflict(String),
    /// Catch-all for unexpected failures (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Resource routes answer errors as `{"error": "..."}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(msg) = &self {
            tracing::error!("internal error: {}", msg);
        }
        let body = json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Auth routes answer errors as `{"success": false, "message": "..."}`.
///
/// Same error kinds and status codes as [`ApiError`], different body shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError(pub ApiError);

impl From<ApiError> for AuthError {
    fn from(inner: ApiError) -> Self {
        AuthError(inner)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = json!({ "success": false, "message": self.0.to_string() });
        (self.0.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_is_the_message() {
        let err = ApiError::NotFound("Patient not found".into());
        assert_eq!(err.to_string(), "Patient not found");
    }
}
