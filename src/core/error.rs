// Centralized error handling for the panel

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::models::admin::{ErrorResponse, GateRejection};
use crate::security::access_gate::Notice;

/// Rejected form input. Never mutates state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field out of range: {field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("Field too short: {field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
}

/// Login failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No role ID configured for verification")]
    RoleNotConfigured,

    #[error("Failed to persist session: {0}")]
    Session(String),
}

/// Authenticated but not allowed in. Surfaced as a redirect to the login view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("You must log in to access this page")]
    NotLoggedIn,

    #[error("You do not have the required role to access this page")]
    MissingRole,

    #[error("Your rank is too low to access this page")]
    RankTooLow,
}

impl PermissionError {
    pub fn notice(&self) -> Notice {
        match self {
            PermissionError::NotLoggedIn => Notice::MustLogIn,
            PermissionError::MissingRole => Notice::NoPermission,
            PermissionError::RankTooLow => Notice::RankTooLow,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode or decode stored value: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Error type returned by every request handler
#[derive(Error, Debug)]
pub enum PanelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("Invalid query string: {}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error("Internal server error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        if let PanelError::Permission(err) = &self {
            let status = match err {
                PermissionError::NotLoggedIn => StatusCode::UNAUTHORIZED,
                PermissionError::MissingRole | PermissionError::RankTooLow => StatusCode::FORBIDDEN,
            };

            return (
                status,
                Json(GateRejection {
                    success: false,
                    error: err.to_string(),
                    notice: err.notice(),
                    redirect: crate::security::access_gate::LOGIN_PATH.to_string(),
                }),
            )
                .into_response();
        }

        let status = match &self {
            PanelError::Validation(_) => StatusCode::BAD_REQUEST,
            PanelError::Auth(AuthError::Session(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            PanelError::Auth(_) => StatusCode::UNAUTHORIZED,
            PanelError::Permission(_) => StatusCode::FORBIDDEN,
            PanelError::NotFound(_) => StatusCode::NOT_FOUND,
            PanelError::Body(rejection) => rejection.status(),
            PanelError::Query(rejection) => rejection.status(),
            PanelError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = PanelError::from(ValidationError::MissingField("name")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_maps_to_unauthorized() {
        let response = PanelError::from(AuthError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_permission_status_codes() {
        let response = PanelError::from(PermissionError::NotLoggedIn).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = PanelError::from(PermissionError::MissingRole).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = PanelError::from(PermissionError::RankTooLow).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_store_error_is_internal() {
        let response = PanelError::from(StoreError::LockPoisoned).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
