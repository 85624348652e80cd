use crate::core::error::PanelError;
use crate::core::state::AppState;
use crate::models::admin::{LoginRequest, SessionResponse, SuccessResponse};
use crate::security::access_gate::Authorized;
use crate::validation::request::JsonBody;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;

/// Log in with the mock identity check
///
/// POST /auth/login {"username": "...", "password": "..."}
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(params): JsonBody<LoginRequest>,
) -> Result<Response, PanelError> {
    let session = state
        .login
        .login(&state.sessions, &params.username, &params.password)
        .await?;

    Ok((StatusCode::OK, Json(SessionResponse::new(session))).into_response())
}

/// End the current session. Succeeds even when nobody is logged in.
///
/// POST /auth/logout
pub async fn logout_handler(State(state): State<Arc<AppState>>) -> Result<Response, PanelError> {
    let ended = state.sessions.end()?;

    if let Some(session) = &ended {
        info!(username = %session.username, "Logged out");
    }

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Logged out".to_string(),
        }),
    )
        .into_response())
}

/// Current session with its rank details
///
/// GET /auth/session
pub async fn session_handler(Authorized(session): Authorized) -> Json<SessionResponse> {
    Json(SessionResponse::new(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_json, create_test_state, logged_in_state, TEST_ROLE};
    use tempfile::TempDir;

    fn credentials(username: &str, password: &str) -> JsonBody<LoginRequest> {
        JsonBody(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn test_login_success() {
        let temp_dir = TempDir::new().unwrap();
        let state = create_test_state(&temp_dir);

        let response = login_handler(State(state.clone()), credentials("abc", "def")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["user"]["username"], "abc");
        assert_eq!(body["user"]["roles"][0], TEST_ROLE);
        assert!(body["rank"]["id"].as_str().unwrap().starts_with("rank"));
        assert!(state.sessions.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_bad_credentials() {
        let temp_dir = TempDir::new().unwrap();
        let state = create_test_state(&temp_dir);

        let err = login_handler(State(state.clone()), credentials("a", "secreto")).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid credentials");
        assert!(!state.sessions.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_without_role() {
        let temp_dir = TempDir::new().unwrap();
        let state = create_test_state(&temp_dir);
        state.sessions.set_required_role("").unwrap();

        let err = login_handler(State(state), credentials("operador", "secreto")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let temp_dir = TempDir::new().unwrap();
        let state = logged_in_state(&temp_dir).await;

        let response = logout_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!state.sessions.is_authenticated());

        // Second logout is harmless
        let response = logout_handler(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_session_handler() {
        let temp_dir = TempDir::new().unwrap();
        let state = logged_in_state(&temp_dir).await;

        let auth = Authorized::check(&state).unwrap();
        let Json(body) = session_handler(auth).await;
        assert_eq!(body.user.username, "operador");
        assert!(body.rank.is_some());
        assert_eq!(body.rank_image, body.rank.unwrap().image);
    }
}
