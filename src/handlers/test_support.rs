use crate::core::config::Config;
use crate::core::startup::build_state;
use crate::core::state::AppState;
use axum::{body::Body, response::Response};
use http_body_util::BodyExt;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_ROLE: &str = "1026983591978221588";

pub fn create_test_config(dir: &TempDir) -> Config {
    let mut config = Config::from_toml("[server]\nport = 8080\n[auth]\nlogin_delay_ms = 0\n").unwrap();
    config.storage.path = dir.path().join("store.json");
    config.auth.required_role_id = Some(TEST_ROLE.to_string());
    config
}

pub fn create_test_state(dir: &TempDir) -> Arc<AppState> {
    Arc::new(build_state(create_test_config(dir)).unwrap())
}

pub async fn logged_in_state(dir: &TempDir) -> Arc<AppState> {
    let state = create_test_state(dir);
    state
        .login
        .login(&state.sessions, "operador", "secreto")
        .await
        .unwrap();
    state
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let (_, body) = response.into_parts();
    let bytes = Body::new(body).collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
