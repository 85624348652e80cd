// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{auth, collections, directory, fallback, health, settings};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Public endpoints
        .route("/health", get(health::health_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route("/settings/role", get(settings::role_get_handler).put(settings::role_put_handler))

        // Gated endpoints (require a session carrying the configured role)
        .route("/auth/session", get(auth::session_handler))
        .route(
            "/settings/connection",
            get(settings::connection_get_handler).put(settings::connection_put_handler),
        )
        .route(
            "/badges",
            get(collections::badges_list_handler).post(collections::badges_add_handler),
        )
        .route("/badges/{id}", delete(collections::badges_remove_handler))
        .route(
            "/inventory",
            get(collections::inventory_list_handler).post(collections::inventory_add_handler),
        )
        .route("/inventory/{id}", delete(collections::inventory_remove_handler))
        .route(
            "/wanted",
            get(collections::wanted_list_handler).post(collections::wanted_add_handler),
        )
        .route("/wanted/{id}", delete(collections::wanted_remove_handler))
        .route("/ranks", get(directory::ranks_handler))
        .route("/users", get(directory::users_handler))
        .route("/commands", get(directory::commands_handler))

        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)

        .with_state(state)
}
