use crate::core::error::PanelError;
use crate::core::state::AppState;
use crate::models::admin::{ConnectionResponse, ConnectionUpdate, RoleResponse, RoleUpdate, SuccessResponse};
use crate::security::access_gate::Authorized;
use crate::stores::local_store::{DISCORD_TOKEN_KEY, MONGO_URI_KEY};
use crate::validation::forms::require_min_len;
use crate::validation::request::JsonBody;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

const MIN_CREDENTIAL_LEN: usize = 20;
const VISIBLE_SUFFIX: usize = 4;

/// Hide all but the last few characters of a stored secret
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let visible = chars.len().min(VISIBLE_SUFFIX);
    let hidden = chars.len() - visible;
    "*".repeat(hidden) + &chars[hidden..].iter().collect::<String>()
}

/// Role id required to pass the access gate. Open so it can be set before the first login.
///
/// GET /settings/role
pub async fn role_get_handler(State(state): State<Arc<AppState>>) -> Json<RoleResponse> {
    Json(RoleResponse {
        success: true,
        role_id: state.sessions.required_role(),
    })
}

/// PUT /settings/role {"roleId": "..."}; blank clears it
pub async fn role_put_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(params): JsonBody<RoleUpdate>,
) -> Result<Json<RoleResponse>, PanelError> {
    let role_id = state.sessions.set_required_role(&params.role_id)?;

    Ok(Json(RoleResponse {
        success: true,
        role_id,
    }))
}

/// Stored bot/database credentials, masked
///
/// GET /settings/connection
pub async fn connection_get_handler(
    _auth: Authorized,
    State(state): State<Arc<AppState>>,
) -> Json<ConnectionResponse> {
    Json(ConnectionResponse {
        success: true,
        mongo_uri: state.store.get(MONGO_URI_KEY).map(|v| mask(&v)),
        discord_token: state.store.get(DISCORD_TOKEN_KEY).map(|v| mask(&v)),
    })
}

/// Save credentials in cleartext in the local store
///
/// PUT /settings/connection {"mongoUri": "...", "discordToken": "..."}
pub async fn connection_put_handler(
    Authorized(session): Authorized,
    State(state): State<Arc<AppState>>,
    JsonBody(params): JsonBody<ConnectionUpdate>,
) -> Result<Response, PanelError> {
    require_min_len("mongoUri", &params.mongo_uri, MIN_CREDENTIAL_LEN)?;
    require_min_len("discordToken", &params.discord_token, MIN_CREDENTIAL_LEN)?;

    state.store.set_many(&[
        (MONGO_URI_KEY, params.mongo_uri),
        (DISCORD_TOKEN_KEY, params.discord_token),
    ])?;

    warn!(username = %session.username, "Connection credentials saved in cleartext");
    info!(path = %state.store.path().display(), "Connection settings updated");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: "Credentials saved locally".to_string(),
        }),
    )
        .into_response())
}
