use crate::core::error::{PanelError, PermissionError};
use crate::core::state::AppState;
use crate::models::user::Session;
use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where turned-away requests are sent
pub const LOGIN_PATH: &str = "/login";

/// Notice shown on the login view after a redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    MustLogIn,
    NoPermission,
    RankTooLow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow(Session),
    Redirect { to: &'static str, notice: Notice },
}

impl GateDecision {
    fn redirect(notice: Notice) -> Self {
        GateDecision::Redirect { to: LOGIN_PATH, notice }
    }

    pub fn into_result(self) -> Result<Session, PermissionError> {
        match self {
            GateDecision::Allow(session) => Ok(session),
            GateDecision::Redirect { notice: Notice::MustLogIn, .. } => Err(PermissionError::NotLoggedIn),
            GateDecision::Redirect { notice: Notice::NoPermission, .. } => Err(PermissionError::MissingRole),
            GateDecision::Redirect { notice: Notice::RankTooLow, .. } => Err(PermissionError::RankTooLow),
        }
    }
}

/// Decide whether `session` may see a protected view.
///
/// With no `required_role` any authenticated session passes. That open
/// gate is logged on every pass.
pub fn evaluate(
    session: Option<Session>,
    required_role: Option<&str>,
    minimum_rank: Option<&str>,
) -> GateDecision {
    let Some(session) = session else {
        return GateDecision::redirect(Notice::MustLogIn);
    };

    match required_role {
        Some(role) if !session.has_role(role) => {
            warn!(username = %session.username, role, "Gate: session lacks required role");
            return GateDecision::redirect(Notice::NoPermission);
        }
        Some(_) => {}
        None => {
            warn!(username = %session.username, "Gate: no required role configured, any session passes");
        }
    }

    if let Some(rank) = minimum_rank {
        if !session.has_minimum_rank(rank) {
            warn!(username = %session.username, rank, user_rank = ?session.rank_id, "Gate: rank too low");
            return GateDecision::redirect(Notice::RankTooLow);
        }
    }

    GateDecision::Allow(session)
}

/// Extractor for handlers behind the access gate
#[derive(Debug, Clone)]
pub struct Authorized(pub Session);

impl Authorized {
    pub fn check(state: &AppState) -> Result<Self, PermissionError> {
        let required_role = state.sessions.required_role();
        let decision = evaluate(
            state.sessions.current(),
            required_role.as_deref(),
            state.config.auth.minimum_rank.as_deref(),
        );

        let session = decision.into_result()?;
        debug!(username = %session.username, "Gate: access granted");
        Ok(Authorized(session))
    }
}

impl FromRequestParts<Arc<AppState>> for Authorized {
    type Rejection = PanelError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(Authorized::check(state)?)
    }
}
