use crate::core::config::AuthConfig;
use crate::core::error::AuthError;
use crate::models::rank::Rank;
use crate::models::user::{Session, PLACEHOLDER_AVATAR};
use crate::security::session::SessionContext;
use std::time::Duration;
use tracing::{info, warn};

/// Stand-in for the bot-backed identity check.
///
/// Any username/password long enough is accepted and handed the configured
/// role together with a random rank.
#[derive(Debug, Clone)]
pub struct MockLogin {
    user_id: String,
    delay: Duration,
    min_length: usize,
}

impl MockLogin {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            user_id: config.mock_user_id.clone(),
            delay: Duration::from_millis(config.login_delay_ms),
            min_length: config.min_credential_length,
        }
    }

    pub async fn login(
        &self,
        sessions: &SessionContext,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if username.chars().count() < self.min_length || password.chars().count() < self.min_length {
            warn!(username, "Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let Some(role_id) = sessions.required_role() else {
            warn!(username, "Login rejected: no role configured");
            return Err(AuthError::RoleNotConfigured);
        };

        let rank = Rank::random();
        let session = Session {
            id: self.user_id.clone(),
            username: username.to_string(),
            roles: vec![role_id],
            avatar: Some(PLACEHOLDER_AVATAR.to_string()),
            rank_id: Some(rank.id.to_string()),
        };

        sessions
            .begin(session.clone())
            .map_err(|e| AuthError::Session(e.to_string()))?;

        info!(username, rank = rank.id, "Login succeeded");

        Ok(session)
    }
}
