use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::config::Config;
use crate::core::state::AppState;
use crate::stores::local_store::LocalStore;

// this runs at boot time
pub fn build_state(config: Config) -> Result<AppState> {
    let store = LocalStore::open(&config.storage.path).context(format!(
        "Failed to open local store at '{}'",
        config.storage.path.display()
    ))?;

    let state = AppState::new(config, store).context("Failed to load stored collections")?;

    seed_required_role(&state)?;

    Ok(state)
}

/// Copy the configured role into the store unless one was already saved
pub fn seed_required_role(state: &AppState) -> Result<()> {
    match (&state.config.auth.required_role_id, state.sessions.required_role()) {
        (_, Some(stored)) => {
            info!(role_id = %stored, "Using stored required role");
        }
        (Some(configured), None) => {
            state
                .sessions
                .set_required_role(configured)
                .context("Failed to store configured role")?;
        }
        (None, None) => {
            warn!("No required role configured, logins will be rejected until one is set via PUT /settings/role");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, role: Option<&str>) -> Config {
        let mut config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        config.storage.path = dir.path().join("store.json");
        config.auth.required_role_id = role.map(str::to_string);
        config
    }

    #[test]
    fn test_seeds_role_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let state = build_state(config_for(&temp_dir, Some("777"))).unwrap();
        assert_eq!(state.sessions.required_role().as_deref(), Some("777"));
    }

    #[test]
    fn test_stored_role_wins() {
        let temp_dir = TempDir::new().unwrap();
        {
            let state = build_state(config_for(&temp_dir, None)).unwrap();
            state.sessions.set_required_role("111").unwrap();
        }

        let state = build_state(config_for(&temp_dir, Some("777"))).unwrap();
        assert_eq!(state.sessions.required_role().as_deref(), Some("111"));
    }

    #[test]
    fn test_sample_data_seeded_once() {
        let temp_dir = TempDir::new().unwrap();
        {
            let state = build_state(config_for(&temp_dir, None)).unwrap();
            assert_eq!(state.badges.len(), 4);
            assert_eq!(state.inventory.len(), 3);
            assert_eq!(state.wanted.len(), 2);
            state.wanted.remove("1").unwrap();
            state.wanted.remove("2").unwrap();
        }

        let state = build_state(config_for(&temp_dir, None)).unwrap();
        assert!(state.wanted.is_empty());
        assert_eq!(state.badges.len(), 4);
    }

    #[test]
    fn test_sample_data_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_for(&temp_dir, None);
        config.seed.sample_data = false;

        let state = build_state(config).unwrap();
        assert!(state.badges.is_empty());
        assert!(state.inventory.is_empty());
        assert!(state.wanted.is_empty());
    }
}
