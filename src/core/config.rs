use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::models::rank::Rank;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub unix_socket: Option<PathBuf>,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Seeds the stored role id when none has been set through the settings endpoint
    pub required_role_id: Option<String>,
    /// Rank id that every gated request must meet, checked after the role
    pub minimum_rank: Option<String>,
    #[serde(default = "default_mock_user_id")]
    pub mock_user_id: String,
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    #[serde(default = "default_min_credential_length")]
    pub min_credential_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_sample_data")]
    pub sample_data: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            required_role_id: None,
            minimum_rank: None,
            mock_user_id: default_mock_user_id(),
            login_delay_ms: default_login_delay_ms(),
            min_credential_length: default_min_credential_length(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            sample_data: default_sample_data(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("panel_store.json")
}

fn default_mock_user_id() -> String {
    "1026983591978221588".to_string()
}

fn default_login_delay_ms() -> u64 {
    500
}

fn default_min_credential_length() -> usize {
    3
}

fn default_sample_data() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port.is_none() && self.server.unix_socket.is_none() {
            bail!("Either port or unix_socket must be specified in server config");
        }

        if let Some(port) = self.server.port {
            if port == 0 {
                bail!("Server port must be greater than 0");
            }
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.storage.path.as_os_str().is_empty() {
            bail!("storage path must not be empty");
        }

        if let Some(role) = &self.auth.required_role_id {
            if role.trim().is_empty() {
                bail!("required_role_id must not be blank when set");
            }
        }

        if let Some(rank_id) = &self.auth.minimum_rank {
            if Rank::find(rank_id).is_none() {
                bail!(
                    "Unknown minimum_rank '{}'. Must be one of: {}",
                    rank_id,
                    Rank::all().iter().map(|r| r.id).collect::<Vec<_>>().join(", ")
                );
            }
        }

        if self.auth.mock_user_id.is_empty() {
            bail!("mock_user_id must not be empty");
        }

        if self.auth.min_credential_length == 0 {
            bail!("min_credential_length must be greater than 0");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
