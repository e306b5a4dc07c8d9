// File: monitor/src/config/manager.rs
use super::Config;
use crate::errors::ConfigError;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    /// Load the config file (if present) and overlay the process environment
    pub async fn new(config_path: impl AsRef<Path>) -> Result<Self> {
        Self::with_env(config_path, |key| std::env::var(key).ok()).await
    }

    /// Same as [`ConfigManager::new`] with an explicit variable lookup
    pub async fn with_env<F>(config_path: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load_file(config_path.as_ref()).await?;
        config.apply_overrides(lookup)?;
        config.validate()?;

        info!(
            "Configuration loaded: RPC {} every {}s, state in {}, node label '{}', Telegram {}",
            config.rpc_url(),
            config.check_interval_seconds,
            config.state_dir.display(),
            config.node_label,
            if config.telegram.is_complete() { "configured" } else { "not configured" }
        );

        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    /// Load `KEY=value` lines from a dotenv file into the process environment.
    /// Variables already set are left alone; a missing file is not an error.
    pub fn load_env_file(path: impl AsRef<Path>) -> Option<PathBuf> {
        let path = path.as_ref();
        match dotenvy::from_filename(path) {
            Ok(loaded) => {
                debug!("Loaded environment from {}", loaded.display());
                Some(loaded)
            }
            Err(dotenvy::Error::Io(_)) => {
                debug!("No env file at {}", path.display());
                None
            }
            Err(e) => {
                warn!("Failed to load env file {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_file(path: &Path) -> Result<Config> {
        if !fs::try_exists(path).await.unwrap_or(false) {
            debug!("No config file at {}, using defaults and environment", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            reason: format!("{}: {}", path.display(), e),
        })?;

        debug!("Loaded config file {}", path.display());
        Ok(config)
    }
}
