// File: monitor/src/config/mod.rs
pub mod manager;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{alerts, monitoring, rpc, state};
use crate::errors::ConfigError;
pub use manager::ConfigManager;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub node_label: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub rpc_timeout_seconds: u64,
    pub check_interval_seconds: u64,
    pub state_dir: PathBuf,
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub api_url: String,
    pub token: String,
    pub chat_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_label: monitoring::DEFAULT_NODE_LABEL.to_string(),
            rpc_host: rpc::DEFAULT_HOST.to_string(),
            rpc_port: rpc::DEFAULT_PORT,
            rpc_timeout_seconds: rpc::DEFAULT_TIMEOUT_SECONDS,
            check_interval_seconds: monitoring::DEFAULT_CHECK_INTERVAL_SECONDS,
            state_dir: PathBuf::from(state::DEFAULT_STATE_DIR),
            telegram: TelegramConfig::default(),
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_url: alerts::DEFAULT_TELEGRAM_API_URL.to_string(),
            token: String::new(),
            chat_id: String::new(),
        }
    }
}

impl TelegramConfig {
    /// Alerts are only delivered when both credentials are present
    pub fn is_complete(&self) -> bool {
        !self.token.is_empty() && !self.chat_id.is_empty()
    }
}

impl Config {
    pub fn rpc_url(&self) -> String {
        format!("http://{}:{}/", self.rpc_host, self.rpc_port)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_seconds)
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_seconds)
    }

    /// Overlay environment variables on top of file values.
    ///
    /// Empty variables are ignored so an exported-but-blank `RPC_PORT` keeps the default.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(label) = get("NODE_LABEL") {
            self.node_label = label;
        }
        if let Some(host) = get("RPC_HOST") {
            self.rpc_host = host;
        }
        if let Some(port) = get("RPC_PORT") {
            self.rpc_port = parse_number("RPC_PORT", &port)?;
        }
        if let Some(timeout) = get("RPC_TIMEOUT_SECONDS") {
            self.rpc_timeout_seconds = parse_number("RPC_TIMEOUT_SECONDS", &timeout)?;
        }
        if let Some(interval) = get("CHECK_INTERVAL_SECONDS") {
            self.check_interval_seconds = parse_number("CHECK_INTERVAL_SECONDS", &interval)?;
        }
        if let Some(dir) = get("STATE_DIR") {
            self.state_dir = PathBuf::from(dir);
        }
        if let Some(api_url) = get("TELEGRAM_API_URL") {
            self.telegram.api_url = api_url;
        }
        if let Some(token) = get("TELEGRAM_TOKEN") {
            self.telegram.token = token;
        }
        if let Some(chat_id) = get("TELEGRAM_CHAT_ID") {
            self.telegram.chat_id = chat_id;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_host.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "rpc_host".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.check_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "check_interval_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.rpc_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rpc_timeout_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_number<T>(field: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        reason: format!("'{}': {}", value, e),
    })
}
