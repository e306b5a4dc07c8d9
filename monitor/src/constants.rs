//! Application-wide constants for timeouts, intervals, and file locations
//!
//! Organized by category so every default lives in one place.

use std::time::Duration;

/// RPC polling constants
pub mod rpc {
    /// Host of the node's JSON-RPC endpoint
    pub const DEFAULT_HOST: &str = "localhost";

    /// Port of the node's JSON-RPC endpoint
    pub const DEFAULT_PORT: u16 = 8080;

    /// Timeout for a single height request
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

    /// JSON-RPC method returning the latest block number
    pub const BLOCK_NUMBER_METHOD: &str = "eth_blockNumber";
}

/// Monitoring loop constants
pub mod monitoring {
    /// Fixed sleep between ticks
    pub const DEFAULT_CHECK_INTERVAL_SECONDS: u64 = 60;

    /// A summary line is logged every this many cycles
    pub const SUMMARY_EVERY_CYCLES: u64 = 10;

    /// Name used for the node in alert messages
    pub const DEFAULT_NODE_LABEL: &str = "Monad";
}

/// Persisted state constants
pub mod state {
    /// Directory holding the state files
    pub const DEFAULT_STATE_DIR: &str = ".";

    /// Last observed height, decimal text
    pub const LAST_HEIGHT_FILE: &str = ".last_height";

    /// Last status token (ok / stuck / down)
    pub const LAST_STATUS_FILE: &str = ".last_status";
}

/// Alert delivery constants
pub mod alerts {
    use super::Duration;

    /// Telegram Bot API base URL
    pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

    /// Timeout for a single sendMessage call
    pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Configuration file constants
pub mod config {
    /// Environment variable naming the config file
    pub const CONFIG_PATH_ENV: &str = "MONITOR_CONFIG";

    /// Config file used when `MONITOR_CONFIG` is unset
    pub const DEFAULT_CONFIG_PATH: &str = "config/monitor.toml";

    /// Environment variable naming the dotenv file
    pub const ENV_FILE_ENV: &str = "MONITOR_ENV_FILE";

    /// Dotenv file loaded into the process environment at startup
    pub const DEFAULT_ENV_FILE: &str = ".env";
}
