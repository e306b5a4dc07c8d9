//! Monitor wired to mock servers and a temporary state directory

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use monitor::{AlertService, Config, FileStateStore, HeightFetcher, Monitor, TelegramConfig};

use super::mock_telegram::{TEST_CHAT_ID, TEST_TOKEN};

pub const TEST_RPC_TIMEOUT: Duration = Duration::from_secs(2);

/// A monitor plus handles to inspect what it persisted
pub struct TestMonitor {
    pub monitor: Monitor,
    pub store: FileStateStore,
    pub state_dir: TempDir,
}

impl TestMonitor {
    /// Monitor that polls `rpc_url` and alerts through `telegram_url`
    pub fn new(rpc_url: &str, telegram_url: &str) -> Self {
        let state_dir = TempDir::new().expect("Failed to create temp dir");
        Self::with_state_dir(rpc_url, telegram_url, state_dir)
    }

    /// Reuse an existing state directory, as a restarted process would
    pub fn with_state_dir(rpc_url: &str, telegram_url: &str, state_dir: TempDir) -> Self {
        let state_path = state_dir.path().to_path_buf();
        Self::with_state_path(rpc_url, telegram_url, state_dir, state_path)
    }

    /// Monitor whose state lives where a regular file already sits, so every
    /// state read and write fails
    pub fn with_unwritable_state(rpc_url: &str, telegram_url: &str) -> Self {
        let state_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = state_dir.path().join("state");
        std::fs::write(&blocker, "not a directory").expect("Failed to write blocker file");
        Self::with_state_path(rpc_url, telegram_url, state_dir, blocker)
    }

    fn with_state_path(
        rpc_url: &str,
        telegram_url: &str,
        state_dir: TempDir,
        state_path: PathBuf,
    ) -> Self {
        let config = Arc::new(Config {
            node_label: "Monad".to_string(),
            state_dir: state_path.clone(),
            telegram: TelegramConfig {
                api_url: telegram_url.to_string(),
                token: TEST_TOKEN.to_string(),
                chat_id: TEST_CHAT_ID.to_string(),
            },
            ..Config::default()
        });

        let fetcher = HeightFetcher::new(rpc_url.to_string(), TEST_RPC_TIMEOUT)
            .expect("Failed to build fetcher");
        let alert_service =
            AlertService::new(&config.telegram).expect("Failed to build alert service");
        let store = FileStateStore::new(state_path);

        Self {
            monitor: Monitor::new(config, fetcher, store.clone(), alert_service),
            store,
            state_dir,
        }
    }

    /// Drop the monitor but keep its state directory
    pub fn into_state_dir(self) -> TempDir {
        self.state_dir
    }
}
