// File: monitor/src/main.rs
use anyhow::Result;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use monitor::constants::config::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_ENV_FILE, ENV_FILE_ENV,
};
use monitor::{AlertService, ConfigManager, FileStateStore, HeightFetcher, Monitor};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("monitor=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting block height monitor");

    let env_file = std::env::var(ENV_FILE_ENV).unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
    if let Some(loaded) = ConfigManager::load_env_file(&env_file) {
        info!("Environment loaded from {}", loaded.display());
    }

    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config_manager = match ConfigManager::new(&config_path).await {
        Ok(manager) => manager,
        Err(e) => {
            error!("Configuration error: {}", e);
            return Err(e);
        }
    };
    let config = config_manager.get_current_config();

    let alert_service = AlertService::new(&config.telegram)?;
    if alert_service.is_enabled() {
        info!("Alert service enabled for chat {}", alert_service.chat_id());
        match alert_service.test_connection().await {
            Ok(()) => info!("Telegram bot token verified"),
            Err(e) => {
                error!("Telegram connection test failed: {}", e);
                warn!("Alerts may not be delivered. Check TELEGRAM_TOKEN and network connectivity.");
            }
        }
    } else {
        warn!("⚠️  ALERT SERVICE DISABLED ⚠️");
        warn!("Set TELEGRAM_TOKEN and TELEGRAM_CHAT_ID to enable alerts; alerts will only be logged");
    }

    let fetcher = HeightFetcher::new(config.rpc_url(), config.rpc_timeout())?;
    let store = FileStateStore::new(config.state_dir.clone());

    let previous = store.load().await;
    info!(
        "Resuming with last height {:?}, last status {:?}",
        previous.last_height, previous.last_status
    );

    let monitor = Monitor::new(config, fetcher, store, alert_service);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = monitor.run() => {}
        _ = shutdown => info!("Shutdown signal received, stopping monitor"),
    }

    Ok(())
}
