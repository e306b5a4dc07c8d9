// File: monitor/src/health/monitor.rs
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::engine::evaluate;
use super::types::{Decision, Height};
use crate::config::Config;
use crate::constants::monitoring::SUMMARY_EVERY_CYCLES;
use crate::rpc::HeightFetcher;
use crate::services::AlertService;
use crate::store::FileStateStore;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Height returned by the node, `None` when the fetch failed
    pub fetched: Option<Height>,
    pub decision: Decision,
    /// True only when an alert was raised and the messaging API accepted it
    pub alert_delivered: bool,
}

pub struct Monitor {
    config: Arc<Config>,
    fetcher: HeightFetcher,
    store: FileStateStore,
    alert_service: AlertService,
}

impl Monitor {
    pub fn new(
        config: Arc<Config>,
        fetcher: HeightFetcher,
        store: FileStateStore,
        alert_service: AlertService,
    ) -> Self {
        Self {
            config,
            fetcher,
            store,
            alert_service,
        }
    }

    /// Poll forever with a fixed pause between ticks
    pub async fn run(&self) {
        let interval = self.config.check_interval();
        let mut check_count = 0u64;

        info!(
            "Monitoring {} every {}s",
            self.fetcher.rpc_url(),
            interval.as_secs()
        );

        loop {
            check_count += 1;
            let report = self.tick().await;

            if check_count.is_multiple_of(SUMMARY_EVERY_CYCLES) {
                info!(
                    "Monitoring cycle #{} - status: {}, last height: {}",
                    check_count,
                    report.decision.status,
                    report
                        .fetched
                        .map(|h| h.to_string())
                        .unwrap_or_else(|| "unavailable".to_string())
                );
            }

            sleep(interval).await;
        }
    }

    /// One poll-decide-persist cycle. Never fails; every error is logged.
    pub async fn tick(&self) -> TickReport {
        let previous = self.store.load().await;

        let fetched = match self.fetcher.fetch_height().await {
            Ok(height) => Some(height),
            Err(e) => {
                warn!("RPC error: {}", e);
                None
            }
        };

        let decision = evaluate(&previous, fetched);
        debug!(
            "Tick: previous {:?}, fetched {:?}, decision {:?}",
            previous, fetched, decision
        );

        if previous.last_status != Some(decision.status) {
            info!(
                "Status change: {} -> {}",
                previous
                    .last_status
                    .map(|s| s.as_str())
                    .unwrap_or("unset"),
                decision.status
            );
        }

        let mut alert_delivered = false;
        if let Some(alert) = decision.alert {
            let message = alert.message(&self.config.node_label, self.fetcher.rpc_url());
            match self.alert_service.notify(&message).await {
                Ok(()) => alert_delivered = self.alert_service.is_enabled(),
                Err(e) => warn!("Failed to deliver alert '{}': {}", message, e),
            }
        }

        self.persist(&decision).await;

        TickReport {
            fetched,
            decision,
            alert_delivered,
        }
    }

    async fn persist(&self, decision: &Decision) {
        if let Some(height) = decision.height {
            if let Err(e) = self.store.save_height(height).await {
                warn!("{}", e);
            }
        }

        if let Err(e) = self.store.save_status(decision.status).await {
            warn!("{}", e);
        }
    }
}
