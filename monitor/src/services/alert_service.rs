// File: monitor/src/services/alert_service.rs
use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::TelegramConfig;
use crate::constants::alerts::SEND_TIMEOUT;
use crate::errors::DispatchError;

#[derive(Debug, Clone, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Delivers alert text to a single Telegram chat
#[derive(Clone)]
pub struct AlertService {
    api_url: String,
    token: String,
    chat_id: String,
    enabled: bool,
    client: Client,
}

impl AlertService {
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client for AlertService: {}", e))?;

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            chat_id: config.chat_id.clone(),
            enabled: config.is_complete(),
            client,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Send one message. Without credentials the message is only logged.
    pub async fn notify(&self, message: &str) -> Result<(), DispatchError> {
        if !self.is_enabled() {
            warn!("Alert (not delivered, Telegram not configured): {}", message);
            return Ok(());
        }

        let payload = SendMessagePayload {
            chat_id: &self.chat_id,
            text: message,
        };

        let response = timeout(
            SEND_TIMEOUT,
            self.client
                .post(self.method_url("sendMessage"))
                .json(&payload)
                .send(),
        )
        .await
        .map_err(|_| DispatchError::Timeout)?
        .map_err(|e| {
            if e.is_timeout() {
                DispatchError::Timeout
            } else {
                DispatchError::Transport {
                    reason: e.without_url().to_string(),
                }
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("Alert sent to chat {}: {}", self.chat_id, message);
        Ok(())
    }

    /// Check the bot token with `getMe` without sending anything
    pub async fn test_connection(&self) -> Result<(), DispatchError> {
        if !self.is_enabled() {
            debug!("Telegram not configured, skipping connection test");
            return Ok(());
        }

        let response = self
            .client
            .get(self.method_url("getMe"))
            .send()
            .await
            .map_err(|e| DispatchError::Transport {
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
