//! JSON-RPC height fetching
//!
//! Asks the node for `eth_blockNumber` and decodes the hex result.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::constants::rpc::BLOCK_NUMBER_METHOD;
use crate::errors::FetchError;
use crate::health::Height;

#[derive(Debug, Deserialize)]
struct BlockNumberResponse {
    result: Option<String>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

pub struct HeightFetcher {
    client: Client,
    rpc_url: String,
}

impl HeightFetcher {
    pub fn new(rpc_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, rpc_url })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Fetch the current block height
    pub async fn fetch_height(&self) -> Result<Height, FetchError> {
        let request_body = serde_json::json!({
            "jsonrpc": "2.0",
            "method": BLOCK_NUMBER_METHOD,
            "params": [],
            "id": 1
        });

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout {
                        url: self.rpc_url.clone(),
                    }
                } else {
                    FetchError::Transport {
                        url: self.rpc_url.clone(),
                        reason: e.without_url().to_string(),
                    }
                }
            })?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus {
                url: self.rpc_url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse {
                reason: format!("body is not JSON: {}", e.without_url()),
            })?;

        let height = extract_height(body)?;
        debug!("Node at {} reports height {}", self.rpc_url, height);
        Ok(height)
    }
}

fn extract_height(body: Value) -> Result<Height, FetchError> {
    let parsed: BlockNumberResponse =
        serde_json::from_value(body).map_err(|e| FetchError::InvalidResponse {
            reason: format!("unexpected response shape: {}", e),
        })?;

    if let Some(error) = parsed.error {
        return Err(FetchError::InvalidResponse {
            reason: format!("RPC error {}: {}", error.code, error.message),
        });
    }

    let hex = parsed.result.ok_or_else(|| FetchError::InvalidResponse {
        reason: "missing 'result' field".to_string(),
    })?;

    parse_hex_height(&hex)
}

/// Decode a `0x`-prefixed hex quantity such as `0xbc23a5`
pub fn parse_hex_height(value: &str) -> Result<Height, FetchError> {
    let invalid = |reason: &str| FetchError::InvalidHeight {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| invalid("missing 0x prefix"))?;

    if digits.is_empty() {
        return Err(invalid("no digits after prefix"));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("not a hexadecimal number"));
    }

    Height::from_str_radix(digits, 16).map_err(|e| invalid(&e.to_string()))
}
