//! Mock RPC server for testing block height polling
//!
//! This simulates an EVM-style JSON-RPC node without requiring a real one.

use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockBuilder, MockServer, ResponseTemplate,
};

/// Address nothing listens on, for connection-refused scenarios
pub const UNREACHABLE_RPC_URL: &str = "http://127.0.0.1:1/";

/// Mock RPC server that simulates `eth_blockNumber` responses
pub struct MockRpcServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockRpcServer {
    /// Create a new mock RPC server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// URL the fetcher should post to
    pub fn rpc_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn block_number_request() -> MockBuilder {
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(json!({
                "jsonrpc": "2.0",
                "method": "eth_blockNumber",
                "params": []
            })))
    }

    /// Mock a healthy node at the given height, replacing earlier mocks
    pub async fn mock_height(&self, height: u64) {
        self.server.reset().await;
        Self::block_number_request()
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": format!("{:#x}", height)
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a raw `result` value
    pub async fn mock_result(&self, result: serde_json::Value) {
        self.server.reset().await;
        Self::block_number_request()
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": result
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a JSON-RPC error object
    pub async fn mock_rpc_error(&self, code: i64, message: &str) {
        self.server.reset().await;
        Self::block_number_request()
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": code, "message": message}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an HTTP failure
    pub async fn mock_http_error(&self, status_code: u16) {
        self.server.reset().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    /// Mock a body that is not JSON
    pub async fn mock_garbage(&self) {
        self.server.reset().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>bad gateway</html>"))
            .mount(&self.server)
            .await;
    }

    /// Mock a node that answers slower than the client timeout
    pub async fn mock_slow(&self, height: u64, delay: Duration) {
        self.server.reset().await;
        Self::block_number_request()
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "jsonrpc": "2.0",
                        "id": 1,
                        "result": format!("{:#x}", height)
                    }))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }
}
