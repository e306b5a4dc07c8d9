//! Mock Telegram Bot API for testing alert delivery
//!
//! Records every sendMessage call so tests can assert on the text sent.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_TOKEN: &str = "123456:TEST-TOKEN";
pub const TEST_CHAT_ID: &str = "-1001234567890";

/// Mock Telegram server that captures sendMessage requests
pub struct MockTelegramServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockTelegramServer {
    /// Create a new mock Telegram server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    fn send_message_path() -> String {
        format!("/bot{}/sendMessage", TEST_TOKEN)
    }

    /// Mock successful delivery
    pub async fn mock_success(&self) {
        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": {"message_id": 1}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an API failure
    pub async fn mock_failure(&self, status_code: u16) {
        Mock::given(method("POST"))
            .and(path(Self::send_message_path()))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "ok": false,
                "description": "Bad Request: chat not found"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock the getMe credential check
    pub async fn mock_get_me(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/bot{}/getMe", TEST_TOKEN)))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "ok": status_code == 200,
                "result": {"id": 123456, "is_bot": true, "username": "monitor_bot"}
            })))
            .mount(&self.server)
            .await;
    }

    /// Bodies of every sendMessage request received so far
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path() == Self::send_message_path())
            .filter_map(|req| req.body_json::<Value>().ok())
            .collect()
    }

    /// Only the `text` fields, in order
    pub async fn sent_texts(&self) -> Vec<String> {
        self.sent_messages()
            .await
            .iter()
            .filter_map(|body| body.get("text").and_then(|v| v.as_str()).map(String::from))
            .collect()
    }
}
