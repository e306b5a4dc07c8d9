//! This module provides reusable test utilities:
//! - Mock HTTP servers (node RPC, Telegram Bot API)
//! - Monitor builders wired to temporary state directories

// Not every test binary uses every fixture
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_rpc;
pub mod mock_telegram;
pub mod test_monitor;

// Re-export commonly used items
pub use mock_rpc::MockRpcServer;
pub use mock_telegram::{MockTelegramServer, TEST_CHAT_ID, TEST_TOKEN};
pub use test_monitor::TestMonitor;
