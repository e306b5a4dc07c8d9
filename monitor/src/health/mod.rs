//! Health monitoring module
//!
//! Status transition logic and the polling loop for a single node.

pub mod engine;
pub mod monitor;
pub mod types;

pub use engine::evaluate;
pub use monitor::{Monitor, TickReport};
pub use types::{Alert, Decision, Height, MonitorState, Status};
