pub mod config;
pub mod constants;
pub mod errors;
pub mod health;
pub mod rpc;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use config::{Config, ConfigManager, TelegramConfig};
pub use health::{Monitor, Status};
pub use rpc::HeightFetcher;
pub use services::AlertService;
pub use store::FileStateStore;
