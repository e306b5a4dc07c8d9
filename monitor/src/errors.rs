//! Custom error types for the monitor
//!
//! Every runtime failure is absorbed by the polling loop; the variants carry
//! enough context for a useful log line.

use std::fmt;

/// Failure to obtain the current block height from the node.
///
/// Callers treat every variant the same way: the node is considered down.
#[derive(Debug)]
pub enum FetchError {
    /// Request could not be completed (refused, DNS, reset)
    Transport { url: String, reason: String },

    /// Request exceeded the client timeout
    Timeout { url: String },

    /// Node answered with a non-success HTTP status
    HttpStatus { url: String, status: u16 },

    /// Body was not JSON, lacked `result`, or carried a JSON-RPC error
    InvalidResponse { reason: String },

    /// `result` was not a valid `0x`-prefixed hex number
    InvalidHeight { value: String, reason: String },
}

/// Failure to deliver a notification
#[derive(Debug)]
pub enum DispatchError {
    /// Request could not be completed
    Transport { reason: String },

    /// Request exceeded the send timeout
    Timeout,

    /// Messaging endpoint answered with something other than 200
    Rejected { status: u16, body: String },
}

/// Failure to read or write the persisted state files
#[derive(Debug)]
pub enum PersistError {
    /// File exists but could not be read
    Read { path: String, reason: String },

    /// File could not be written
    Write { path: String, reason: String },

    /// File content is not a valid value
    Corrupt { path: String, content: String },
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Configuration parsing error
    ParseError { reason: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { url, reason } => {
                write!(f, "RPC call to {} failed: {}", url, reason)
            }
            FetchError::Timeout { url } => write!(f, "RPC call to {} timed out", url),
            FetchError::HttpStatus { url, status } => {
                write!(f, "RPC endpoint {} returned HTTP {}", url, status)
            }
            FetchError::InvalidResponse { reason } => {
                write!(f, "Invalid RPC response: {}", reason)
            }
            FetchError::InvalidHeight { value, reason } => {
                write!(f, "Invalid block height '{}': {}", value, reason)
            }
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Transport { reason } => {
                write!(f, "Failed to send notification: {}", reason)
            }
            DispatchError::Timeout => write!(f, "Notification request timed out"),
            DispatchError::Rejected { status, body } => {
                write!(f, "Messaging API returned HTTP {}: {}", status, body)
            }
        }
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Read { path, reason } => {
                write!(f, "Failed to read state file '{}': {}", path, reason)
            }
            PersistError::Write { path, reason } => {
                write!(f, "Failed to write state file '{}': {}", path, reason)
            }
            PersistError::Corrupt { path, content } => {
                write!(f, "State file '{}' holds an invalid value: '{}'", path, content)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
        }
    }
}

impl std::error::Error for FetchError {}
impl std::error::Error for DispatchError {}
impl std::error::Error for PersistError {}
impl std::error::Error for ConfigError {}
