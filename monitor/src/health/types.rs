//! Health monitoring types shared by the engine, the store, and the loop

use std::fmt;
use std::str::FromStr;

/// Latest block number reported by the node
pub type Height = u64;

/// Monitor's belief about node health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Stuck,
    Down,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Stuck => "stuck",
            Status::Down => "down",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ok" => Ok(Status::Ok),
            "stuck" => Ok(Status::Stuck),
            "down" => Ok(Status::Down),
            other => Err(format!("unknown status token '{}'", other)),
        }
    }
}

/// State carried between ticks. `None` means nothing has been recorded yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorState {
    pub last_height: Option<Height>,
    pub last_status: Option<Status>,
}

/// Notification raised by a status transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Down,
    Recovered { height: Height },
    Stuck { height: Height },
    Resumed { height: Height },
}

impl Alert {
    /// Human-readable text sent to the chat
    pub fn message(&self, node_label: &str, rpc_url: &str) -> String {
        match self {
            Alert::Down => format!(
                "🚨 {} RPC is DOWN! Unable to reach {}",
                node_label, rpc_url
            ),
            Alert::Recovered { height } => format!(
                "✅ {} RPC is back UP! Current height: {}",
                node_label, height
            ),
            Alert::Stuck { height } => {
                format!("⚠️ {} node stuck at height: {}", node_label, height)
            }
            Alert::Resumed { height } => format!(
                "✅ {} node syncing resumed! Current height: {}",
                node_label, height
            ),
        }
    }
}

/// Outcome of evaluating one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub alert: Option<Alert>,
    pub status: Status,
    /// Height to persist; `None` leaves the stored height untouched
    pub height: Option<Height>,
}
