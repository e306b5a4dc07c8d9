//! Status transition logic
//!
//! `evaluate` maps the previous state and this tick's fetch outcome to at most
//! one alert plus the state to persist. It performs no I/O.

use super::types::{Alert, Decision, Height, MonitorState, Status};

/// Decide the alert and next status for one tick.
///
/// `fetched` is `None` when the height could not be retrieved. Rules, in order:
///
/// 1. Fetch failed: alert `Down` unless already down; the stored height is kept.
/// 2. First success after `down`: alert `Recovered`. This tick's alert slot is
///    used up, so stuck detection waits for the next tick.
/// 3. Height equal to the stored one and not yet flagged: alert `Stuck`.
/// 4. Height differs from a stored one while stuck: alert `Resumed`.
/// 5. Otherwise no alert.
pub fn evaluate(previous: &MonitorState, fetched: Option<Height>) -> Decision {
    let Some(height) = fetched else {
        let alert = (previous.last_status != Some(Status::Down)).then_some(Alert::Down);
        return Decision {
            alert,
            status: Status::Down,
            height: None,
        };
    };

    let was_stuck = previous.last_status == Some(Status::Stuck);

    let (alert, status) = if previous.last_status == Some(Status::Down) {
        // Only the recovery alert this tick; an unchanged height raises the
        // stuck alert on the next one
        (Some(Alert::Recovered { height }), Status::Ok)
    } else {
        match previous.last_height {
            Some(last) if last == height && !was_stuck => {
                (Some(Alert::Stuck { height }), Status::Stuck)
            }
            Some(last) if last != height && was_stuck => {
                (Some(Alert::Resumed { height }), Status::Ok)
            }
            // Still stuck at the same height, or stuck with no baseline to
            // prove progress
            _ if was_stuck => (None, Status::Stuck),
            _ => (None, Status::Ok),
        }
    };

    Decision {
        alert,
        status,
        height: Some(height),
    }
}
