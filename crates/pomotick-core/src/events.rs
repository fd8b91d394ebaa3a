use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every state change in the engine produces an Event.
/// Embedders print, log or forward them; no-op commands produce none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A countdown reached zero and the engine moved to the next mode.
    /// The new interval waits for an explicit start.
    IntervalCompleted {
        completed: Mode,
        next: Mode,
        completed_focus_count: u32,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    DurationChanged {
        mode: Mode,
        minutes: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        running: bool,
        remaining_secs: u64,
        total_secs: u64,
        display: String,
        completed_focus_count: u32,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::TimerStarted { .. } => "timer_started",
            Event::TimerPaused { .. } => "timer_paused",
            Event::TimerReset { .. } => "timer_reset",
            Event::IntervalCompleted { .. } => "interval_completed",
            Event::DurationChanged { .. } => "duration_changed",
            Event::StateSnapshot { .. } => "state_snapshot",
        }
    }
}
