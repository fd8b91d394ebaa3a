//! Timer engine implementation.
//!
//! The timer engine is a pure state machine. It owns no clock and no thread:
//! whoever drives it calls `tick()` once per elapsed second while it runs.
//! See [`crate::session::Session`] for the driver that wires it to a
//! scheduler and sinks.
//!
//! ## State Transitions
//!
//! ```text
//! (Mode, Paused) --start--> (Mode, Running) --pause--> (Mode, Paused)
//! (Mode, Running) --tick at 00:00--> (Next, Paused)
//! (Mode, any) --reset--> (Mode, Paused)
//! ```
//!
//! ## Usage
//!
//! ```
//! use pomotick_core::{Mode, TimerEngine};
//!
//! let mut engine = TimerEngine::new();
//! engine.start();
//! engine.tick();
//! assert_eq!(engine.remaining_secs(), 25 * 60 - 1);
//! assert_eq!(engine.mode(), Mode::Focus);
//! ```

use chrono::Utc;

use super::cadence::Cadence;
use super::clock;
use super::durations::Durations;
use super::mode::{Direction, Mode};
use crate::events::Event;

/// Core timer engine.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    durations: Durations,
    cadence: Cadence,
    mode: Mode,
    remaining_secs: u64,
    running: bool,
    /// The title shows the countdown from the first tick until reset or expiry.
    counting: bool,
    completed_focus_count: u32,
}

impl TimerEngine {
    /// Engine with default durations and the classic cadence.
    ///
    /// Starts paused in `Focus` with the full focus duration remaining.
    pub fn new() -> Self {
        Self::with_cadence(Durations::default(), Cadence::default())
    }

    pub fn with_durations(durations: Durations) -> Self {
        Self::with_cadence(durations, Cadence::default())
    }

    pub fn with_cadence(durations: Durations, cadence: Cadence) -> Self {
        Self {
            remaining_secs: durations.secs(Mode::Focus),
            durations,
            cadence,
            mode: Mode::Focus,
            running: false,
            counting: false,
            completed_focus_count: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_focus_count(&self) -> u32 {
        self.completed_focus_count
    }

    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Full length of the current interval as configured right now.
    pub fn total_secs(&self) -> u64 {
        self.durations.secs(self.mode)
    }

    /// 0.0 .. 1.0 progress within the current interval.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        (1.0 - self.remaining_secs as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Remaining time as `MM:SS`.
    pub fn display_time(&self) -> String {
        clock::format_clock(self.remaining_secs)
    }

    pub fn title(&self) -> String {
        clock::title(self.remaining_secs, self.counting)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            display: self.display_time(),
            completed_focus_count: self.completed_focus_count,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn toggle_start_pause(&mut self) -> Option<Event> {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stop and reload the current mode's duration from configuration.
    /// Mode and completed focus count are kept.
    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.counting = false;
        self.remaining_secs = self.durations.secs(self.mode);
        Some(Event::TimerReset {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Advance one second. Returns `Some(Event::IntervalCompleted)` when the
    /// tick lands on an already-expired countdown.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            self.counting = true;
            tracing::trace!(remaining = self.remaining_secs, "tick");
            return None;
        }

        let completed = self.mode;
        if completed == Mode::Focus {
            self.completed_focus_count = self.completed_focus_count.saturating_add(1);
        }
        let next = self.cadence.next(completed, self.completed_focus_count);
        self.running = false;
        self.counting = false;
        self.mode = next;
        self.remaining_secs = self.durations.secs(next);
        tracing::debug!(
            %completed,
            %next,
            completed_focus_count = self.completed_focus_count,
            "interval completed"
        );
        Some(Event::IntervalCompleted {
            completed,
            next,
            completed_focus_count: self.completed_focus_count,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Adjust the configured length of `mode` by one minute.
    ///
    /// Decrementing a one-minute mode is a no-op. Editing the current mode
    /// replaces the remaining time with the new full duration.
    pub fn change_duration(&mut self, mode: Mode, direction: Direction) -> Option<Event> {
        let minutes = self.durations.adjust(mode, direction)?;
        if mode == self.mode {
            self.remaining_secs = self.durations.secs(mode);
        }
        Some(Event::DurationChanged {
            mode,
            minutes,
            at: Utc::now(),
        })
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}
