//! Tick scheduling.
//!
//! The engine never owns a clock. A [`Scheduler`] hands out a
//! [`TickHandle`] for a repeating tick source; every tick it delivers carries
//! that handle so the receiver can drop ticks from a source it already
//! cancelled.
//!
//! - [`ManualScheduler`]: deterministic, ticks are fired by the caller
//! - [`TokioScheduler`]: real one-second ticks from a tokio interval task

mod manual;
mod tokio_ticker;

pub use manual::ManualScheduler;
pub use tokio_ticker::TokioScheduler;

use std::fmt;
use std::time::Duration;

/// Default spacing between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Identifies one repeating tick registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TickHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick#{}", self.0)
    }
}

/// Source of repeating ticks.
pub trait Scheduler {
    /// Begin delivering ticks every `interval`. Each call returns a fresh handle.
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle;

    /// Stop delivering ticks for `handle`. Cancelling an unknown or already
    /// cancelled handle does nothing.
    fn cancel(&mut self, handle: TickHandle);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle {
        (**self).schedule_repeating(interval)
    }

    fn cancel(&mut self, handle: TickHandle) {
        (**self).cancel(handle)
    }
}
