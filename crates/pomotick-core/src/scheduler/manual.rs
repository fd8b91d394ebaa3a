use std::time::Duration;

use super::{Scheduler, TickHandle};

/// Scheduler with no clock behind it.
///
/// It only records registrations; the owner decides when a tick happens.
/// Used by `simulate` and by tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    active: Vec<(TickHandle, Duration)>,
    scheduled: u32,
    cancelled: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently scheduled handle that is still live.
    pub fn active(&self) -> Option<TickHandle> {
        self.active.last().map(|(handle, _)| *handle)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn interval(&self, handle: TickHandle) -> Option<Duration> {
        self.active
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, interval)| *interval)
    }

    /// Total registrations ever made.
    pub fn scheduled(&self) -> u32 {
        self.scheduled
    }

    /// Total registrations cancelled while live.
    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle {
        self.next_id += 1;
        self.scheduled += 1;
        let handle = TickHandle::new(self.next_id);
        self.active.push((handle, interval));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        let before = self.active.len();
        self.active.retain(|(h, _)| *h != handle);
        if self.active.len() < before {
            self.cancelled += 1;
        }
    }
}
