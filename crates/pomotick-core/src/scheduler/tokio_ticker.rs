use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::{Scheduler, TickHandle};

/// Scheduler backed by tokio interval tasks.
///
/// Each registration spawns a task that sends its handle down the tick
/// channel once per interval. `cancel` aborts the task; ticks it already
/// queued stay in the channel and must be filtered by handle on receipt.
///
/// Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TickHandle>,
    tasks: HashMap<TickHandle, JoinHandle<()>>,
    next_id: u64,
}

impl TokioScheduler {
    /// Create the scheduler and the receiving end of its tick channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TickHandle>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            tasks: HashMap::new(),
            next_id: 0,
        };
        (scheduler, rx)
    }

    pub fn live_tasks(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::new(self.next_id);
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(handle).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(%handle, ?interval, "tick source scheduled");
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
            tracing::debug!(%handle, "tick source cancelled");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
