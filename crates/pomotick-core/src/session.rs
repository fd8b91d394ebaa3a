//! Session driver: the single thread of control around a [`TimerEngine`].
//!
//! Commands and ticks both enter through `&mut self`, so they are serialized
//! by construction. The session keeps at most one live tick registration and
//! remembers its handle; a tick carrying any other handle is stale and is
//! dropped before it reaches the engine.

use std::time::Duration;

use crate::events::Event;
use crate::input::Command;
use crate::scheduler::{Scheduler, TickHandle, TICK_INTERVAL};
use crate::sink::{AlertSink, DisplaySink, Frame};
use crate::timer::TimerEngine;

pub struct Session<S, D, A> {
    engine: TimerEngine,
    scheduler: S,
    display: D,
    alert: A,
    active: Option<TickHandle>,
    tick_interval: Duration,
}

impl<S, D, A> Session<S, D, A>
where
    S: Scheduler,
    D: DisplaySink,
    A: AlertSink,
{
    pub fn new(engine: TimerEngine, scheduler: S, display: D, alert: A) -> Self {
        Self {
            engine,
            scheduler,
            display,
            alert,
            active: None,
            tick_interval: TICK_INTERVAL,
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn alert(&self) -> &A {
        &self.alert
    }

    /// Handle of the live tick registration, if the timer is running.
    pub fn active_tick(&self) -> Option<TickHandle> {
        self.active
    }

    pub fn frame(&self) -> Frame {
        Frame::of(&self.engine)
    }

    // ── Driving ──────────────────────────────────────────────────────

    /// Push the current state to the display.
    pub fn render(&mut self) {
        let frame = Frame::of(&self.engine);
        self.display.render(&frame);
    }

    /// Apply one user command. Returns the engine event, if anything changed.
    ///
    /// `Quit` pauses the engine and drops the tick registration without
    /// rendering; a later `StartPause` starts ticking again.
    pub fn handle(&mut self, command: Command) -> Option<Event> {
        let event = match command {
            Command::StartPause => self.engine.toggle_start_pause(),
            Command::Reset => {
                self.alert.stop_and_rewind();
                self.engine.reset()
            }
            Command::ChangeDuration { mode, direction } => {
                self.engine.change_duration(mode, direction)
            }
            Command::Quit => {
                self.engine.pause();
                self.cancel_ticks();
                return None;
            }
        };
        self.sync_ticks();
        if event.is_some() {
            self.render();
        }
        event
    }

    /// Deliver one tick from the scheduler.
    pub fn on_tick(&mut self, handle: TickHandle) -> Option<Event> {
        if self.active != Some(handle) {
            tracing::warn!(%handle, active = ?self.active, "dropping stale tick");
            return None;
        }
        let event = self.engine.tick();
        if let Some(Event::IntervalCompleted { .. }) = event {
            self.alert.play();
        }
        self.sync_ticks();
        self.render();
        event
    }

    /// Tick the live registration, as if the scheduler fired it.
    /// Returns `None` without touching the engine when nothing is scheduled.
    pub fn fire(&mut self) -> Option<Event> {
        let handle = self.active?;
        self.on_tick(handle)
    }

    /// Stop ticking and give back the parts.
    pub fn into_parts(mut self) -> (TimerEngine, S, D, A) {
        self.cancel_ticks();
        (self.engine, self.scheduler, self.display, self.alert)
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Make the tick registration match the engine's running flag.
    fn sync_ticks(&mut self) {
        match (self.engine.is_running(), self.active) {
            (true, None) => {
                let handle = self.scheduler.schedule_repeating(self.tick_interval);
                self.active = Some(handle);
            }
            (false, Some(_)) => self.cancel_ticks(),
            _ => {}
        }
    }

    fn cancel_ticks(&mut self) {
        if let Some(handle) = self.active.take() {
            self.scheduler.cancel(handle);
        }
    }
}
