//! Output collaborators driven by the session.

use serde::Serialize;

use crate::timer::{Durations, Mode, TimerEngine};

/// Everything a display needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub mode: Mode,
    pub remaining_secs: u64,
    pub running: bool,
    /// Remaining time as `MM:SS`.
    pub display: String,
    pub title: String,
    pub durations: Durations,
    pub completed_focus_count: u32,
}

impl Frame {
    pub fn of(engine: &TimerEngine) -> Self {
        Self {
            mode: engine.mode(),
            remaining_secs: engine.remaining_secs(),
            running: engine.is_running(),
            display: engine.display_time(),
            title: engine.title(),
            durations: *engine.durations(),
            completed_focus_count: engine.completed_focus_count(),
        }
    }

    /// Whether the start control is offered. Duration controls are only
    /// offered alongside it.
    pub fn shows_start_control(&self) -> bool {
        !self.running
    }
}

/// Renders the timer.
pub trait DisplaySink {
    fn render(&mut self, frame: &Frame);
}

/// Plays the interval-boundary notification.
pub trait AlertSink {
    fn play(&mut self);

    /// Stop any sound in progress and rewind it to the beginning.
    fn stop_and_rewind(&mut self);
}

/// Alert sink that does nothing, for when alerts are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlert;

impl AlertSink for SilentAlert {
    fn play(&mut self) {}

    fn stop_and_rewind(&mut self) {}
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn render(&mut self, frame: &Frame) {
        (**self).render(frame)
    }
}

impl<T: AlertSink + ?Sized> AlertSink for &mut T {
    fn play(&mut self) {
        (**self).play()
    }

    fn stop_and_rewind(&mut self) {
        (**self).stop_and_rewind()
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for Box<T> {
    fn render(&mut self, frame: &Frame) {
        (**self).render(frame)
    }
}

impl<T: AlertSink + ?Sized> AlertSink for Box<T> {
    fn play(&mut self) {
        (**self).play()
    }

    fn stop_and_rewind(&mut self) {
        (**self).stop_and_rewind()
    }
}
