//! Terminal display and alert sinks.

use std::io::Write;

use pomotick_core::{AlertSink, DisplaySink, Frame, Mode};

const BELL: &str = "\x07";

/// Prints one status line per frame.
pub struct TerminalDisplay<W: Write> {
    out: W,
    set_title: bool,
}

impl<W: Write> TerminalDisplay<W> {
    /// `set_title` writes the xterm title escape, only useful on a real tty.
    pub fn new(out: W, set_title: bool) -> Self {
        Self { out, set_title }
    }

    fn write_frame(&mut self, frame: &Frame) -> std::io::Result<()> {
        if self.set_title {
            write!(self.out, "\x1b]0;{}\x07", frame.title)?;
        }
        let state = if frame.running { "running" } else { "paused" };
        write!(self.out, "[{}] {} {state}", frame.mode, frame.display)?;
        if frame.shows_start_control() {
            let controls = Mode::ALL
                .iter()
                .map(|mode| format!("{} {}m", mode.key(), frame.durations.minutes(*mode)))
                .collect::<Vec<_>>()
                .join(" | ");
            write!(self.out, "  {controls}  (enter: start, r: reset, +/-mode: adjust, q: quit)")?;
        } else {
            write!(self.out, "  (enter: pause, r: reset, q: quit)")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn render(&mut self, frame: &Frame) {
        if let Err(e) = self.write_frame(frame) {
            tracing::warn!(error = %e, "failed to render frame");
        }
    }
}

/// Rings the terminal bell.
pub struct BellAlert<W: Write> {
    out: W,
    ringing: bool,
}

impl<W: Write> BellAlert<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            ringing: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AlertSink for BellAlert<W> {
    fn play(&mut self) {
        self.ringing = true;
        let result = self
            .out
            .write_all(BELL.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to ring bell");
        }
    }

    fn stop_and_rewind(&mut self) {
        // A bell cannot be cut short; only forget that it rang.
        if self.ringing {
            tracing::debug!("alert rewound");
        }
        self.ringing = false;
    }
}
