//! User commands delivered to a session.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::timer::{Direction, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    StartPause,
    Reset,
    ChangeDuration { mode: Mode, direction: Direction },
    Quit,
}

impl FromStr for Command {
    type Err = ValidationError;

    /// Parse one line of terminal input.
    ///
    /// An empty line toggles start/pause. `+focus` / `-short` and
    /// `inc long` / `dec focus` adjust durations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if let Some(rest) = line.strip_prefix('+') {
            return change(rest, Direction::Increment);
        }
        if let Some(rest) = line.strip_prefix('-') {
            return change(rest, Direction::Decrement);
        }

        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(ValidationError::UnknownCommand(line.to_string()));
        }
        match (head.as_str(), arg) {
            ("" | "s" | "start" | "pause" | "toggle", None) => Ok(Command::StartPause),
            ("r" | "reset", None) => Ok(Command::Reset),
            ("q" | "quit" | "exit", None) => Ok(Command::Quit),
            ("inc" | "up", Some(mode)) => change(mode, Direction::Increment),
            ("dec" | "down", Some(mode)) => change(mode, Direction::Decrement),
            _ => Err(ValidationError::UnknownCommand(line.to_string())),
        }
    }
}

fn change(mode: &str, direction: Direction) -> Result<Command, ValidationError> {
    Ok(Command::ChangeDuration {
        mode: mode.parse()?,
        direction,
    })
}
