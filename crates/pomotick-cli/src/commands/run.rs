use std::io::IsTerminal;

use pomotick_core::error::Result;
use pomotick_core::{AlertSink, Command, Event, Session, SilentAlert, TokioScheduler};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::EngineArgs;
use crate::terminal::{BellAlert, TerminalDisplay};

pub fn run(args: EngineArgs) -> Result<()> {
    let config = args.config()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(event_loop(config))
}

/// Single-threaded loop: stdin commands and scheduler ticks are taken one at
/// a time, so the session never sees two inputs at once.
async fn event_loop(config: pomotick_core::Config) -> Result<()> {
    let stdout = std::io::stdout();
    let set_title = stdout.is_terminal();
    let alert: Box<dyn AlertSink> = if config.alert.enabled {
        Box::new(BellAlert::new(std::io::stdout()))
    } else {
        Box::new(SilentAlert)
    };

    let (scheduler, mut ticks) = TokioScheduler::new();
    let mut session = Session::new(
        config.engine(),
        scheduler,
        TerminalDisplay::new(stdout, set_title),
        alert,
    )
    .with_tick_interval(config.tick_interval());
    session.render();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(handle) = ticks.recv() => {
                if let Some(event) = session.on_tick(handle) {
                    log_event(&event);
                }
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                        tracing::warn!(error = %e, "ignoring unreadable input line");
                        eprintln!("{e}");
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Some(event) = session.handle(command) {
                            log_event(&event);
                        }
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
        }
    }

    session.handle(Command::Quit);
    Ok(())
}

fn log_event(event: &Event) {
    match event {
        Event::IntervalCompleted {
            completed,
            next,
            completed_focus_count,
            ..
        } => tracing::info!(%completed, %next, completed_focus_count, "interval completed"),
        other => tracing::debug!(event = other.name(), "timer event"),
    }
}
