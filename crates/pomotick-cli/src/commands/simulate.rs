use clap::Args;
use pomotick_core::error::Result;
use pomotick_core::{AlertSink, Command, DisplaySink, Event, Frame, ManualScheduler, Session};
use serde::Serialize;

use super::EngineArgs;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
    /// Number of one-second ticks to deliver
    #[arg(long, default_value = "0")]
    pub ticks: u64,
    /// Press start before ticking
    #[arg(long)]
    pub start: bool,
    /// Commands to apply before ticking, in order (e.g. "+focus", "reset")
    #[arg(long = "command", short = 'c', allow_hyphen_values = true)]
    pub commands: Vec<Command>,
    /// Print events as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Default)]
struct NoDisplay;

impl DisplaySink for NoDisplay {
    fn render(&mut self, _frame: &Frame) {}
}

#[derive(Default)]
struct AlertCounter {
    plays: u32,
}

impl AlertSink for AlertCounter {
    fn play(&mut self) {
        self.plays += 1;
    }

    fn stop_and_rewind(&mut self) {}
}

#[derive(Serialize)]
#[serde(tag = "type", rename = "summary")]
struct Summary {
    ticks: u64,
    alerts: u32,
    frame: Frame,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let config = args.engine.config()?;
    let mut session = Session::new(
        config.engine(),
        ManualScheduler::new(),
        NoDisplay,
        AlertCounter::default(),
    );

    let mut commands = args.commands;
    if args.start {
        commands.push(Command::StartPause);
    }
    for command in commands {
        if command == Command::Quit {
            break;
        }
        if let Some(event) = session.handle(command) {
            print_event(&event, args.json)?;
        }
    }

    let mut delivered = 0;
    for _ in 0..args.ticks {
        if session.active_tick().is_none() {
            break;
        }
        delivered += 1;
        if let Some(event) = session.fire() {
            print_event(&event, args.json)?;
        }
    }

    let summary = Summary {
        ticks: delivered,
        alerts: session.alert().plays,
        frame: session.frame(),
    };
    if args.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        let frame = &summary.frame;
        println!(
            "{} {} {} (ticks: {}, alerts: {}, completed focus: {})",
            frame.mode,
            frame.display,
            if frame.running { "running" } else { "paused" },
            summary.ticks,
            summary.alerts,
            frame.completed_focus_count,
        );
    }
    Ok(())
}

fn print_event(event: &Event, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }
    match event {
        Event::IntervalCompleted { completed, next, .. } => {
            println!("{completed} finished, next: {next}")
        }
        Event::DurationChanged { mode, minutes, .. } => println!("{mode} set to {minutes}m"),
        other => println!("{}", other.name()),
    }
    Ok(())
}
