//! Live tracking session.
//!
//! Drives the core timer at the one-second cadence it expects: sleep,
//! `tick()`, render the emitted event, repeat until the cap stops the run
//! or a `--ticks` bound finishes it early.

use std::io::Write;

use chrono::Utc;
use clap::Args;
use habitclock_core::{format_duration, Config, Event, PickedDuration, Session};

#[derive(Args)]
pub struct RunArgs {
    /// Habit to track ("sitting" or "eating")
    #[arg(long, default_value = "sitting")]
    pub habit: String,
    /// Override the cap in seconds
    #[arg(long)]
    pub max_secs: Option<u32>,
    /// Picked duration: hours component (combined with --minutes)
    #[arg(long)]
    pub hours: Option<u32>,
    /// Picked duration: minutes component (combined with --hours)
    #[arg(long)]
    pub minutes: Option<u32>,
    /// Emit one JSON event per tick instead of the progress line
    #[arg(long)]
    pub json: bool,
    /// Finish after this many ticks even if the cap is not reached
    #[arg(long)]
    pub ticks: Option<u32>,
}

const BAR_WIDTH: usize = 30;

fn progress_bar(ratio: f64) -> String {
    let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn render_line(session: &Session) -> std::io::Result<()> {
    let timer = session.timer();
    print!(
        "\r{} {}  {} / {} secs",
        progress_bar(timer.progress_ratio()),
        session.display(),
        timer.elapsed_secs(),
        timer.max_secs(),
    );
    std::io::stdout().flush()
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let kind = super::parse_habit(&args.habit)?;
    let mut profile = config.profile(kind);

    if args.hours.is_some() || args.minutes.is_some() {
        let pick = PickedDuration {
            hours: args.hours.unwrap_or(0),
            minutes: args.minutes.unwrap_or(0),
        };
        profile.max_secs = pick.into_max_secs()?;
    }
    if let Some(max_secs) = args.max_secs {
        profile.max_secs = max_secs;
    }

    let mut session = Session::new(profile)?;
    let started = session
        .start(Utc::now())
        .ok_or("timer refused to start")?;

    if args.json {
        println!("{}", serde_json::to_string(&started)?);
    } else {
        println!(
            "{}  (cap {})",
            session.kind().label(),
            format_duration(session.timer().max_secs())
        );
        render_line(&session)?;
    }

    let mut tick_count = 0u32;
    while session.timer().is_running() {
        std::thread::sleep(std::time::Duration::from_secs(1));
        let Some(event) = session.tick() else { break };
        tick_count += 1;

        if args.json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            render_line(&session)?;
        }

        if let Event::CapReached { .. } = event {
            if config.notifications.enabled {
                if args.json {
                    eprintln!("{}", session.profile().cap_message);
                } else {
                    println!("\n{}", session.profile().cap_message);
                }
            } else if !args.json {
                println!();
            }
            return Ok(());
        }

        if args.ticks.is_some_and(|limit| tick_count >= limit) {
            break;
        }
    }

    // Bounded run: finish manually and apply the pace policy.
    if let Some((event, advisory)) = session.finish(Utc::now()) {
        if args.json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            println!();
        }
        if advisory.is_some() && config.notifications.enabled {
            if args.json {
                eprintln!("{}", session.profile().pace_message);
            } else {
                println!("{}", session.profile().pace_message);
            }
        }
    }
    Ok(())
}
