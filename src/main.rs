#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Holloway **
//! Haunted House: Study Break -- a timed escape-room game.

use holloway::data_paths::data_path;
use holloway::style::GameStyle;
use holloway::{RunLog, format_mmss, load_world, run_repl};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "holloway", version, about = "Haunted House: Study Break -- escape before time runs out")]
struct Args {
    /// Path to the world JSON file (default: data/world.json)
    #[arg(short = 'w', long = "world")]
    world: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let world_path = args.world.unwrap_or_else(|| data_path("world.json"));
    info!("loading world from '{}'", world_path.display());
    let mut world = load_world(&world_path).context("while loading the game world")?;

    println!("{:^68}", "WELCOME TO THE HAUNTED HOUSE".bright_yellow().underline());
    println!("Type 'help' for commands. Good luck.");

    let run_log = RunLog::new(data_path("runs.jsonl"));
    match run_log.best_time() {
        Ok(Some(best)) => {
            println!("(Fastest escape so far: {}.)", format_mmss(Duration::from_secs(best)));
        },
        Ok(None) => {},
        Err(err) => warn!("could not read run log: {err}"),
    }

    if let Some(limit) = world.time_limit {
        println!(
            "{}",
            format!("(You feel watched... You have {} to escape.)", format_mmss(limit)).timer_style()
        );
    }

    let outcome = run_repl(&mut world)?;

    // only finished runs (escape or timeout) land in the log
    if outcome.escaped || outcome.timed_out {
        if let Err(err) = run_log.record(outcome.escaped, outcome.duration.as_secs()) {
            warn!("failed to record run: {err}");
        }
    }

    Ok(())
}
