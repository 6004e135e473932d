//! Command loop and dispatch.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that query and mutate the [`HauntedWorld`].
//! The loop is strictly synchronous: the optional time limit is sampled
//! cooperatively once per turn, never enforced by a background alarm.

pub mod input;
pub mod item;
pub mod look;
pub mod movement;
pub mod puzzle;
pub mod system;

pub use item::*;
pub use look::*;
pub use movement::*;
pub use puzzle::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::style::GameStyle;
use crate::timer::{GameTimer, format_mmss};
use crate::world::HauntedWorld;

use anyhow::Result;
use log::info;
use std::time::{Duration, Instant};

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the loop.
pub enum ReplControl {
    Continue,
    Quit,
    Won,
}

/// How a run ended, for the statistics sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub escaped: bool,
    pub timed_out: bool,
    pub duration: Duration,
}

/// Run the main read-eval-print loop until the player escapes, quits, or the
/// clock runs out.
///
/// # Errors
/// Propagates failures from handlers, such as the player's room going
/// missing from the arena.
pub fn run_repl(world: &mut HauntedWorld) -> Result<RunOutcome> {
    let mut input_manager = InputManager::new();
    let timer = world.time_limit.map(GameTimer::new);
    let started = Instant::now();

    describe_current_room(world)?;

    loop {
        if let Some(timer) = &timer {
            if timer.expired() {
                println!("\nA shadow looms behind you. Claws. Cold breath. Everything goes dark.");
                println!("{}", "You ran out of time. The house keeps you forever.".denied_style());
                info!("run ended: time limit expired");
                return Ok(RunOutcome {
                    escaped: false,
                    timed_out: true,
                    duration: started.elapsed(),
                });
            }
            if timer.low() {
                println!(
                    "{}",
                    format!("(Hurry!!! Only {} left!)", format_mmss(timer.remaining())).timer_style()
                );
            }
        }

        let prompt = match &timer {
            Some(timer) => format!("\n[{}] > ", format_mmss(timer.remaining())),
            None => "\n> ".to_string(),
        };
        let prompt = prompt.prompt_style().to_string();

        let Ok(event) = input_manager.read_line(&prompt) else {
            println!("{}", "Failed to read input. Try again.".error_style());
            continue;
        };
        let line = match event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                println!("Command canceled.");
                continue;
            },
        };

        let trimmed = line.trim().to_lowercase();
        match parse_command(&trimmed) {
            Command::Empty => {
                println!("Please type a command. Type 'help' if stuck.");
            },
            Command::Look => look_handler(world)?,
            Command::Go(direction) => move_to_handler(world, &direction)?,
            Command::GoWhere => {
                println!("Go where? Try: go north / go south / go east / go west");
            },
            Command::Take(item) => take_handler(world, &item)?,
            Command::TakeWhat => println!("Take what? Example: take key"),
            Command::Inspect(item) => inspect_handler(world, &item)?,
            Command::InspectWhat => println!("Inspect what? Example: inspect flashlight"),
            Command::Inventory => inv_handler(world),
            Command::Solve => match solve_handler(world, &mut input_manager)? {
                ReplControl::Won => {
                    let duration = started.elapsed();
                    println!("\nYou made it out! It took you {}.", format_mmss(duration));
                    if let Some(timer) = &timer
                        && timer.remaining() <= Duration::from_secs(30)
                    {
                        println!("That was close... you barely made it!");
                    }
                    info!("run ended: escaped in {}s", duration.as_secs());
                    return Ok(RunOutcome {
                        escaped: true,
                        timed_out: false,
                        duration,
                    });
                },
                ReplControl::Quit | ReplControl::Continue => {},
            },
            Command::Time => time_handler(timer.as_ref()),
            Command::Help => help_handler(timer.is_some()),
            Command::Quit => {
                if let ReplControl::Quit = quit_handler(world) {
                    info!("run ended: player quit");
                    return Ok(RunOutcome {
                        escaped: false,
                        timed_out: false,
                        duration: started.elapsed(),
                    });
                }
            },
            Command::Unknown => {
                println!("I don't understand that. Try 'help'.");
            },
        }
    }
}
