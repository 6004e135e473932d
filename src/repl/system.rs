//! `repl::system` module
//!
//! Handlers for commands that don't touch the room/player state: help, time,
//! and quitting.

use crate::repl::ReplControl;
use crate::style::GameStyle;
use crate::timer::{GameTimer, format_mmss};
use crate::world::HauntedWorld;

use log::info;

/// Show available commands. The time line only appears when a clock is
/// actually running.
pub fn help_handler(timer_armed: bool) {
    println!("Commands you can try:");
    println!("  look             - describe the room again");
    println!("  go <dir>         - move (north/south/east/west)");
    println!("  take <item>      - pick something up");
    println!("  inspect <item>   - examine an item in detail");
    println!("  inventory        - show what you're carrying");
    println!("  solve            - attempt the current room's puzzle (if any)");
    if timer_armed {
        println!("  time             - show how much time you have left");
    }
    println!("  help             - this help");
    println!("  quit             - exit the game");
}

/// Report the remaining time, or the absence of a clock.
pub fn time_handler(timer: Option<&GameTimer>) {
    match timer {
        Some(timer) => {
            println!("Time remaining: {}", format_mmss(timer.remaining()).timer_style());
        },
        None => println!("No clock is running. Take your time."),
    }
}

/// Quit the game.
pub fn quit_handler(world: &HauntedWorld) -> ReplControl {
    info!(
        "player quit in '{}' carrying: {}",
        world.player.location,
        world.player.inventory_text()
    );
    println!("You step back into the silence. Game over.");
    ReplControl::Quit
}
