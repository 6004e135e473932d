//! `repl::movement` module
//!
//! Handler for the `go` command: exit lookup, guard evaluation, and the
//! actual move.

use crate::repl::look::describe_current_room;
use crate::style::GameStyle;
use crate::world::HauntedWorld;

use anyhow::Result;
use log::info;

/// Move the player to a neighboring room, if the exit exists and all of its
/// guard conditions are met.
///
/// # Errors
/// Fails if the player's current room cannot be resolved.
pub fn move_to_handler(world: &mut HauntedWorld, input_dir: &str) -> Result<()> {
    let dir = input_dir.to_lowercase();
    let (destination, block) = {
        let room = world.player_room_ref()?;
        let Some(exit) = room.get_exit(&dir) else {
            println!("You can't go {} from here.", dir.error_style());
            return Ok(());
        };

        let mut block: Option<(String, Option<String>)> = None;
        if let Some(guard) = &exit.guard {
            if let Some(required) = &guard.required_item
                && !world.player.has_item(required)
            {
                let message = guard
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Something stops you from going {dir}."));
                let hint = room
                    .has_item(required)
                    .then(|| format!("Maybe pick up the {required} first (try: take {required})."));
                block = Some((message, hint));
            }
            if block.is_none() && guard.requires_solved && room.has_puzzle() {
                let message = guard
                    .message
                    .clone()
                    .unwrap_or_else(|| "The way is barred. Maybe 'solve' will open it.".to_string());
                block = Some((message, None));
            }
        }
        (exit.to.clone(), block)
    };

    if let Some((message, hint)) = block {
        println!("{}", message.denied_style());
        if let Some(hint) = hint {
            println!("{}", hint.hint_style());
        }
        info!("player denied {dir} exit from {}", world.player.location);
        return Ok(());
    }

    world.player.move_to(destination.clone());
    info!("player moved {dir} to {destination}");
    describe_current_room(world)
}
