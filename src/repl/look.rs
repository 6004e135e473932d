//! `repl::look` module
//!
//! Room description rendering, used by the `look` command and after every
//! successful move.

use crate::style::GameStyle;
use crate::world::HauntedWorld;

use anyhow::Result;

/// Redisplay the current room in full, regardless of visit state.
///
/// # Errors
/// Fails if the player's current room cannot be resolved.
pub fn look_handler(world: &mut HauntedWorld) -> Result<()> {
    render_current_room(world, true)
}

/// Show the current room on arrival: the full description the first time,
/// a short "you're back" line on revisits. Marks the room visited.
///
/// # Errors
/// Fails if the player's current room cannot be resolved.
pub fn describe_current_room(world: &mut HauntedWorld) -> Result<()> {
    render_current_room(world, false)
}

fn render_current_room(world: &mut HauntedWorld, force_full: bool) -> Result<()> {
    let inventory = world.player.inventory.clone();
    let room = world.player_room_mut()?;

    println!("\n=== {} ===", titlecase(&room.name).room_style());
    if force_full || !room.visited {
        println!("{}", room.description.description_style());
    } else {
        println!("You're back in the {}.", room.name);
    }
    room.visited = true;

    if room.items.is_empty() {
        // remind the player about anything they already cleared out
        let taken: Vec<_> = room.original_items.intersection(&inventory).cloned().collect();
        if taken.is_empty() {
            println!("You see nothing useful here.");
        } else {
            println!(
                "You already picked up {}. Maybe inspect it from your inventory.",
                taken.join(", ").item_style()
            );
        }
    } else {
        let list: Vec<_> = room.items.iter().cloned().collect();
        println!("You see: {}", list.join(", ").item_style());
    }

    println!("{}", room.exits_text().exit_style());
    Ok(())
}

fn titlecase(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
