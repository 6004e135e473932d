//! Data structures representing the game world.
//!
//! [`HauntedWorld`] is an arena of rooms keyed by stable room names, plus the
//! player and item inspection metadata. Rooms reference neighbors only by
//! name; nothing here holds a direct object reference to another room.

use crate::{Player, Room};
use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Descriptive metadata for an item, used only for inspection text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemInfo {
    #[serde(default)]
    pub description: String,
}

/// Complete state of a running game.
///
/// Created once by the loader and then mutated throughout play. Read-only
/// except through the command handlers.
#[derive(Debug, Clone, Default)]
pub struct HauntedWorld {
    pub rooms: HashMap<String, Room>,
    pub items: HashMap<String, ItemInfo>,
    pub player: Player,
    pub start_room: String,
    /// Armed countdown when present; `None` plays without a clock.
    pub time_limit: Option<Duration>,
}

impl HauntedWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// Fails if the player's location does not key into the room arena,
    /// which indicates a bug rather than a gameplay condition.
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| anyhow!("player's room '{}' not found in world", self.player.location))
    }

    /// Obtain a mutable reference to the room the player occupies.
    ///
    /// # Errors
    /// Same contract as [`Self::player_room_ref`].
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        self.rooms
            .get_mut(&self.player.location)
            .ok_or_else(|| anyhow!("player's room '{}' not found in world", self.player.location))
    }

    /// Inspection text for an item, if any metadata was declared.
    pub fn item_description(&self, item: &str) -> Option<&str> {
        self.items.get(item).map(|info| info.description.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Room;

    fn one_room_world() -> HauntedWorld {
        let mut world = HauntedWorld::new_empty();
        world.rooms.insert("foyer".into(), Room::new("foyer", "Entry"));
        world.start_room = "foyer".into();
        world.player = Player::new("foyer");
        world
    }

    #[test]
    fn player_room_ref_resolves_current_room() {
        let world = one_room_world();
        assert_eq!(world.player_room_ref().unwrap().name, "foyer");
    }

    #[test]
    fn player_room_ref_errors_on_unknown_location() {
        let mut world = one_room_world();
        world.player.location = "attic".into();
        assert!(world.player_room_ref().is_err());
    }

    #[test]
    fn player_room_mut_allows_state_change() {
        let mut world = one_room_world();
        world.player_room_mut().unwrap().visited = true;
        assert!(world.rooms.get("foyer").unwrap().visited);
    }

    #[test]
    fn item_description_lookup() {
        let mut world = one_room_world();
        world.items.insert(
            "flashlight".into(),
            ItemInfo {
                description: "A cheap plastic flashlight.".into(),
            },
        );
        assert_eq!(world.item_description("flashlight"), Some("A cheap plastic flashlight."));
        assert_eq!(world.item_description("ghost"), None);
    }
}
