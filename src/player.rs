//! Player -- current location and carried items.

use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised by player inventory operations. Removing an item the player
/// does not carry is a caller bug signal, not a normal game-flow outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("'{0}' is not in your inventory")]
    NotCarried(String),
}

/// The player and their state in the game.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Name of the current room.
    pub location: String,
    pub inventory: BTreeSet<String>,
}

impl Player {
    pub fn new(start_location: impl Into<String>) -> Self {
        Self {
            location: start_location.into(),
            inventory: BTreeSet::new(),
        }
    }

    /// Unconditional location overwrite. The caller is responsible for
    /// verifying the move is legal first.
    pub fn move_to(&mut self, room_name: impl Into<String>) {
        self.location = room_name.into();
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.insert(item.into());
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    /// Remove an item from the inventory.
    ///
    /// # Errors
    /// Returns [`PlayerError::NotCarried`] if the item is absent.
    pub fn remove_item(&mut self, item: &str) -> Result<(), PlayerError> {
        if self.inventory.remove(item) {
            Ok(())
        } else {
            Err(PlayerError::NotCarried(item.to_string()))
        }
    }

    /// Friendly listing of carried items, sorted, comma-separated.
    pub fn inventory_text(&self) -> String {
        if self.inventory.is_empty() {
            "You are not carrying anything.".to_string()
        } else {
            let items: Vec<_> = self.inventory.iter().cloned().collect();
            format!("You are carrying: {}", items.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_to_overwrites_location() {
        let mut player = Player::new("foyer");
        assert_eq!(player.location, "foyer");
        player.move_to("hallway");
        assert_eq!(player.location, "hallway");
    }

    #[test]
    fn inventory_membership_round_trip() {
        let mut player = Player::new("foyer");
        assert!(!player.has_item("key"));
        player.add_item("key");
        assert!(player.has_item("key"));
        player.remove_item("key").unwrap();
        assert!(!player.has_item("key"));
    }

    #[test]
    fn remove_absent_item_errors() {
        let mut player = Player::new("foyer");
        let err = player.remove_item("key").unwrap_err();
        assert_eq!(err, PlayerError::NotCarried("key".into()));
    }

    #[test]
    fn duplicate_adds_are_idempotent() {
        let mut player = Player::new("foyer");
        player.add_item("map");
        player.add_item("map");
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn inventory_text_empty() {
        let player = Player::new("foyer");
        assert_eq!(player.inventory_text(), "You are not carrying anything.");
    }

    #[test]
    fn inventory_text_sorted_and_comma_separated() {
        let mut player = Player::new("foyer");
        player.add_item("map");
        player.add_item("key");
        assert_eq!(player.inventory_text(), "You are carrying: key, map");
    }
}
