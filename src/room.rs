//! Room definitions and spatial utilities.
//!
//! Any location the player can occupy is a [`Room`]. Rooms hold their own
//! exits, the items currently on the floor, and an optional puzzle. Exits
//! reference neighboring rooms by name only; the room arena lives in
//! [`crate::world::HauntedWorld`].

use crate::puzzle::{Puzzle, SolveOutcome};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Errors raised by room item operations.
///
/// These signal a caller contract violation rather than ordinary gameplay
/// feedback; handlers are expected to check possession first.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("there is no '{0}' here")]
    MissingItem(String),
}

/// A requirement that must hold before an exit may be traversed, independent
/// of the exit existing.
#[derive(Debug, Clone, Default)]
pub struct ExitGuard {
    pub required_item: Option<String>,
    pub requires_solved: bool,
    pub message: Option<String>,
}

/// A directed, named connection from one room to another.
#[derive(Debug, Clone)]
pub struct Exit {
    pub to: String,
    pub guard: Option<ExitGuard>,
}

impl Exit {
    /// Create an unguarded exit leading to the named room.
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            guard: None,
        }
    }
}

/// Any visitable location in the game world.
#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Direction keys are stored lowercase; lookup is case-insensitive.
    pub exits: HashMap<String, Exit>,
    pub items: BTreeSet<String>,
    /// Snapshot of `items` taken at build time, used for "already picked up"
    /// hints after the floor has been cleared.
    pub original_items: BTreeSet<String>,
    pub visited: bool,
    pub puzzle: Option<Puzzle>,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: HashMap::new(),
            items: BTreeSet::new(),
            original_items: BTreeSet::new(),
            visited: false,
            puzzle: None,
        }
    }

    /// Add or replace an exit, normalizing the direction key.
    pub fn add_exit(&mut self, direction: &str, exit: Exit) {
        self.exits.insert(direction.to_lowercase(), exit);
    }

    /// Case-insensitive exit lookup. No side effect.
    pub fn get_exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.get(&direction.to_lowercase())
    }

    /// Place an item on the room floor. Also records it in `original_items`
    /// so later hints know it was once here.
    pub fn add_item(&mut self, item: impl Into<String>) {
        let item = item.into();
        self.original_items.insert(item.clone());
        self.items.insert(item);
    }

    /// Remove an item from the room.
    ///
    /// # Errors
    /// Returns [`RoomError::MissingItem`] if the item is not present.
    pub fn remove_item(&mut self, item: &str) -> Result<(), RoomError> {
        if self.items.remove(item) {
            Ok(())
        } else {
            Err(RoomError::MissingItem(item.to_string()))
        }
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// True iff a puzzle is attached and not yet solved. Solved puzzles make
    /// the room behave as puzzle-free for gating purposes.
    pub fn has_puzzle(&self) -> bool {
        self.puzzle.as_ref().is_some_and(|puzzle| !puzzle.solved)
    }

    /// Delegate a solve attempt to the attached puzzle. Returns `None` if no
    /// puzzle is attached.
    pub fn try_solve_puzzle(&mut self, candidate: &str) -> Option<SolveOutcome> {
        self.puzzle.as_mut().map(|puzzle| puzzle.try_solve(candidate))
    }

    /// Friendly list of items on the floor.
    pub fn items_text(&self) -> String {
        if self.items.is_empty() {
            "You see nothing useful here.".to_string()
        } else {
            let list: Vec<_> = self.items.iter().cloned().collect();
            format!("You see: {}", list.join(", "))
        }
    }

    /// Friendly list of available exits.
    pub fn exits_text(&self) -> String {
        if self.exits.is_empty() {
            "There are no visible exits.".to_string()
        } else {
            let mut dirs: Vec<_> = self.exits.keys().cloned().collect();
            dirs.sort_unstable();
            format!("Exits: {}", dirs.join(", "))
        }
    }

    /// Full description of the room, including items and exits. Read-only.
    pub fn describe(&self) -> String {
        [self.description.clone(), self.items_text(), self.exits_text()].join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Puzzle;

    fn test_room() -> Room {
        let mut room = Room::new("foyer", "A dusty entry hall.");
        room.add_exit("North", Exit::new("hallway"));
        room.add_item("flashlight");
        room
    }

    #[test]
    fn get_exit_is_case_insensitive() {
        let room = test_room();
        assert_eq!(room.get_exit("north").map(|e| e.to.as_str()), Some("hallway"));
        assert_eq!(room.get_exit("NORTH").map(|e| e.to.as_str()), Some("hallway"));
        assert_eq!(room.get_exit("NoRtH").map(|e| e.to.as_str()), Some("hallway"));
    }

    #[test]
    fn get_exit_returns_none_for_absent_direction() {
        let room = test_room();
        assert!(room.get_exit("west").is_none());
        assert!(room.get_exit("").is_none());
    }

    #[test]
    fn item_membership_round_trip() {
        let mut room = test_room();
        assert!(room.has_item("flashlight"));
        room.remove_item("flashlight").unwrap();
        assert!(!room.has_item("flashlight"));
        // snapshot survives removal
        assert!(room.original_items.contains("flashlight"));
    }

    #[test]
    fn remove_missing_item_errors() {
        let mut room = test_room();
        let err = room.remove_item("ghost").unwrap_err();
        assert_eq!(err, RoomError::MissingItem("ghost".into()));
    }

    #[test]
    fn has_puzzle_reflects_solved_state() {
        let mut room = test_room();
        assert!(!room.has_puzzle());
        room.puzzle = Some(Puzzle::exact("Enter code:", "1234"));
        assert!(room.has_puzzle());
        assert_eq!(room.try_solve_puzzle("1234"), Some(crate::SolveOutcome::Solved));
        // solved puzzle makes the room behave as puzzle-free for gating
        assert!(!room.has_puzzle());
        // puzzle data remains for display/history
        assert!(room.puzzle.is_some());
    }

    #[test]
    fn try_solve_without_puzzle_returns_none() {
        let mut room = test_room();
        assert_eq!(room.try_solve_puzzle("anything"), None);
    }

    #[test]
    fn describe_composes_description_items_and_exits() {
        let room = test_room();
        let text = room.describe();
        assert!(text.contains("A dusty entry hall."));
        assert!(text.contains("You see: flashlight"));
        assert!(text.contains("Exits: north"));
    }

    #[test]
    fn empty_room_texts() {
        let room = Room::new("void", "Nothing here.");
        assert_eq!(room.items_text(), "You see nothing useful here.");
        assert_eq!(room.exits_text(), "There are no visible exits.");
    }

    #[test]
    fn exits_text_sorts_directions() {
        let mut room = Room::new("hub", "Crossroads.");
        room.add_exit("west", Exit::new("a"));
        room.add_exit("east", Exit::new("b"));
        room.add_exit("north", Exit::new("c"));
        assert_eq!(room.exits_text(), "Exits: east, north, west");
    }
}
