//! Loader utilities for building a [`HauntedWorld`] from a world definition.
//!
//! World content is JSON: rooms, puzzles, item metadata, a start room, and an
//! optional time limit. Definitions are first parsed into raw serde structs
//! (every optional key defaulted, so downstream code never branches on key
//! presence) and then built into linked runtime types in two passes: rooms
//! first, puzzle attachment second.

use crate::puzzle::{Acceptance, Puzzle, PuzzleStage};
use crate::room::{Exit, ExitGuard, Room};
use crate::world::{HauntedWorld, ItemInfo};
use crate::{Player, timer};

use anyhow::{Context, Result, bail};
use log::info;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Raw world definition, exactly as serialized.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorldDef {
    #[serde(default)]
    pub rooms: HashMap<String, RawRoom>,
    #[serde(default)]
    pub puzzles: HashMap<String, RawPuzzle>,
    #[serde(default)]
    pub items: HashMap<String, ItemInfo>,
    #[serde(default)]
    pub start_room: String,
    #[serde(default)]
    pub time_limit_secs: Option<u64>,
}

/// Raw room data: exits map direction names onto target room names; guards
/// attach movement preconditions to a direction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRoom {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exits: HashMap<String, String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub puzzle: Option<String>,
    #[serde(default)]
    pub guards: HashMap<String, RawGuard>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGuard {
    #[serde(default)]
    pub required_item: Option<String>,
    #[serde(default)]
    pub requires_solved: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Raw puzzle definition. `answer` and `pattern` both default to empty; a
/// non-empty pattern selects pattern mode, otherwise exact-answer mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPuzzle {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub wrong_responses: Vec<String>,
    #[serde(default)]
    pub stage: Option<RawStage>,
    #[serde(default)]
    pub on_solved: Option<String>,
    #[serde(default)]
    pub wins_game: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStage {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub trigger: String,
    #[serde(default)]
    pub required_item: Option<String>,
    #[serde(default)]
    pub success: String,
    #[serde(default)]
    pub failure: String,
}

/// Load a world definition file and build the runtime world from it.
///
/// # Errors
/// Fails if the file is unreadable, is not valid JSON, or the definition
/// fails validation (see [`build_world`]).
pub fn load_world(path: &Path) -> Result<HauntedWorld> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read world file '{}'", path.display()))?;
    let def: WorldDef = serde_json::from_str(&raw)
        .with_context(|| format!("world file '{}' is not valid JSON", path.display()))?;
    let world = build_world(&def)?;
    info!(
        "world loaded from '{}': {} rooms, {} puzzles, {} item entries",
        path.display(),
        world.rooms.len(),
        def.puzzles.len(),
        world.items.len()
    );
    Ok(world)
}

/// Build the room arena and player from a parsed definition.
///
/// Two passes: first instantiate every room with its exits, guards, and item
/// snapshot; then resolve puzzle ids and attach built puzzles.
///
/// # Errors
/// Fails on an exit targeting an unknown room, a guard naming a direction
/// with no exit, a room referencing an unknown puzzle id, an invalid puzzle
/// pattern, or a missing/unknown start room.
pub fn build_world(def: &WorldDef) -> Result<HauntedWorld> {
    let mut rooms: HashMap<String, Room> = HashMap::new();

    // First pass: create rooms without puzzles attached.
    for (room_name, raw) in &def.rooms {
        let mut room = Room::new(room_name.clone(), raw.description.clone());
        for (direction, target) in &raw.exits {
            if !def.rooms.contains_key(target) {
                bail!("room '{room_name}' has a {direction} exit to unknown room '{target}'");
            }
            room.add_exit(direction, Exit::new(target.clone()));
        }
        for (direction, guard) in &raw.guards {
            let key = direction.to_lowercase();
            let Some(exit) = room.exits.get_mut(&key) else {
                bail!("room '{room_name}' guards direction '{direction}' but has no such exit");
            };
            exit.guard = Some(ExitGuard {
                required_item: guard.required_item.clone(),
                requires_solved: guard.requires_solved,
                message: guard.message.clone(),
            });
        }
        for item in &raw.items {
            room.add_item(item.clone());
        }
        rooms.insert(room_name.clone(), room);
    }

    // Second pass: attach puzzles by id.
    for (room_name, raw) in &def.rooms {
        let Some(puzzle_id) = &raw.puzzle else { continue };
        let Some(raw_puzzle) = def.puzzles.get(puzzle_id) else {
            bail!("room '{room_name}' references unknown puzzle '{puzzle_id}'");
        };
        let puzzle = build_puzzle(puzzle_id, raw_puzzle)?;
        if let Some(room) = rooms.get_mut(room_name) {
            room.puzzle = Some(puzzle);
        }
    }

    if def.start_room.is_empty() {
        bail!("world definition is missing a start room");
    }
    if !rooms.contains_key(&def.start_room) {
        bail!("start room '{}' does not name an existing room", def.start_room);
    }

    let time_limit = def.time_limit_secs.map(Duration::from_secs);
    if let Some(limit) = time_limit {
        info!("time limit armed: {}", timer::format_mmss(limit));
    }

    Ok(HauntedWorld {
        rooms,
        items: def.items.clone(),
        player: Player::new(def.start_room.clone()),
        start_room: def.start_room.clone(),
        time_limit,
    })
}

/// Resolve a raw puzzle definition into a [`Puzzle`], choosing the acceptance
/// variant once here rather than at solve time.
fn build_puzzle(id: &str, raw: &RawPuzzle) -> Result<Puzzle> {
    let acceptance = if raw.pattern.is_empty() {
        Acceptance::Exact(raw.answer.clone())
    } else {
        let regex = Regex::new(&format!(r"(?i)\A(?:{})\z", raw.pattern))
            .with_context(|| format!("puzzle '{id}' has an invalid pattern"))?;
        Acceptance::Pattern(regex)
    };
    Ok(Puzzle {
        question: raw.question.clone(),
        acceptance,
        solved: false,
        wrong_responses: raw.wrong_responses.clone(),
        stage: raw.stage.as_ref().map(|stage| PuzzleStage {
            prompt: stage.prompt.clone(),
            trigger: stage.trigger.clone(),
            required_item: stage.required_item.clone(),
            success: stage.success.clone(),
            failure: stage.failure.clone(),
            passed: false,
        }),
        on_solved: raw.on_solved.clone(),
        wins_game: raw.wins_game,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_def(json: &str) -> WorldDef {
        serde_json::from_str(json).unwrap()
    }

    fn minimal_world_json() -> &'static str {
        r#"{
            "rooms": {
                "foyer": {
                    "description": "Entry",
                    "exits": { "north": "hallway" },
                    "items": ["flashlight"]
                },
                "hallway": {
                    "description": "A long corridor",
                    "exits": { "south": "foyer" },
                    "puzzle": "keypad"
                }
            },
            "puzzles": {
                "keypad": {
                    "question": "Enter code:",
                    "answer": "1234",
                    "wrong_responses": ["Nope.", "Try again."]
                }
            },
            "items": { "flashlight": { "description": "A cheap flashlight." } },
            "start_room": "foyer"
        }"#
    }

    #[test]
    fn builds_rooms_and_attaches_puzzles() {
        let def = parse_def(minimal_world_json());
        let world = build_world(&def).unwrap();

        assert_eq!(world.rooms.len(), 2);
        let foyer = world.rooms.get("foyer").unwrap();
        assert!(foyer.get_exit("north").is_some());
        assert!(foyer.has_item("flashlight"));

        let hallway = world.rooms.get("hallway").unwrap();
        let puzzle = hallway.puzzle.as_ref().unwrap();
        assert_eq!(puzzle.question, "Enter code:");
        assert!(!puzzle.solved);
        assert_eq!(puzzle.wrong_responses, vec!["Nope.".to_string(), "Try again.".to_string()]);
    }

    #[test]
    fn puzzle_without_pattern_key_normalizes_to_exact_mode() {
        let def = parse_def(minimal_world_json());
        let world = build_world(&def).unwrap();
        let puzzle = world.rooms.get("hallway").unwrap().puzzle.as_ref().unwrap();
        assert!(matches!(&puzzle.acceptance, Acceptance::Exact(answer) if answer == "1234"));
        assert!(!puzzle.solved);
    }

    #[test]
    fn non_empty_pattern_selects_pattern_mode() {
        let def = parse_def(
            r#"{
                "rooms": { "study": { "description": "Books", "puzzle": "window" } },
                "puzzles": { "window": { "question": "Digits:", "pattern": "\\d{3}" } },
                "start_room": "study"
            }"#,
        );
        let world = build_world(&def).unwrap();
        let puzzle = world.rooms.get("study").unwrap().puzzle.as_ref().unwrap();
        assert!(matches!(puzzle.acceptance, Acceptance::Pattern(_)));
    }

    #[test]
    fn invalid_pattern_fails_load() {
        let def = parse_def(
            r#"{
                "rooms": { "study": { "description": "Books", "puzzle": "window" } },
                "puzzles": { "window": { "question": "Bad:", "pattern": "([" } },
                "start_room": "study"
            }"#,
        );
        assert!(build_world(&def).is_err());
    }

    #[test]
    fn missing_start_room_fails_load() {
        let def = parse_def(r#"{ "rooms": { "foyer": { "description": "Entry" } } }"#);
        assert!(build_world(&def).is_err());
    }

    #[test]
    fn unknown_start_room_fails_load() {
        let def = parse_def(
            r#"{ "rooms": { "foyer": { "description": "Entry" } }, "start_room": "attic" }"#,
        );
        assert!(build_world(&def).is_err());
    }

    #[test]
    fn exit_to_unknown_room_fails_load() {
        let def = parse_def(
            r#"{
                "rooms": { "foyer": { "description": "Entry", "exits": { "north": "void" } } },
                "start_room": "foyer"
            }"#,
        );
        assert!(build_world(&def).is_err());
    }

    #[test]
    fn guard_on_missing_exit_fails_load() {
        let def = parse_def(
            r#"{
                "rooms": {
                    "foyer": {
                        "description": "Entry",
                        "guards": { "north": { "required_item": "flashlight" } }
                    }
                },
                "start_room": "foyer"
            }"#,
        );
        assert!(build_world(&def).is_err());
    }

    #[test]
    fn guards_attach_to_exits() {
        let def = parse_def(
            r#"{
                "rooms": {
                    "foyer": {
                        "description": "Entry",
                        "exits": { "north": "hallway" },
                        "guards": {
                            "north": {
                                "required_item": "flashlight",
                                "message": "Too dark."
                            }
                        }
                    },
                    "hallway": { "description": "Corridor" }
                },
                "start_room": "foyer"
            }"#,
        );
        let world = build_world(&def).unwrap();
        let guard = world
            .rooms
            .get("foyer")
            .unwrap()
            .get_exit("north")
            .unwrap()
            .guard
            .as_ref()
            .unwrap();
        assert_eq!(guard.required_item.as_deref(), Some("flashlight"));
        assert_eq!(guard.message.as_deref(), Some("Too dark."));
        assert!(!guard.requires_solved);
    }

    #[test]
    fn unknown_puzzle_id_fails_load() {
        let def = parse_def(
            r#"{
                "rooms": { "foyer": { "description": "Entry", "puzzle": "ghost" } },
                "start_room": "foyer"
            }"#,
        );
        let err = build_world(&def).unwrap_err();
        assert!(err.to_string().contains("unknown puzzle 'ghost'"));
    }

    #[test]
    fn time_limit_is_optional_and_data_driven() {
        let def = parse_def(minimal_world_json());
        assert!(build_world(&def).unwrap().time_limit.is_none());

        let timed = parse_def(
            r#"{
                "rooms": { "foyer": { "description": "Entry" } },
                "start_room": "foyer",
                "time_limit_secs": 300
            }"#,
        );
        assert_eq!(build_world(&timed).unwrap().time_limit, Some(Duration::from_secs(300)));
    }

    #[test]
    fn staged_puzzle_is_built_unpassed() {
        let def = parse_def(
            r#"{
                "rooms": { "study": { "description": "Books", "puzzle": "window" } },
                "puzzles": {
                    "window": {
                        "question": "Force it?",
                        "answer": "shove",
                        "stage": {
                            "prompt": "It's dark.",
                            "trigger": "flashlight",
                            "required_item": "flashlight",
                            "success": "Light!",
                            "failure": "Still dark."
                        }
                    }
                },
                "start_room": "study"
            }"#,
        );
        let world = build_world(&def).unwrap();
        let puzzle = world.rooms.get("study").unwrap().puzzle.as_ref().unwrap();
        assert!(puzzle.stage_pending());
    }

    #[test]
    fn load_world_reports_missing_file() {
        let err = load_world(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("could not read world file"));
    }

    #[test]
    fn player_starts_in_start_room() {
        let def = parse_def(minimal_world_json());
        let world = build_world(&def).unwrap();
        assert_eq!(world.player.location, "foyer");
        assert_eq!(world.start_room, "foyer");
    }
}
