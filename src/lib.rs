#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const HOLLOWAY_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod loader;
pub mod player;
pub mod puzzle;
pub mod repl;
pub mod room;
pub mod stats;
pub mod style;
pub mod timer;
pub mod world;

// Re-exports for convenience
pub use loader::load_world;
pub use player::Player;
pub use puzzle::{Acceptance, Puzzle, SolveOutcome};
pub use repl::{RunOutcome, run_repl};
pub use room::{Exit, ExitGuard, Room};
pub use stats::RunLog;
pub use timer::{GameTimer, format_mmss};
pub use world::HauntedWorld;
