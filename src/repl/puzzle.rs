//! `repl::puzzle` module
//!
//! Handler for the `solve` command, including the staged pre-step some
//! puzzles require before their real question is revealed.

use crate::puzzle::SolveOutcome;
use crate::repl::ReplControl;
use crate::repl::input::{InputEvent, InputManager};
use crate::style::GameStyle;
use crate::world::HauntedWorld;

use anyhow::Result;
use log::info;

/// Attempt the current room's puzzle.
///
/// With a pending stage, only the stage's trigger input (plus its required
/// item, when set) advances; the main question stays hidden. Otherwise the
/// question is shown, one line of input is taken as the candidate, and the
/// puzzle's resolution rules apply. A winning solve ends the run.
///
/// # Errors
/// Fails if the player's current room cannot be resolved or input breaks.
pub fn solve_handler(world: &mut HauntedWorld, input: &mut InputManager) -> Result<ReplControl> {
    if !world.player_room_ref()?.has_puzzle() {
        println!("There's nothing to solve here.");
        return Ok(ReplControl::Continue);
    }

    if let Some(stage) = pending_stage(world)? {
        return run_stage(world, input, &stage);
    }

    let question = world
        .player_room_ref()?
        .puzzle
        .as_ref()
        .map(|puzzle| puzzle.question.clone())
        .unwrap_or_default();
    println!("{}", question.description_style());

    let Some(answer) = read_answer(input)? else {
        return Ok(ReplControl::Continue);
    };

    let outcome = world.player_room_mut()?.try_solve_puzzle(&answer);
    match outcome {
        Some(SolveOutcome::Solved) => {
            println!("{}", SolveOutcome::Solved.message());
            let (on_solved, wins) = world
                .player_room_ref()?
                .puzzle
                .as_ref()
                .map(|puzzle| (puzzle.on_solved.clone(), puzzle.wins_game))
                .unwrap_or((None, false));
            if let Some(message) = on_solved {
                println!("{}", message.description_style());
            }
            info!("player solved the puzzle in {}", world.player.location);
            if wins {
                println!("\nYou escaped the house. Nice work!");
                return Ok(ReplControl::Won);
            }
        },
        Some(SolveOutcome::AlreadySolved) => {
            println!("{}", SolveOutcome::AlreadySolved.message());
        },
        Some(failure) => {
            let flavor = world
                .player_room_ref()?
                .puzzle
                .as_ref()
                .and_then(|puzzle| puzzle.wrong_flavor().map(str::to_string));
            println!("{}", flavor.unwrap_or_else(|| failure.message().to_string()).denied_style());
        },
        None => {
            println!("There's nothing to solve here.");
        },
    }
    Ok(ReplControl::Continue)
}

/// Snapshot of a pending stage, copied out so the borrow on the room ends
/// before we touch the player.
struct StageSnapshot {
    prompt: String,
    trigger: String,
    required_item: Option<String>,
    success: String,
    failure: String,
}

fn pending_stage(world: &HauntedWorld) -> Result<Option<StageSnapshot>> {
    let room = world.player_room_ref()?;
    Ok(room
        .puzzle
        .as_ref()
        .filter(|puzzle| puzzle.stage_pending())
        .and_then(|puzzle| puzzle.stage.as_ref())
        .map(|stage| StageSnapshot {
            prompt: stage.prompt.clone(),
            trigger: stage.trigger.clone(),
            required_item: stage.required_item.clone(),
            success: stage.success.clone(),
            failure: stage.failure.clone(),
        }))
}

/// What one line of input does to a pending stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StageAttempt {
    /// Trigger given and the required item (if any) is carried.
    Passed,
    /// Trigger given but the required item is missing.
    MissingItem,
    /// Anything else is a no-op.
    Miss,
}

fn judge_stage(stage: &StageSnapshot, answer: &str, item_carried: bool) -> StageAttempt {
    if answer.trim().to_lowercase() != stage.trigger {
        return StageAttempt::Miss;
    }
    if stage.required_item.is_some() && !item_carried {
        return StageAttempt::MissingItem;
    }
    StageAttempt::Passed
}

fn run_stage(
    world: &mut HauntedWorld,
    input: &mut InputManager,
    stage: &StageSnapshot,
) -> Result<ReplControl> {
    println!("{}", stage.prompt.description_style());
    let Some(answer) = read_answer(input)? else {
        return Ok(ReplControl::Continue);
    };

    let carried = stage
        .required_item
        .as_ref()
        .is_some_and(|item| world.player.has_item(item));
    match judge_stage(stage, &answer, carried) {
        StageAttempt::Passed => {
            if let Some(pending) = world
                .player_room_mut()?
                .puzzle
                .as_mut()
                .and_then(|puzzle| puzzle.stage.as_mut())
            {
                pending.passed = true;
            }
            info!("puzzle stage passed in {}", world.player.location);
            println!("{}", stage.success.description_style());
        },
        StageAttempt::MissingItem => {
            println!("{}", stage.failure.denied_style());
        },
        StageAttempt::Miss => {
            // any other input in the pre-stage is a no-op with flavor text
            let flavor = world
                .player_room_ref()?
                .puzzle
                .as_ref()
                .and_then(|puzzle| puzzle.wrong_flavor().map(str::to_string));
            println!("{}", flavor.unwrap_or_else(|| stage.failure.clone()).denied_style());
        },
    }
    Ok(ReplControl::Continue)
}

fn read_answer(input: &mut InputManager) -> Result<Option<String>> {
    match input.read_line("> ") {
        Ok(InputEvent::Line(line)) => Ok(Some(line)),
        Ok(InputEvent::Eof) => Ok(Some(String::new())),
        Ok(InputEvent::Interrupted) => {
            println!("Never mind.");
            Ok(None)
        },
        Err(err) => Err(err.into()),
    }
}
