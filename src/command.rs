//! Command module
//!
//! Describes the commands recognized during gameplay and a small
//! slice-pattern parser over whitespace-split input. Input is expected to be
//! trimmed and lowercased by the loop before parsing.

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Go(String),
    GoWhere,
    Help,
    Inspect(String),
    InspectWhat,
    Inventory,
    Look,
    Quit,
    Solve,
    Take(String),
    TakeWhat,
    Time,
    Unknown,
}

/// Parses an input string and returns a corresponding `Command` if recognized.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        [] => Command::Empty,
        ["look"] => Command::Look,
        ["go" | "move"] => Command::GoWhere,
        ["go" | "move", dir] => Command::Go((*dir).to_string()),
        ["take" | "grab"] => Command::TakeWhat,
        ["take" | "grab", item] => Command::Take((*item).to_string()),
        ["inspect" | "examine"] => Command::InspectWhat,
        ["inspect" | "examine", item] => Command::Inspect((*item).to_string()),
        ["inventory" | "inv"] => Command::Inventory,
        ["solve"] => Command::Solve,
        ["time" | "status"] => Command::Time,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}
