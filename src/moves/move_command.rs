//! Textual move command parsing.
//!
//! A command is either the literal `exit` or exactly four characters naming
//! the start and target squares (`e2e4`). Shape validation happens up front
//! against a compiled pattern; lowercase files only, matching the prompt's
//! documented syntax.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::Errors;
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::algebraic_to_square;

lazy_static! {
    static ref MOVE_PATTERN: Regex =
        Regex::new(r"^[a-h][1-8][a-h][1-8]$").expect("move pattern compiles");
}

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    /// The session-ending sentinel.
    Exit,
    /// A move request from one square to another.
    Move { from: Square, to: Square },
}

/// Parse a raw input line into a command.
///
/// Anything that is not `exit` and does not match the exact four-character
/// shape is rejected without further interpretation.
pub fn parse_move_command(input: &str) -> Result<MoveCommand, Errors> {
    if input == "exit" {
        return Ok(MoveCommand::Exit);
    }
    if !MOVE_PATTERN.is_match(input) {
        return Err(Errors::InvalidAlgebraicString(input.to_owned()));
    }
    let from = algebraic_to_square(&input[0..2])?;
    let to = algebraic_to_square(&input[2..4])?;
    Ok(MoveCommand::Move { from, to })
}
