use crate::game_state::chess_types::Square;

/// Represents all possible error types that can occur in the pawn game core.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    /// Indicates an attempted access outside the bounds of the chess board.
    OutOfBounds,
    /// A single character used during algebraic parsing was invalid
    /// (a file outside 'a'..'h' or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),
    /// An algebraic string (square or move command) failed to parse.
    InvalidAlgebraicString(String),
    /// Attempted to remove a pawn from an empty square.
    CannotRemoveFromEmptySquare(Square),
}
