//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `Square` representation reused by command parsing and messages.

use crate::errors::Errors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a board square.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, Errors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(Errors::InvalidAlgebraicString(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(Errors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(Errors::InvalidAlgebraicChar(rank as char));
    }

    Square::from_file_rank(file - b'a', rank - b'1')
}

/// Convert a board square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
