//! Core types for the pawns-only game state.
//!
//! Squares are plain coordinates (zero-based file and rank indices) with
//! bounds-checked arithmetic, so every constructed `Square` is on the board.

use crate::errors::Errors;

/// Side to move. The first player always plays White, the second Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Board symbol used by the text renderer.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Rank delta for one forward step (`+1` for White, `-1` for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Zero-based rank on which this side's pawns start (rank 2 / rank 7).
    #[inline]
    pub const fn start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Zero-based rank that ends the game when a pawn of this side reaches it.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Lowercase side name as it appears in rejection messages.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Capitalized side name as it appears in the win announcement.
    #[inline]
    pub const fn title(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// A board coordinate: zero-based file (`0 == a`) and rank (`0 == rank 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    /// Build a square from zero-based indices, rejecting off-board values.
    pub fn from_file_rank(file: u8, rank: u8) -> Result<Self, Errors> {
        if file > 7 || rank > 7 {
            Err(Errors::OutOfBounds)
        } else {
            Ok(Square { file, rank })
        }
    }

    /// Moves a square by a file and rank offset.
    ///
    /// Returns the new square if it is still within the board, otherwise
    /// `Errors::OutOfBounds`.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Result<Self, Errors> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (file < 0) | (file > 7) | (rank < 0) | (rank > 7) {
            Err(Errors::OutOfBounds)
        } else {
            Ok(Square {
                file: file as u8,
                rank: rank as u8,
            })
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

/// A participant: a display name bound to a side for the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
        }
    }
}

/// Why a move request was rejected. Carries enough context to print the
/// exact user-facing line the game has always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The command did not have the `<file><rank><file><rank>` shape.
    MalformedCommand,
    /// The start square holds no pawn of the acting side.
    NoPawnAtStart { color: Color, square: Square },
    /// The target square is not a legal forward or capture target.
    UnreachableTarget,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::MalformedCommand | MoveRejection::UnreachableTarget => {
                write!(f, "Invalid Input")
            }
            MoveRejection::NoPawnAtStart { color, square } => {
                write!(f, "No {} pawn at {}", color.label(), square)
            }
        }
    }
}

/// Whether the game continues after a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The mover promoted or captured the opponent's last pawn.
    Win(Color),
}

/// Outcome of one `execute_move` request. Game over is ordinary data here,
/// matched on by the turn loop rather than propagated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The `exit` sentinel: end the session, no state change.
    Exit,
    /// The request was rejected; the same side retries.
    Invalid(MoveRejection),
    /// The move was applied; `GameStatus` says whether it ended the game.
    Moved(GameStatus),
}
