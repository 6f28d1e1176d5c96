//! Pawn bookkeeping with a single source of truth.
//!
//! Pawns live in a slot arena; the 8x8 occupancy array stores slot indices.
//! A capture frees the slot and clears the cell in one operation, so the
//! registry and the board can never disagree about which pawns are alive.

use tracing::debug;

use crate::errors::Errors;
use crate::game_state::chess_types::{Color, Square};

/// Stable identity of a pawn for the duration of the game.
pub type PawnId = usize;

/// A live pawn: its side, where it stands, and the move bookkeeping that
/// drives the initial double-step and en passant rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pawn {
    pub color: Color,
    pub square: Square,
    /// Successful moves made by this pawn. En passant requires exactly 1.
    pub moves_done: u32,
    /// True only for the side's most recently moved pawn.
    pub was_last_moved: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PawnRegister {
    slots: Vec<Option<Pawn>>,
    board: [[Option<PawnId>; 8]; 8],
}

impl PawnRegister {
    /// Empty board; pawns are added with `place_pawn`.
    pub fn new() -> Self {
        PawnRegister::default()
    }

    /// Standard setup: one pawn per file on rank 2 (White) and rank 7 (Black).
    pub fn new_game() -> Self {
        let mut register = PawnRegister::new();
        for color in [Color::White, Color::Black] {
            for file in 0..8 {
                let square = Square {
                    file,
                    rank: color.start_rank(),
                };
                register.place_pawn(color, square);
            }
        }
        register
    }

    /// Adds a fresh pawn (`moves_done == 0`, flag clear) and returns its id.
    /// Replaces whatever occupied the square; callers set up positions with
    /// distinct squares.
    pub fn place_pawn(&mut self, color: Color, square: Square) -> PawnId {
        let id = self.slots.len();
        self.slots.push(Some(Pawn {
            color,
            square,
            moves_done: 0,
            was_last_moved: false,
        }));
        self.board[square.file as usize][square.rank as usize] = Some(id);
        id
    }

    pub fn pawn_id_at(&self, square: Square) -> Option<PawnId> {
        self.board[square.file as usize][square.rank as usize]
    }

    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.slots.get(id).and_then(|slot| slot.as_ref())
    }

    pub fn pawn_mut(&mut self, id: PawnId) -> Option<&mut Pawn> {
        self.slots.get_mut(id).and_then(|slot| slot.as_mut())
    }

    pub fn pawn_at(&self, square: Square) -> Option<&Pawn> {
        self.pawn_id_at(square).and_then(|id| self.pawn(id))
    }

    /// All live pawns with their ids.
    pub fn live_pawns(&self) -> impl Iterator<Item = (PawnId, &Pawn)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|pawn| (id, pawn)))
    }

    /// Live pawns of one side, a filtered view over the arena.
    pub fn side_pawns(&self, color: Color) -> impl Iterator<Item = (PawnId, &Pawn)> {
        self.live_pawns().filter(move |(_, pawn)| pawn.color == color)
    }

    pub fn count_side(&self, color: Color) -> usize {
        self.side_pawns(color).count()
    }

    /// Moves a pawn to an empty target cell, vacating its current cell.
    pub fn relocate(&mut self, id: PawnId, target: Square) {
        let Some(pawn) = self.slots.get_mut(id).and_then(|slot| slot.as_mut()) else {
            return;
        };
        let from = pawn.square;
        pawn.square = target;
        self.board[from.file as usize][from.rank as usize] = None;
        self.board[target.file as usize][target.rank as usize] = Some(id);
        debug!(%from, to = %target, "pawn relocated");
    }

    /// Removes the pawn on `square` from both the cell and the arena.
    pub fn remove_at(&mut self, square: Square) -> Result<Pawn, Errors> {
        let id = self
            .pawn_id_at(square)
            .ok_or(Errors::CannotRemoveFromEmptySquare(square))?;
        self.board[square.file as usize][square.rank as usize] = None;
        let pawn = self.slots[id]
            .take()
            .ok_or(Errors::CannotRemoveFromEmptySquare(square))?;
        debug!(%square, side = ?pawn.color, "pawn captured");
        Ok(pawn)
    }

    /// Clears `was_last_moved` across the side, then sets it on `id`.
    /// Keeps the at-most-one-flag-per-side invariant.
    pub fn mark_last_moved(&mut self, id: PawnId) {
        let Some(color) = self.pawn(id).map(|pawn| pawn.color) else {
            return;
        };
        for slot in self.slots.iter_mut() {
            if let Some(pawn) = slot.as_mut() {
                if pawn.color == color {
                    pawn.was_last_moved = false;
                }
            }
        }
        if let Some(pawn) = self.pawn_mut(id) {
            pawn.was_last_moved = true;
        }
    }
}
