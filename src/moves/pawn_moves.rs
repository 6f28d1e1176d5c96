//! Pawn target computation.
//!
//! Two independent target sets per pawn: non-capturing forward moves and
//! diagonal captures (including en passant onto an empty diagonal). The
//! double-step check deliberately inspects only the two-ahead cell, never
//! the intermediate one; this replicates the game's long-standing behavior.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::pawn_register::{PawnId, PawnRegister};

/// Legal non-capturing targets for the pawn `id`.
///
/// A pawn that has never moved may advance two ranks if that cell is empty;
/// the one-rank advance is a separate candidate, also gated only on its own
/// cell being empty.
pub fn forward_move_targets(register: &PawnRegister, id: PawnId) -> Vec<Square> {
    let Some(pawn) = register.pawn(id) else {
        return Vec::new();
    };
    let dir = pawn.color.forward();
    let mut targets = Vec::new();
    if pawn.moves_done == 0 {
        if let Ok(two_ahead) = pawn.square.offset(0, 2 * dir) {
            if register.pawn_at(two_ahead).is_none() {
                targets.push(two_ahead);
            }
        }
    }
    if let Ok(one_ahead) = pawn.square.offset(0, dir) {
        if register.pawn_at(one_ahead).is_none() {
            targets.push(one_ahead);
        }
    }
    targets
}

/// Legal capture targets for the pawn `id`: the two diagonal cells one rank
/// ahead that hold an enemy pawn, or that are empty but en-passant-eligible.
pub fn capture_targets(register: &PawnRegister, id: PawnId) -> Vec<Square> {
    let Some(pawn) = register.pawn(id) else {
        return Vec::new();
    };
    let dir = pawn.color.forward();
    let mut targets = Vec::new();
    for d_file in [-1i8, 1] {
        if let Ok(diagonal) = pawn.square.offset(d_file, dir) {
            if capturable_on(register, pawn.color, diagonal) {
                targets.push(diagonal);
            }
        }
    }
    targets
}

/// True when `target` holds an enemy pawn, or is empty with an enemy pawn
/// one rank behind it that has just made its double-step (`moves_done == 1`
/// and still flagged as its side's last-moved pawn).
fn capturable_on(register: &PawnRegister, attacker: Color, target: Square) -> bool {
    if let Some(occupant) = register.pawn_at(target) {
        return occupant.color == attacker.opposite();
    }
    let Ok(behind) = target.offset(0, -attacker.forward()) else {
        return false;
    };
    match register.pawn_at(behind) {
        Some(victim) => {
            victim.color == attacker.opposite() && victim.was_last_moved && victim.moves_done == 1
        }
        None => false,
    }
}
