//! The move engine: owns the pawn register, validates and applies move
//! requests, and reports terminal conditions as data.
//!
//! One request is processed to completion before the next is accepted; a
//! rejected request leaves the position untouched.

use tracing::debug;

use crate::game_state::chess_types::{
    Color, GameStatus, MoveRejection, Player, Square, TurnOutcome,
};
use crate::game_state::pawn_register::{PawnId, PawnRegister};
use crate::moves::move_command::{parse_move_command, MoveCommand};
use crate::moves::pawn_moves::{capture_targets, forward_move_targets};

#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub register: PawnRegister,
}

impl GameState {
    /// Standard starting position: eight pawns per side on ranks 2 and 7.
    pub fn new_game() -> Self {
        GameState {
            register: PawnRegister::new_game(),
        }
    }

    /// Position built from an existing register, for tests and tools.
    pub fn from_register(register: PawnRegister) -> Self {
        GameState { register }
    }

    /// Validate and apply one move request for `player`.
    ///
    /// The request either is the `exit` sentinel, gets rejected with a
    /// `MoveRejection` (no state change), or is applied; an applied move
    /// also reports whether it ended the game. Checked in order:
    /// command shape, pawn ownership at the start square, membership of the
    /// target in the pawn's forward or capture sets.
    pub fn execute_move(&mut self, player: &Player, input: &str) -> TurnOutcome {
        let command = match parse_move_command(input) {
            Ok(command) => command,
            Err(_) => return TurnOutcome::Invalid(MoveRejection::MalformedCommand),
        };
        let (from, to) = match command {
            MoveCommand::Exit => return TurnOutcome::Exit,
            MoveCommand::Move { from, to } => (from, to),
        };

        let id = match self.register.pawn_id_at(from) {
            Some(id) if self.register.pawn(id).map(|pawn| pawn.color) == Some(player.color) => id,
            _ => {
                return TurnOutcome::Invalid(MoveRejection::NoPawnAtStart {
                    color: player.color,
                    square: from,
                })
            }
        };

        if forward_move_targets(&self.register, id).contains(&to) {
            debug!(side = ?player.color, %from, %to, "forward move");
            TurnOutcome::Moved(self.apply_relocation(id, to))
        } else if capture_targets(&self.register, id).contains(&to) {
            self.remove_capture_victim(player.color, to);
            debug!(side = ?player.color, %from, %to, "capture move");
            TurnOutcome::Moved(self.apply_relocation(id, to))
        } else {
            TurnOutcome::Invalid(MoveRejection::UnreachableTarget)
        }
    }

    /// True if any live pawn of `color` still has a forward or capture target.
    pub fn can_any_pawn_move(&self, color: Color) -> bool {
        self.register.side_pawns(color).any(|(id, _)| {
            !forward_move_targets(&self.register, id).is_empty()
                || !capture_targets(&self.register, id).is_empty()
        })
    }

    /// Board symbol on `square` for rendering: `W`, `B`, or `None` if empty.
    pub fn symbol_at(&self, square: Square) -> Option<char> {
        self.register.pawn_at(square).map(|pawn| pawn.color.symbol())
    }

    /// Takes the victim off the board. An occupied target is a plain capture;
    /// an empty target is en passant, where the victim stands one rank behind
    /// the target in the attacker's direction of travel.
    fn remove_capture_victim(&mut self, attacker: Color, target: Square) {
        let victim_square = if self.register.pawn_id_at(target).is_some() {
            target
        } else {
            match target.offset(0, -attacker.forward()) {
                Ok(behind) => behind,
                Err(_) => return,
            }
        };
        let _ = self.register.remove_at(victim_square);
    }

    /// Relocates the mover, updates its counters and the side's last-moved
    /// flag, then checks the terminal conditions: promotion rank first, then
    /// opponent pawn exhaustion.
    fn apply_relocation(&mut self, id: PawnId, to: Square) -> GameStatus {
        self.register.relocate(id, to);
        let color = match self.register.pawn_mut(id) {
            Some(pawn) => {
                pawn.moves_done += 1;
                pawn.color
            }
            None => return GameStatus::Ongoing,
        };
        self.register.mark_last_moved(id);

        if to.rank == color.promotion_rank() || self.register.count_side(color.opposite()) == 0 {
            debug!(side = ?color, "game over");
            GameStatus::Win(color)
        } else {
            GameStatus::Ongoing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{
        Color, GameStatus, MoveRejection, Player, Square, TurnOutcome,
    };
    use crate::game_state::pawn_register::PawnRegister;

    fn sq(text: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(text).expect("test square parses")
    }

    fn players() -> (Player, Player) {
        (
            Player::new("Alice", Color::White),
            Player::new("Bob", Color::Black),
        )
    }

    fn position(board: &GameState) -> String {
        crate::utils::render_board::render_board(board)
    }

    #[test]
    fn simple_move_updates_cells_and_counters() {
        let (white, _) = players();
        let mut board = GameState::new_game();
        assert_eq!(
            board.execute_move(&white, "e2e4"),
            TurnOutcome::Moved(GameStatus::Ongoing)
        );
        assert!(board.register.pawn_at(sq("e2")).is_none());
        let mover = board.register.pawn_at(sq("e4")).expect("pawn on e4");
        assert_eq!(mover.moves_done, 1);
        assert!(mover.was_last_moved);
        assert_eq!(board.register.count_side(Color::White), 8);
    }

    #[test]
    fn exit_and_invalid_requests_leave_state_untouched() {
        let (white, _) = players();
        let mut board = GameState::new_game();
        let before = position(&board);

        assert_eq!(board.execute_move(&white, "exit"), TurnOutcome::Exit);
        assert_eq!(
            board.execute_move(&white, "z9z9"),
            TurnOutcome::Invalid(MoveRejection::MalformedCommand)
        );
        assert_eq!(
            board.execute_move(&white, "e2e5"),
            TurnOutcome::Invalid(MoveRejection::UnreachableTarget)
        );
        assert_eq!(
            board.execute_move(&white, "e4e5"),
            TurnOutcome::Invalid(MoveRejection::NoPawnAtStart {
                color: Color::White,
                square: sq("e4")
            })
        );
        // Black pawn, white mover: rejected as "no white pawn there".
        assert_eq!(
            board.execute_move(&white, "e7e6"),
            TurnOutcome::Invalid(MoveRejection::NoPawnAtStart {
                color: Color::White,
                square: sq("e7")
            })
        );

        assert_eq!(position(&board), before);
    }

    #[test]
    fn diagonal_capture_removes_victim_everywhere() {
        let (white, black) = players();
        let mut board = GameState::new_game();
        assert_eq!(
            board.execute_move(&white, "e2e4"),
            TurnOutcome::Moved(GameStatus::Ongoing)
        );
        assert_eq!(
            board.execute_move(&black, "d7d5"),
            TurnOutcome::Moved(GameStatus::Ongoing)
        );
        assert_eq!(
            board.execute_move(&white, "e4d5"),
            TurnOutcome::Moved(GameStatus::Ongoing)
        );
        assert!(board.register.pawn_at(sq("e4")).is_none());
        let capturer = board.register.pawn_at(sq("d5")).expect("pawn on d5");
        assert_eq!(capturer.color, Color::White);
        assert!(board.register.pawn_at(sq("d7")).is_none());
        assert_eq!(board.register.count_side(Color::Black), 7);
        assert_eq!(board.register.count_side(Color::White), 8);
    }

    #[test]
    fn en_passant_capture_onto_empty_square() {
        let (white, black) = players();
        let mut board = GameState::new_game();
        board.execute_move(&white, "e2e4");
        board.execute_move(&black, "a7a6");
        board.execute_move(&white, "e4e5");
        board.execute_move(&black, "d7d5");
        assert_eq!(
            board.execute_move(&white, "e5d6"),
            TurnOutcome::Moved(GameStatus::Ongoing)
        );
        assert!(board.register.pawn_at(sq("e5")).is_none());
        assert!(board.register.pawn_at(sq("d5")).is_none());
        let capturer = board.register.pawn_at(sq("d6")).expect("pawn on d6");
        assert_eq!(capturer.color, Color::White);
        assert_eq!(board.register.count_side(Color::Black), 7);
    }

    #[test]
    fn en_passant_window_closes_after_another_move() {
        let (white, black) = players();
        let mut board = GameState::new_game();
        board.execute_move(&white, "e2e4");
        board.execute_move(&black, "a7a6");
        board.execute_move(&white, "e4e5");
        board.execute_move(&black, "d7d5");
        // Black moves something else, clearing the d5 pawn's last-moved flag.
        board.execute_move(&white, "h2h3");
        board.execute_move(&black, "a6a5");
        assert_eq!(
            board.execute_move(&white, "e5d6"),
            TurnOutcome::Invalid(MoveRejection::UnreachableTarget)
        );
    }

    #[test]
    fn promotion_wins_immediately() {
        let (white, _) = players();
        let mut register = PawnRegister::new();
        let id = register.place_pawn(Color::White, sq("a7"));
        register.pawn_mut(id).expect("pawn alive").moves_done = 3;
        register.place_pawn(Color::Black, sq("h5"));
        let mut board = GameState::from_register(register);
        assert_eq!(
            board.execute_move(&white, "a7a8"),
            TurnOutcome::Moved(GameStatus::Win(Color::White))
        );
    }

    #[test]
    fn black_promotion_on_rank_one() {
        let (_, black) = players();
        let mut register = PawnRegister::new();
        let id = register.place_pawn(Color::Black, sq("h2"));
        register.pawn_mut(id).expect("pawn alive").moves_done = 3;
        register.place_pawn(Color::White, sq("a4"));
        let mut board = GameState::from_register(register);
        assert_eq!(
            board.execute_move(&black, "h2h1"),
            TurnOutcome::Moved(GameStatus::Win(Color::Black))
        );
    }

    #[test]
    fn capturing_last_enemy_pawn_wins() {
        let (white, _) = players();
        let mut register = PawnRegister::new();
        register.place_pawn(Color::White, sq("d4"));
        register.place_pawn(Color::Black, sq("e5"));
        let mut board = GameState::from_register(register);
        assert_eq!(
            board.execute_move(&white, "d4e5"),
            TurnOutcome::Moved(GameStatus::Win(Color::White))
        );
        assert_eq!(board.register.count_side(Color::Black), 0);
    }

    #[test]
    fn stalemate_detection_via_can_any_pawn_move() {
        let mut register = PawnRegister::new();
        let white = register.place_pawn(Color::White, sq("a4"));
        register.pawn_mut(white).expect("pawn alive").moves_done = 1;
        let black = register.place_pawn(Color::Black, sq("a5"));
        register.pawn_mut(black).expect("pawn alive").moves_done = 1;
        let board = GameState::from_register(register);
        assert!(!board.can_any_pawn_move(Color::Black));
        assert!(!board.can_any_pawn_move(Color::White));
    }

    #[test]
    fn fresh_game_both_sides_can_move() {
        let board = GameState::new_game();
        assert!(board.can_any_pawn_move(Color::White));
        assert!(board.can_any_pawn_move(Color::Black));
    }
}
