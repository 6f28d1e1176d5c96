//! Crate root module declarations for the Pawns-Only Chess project.
//!
//! This file exposes all top-level subsystems (game state, move handling,
//! rendering utilities, and the console front-end) so the binary, tests,
//! and benches can import stable module paths.

pub mod game_state {
    pub mod chess_types;
    pub mod game_state;
    pub mod pawn_register;
}

pub mod moves {
    pub mod move_command;
    pub mod pawn_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}

pub mod cli {
    pub mod console_game;
}

pub mod errors;
