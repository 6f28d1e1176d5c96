//! Console front-end and turn loop.
//!
//! Thin glue over the move engine: prompts for player names, reads move
//! commands, alternates the active side, and prints the board and terminal
//! messages. Generic over `BufRead`/`Write` so tests can drive a full
//! session from in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::game_state::chess_types::{Color, GameStatus, Player, TurnOutcome};
use crate::game_state::game_state::GameState;
use crate::utils::render_board::render_board;

/// Run a complete console session: greeting, name prompts, the turn loop,
/// and the closing `Bye!` on every path.
pub fn run_console_game(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Pawns-Only Chess")?;

    writeln!(out, "First Player's name:")?;
    let first_name = read_line(input)?;
    writeln!(out, "Second Player's name:")?;
    let second_name = read_line(input)?;

    if let (Some(first_name), Some(second_name)) = (first_name, second_name) {
        let players = [
            Player::new(first_name, Color::White),
            Player::new(second_name, Color::Black),
        ];
        info!(white = %players[0].name, black = %players[1].name, "session started");

        let mut game_state = GameState::new_game();
        writeln!(out, "{}", render_board(&game_state))?;
        play_turns(&mut game_state, &players, input, out)?;
    }

    writeln!(out, "Bye!")?;
    out.flush()
}

/// The turn loop: first player (White) starts; an invalid request re-prompts
/// the same side; a successful move prints the board and hands the turn over
/// unless it ended the game or left the opponent without a legal move.
pub fn play_turns(
    game_state: &mut GameState,
    players: &[Player; 2],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut active = 0usize;
    loop {
        writeln!(out, "{}'s turn:", players[active].name)?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            // End of input behaves like the exit sentinel.
            return Ok(());
        };

        match game_state.execute_move(&players[active], &line) {
            TurnOutcome::Exit => return Ok(()),
            TurnOutcome::Invalid(rejection) => {
                writeln!(out, "{rejection}")?;
            }
            TurnOutcome::Moved(status) => {
                writeln!(out, "{}", render_board(game_state))?;
                match status {
                    GameStatus::Win(color) => {
                        info!(winner = color.title(), "game over");
                        writeln!(out, "{} Wins!", color.title())?;
                        return Ok(());
                    }
                    GameStatus::Ongoing => {
                        active = 1 - active;
                        if !game_state.can_any_pawn_move(players[active].color) {
                            info!("game over in stalemate");
                            writeln!(out, "Stalemate!")?;
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim_end_matches(|c| c == '\r' || c == '\n').to_owned()))
}
