//! Text board renderer.
//!
//! Pure function from a position to the bordered ASCII grid the console
//! shows after every successful move: ranks 8 down to 1, `W`/`B`/blank
//! cells, and a file-label footer. No rules knowledge, no mutation.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;

const BORDER_ROW: &str = "  +---+---+---+---+---+---+---+---+";
const FILE_LABEL_ROW: &str = "    a   b   c   d   e   f   g   h";

/// Render the position to a String, without a trailing newline.
pub fn render_board(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        out.push_str(BORDER_ROW);
        out.push('\n');

        out.push(char::from(b'1' + rank));
        out.push_str(" |");
        for file in 0..8 {
            let square = Square { file, rank };
            out.push(' ');
            out.push(game_state.symbol_at(square).unwrap_or(' '));
            out.push_str(" |");
        }
        out.push('\n');
    }

    out.push_str(BORDER_ROW);
    out.push('\n');
    out.push_str(FILE_LABEL_ROW);

    out
}
