use std::io;

use tracing_subscriber::EnvFilter;

use pawns_chess::cli::console_game::run_console_game;

fn main() -> io::Result<()> {
    // Diagnostics go to stderr so the board output on stdout stays clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_console_game(&mut input, &mut out)
}
