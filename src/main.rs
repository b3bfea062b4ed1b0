use std::io;
use std::process::ExitCode;

use minimax_chess::console::{run_console_game, ConsoleConfig};

fn main() -> ExitCode {
    env_logger::init();

    let config = match ConsoleConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: minimax_chess [--depth N] [--side w|b] [--fen FEN]");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    match run_console_game(stdin.lock(), io::stdout(), &config) {
        Ok(outcome) => {
            log::debug!("console game ended: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
