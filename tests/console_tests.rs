//! Console shell driven through in-memory input and output.

use std::io::Cursor;

use minimax_chess::board::{Board, Color};
use minimax_chess::console::{run_console_game, ConsoleConfig, GameOutcome};

fn config(human: Option<Color>, depth: u32, fen: Option<&str>) -> ConsoleConfig {
    ConsoleConfig {
        depth,
        human_side: human,
        start: fen.map(|f| Board::parse_fen(f).unwrap()),
    }
}

fn run(input: &str, config: &ConsoleConfig) -> (GameOutcome, String) {
    let mut output = Vec::new();
    let outcome = run_console_game(Cursor::new(input.to_string()), &mut output, config).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn bot_delivers_mate() {
    let config = config(
        Some(Color::Black),
        2,
        Some("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1"),
    );
    let (outcome, text) = run("", &config);
    assert_eq!(
        outcome,
        GameOutcome::Checkmate {
            winner: Color::White
        }
    );
    assert!(text.contains("You play Black"));
    assert!(text.contains("Bot move: e1 e8"));
    assert!(text.contains("White wins!"));
}

#[test]
fn human_delivers_mate() {
    let config = config(
        Some(Color::White),
        1,
        Some("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1"),
    );
    let (outcome, text) = run("e1 e8\n", &config);
    assert_eq!(
        outcome,
        GameOutcome::Checkmate {
            winner: Color::White
        }
    );
    assert!(!text.contains("Bot move"));
}

#[test]
fn stalemate_ends_game() {
    let config = config(
        Some(Color::Black),
        1,
        Some("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"),
    );
    let (outcome, text) = run("", &config);
    assert_eq!(outcome, GameOutcome::Stalemate);
    assert!(text.contains("Stalemate! Draw."));
}

#[test]
fn bad_input_reprompts() {
    let config = config(Some(Color::White), 1, None);
    let (outcome, text) = run("e2 e5\ne9 e4\ne2\ne7 e5\ne2 e4\n", &config);
    assert_eq!(outcome, GameOutcome::InputClosed);

    assert_eq!(text.matches("Illegal move!").count(), 2);
    assert_eq!(text.matches("Invalid input").count(), 2);
    assert_eq!(text.matches("Bot move:").count(), 1);
    // board printed before every prompt
    assert_eq!(text.matches("Your move: ").count(), 6);
}

#[test]
fn side_prompt_accepts_after_retry() {
    let config = config(None, 1, None);
    let (outcome, text) = run("x\nW\n", &config);
    assert_eq!(outcome, GameOutcome::InputClosed);
    assert!(text.contains("Invalid choice"));
    assert!(text.contains("You play White"));
}

#[test]
fn closed_input_before_side_choice() {
    let (outcome, _) = run("", &config(None, 1, None));
    assert_eq!(outcome, GameOutcome::InputClosed);
}
