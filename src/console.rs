//! Text console: a human plays one side, the engine the other.
//!
//! Input is line based. Moves are two squares such as `e2 e4`; a malformed
//! or illegal move is reported and the human is asked again.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::info;

use crate::board::{
    parse_move_line, Board, Color, FenError, GameStatus, SearchParams, DEFAULT_DEPTH,
};
use crate::engine::EngineController;

/// Console settings, usually filled from command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Engine search depth in plies
    pub depth: u32,
    /// Side the human plays; prompt for it when `None`
    pub human_side: Option<Color>,
    /// Starting position and side to move; the standard setup when `None`
    pub start: Option<(Board, Color)>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            depth: DEFAULT_DEPTH,
            human_side: None,
            start: None,
        }
    }
}

/// Error for malformed command-line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// A flag was given without its value
    MissingValue { flag: String },
    /// `--depth` value is not a non-negative integer
    InvalidDepth { value: String },
    /// `--side` value is not `w` or `b`
    InvalidSide { value: String },
    /// `--fen` value does not parse
    InvalidFen(FenError),
    /// Unrecognised argument
    UnknownArgument { arg: String },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::MissingValue { flag } => write!(f, "Missing value for {flag}"),
            ArgError::InvalidDepth { value } => write!(f, "Invalid depth '{value}'"),
            ArgError::InvalidSide { value } => {
                write!(f, "Invalid side '{value}', expected 'w' or 'b'")
            }
            ArgError::InvalidFen(e) => write!(f, "Invalid --fen: {e}"),
            ArgError::UnknownArgument { arg } => write!(f, "Unknown argument '{arg}'"),
        }
    }
}

impl std::error::Error for ArgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgError::InvalidFen(e) => Some(e),
            _ => None,
        }
    }
}

fn parse_side(text: &str) -> Option<Color> {
    match text.trim().to_ascii_lowercase().as_str() {
        "w" | "white" => Some(Color::White),
        "b" | "black" => Some(Color::Black),
        _ => None,
    }
}

impl ConsoleConfig {
    /// Parse `--depth N`, `--side w|b` and `--fen FEN` (program name
    /// already stripped). The FEN must be a single argument.
    pub fn from_args<I>(args: I) -> Result<Self, ArgError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = ConsoleConfig::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next().ok_or_else(|| ArgError::MissingValue {
                    flag: flag.to_string(),
                })
            };
            match arg.as_str() {
                "--depth" | "-d" => {
                    let text = value(&arg)?;
                    config.depth = text
                        .parse()
                        .map_err(|_| ArgError::InvalidDepth { value: text })?;
                }
                "--side" | "-s" => {
                    let text = value(&arg)?;
                    config.human_side =
                        Some(parse_side(&text).ok_or(ArgError::InvalidSide { value: text })?);
                }
                "--fen" => {
                    let text = value(&arg)?;
                    config.start = Some(Board::parse_fen(&text).map_err(ArgError::InvalidFen)?);
                }
                _ => return Err(ArgError::UnknownArgument { arg }),
            }
        }
        Ok(config)
    }
}

/// How a console game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    /// Input ran out before the game finished
    InputClosed,
}

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn choose_side<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<Color>> {
    write!(output, "Choose your side (w - White, b - Black): ")?;
    output.flush()?;
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if let Some(side) = parse_side(&line) {
            return Ok(Some(side));
        }
        write!(output, "Invalid choice. Enter w for White or b for Black: ")?;
        output.flush()?;
    }
}

/// Play one game between a human on `input` and the engine.
pub fn run_console_game<R, W>(
    mut input: R,
    mut output: W,
    config: &ConsoleConfig,
) -> io::Result<GameOutcome>
where
    R: BufRead,
    W: Write,
{
    let human = match config.human_side {
        Some(side) => side,
        None => match choose_side(&mut input, &mut output)? {
            Some(side) => side,
            None => return Ok(GameOutcome::InputClosed),
        },
    };
    writeln!(output, "You play {human}\n")?;
    info!("console game started: human {human}, depth {}", config.depth);

    let mut engine = EngineController::new(SearchParams {
        depth: config.depth,
        ..SearchParams::default()
    });
    if let Some((board, side)) = &config.start {
        engine.set_position(board.clone(), *side);
    }

    loop {
        write!(output, "{}", engine.board())?;

        match engine.status() {
            GameStatus::Checkmate { loser } => {
                let winner = loser.opponent();
                writeln!(output, "{winner} wins!")?;
                info!("game over: {winner} wins by checkmate");
                return Ok(GameOutcome::Checkmate { winner });
            }
            GameStatus::Stalemate => {
                writeln!(output, "Stalemate! Draw.")?;
                info!("game over: stalemate");
                return Ok(GameOutcome::Stalemate);
            }
            GameStatus::Ongoing => {}
        }

        if engine.side_to_move() == human {
            write!(output, "Your move: ")?;
            output.flush()?;
            let Some(line) = read_line(&mut input)? else {
                writeln!(output)?;
                return Ok(GameOutcome::InputClosed);
            };
            let (from, to) = match parse_move_line(&line) {
                Ok(squares) => squares,
                Err(e) => {
                    writeln!(output, "Invalid input: {e}. Try again.")?;
                    continue;
                }
            };
            if let Err(e) = engine.play(from, to) {
                writeln!(output, "Illegal move! {e}. Try again.")?;
            }
        } else if let Some(mv) = engine.think_and_play()? {
            writeln!(output, "Bot move: {mv}")?;
        }
    }
}
