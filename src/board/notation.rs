//! Coordinate move notation: two square tokens such as `e2 e4`.
//!
//! Files `a`..`h` are columns 0..7 and ranks `8`..`1` are rows 0..7.

use super::error::MoveParseError;
use super::Square;

/// Parse a pair of square tokens.
pub fn parse_move_tokens(from: &str, to: &str) -> Result<(Square, Square), MoveParseError> {
    Ok((from.trim().parse()?, to.trim().parse()?))
}

/// Parse a line holding exactly two whitespace-separated square tokens.
///
/// # Examples
///
/// ```
/// use minimax_chess::board::{parse_move_line, Square};
///
/// assert_eq!(parse_move_line("e2 e4"), Ok((Square(6, 4), Square(4, 4))));
/// assert!(parse_move_line("e2e4").is_err());
/// ```
pub fn parse_move_line(line: &str) -> Result<(Square, Square), MoveParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [from, to] => parse_move_tokens(from, to),
        _ => Err(MoveParseError::WrongTokenCount {
            found: tokens.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareError;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            parse_move_tokens("g1", "f3"),
            Ok((Square(7, 6), Square(5, 5)))
        );
        assert_eq!(
            parse_move_tokens("a8", " h1 "),
            Ok((Square(0, 0), Square(7, 7)))
        );
    }

    #[test]
    fn test_rejects_bad_square() {
        assert_eq!(
            parse_move_tokens("i2", "e4"),
            Err(MoveParseError::InvalidSquare(SquareError::InvalidNotation {
                notation: "i2".to_string()
            }))
        );
        assert!(parse_move_tokens("e0", "e4").is_err());
        assert!(parse_move_tokens("e9", "e4").is_err());
        assert!(parse_move_tokens("E2", "e4").is_err());
    }

    #[test]
    fn test_line_token_count() {
        assert_eq!(
            parse_move_line(""),
            Err(MoveParseError::WrongTokenCount { found: 0 })
        );
        assert_eq!(
            parse_move_line("e2"),
            Err(MoveParseError::WrongTokenCount { found: 1 })
        );
        assert_eq!(
            parse_move_line("e2 e4 e5"),
            Err(MoveParseError::WrongTokenCount { found: 3 })
        );
        assert_eq!(
            parse_move_line("  e7   e5\n"),
            Ok((Square(1, 4), Square(3, 4)))
        );
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let mv = crate::board::Move::normal(Square(6, 4), Square(4, 4));
        assert_eq!(parse_move_line(&mv.to_string()), Ok((mv.from(), mv.to())));
    }
}
