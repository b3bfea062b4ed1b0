//! Error types for chess board operations.

use std::fmt;

use super::{Color, Square};

/// Why a move could not be applied to a board.
///
/// A board that returned one of these is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A square of the move lies off the board
    OutOfBounds,
    /// There is no piece on the source square
    EmptySquare { square: Square },
    /// The source piece belongs to the other side
    WrongSide { square: Square, expected: Color },
    /// The move would leave the mover's own king attacked
    LeavesKingInCheck,
    /// A castling move whose eligibility check failed
    IllegalCastle { kingside: bool },
    /// The move is not in the side's legal move list
    NotLegal { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "Move leaves the board"),
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::WrongSide { square, expected } => {
                write!(f, "Piece on {square} does not belong to {expected}")
            }
            MoveError::LeavesKingInCheck => {
                write!(f, "Move would leave the king in check")
            }
            MoveError::IllegalCastle { kingside } => {
                let side = if *kingside { "kingside" } else { "queenside" };
                write!(f, "Castling {side} is not allowed")
            }
            MoveError::NotLegal { from, to } => {
                write!(f, "Illegal move '{from} {to}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Input did not contain exactly two square tokens
    WrongTokenCount { found: usize },
    /// One of the tokens is not a square
    InvalidSquare(SquareError),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::WrongTokenCount { found } => {
                write!(f, "Expected two squares like 'e2 e4', found {found} tokens")
            }
            MoveParseError::InvalidSquare(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::InvalidSquare(e) => Some(e),
            MoveParseError::WrongTokenCount { .. } => None,
        }
    }
}

impl From<SquareError> for MoveParseError {
    fn from(e: SquareError) -> Self {
        MoveParseError::InvalidSquare(e)
    }
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 3)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Wrong number of ranks in position string
    InvalidRank { rank: usize },
    /// Rank does not describe exactly eight files
    BadFileCount { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 3 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::BadFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::EmptySquare {
            square: Square(4, 4),
        };
        assert!(err.to_string().contains("e4"));

        let err = MoveError::IllegalCastle { kingside: false };
        assert!(err.to_string().contains("queenside"));

        let err = MoveError::NotLegal {
            from: Square(6, 4),
            to: Square(3, 4),
        };
        assert!(err.to_string().contains("e2 e5"));
    }

    #[test]
    fn test_square_error_messages() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));

        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_move_parse_error_wraps_square_error() {
        use std::error::Error;

        let err: MoveParseError = SquareError::InvalidNotation {
            notation: "k3".to_string(),
        }
        .into();
        assert!(err.to_string().contains("k3"));
        assert!(err.source().is_some());

        let err = MoveParseError::WrongTokenCount { found: 3 };
        assert!(err.to_string().contains('3'));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_fen_error_messages() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));

        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }
}
