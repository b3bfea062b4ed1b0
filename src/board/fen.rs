use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Only the placement, side-to-move and castling fields are read; en
    /// passant and the move clocks are ignored. A side holding no castling
    /// right is treated as having moved its king.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Self::parse_fen(fen).map(|(board, _)| board)
    }

    /// Like [`Board::try_from_fen`], also returning the side to move.
    pub fn parse_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();

        // FEN lists rank 8 first, which is row 0
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank {
                rank: ranks.len().min(8),
            });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::BadFileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square(row, col), color, piece);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.castling_rights = rights;
        for color in Color::BOTH {
            board.king_moved[color.index()] = !rights.has_any(color);
        }

        Ok((board, side))
    }

    /// Convert the position to FEN with `side` to move.
    ///
    /// En passant is always `-` and the clocks are `0 1`.
    #[must_use]
    pub fn to_fen(&self, side: Color) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match side {
            Color::White => "w",
            Color::Black => "b",
        };
        let rights = self.castling_rights;
        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        format!("{} {active} {castling} - 0 1", rows.join("/"))
    }
}
