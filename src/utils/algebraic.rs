//! Square conversions for coordinate text.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values for the terminal front end and for tests.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};

/// Convert coordinate text (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidCoordinate(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidCoordinate(square.to_owned()));
    }

    // Rank 8 is row 0 of the board.
    Square::new(file - b'a', b'8' - rank).ok_or_else(|| ChessError::InvalidCoordinate(square.to_owned()))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parse a long-algebraic move such as `e2e4` or `e7e8q`.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidCoordinate(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(letter) => Some(
            PieceKind::from_letter(letter).ok_or_else(|| ChessError::InvalidCoordinate(text.to_owned()))?,
        ),
        None => None,
    };
    Ok((from, to, promotion))
}
