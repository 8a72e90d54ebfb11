//! Canonical chess-rule constants.
//!
//! Board geometry facts that several modules need: the back-rank layout,
//! where pawns start and promote, and which kinds a pawn may become.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kinds a pawn may be promoted to.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub const KINGSIDE_ROOK_FILE: u8 = 7;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;

#[inline]
pub const fn home_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// The farthest rank from `color`'s side of the board.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    home_rank(color.opposite())
}

#[inline]
pub fn is_promotion_kind(kind: PieceKind) -> bool {
    PROMOTION_KINDS.contains(&kind)
}
