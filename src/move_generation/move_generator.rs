//! Per-square move generation entry point.
//!
//! `generate_moves` dispatches on the piece kind with an exhaustive match and
//! optionally runs every candidate through the legality filter. The attack
//! oracle uses `attack_targets`, which never includes pawn pushes or castling
//! and never filters, so attack detection cannot recurse back into itself.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::move_generation::legal_move_filter::move_leaves_king_in_check;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::{generate_king_moves, generate_king_steps};
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::{generate_pawn_moves, pawn_attacks};
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Destinations reachable by the piece on `from`.
///
/// Returns an empty list for an empty square. With `filter_for_check` every
/// destination that would leave the mover's own king attacked is dropped.
pub fn generate_moves(
    board: &Board,
    from: Square,
    en_passant_target: Option<Square>,
    filter_for_check: bool,
) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, en_passant_target, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => generate_king_moves(board, from, piece, &mut out),
    }

    if filter_for_check {
        out.retain(|&to| !move_leaves_king_in_check(board, from, to, en_passant_target));
    }
    out
}

/// Squares the piece on `from` attacks.
pub fn attack_targets(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, out),
        PieceKind::King => generate_king_steps(board, from, piece, out),
    }
}
