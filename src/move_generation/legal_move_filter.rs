//! Self-check filtering by simulation on a board copy.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::legal_move_checks::king_in_check;
use crate::moves::pawn_moves::en_passant_capture_victim;

/// Copy of `board` with the single move `from -> to` played mechanically.
///
/// Only the moving piece (and an en-passant victim) is touched; a castling
/// rook stays where it is.
pub fn simulate_move(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> Board {
    let mut copy = *board;
    let victim = board
        .get(from)
        .filter(|p| p.kind == PieceKind::Pawn)
        .and_then(|pawn| en_passant_capture_victim(board, from, to, pawn.color, en_passant_target));
    copy.relocate(from, to);
    if let Some(victim) = victim {
        copy.set(victim, None);
    }
    copy
}

/// True when playing `from -> to` would leave the mover's king attacked.
pub fn move_leaves_king_in_check(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> bool {
    // Nothing moves from an empty square, so no king can be exposed.
    let Some(mover) = board.get(from) else {
        return false;
    };
    let after = simulate_move(board, from, to, en_passant_target);
    king_in_check(&after, mover.color)
}
