//! Attack and check detection.
//!
//! Attacks are found by scanning every enemy piece and enumerating its attack
//! targets on the given board. There are no incremental attack maps; the board
//! is small enough that a full scan per query is fine.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::move_generation::move_generator::attack_targets;

/// True iff some piece of `defender`'s opponent attacks `square`.
pub fn square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    board.pieces_of(defender.opposite()).any(|(from, piece)| {
        targets.clear();
        attack_targets(board, from, piece, &mut targets);
        targets.contains(&square)
    })
}

/// Enemy pieces attacking `square`, in board order.
pub fn attackers_to_square(board: &Board, square: Square, defender: Color) -> Vec<(Square, Piece)> {
    let mut targets = Vec::with_capacity(28);
    board
        .pieces_of(defender.opposite())
        .filter(|&(from, piece)| {
            targets.clear();
            attack_targets(board, from, piece, &mut targets);
            targets.contains(&square)
        })
        .collect()
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// A color without a king on the board is never in check.
pub fn king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    square_attacked(board, king_sq, color)
}
