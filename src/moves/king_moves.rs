//! King steps, plus castling candidates for an unmoved king.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::castling::generate_castling_moves;
use crate::moves::sliding_moves::step_targets;

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Adjacent squares plus castling candidates for an unmoved king.
pub fn generate_king_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Square>) {
    generate_king_steps(board, from, king, out);
    if !king.has_moved {
        generate_castling_moves(board, from, king.color, out);
    }
}

pub fn generate_king_steps(board: &Board, from: Square, king: Piece, out: &mut Vec<Square>) {
    step_targets(board, from, king.color, &KING_STEPS, out);
}
