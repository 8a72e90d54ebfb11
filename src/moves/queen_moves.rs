//! Queen moves: rook and bishop rays combined.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding_moves::trace_rays;

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    trace_rays(board, from, color, &ROOK_DIRECTIONS, out);
    trace_rays(board, from, color, &BISHOP_DIRECTIONS, out);
}
