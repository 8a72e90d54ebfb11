//! Rook moves along ranks and files.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding_moves::trace_rays;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    trace_rays(board, from, color, &ROOK_DIRECTIONS, out);
}
