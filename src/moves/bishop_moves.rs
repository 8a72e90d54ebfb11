//! Bishop moves along the four diagonals.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding_moves::trace_rays;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    trace_rays(board, from, color, &BISHOP_DIRECTIONS, out);
}
