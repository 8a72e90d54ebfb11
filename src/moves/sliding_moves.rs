//! Ray tracing and fixed-offset stepping shared by the piece generators.
//!
//! A ray stops at the first occupied square: an enemy there is a capture and
//! is included, an own piece is not.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub fn trace_rays(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(file_step, rank_step) in directions {
        let mut next = from.offset(file_step, rank_step);
        while let Some(to) = next {
            match board.get(to) {
                None => out.push(to),
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            next = to.offset(file_step, rank_step);
        }
    }
}

/// Single jumps (knight, king): on-board targets that are empty or enemy-held.
pub fn step_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_file, d_rank) in offsets {
        let Some(to) = from.offset(d_file, d_rank) else {
            continue;
        };
        match board.get(to) {
            Some(occupant) if occupant.color == color => {}
            _ => out.push(to),
        }
    }
}
