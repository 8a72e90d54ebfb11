//! Pawn pushes, captures and en-passant candidates.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::{Color, PieceKind, Square};

const CAPTURE_FILES: [i8; 2] = [-1, 1];

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(0, dir) {
        if board.is_empty(one_step) {
            out.push(one_step);
            if from.rank() == pawn_start_rank(color) {
                if let Some(two_step) = from.offset(0, 2 * dir) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_file in CAPTURE_FILES {
        let Some(to) = from.offset(d_file, dir) else {
            continue;
        };
        match board.get(to) {
            Some(target) if target.color != color => out.push(to),
            Some(_) => {}
            None if en_passant_capture_victim(board, from, to, color, en_passant_target).is_some() => {
                out.push(to)
            }
            None => {}
        }
    }
}

/// Squares a pawn of `color` on `from` attacks, occupied or not.
pub fn pawn_attacks(from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();
    out.extend(
        CAPTURE_FILES
            .iter()
            .filter_map(|&d_file| from.offset(d_file, dir)),
    );
}

/// Square of the pawn removed by an en-passant capture from `from` to `to`.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Option<Square> {
    Square::new(to.file(), from.rank())
}

/// Square of the enemy pawn taken when a `color` pawn plays `from -> to`, if
/// the move is an en-passant capture: a diagonal step onto the target square
/// with an enemy pawn beside the mover.
pub fn en_passant_capture_victim(
    board: &Board,
    from: Square,
    to: Square,
    color: Color,
    en_passant_target: Option<Square>,
) -> Option<Square> {
    if en_passant_target != Some(to) || from.file() == to.file() {
        return None;
    }
    en_passant_victim_square(from, to).filter(|&sq| {
        board
            .get(sq)
            .is_some_and(|victim| victim.is(PieceKind::Pawn, color.opposite()))
    })
}
