//! Castling eligibility.
//!
//! A king may castle toward a side when an unmoved rook of its color stands on
//! that corner of the king's rank, every square strictly between them is
//! empty, and none of the king's start, transit and destination squares is
//! attacked. The attack test runs on a snapshot copy of the board.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::legal_move_checks::square_attacked;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }

    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_FILE,
            CastleSide::Queenside => QUEENSIDE_ROOK_FILE,
        }
    }

    /// Side of a king move that travels two files, if it does.
    pub fn of_king_move(from: Square, to: Square) -> Option<Self> {
        if from.rank() != to.rank() {
            return None;
        }
        match to.file() as i8 - from.file() as i8 {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Rook origin and destination for a castling king move `king_from -> king_to`.
pub fn castling_rook_squares(king_from: Square, king_to: Square) -> Option<(Square, Square)> {
    let side = CastleSide::of_king_move(king_from, king_to)?;
    let rook_from = Square::new(side.rook_file(), king_from.rank())?;
    let rook_to = king_to.offset(-side.direction(), 0)?;
    Some((rook_from, rook_to))
}

pub fn generate_castling_moves(board: &Board, king_from: Square, color: Color, out: &mut Vec<Square>) {
    for side in CastleSide::BOTH {
        if can_castle(board, king_from, color, side) {
            if let Some(to) = king_from.offset(2 * side.direction(), 0) {
                out.push(to);
            }
        }
    }
}

pub fn can_castle(board: &Board, king_from: Square, color: Color, side: CastleSide) -> bool {
    let Some(rook_sq) = Square::new(side.rook_file(), king_from.rank()) else {
        return false;
    };
    if rook_sq == king_from {
        return false;
    }
    let rook_ready = board
        .get(rook_sq)
        .is_some_and(|rook| rook.is(PieceKind::Rook, color) && !rook.has_moved);
    if !rook_ready {
        return false;
    }

    let dir = side.direction();
    // King destination lies strictly between the king and the rook.
    match king_from.offset(2 * dir, 0) {
        Some(king_to) if king_to != rook_sq => {}
        _ => return false,
    }

    let mut between = king_from.offset(dir, 0);
    while let Some(sq) = between {
        if sq == rook_sq {
            break;
        }
        if !board.is_empty(sq) {
            return false;
        }
        between = sq.offset(dir, 0);
    }

    let snapshot = *board;
    for step in 0..=2 {
        match king_from.offset(step * dir, 0) {
            Some(sq) if !square_attacked(&snapshot, sq, color) => {}
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{can_castle, castling_rook_squares, generate_castling_moves, CastleSide};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.set(sq(4, 7), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(sq(0, 7), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(sq(7, 7), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(sq(4, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        board
    }

    #[test]
    fn both_sides_available_with_clear_paths() {
        let board = castling_board();
        assert!(can_castle(&board, sq(4, 7), Color::White, CastleSide::Kingside));
        assert!(can_castle(&board, sq(4, 7), Color::White, CastleSide::Queenside));
    }

    #[test]
    fn occupied_path_blocks_castling() {
        let mut board = castling_board();
        board.set(sq(1, 7), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert!(!can_castle(&board, sq(4, 7), Color::White, CastleSide::Queenside));
        assert!(can_castle(&board, sq(4, 7), Color::White, CastleSide::Kingside));
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        let mut board = castling_board();
        board.set(sq(5, 2), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(!can_castle(&board, sq(4, 7), Color::White, CastleSide::Kingside));
        assert!(can_castle(&board, sq(4, 7), Color::White, CastleSide::Queenside));
    }

    #[test]
    fn moved_rook_blocks_castling() {
        let mut board = castling_board();
        board.set(sq(7, 7), Some(Piece::new(PieceKind::Rook, Color::White).moved()));
        assert!(!can_castle(&board, sq(4, 7), Color::White, CastleSide::Kingside));
    }

    #[test]
    fn rook_squares_follow_the_king() {
        assert_eq!(
            castling_rook_squares(sq(4, 7), sq(6, 7)),
            Some((sq(7, 7), sq(5, 7)))
        );
        assert_eq!(
            castling_rook_squares(sq(4, 0), sq(2, 0)),
            Some((sq(0, 0), sq(3, 0)))
        );
        assert_eq!(castling_rook_squares(sq(4, 7), sq(5, 7)), None);
    }

    #[test]
    fn king_beside_the_corner_cannot_castle_onto_its_rook() {
        let mut board = Board::empty();
        board.set(sq(5, 7), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(sq(7, 7), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(sq(4, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        assert!(!can_castle(&board, sq(5, 7), Color::White, CastleSide::Kingside));

        let mut out = Vec::new();
        generate_castling_moves(&board, sq(5, 7), Color::White, &mut out);
        assert!(out.is_empty());
    }
}
