//! 8x8 mailbox board.
//!
//! `Board` is plain storage: a grid of optional pieces with value semantics.
//! It is `Copy`, so every clone taken for a what-if simulation is a fully
//! independent position.

use crate::game_state::chess_rules::{home_rank, pawn_start_rank, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    // [rank][file]
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting position with every piece unmoved.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for file in 0..8u8 {
                if let Some(sq) = Square::new(file, home_rank(color)) {
                    board.set(sq, Some(Piece::new(BACK_RANK_LAYOUT[file as usize], color)));
                }
                if let Some(sq) = Square::new(file, pawn_start_rank(color)) {
                    board.set(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Move whatever stands on `from` to `to`, replacing any occupant.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.take(from);
        self.set(to, piece);
    }

    /// Every occupied square with its piece, rank by rank.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// First square holding `color`'s king, if any.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    #[test]
    fn starting_position_has_thirty_two_unmoved_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.occupied().count(), 32);
        assert!(board.occupied().all(|(_, piece)| !piece.has_moved));
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(
            board.get(sq(4, 7)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.get(sq(3, 0)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn clone_shares_no_state_with_original() {
        let original = Board::starting_position();
        let mut copy = original;
        copy.relocate(sq(4, 6), sq(4, 4));
        assert!(original.get(sq(4, 6)).is_some());
        assert!(original.is_empty(sq(4, 4)));
        assert!(copy.is_empty(sq(4, 6)));
    }

    #[test]
    fn find_king_reports_absent_king() {
        let mut board = Board::empty();
        assert_eq!(board.find_king(Color::Black), None);
        board.set(sq(2, 3), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(board.find_king(Color::Black), Some(sq(2, 3)));
        assert_eq!(board.find_king(Color::White), None);
    }
}
