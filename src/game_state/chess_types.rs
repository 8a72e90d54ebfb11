//! Value types shared by every layer of the rules engine.
//!
//! Squares are addressed by `(file, rank)` with file 0 = the a-file and rank 0
//! = Black's back rank (the top row of a screen). White pawns therefore move
//! toward rank 0 and Black pawns toward rank 7.

use std::fmt;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a single pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Closed set of piece kinds; move generation matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used in coordinate notation (`P` for pawns).
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a piece letter in either case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece on the board. Equality is by value, including the moved flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    pub const fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }

    /// ASCII letter, upper-case for White and lower-case for Black.
    pub fn ascii(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A bounds-checked board coordinate.
///
/// Both axes are always in `0..8`; every constructor that could leave the
/// board returns `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// The square `(d_file, d_rank)` away, if it is still on the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, rank by rank from rank 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = char::from(b'a' + self.file);
        let rank_char = char::from(b'8' - self.rank);
        write!(f, "{file_char}{rank_char}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_rejects_coordinates_off_the_board() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        let a8 = Square::new(0, 0).expect("a8 is on the board");
        assert!(a8.offset(-1, 0).is_none());
        assert!(a8.offset(0, -1).is_none());
        assert_eq!(a8.offset(7, 7), Square::new(7, 7));
    }

    #[test]
    fn square_displays_screen_rank_zero_as_eighth_rank() {
        assert_eq!(Square::new(0, 0).expect("a8").to_string(), "a8");
        assert_eq!(Square::new(4, 6).expect("e2").to_string(), "e2");
        assert_eq!(Square::new(7, 7).expect("h1").to_string(), "h1");
    }

    #[test]
    fn all_squares_yields_sixty_four_distinct_squares() {
        let squares: std::collections::HashSet<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
    }

    #[test]
    fn piece_glyphs_follow_color() {
        assert_eq!(Piece::new(PieceKind::King, Color::White).glyph(), '♔');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).to_string(), "♟");
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).ascii(), 'n');
    }

    #[test]
    fn moved_flag_participates_in_equality() {
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert_ne!(rook, rook.moved());
        assert!(rook.moved().is(PieceKind::Rook, Color::White));
    }
}
