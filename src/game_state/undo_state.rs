use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square};

/// Which special rule fired while applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialMove {
    #[default]
    None,
    Castling,
    EnPassant,
    Promotion,
}

/// Everything needed to restore the position that existed before a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub board: Board,
    pub turn: Color,
    pub en_passant_target: Option<Square>,
    pub captured: Vec<Piece>,
}

/// What happened on the board, kept for display and move lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub special: SpecialMove,
    pub captured: Option<Piece>,
}

/// Single undo record pushed by `apply_move` and popped by `undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub before: PositionSnapshot,
    pub record: MoveRecord,
}
