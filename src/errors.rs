//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by the game state machine
//! and by the coordinate helpers at the front-end boundary. Every variant is
//! recoverable: a rejected operation never changes the board, the turn, the
//! history or the captured list.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

/// Why a requested move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// No piece stands on the source square.
    EmptySquare,
    /// The piece on the source square belongs to the side not on move.
    WrongTurn,
    /// The destination is not among the piece's legal destinations.
    NotALegalDestination,
    /// Checkmate or stalemate was reached; only `undo` or `reset` may follow.
    GameOver,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalMoveReason::EmptySquare => "no piece on source square",
            IllegalMoveReason::WrongTurn => "piece does not belong to the side to move",
            IllegalMoveReason::NotALegalDestination => "destination is not a legal move",
            IllegalMoveReason::GameOver => "the game is over",
        };
        f.write_str(text)
    }
}

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The move was rejected; the position is unchanged.
    #[error("illegal move {from}{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalMoveReason,
    },

    /// The promotion collaborator answered with a kind a pawn cannot become.
    #[error("invalid promotion choice: {0:?}")]
    InvalidPromotionChoice(PieceKind),

    /// `undo` was called with no recorded moves.
    #[error("no moves to undo")]
    EmptyHistory,

    /// Coordinate text that does not name a board square.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
