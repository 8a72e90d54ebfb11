//! Authoritative game state and its move/undo state machine.
//!
//! `GameState` owns the board, the side to move, the en-passant window, the
//! captured pieces and the undo history. Queries never mutate it; every
//! what-if question is answered on a copy of the board. `apply_move` either
//! succeeds completely (one history entry pushed, turn flipped once) or fails
//! without touching anything.

use crate::errors::{ChessError, ChessResult, IllegalMoveReason};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{is_promotion_kind, promotion_rank};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::promotion::PromotionChooser;
use crate::game_state::undo_state::{HistoryEntry, MoveRecord, PositionSnapshot, SpecialMove};
use crate::move_generation::castling::castling_rook_squares;
use crate::move_generation::legal_move_checks::{attackers_to_square, king_in_check, king_square};
use crate::move_generation::move_generator::generate_moves;
use crate::moves::pawn_moves::en_passant_capture_victim;

/// Position status from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The given color is in check but has a way out.
    Check(Color),
    /// The given color is checkmated and loses.
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

/// Result of a successfully applied move, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` before moving.
    pub piece: Piece,
    pub special: SpecialMove,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
    /// Status of the side now on move.
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    en_passant_target: Option<Square>,
    history: Vec<HistoryEntry>,
    captured: Vec<Piece>,
    game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            en_passant_target: None,
            history: Vec::new(),
            captured: Vec::new(),
            game_over: false,
        }
    }

    /// Arbitrary position with empty history. Terminal state is evaluated
    /// immediately, so a mated or stalemated side cannot move.
    pub fn from_position(board: Board, turn: Color, en_passant_target: Option<Square>) -> Self {
        let mut game = Self {
            board,
            turn,
            en_passant_target,
            history: Vec::new(),
            captured: Vec::new(),
            game_over: false,
        };
        game.check_game_end();
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Every captured piece in capture order.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// Enemy pieces taken by `color`, in capture order.
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.captured
            .iter()
            .copied()
            .filter(|piece| piece.color != color)
            .collect()
    }

    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.history.iter().map(|entry| &entry.record)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last().map(|entry| &entry.record)
    }

    /// Deep copy of the state that `undo` restores.
    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            board: self.board,
            turn: self.turn,
            en_passant_target: self.en_passant_target,
            captured: self.captured.clone(),
        }
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        king_square(&self.board, color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        king_in_check(&self.board, color)
    }

    /// Squares of the pieces currently giving check to the side to move.
    pub fn checkers(&self) -> Vec<Square> {
        let Some(king_sq) = self.king_square(self.turn) else {
            return Vec::new();
        };
        attackers_to_square(&self.board, king_sq, self.turn)
            .into_iter()
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Legal destinations for the piece on `square`; empty when the square is
    /// empty or holds a piece of the side not on move.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        match self.board.get(square) {
            Some(piece) if piece.color == self.turn => {
                generate_moves(&self.board, square, self.en_passant_target, true)
            }
            _ => Vec::new(),
        }
    }

    /// Legal moves of every piece of `color`, regardless of whose turn it is.
    pub fn legal_moves_for(&self, color: Color) -> Vec<(Square, Square)> {
        self.board
            .pieces_of(color)
            .flat_map(|(from, _)| {
                generate_moves(&self.board, from, self.en_passant_target, true)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// Legal moves of the side to move.
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        self.legal_moves_for(self.turn)
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(from, _)| !generate_moves(&self.board, from, self.en_passant_target, true).is_empty())
    }

    /// True when `from -> to` is a pawn reaching the farthest rank.
    pub fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        self.board
            .get(from)
            .is_some_and(|p| p.kind == PieceKind::Pawn && to.rank() == promotion_rank(p.color))
    }

    /// Apply a legal move for the side to move.
    ///
    /// A pawn reaching the farthest rank asks `chooser` for its new kind
    /// before anything is changed; an answer other than Queen, Rook, Bishop
    /// or Knight rejects the whole move.
    pub fn apply_move<P>(&mut self, from: Square, to: Square, chooser: &mut P) -> ChessResult<MoveOutcome>
    where
        P: PromotionChooser + ?Sized,
    {
        let piece = self.validate_move(from, to)?;

        let promoted_to = if self.is_promotion_move(from, to) {
            let choice = chooser.request_promotion_choice(piece.color);
            if !is_promotion_kind(choice) {
                return Err(ChessError::InvalidPromotionChoice(choice));
            }
            Some(choice)
        } else {
            None
        };

        let before = self.snapshot();
        let mut special = SpecialMove::None;
        let mut captured = None;

        if piece.kind == PieceKind::King {
            if let Some((rook_from, rook_to)) = castling_rook_squares(from, to) {
                special = SpecialMove::Castling;
                let rook = self.board.take(rook_from);
                self.board.set(rook_to, rook.map(Piece::moved));
            }
        }

        if piece.kind == PieceKind::Pawn {
            if let Some(victim_sq) =
                en_passant_capture_victim(&self.board, from, to, piece.color, self.en_passant_target)
            {
                special = SpecialMove::EnPassant;
                captured = self.board.take(victim_sq);
            }
        }

        if let Some(target) = self.board.get(to) {
            if target.color != piece.color {
                captured = Some(target);
            }
        }

        self.board.take(from);
        let landed = match promoted_to {
            Some(kind) => {
                special = SpecialMove::Promotion;
                Piece::new(kind, piece.color)
            }
            None => piece,
        };
        self.board.set(to, Some(landed.moved()));

        self.en_passant_target = if piece.kind == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            Square::new(from.file(), (from.rank() + to.rank()) / 2)
        } else {
            None
        };

        let record = MoveRecord {
            from,
            to,
            special,
            captured,
        };
        self.history.push(HistoryEntry { before, record });
        if let Some(taken) = captured {
            self.captured.push(taken);
        }
        self.turn = self.turn.opposite();

        let status = self.check_game_end();
        Ok(MoveOutcome {
            from,
            to,
            piece,
            special,
            captured,
            promoted_to,
            status,
        })
    }

    /// Restore the position before the most recent move.
    ///
    /// Clears any checkmate/stalemate flag. With no history the state is left
    /// alone and `ChessError::EmptyHistory` is returned.
    pub fn undo(&mut self) -> ChessResult<MoveRecord> {
        let entry = self.history.pop().ok_or(ChessError::EmptyHistory)?;
        let PositionSnapshot {
            board,
            turn,
            en_passant_target,
            captured,
        } = entry.before;
        self.board = board;
        self.turn = turn;
        self.en_passant_target = en_passant_target;
        self.captured = captured;
        self.game_over = false;
        Ok(entry.record)
    }

    /// Back to the starting position with no history.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Evaluate the side to move and latch `game_over` on mate or stalemate.
    pub fn check_game_end(&mut self) -> GameStatus {
        let status = self.game_status();
        self.game_over = status.is_terminal();
        status
    }

    pub fn game_status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.turn);
        let can_move = self.has_legal_moves(self.turn);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate(self.turn),
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check(self.turn),
            (false, true) => GameStatus::InProgress,
        }
    }

    fn validate_move(&self, from: Square, to: Square) -> ChessResult<Piece> {
        let illegal = |reason| ChessError::IllegalMove { from, to, reason };
        if self.game_over {
            return Err(illegal(IllegalMoveReason::GameOver));
        }
        let piece = self
            .board
            .get(from)
            .ok_or_else(|| illegal(IllegalMoveReason::EmptySquare))?;
        if piece.color != self.turn {
            return Err(illegal(IllegalMoveReason::WrongTurn));
        }
        if !generate_moves(&self.board, from, self.en_passant_target, true).contains(&to) {
            return Err(illegal(IllegalMoveReason::NotALegalDestination));
        }
        Ok(piece)
    }
}
