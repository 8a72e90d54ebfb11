//! Promotion-choice port.
//!
//! When a pawn reaches the farthest rank the game state asks its caller which
//! kind to promote to. The call is synchronous and happens while the game is
//! mutably borrowed, so nothing else can touch the game until it returns.

use crate::game_state::chess_types::{Color, PieceKind};

pub trait PromotionChooser {
    /// Must answer Queen, Rook, Bishop or Knight; any other kind makes the
    /// move fail with `ChessError::InvalidPromotionChoice`.
    fn request_promotion_choice(&mut self, color: Color) -> PieceKind;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color) -> PieceKind,
{
    fn request_promotion_choice(&mut self, color: Color) -> PieceKind {
        self(color)
    }
}

/// Chooser that always answers with the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPromotion(pub PieceKind);

impl PromotionChooser for FixedPromotion {
    fn request_promotion_choice(&mut self, _color: Color) -> PieceKind {
        self.0
    }
}
