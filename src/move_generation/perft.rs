//! Leaf-node counting over the public move API.
//!
//! Every legal move is applied and undone on a private copy of the game, so
//! perft exercises generation, application, terminal detection and undo
//! together. Promotions are expanded into the four allowed kinds.

use std::thread;

use crate::errors::ChessResult;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::{GameState, GameStatus, MoveOutcome};
use crate::game_state::promotion::FixedPromotion;
use crate::game_state::undo_state::SpecialMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, outcome: &MoveOutcome) {
        self.nodes += 1;
        if outcome.captured.is_some() {
            self.captures += 1;
        }
        match outcome.special {
            SpecialMove::EnPassant => self.en_passant += 1,
            SpecialMove::Castling => self.castles += 1,
            SpecialMove::Promotion => self.promotions += 1,
            SpecialMove::None => {}
        }
        match outcome.status {
            GameStatus::Check(_) => self.checks += 1,
            GameStatus::Checkmate(_) => {
                self.checks += 1;
                self.checkmates += 1;
            }
            GameStatus::InProgress | GameStatus::Stalemate => {}
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut game = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(&mut game, depth, &mut total)?;
    Ok(total)
}

/// Same counts as `perft`, with one worker thread per root move. Each worker
/// owns its own copy of the game.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let root_moves = expand_promotions(game_state, game_state.all_legal_moves());
    let results: Vec<ChessResult<PerftCounts>> = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|(from, to, kind)| {
                scope.spawn(move || -> ChessResult<PerftCounts> {
                    let mut game = game_state.clone();
                    let mut local = PerftCounts::default();
                    game.apply_move(from, to, &mut FixedPromotion(kind))?;
                    perft_recurse(&mut game, depth - 1, &mut local)?;
                    Ok(local)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut total = PerftCounts::default();
    for result in results {
        total.merge(result?);
    }
    Ok(total)
}

fn perft_recurse(game: &mut GameState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    let moves = expand_promotions(game, game.all_legal_moves());
    for (from, to, kind) in moves {
        let outcome = game.apply_move(from, to, &mut FixedPromotion(kind))?;
        if depth == 1 {
            counts.record_leaf(&outcome);
        } else {
            perft_recurse(game, depth - 1, counts)?;
        }
        game.undo()?;
    }
    Ok(())
}

/// One entry per move, four per promoting pawn move.
fn expand_promotions(game: &GameState, moves: Vec<(Square, Square)>) -> Vec<(Square, Square, PieceKind)> {
    let mut out = Vec::with_capacity(moves.len());
    for (from, to) in moves {
        if game.is_promotion_move(from, to) {
            out.extend(PROMOTION_KINDS.iter().map(|&kind| (from, to, kind)));
        } else {
            out.push((from, to, PieceKind::Queen));
        }
    }
    out
}
