//! Crate root module declarations for the Plum chess rules engine.
//!
//! Exposes the game state machine, per-piece move patterns, legal move
//! generation, coordinate and rendering helpers, and the terminal front end
//! so the binary, tests and benches share stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    #[allow(clippy::module_inception)]
    pub mod game_state;
    pub mod promotion;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod castling;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}

pub mod terminal {
    pub mod terminal_top;
}
