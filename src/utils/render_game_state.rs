//! Terminal-oriented board renderer.
//!
//! Draws the board from White's side (rank 8 at the top) with optional
//! markers for a selected square, its highlighted destinations and a king
//! that is in check.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::{GameState, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    pub coordinates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            coordinates: true,
        }
    }
}

/// Render the board to a string for terminal output.
///
/// Each square is two characters wide: a marker (`[` selected, `*` legal
/// destination, `!` king in check, space otherwise) and the piece or a dot.
pub fn render_game_state(
    game_state: &GameState,
    selected: Option<Square>,
    highlighted: &[Square],
    options: RenderOptions,
) -> String {
    let checked_kings: Vec<Square> = [Color::White, Color::Black]
        .into_iter()
        .filter(|&color| game_state.is_in_check(color))
        .filter_map(|color| game_state.king_square(color))
        .collect();

    let mut out = String::new();
    if options.coordinates {
        out.push_str("   a b c d e f g h\n");
    }

    for rank in 0..8u8 {
        let rank_label = char::from(b'8' - rank);
        if options.coordinates {
            out.push(rank_label);
            out.push(' ');
        }

        for file in 0..8u8 {
            let Some(sq) = Square::new(file, rank) else {
                continue;
            };
            let marker = if selected == Some(sq) {
                '['
            } else if highlighted.contains(&sq) {
                '*'
            } else if checked_kings.contains(&sq) {
                '!'
            } else {
                ' '
            };
            out.push(marker);
            match game_state.board().get(sq) {
                Some(piece) if options.unicode => out.push(piece.glyph()),
                Some(piece) => out.push(piece.ascii()),
                None => out.push('·'),
            }
        }

        if options.coordinates {
            out.push(' ');
            out.push(rank_label);
        }
        out.push('\n');
    }

    if options.coordinates {
        out.push_str("   a b c d e f g h");
    }
    out
}

/// One-line status in the style "Turn: White (Check!)".
pub fn status_line(game_state: &GameState) -> String {
    match game_state.game_status() {
        GameStatus::Checkmate(loser) => format!("Game Over! {loser} lost."),
        GameStatus::Stalemate => "Stalemate! Draw.".to_owned(),
        GameStatus::Check(color) => format!("Turn: {color} (Check!)"),
        GameStatus::InProgress => format!("Turn: {}", game_state.turn()),
    }
}

/// Captured pieces grouped by the side that took them.
pub fn captured_line(game_state: &GameState, color: Color, options: RenderOptions) -> String {
    let pieces: String = game_state
        .captured_by(color)
        .into_iter()
        .map(|piece| if options.unicode { piece.glyph() } else { piece.ascii() })
        .collect();
    format!("{color}: {pieces}")
}
