//! Line-oriented terminal front end and command loop.
//!
//! Reads one command per line, drives the game state through its public API
//! and writes boards, move reports and status lines. Rejected commands are
//! reported as `info string <context> error: <message>` lines.

use std::io::{self, BufRead, Write};

use crate::errors::ChessError;
use crate::game_state::chess_rules::is_promotion_kind;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::{GameState, MoveOutcome};
use crate::game_state::promotion::PromotionChooser;
use crate::game_state::undo_state::SpecialMove;
use crate::utils::algebraic::{algebraic_to_square, parse_long_algebraic};
use crate::utils::render_game_state::{captured_line, render_game_state, status_line, RenderOptions};

const HELP_TEXT: &str = "\
commands:
  e2e4 | move e2e4   play a move (append q/r/b/n to choose a promotion)
  select e2          pick a piece and show its legal destinations
  to e4              move the selected piece
  moves e2           list legal destinations
  board              draw the board
  status             show whose turn it is and check/mate/stalemate
  captured           list captured pieces
  history            list the moves played
  undo | reset       take back one move / start over
  setoption name <Unicode|Coordinates|AutoStatus> value <true|false>
  debug on|off       extra info string output
  quit";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    run_loop(&mut input, &mut stdout)
}

pub fn run_loop<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    let mut session = TerminalSession::new();
    session.show_board(out)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let should_quit = session.handle_command(&line, input, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOptions {
    pub render: RenderOptions,
    pub auto_status: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            auto_status: true,
        }
    }
}

pub struct TerminalSession {
    game_state: GameState,
    selected: Option<Square>,
    highlighted: Vec<Square>,
    options: TerminalOptions,
    debug_mode: bool,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::with_game(GameState::new_game())
    }

    pub fn with_game(game_state: GameState) -> Self {
        Self {
            game_state,
            selected: None,
            highlighted: Vec::new(),
            options: TerminalOptions::default(),
            debug_mode: false,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn options(&self) -> TerminalOptions {
        self.options
    }

    /// Handle one command line. `input` is only read when a promotion choice
    /// has to be prompted for. Returns true when the session should end.
    pub fn handle_command<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();

        match cmd {
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" | "d" => self.show_board(out)?,
            "status" => writeln!(out, "{}", status_line(&self.game_state))?,
            "select" => match parse_square_arg(arg) {
                Ok(square) => self.select(square, out)?,
                Err(err) => writeln!(out, "info string select error: {err}")?,
            },
            "to" => match (self.selected, parse_square_arg(arg)) {
                (Some(from), Ok(to)) if self.highlighted.contains(&to) => {
                    self.play(from, to, None, input, out)?
                }
                (None, _) => writeln!(out, "info string to error: no piece selected")?,
                (Some(_), Ok(to)) => writeln!(out, "info string to error: {to} is not highlighted")?,
                (Some(_), Err(err)) => writeln!(out, "info string to error: {err}")?,
            },
            "moves" => match parse_square_arg(arg) {
                Ok(square) => {
                    let targets = self.game_state.legal_moves(square);
                    writeln!(out, "moves {square}: {}", join_squares(&targets))?;
                }
                Err(err) => writeln!(out, "info string moves error: {err}")?,
            },
            "move" => match arg.map(parse_long_algebraic) {
                Some(Ok((from, to, promotion))) => self.play(from, to, promotion, input, out)?,
                Some(Err(err)) => writeln!(out, "info string move error: {err}")?,
                None => writeln!(out, "info string move error: missing move")?,
            },
            "undo" => match self.game_state.undo() {
                Ok(record) => {
                    self.clear_selection();
                    writeln!(out, "undid {}{}", record.from, record.to)?;
                    if self.debug_mode {
                        writeln!(out, "info string history depth {}", self.game_state.history_len())?;
                    }
                }
                Err(err) => writeln!(out, "info string undo error: {err}")?,
            },
            "reset" => {
                self.game_state.reset();
                self.clear_selection();
                writeln!(out, "new game")?;
            }
            "captured" => {
                for color in [Color::White, Color::Black] {
                    writeln!(out, "{}", captured_line(&self.game_state, color, self.options.render))?;
                }
            }
            "history" => {
                for (ply, record) in self.game_state.history().enumerate() {
                    writeln!(out, "{}. {}{}{}", ply + 1, record.from, record.to, special_suffix(record.special))?;
                }
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    writeln!(out, "info string setoption error: {err}")?;
                }
            }
            "debug" => {
                self.debug_mode = arg.unwrap_or_default().eq_ignore_ascii_case("on");
            }
            "quit" => return Ok(true),
            _ => match parse_long_algebraic(cmd) {
                Ok((from, to, promotion)) => self.play(from, to, promotion, input, out)?,
                Err(_) => writeln!(out, "info string unknown command: {cmd}")?,
            },
        }

        Ok(false)
    }

    pub fn show_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            render_game_state(&self.game_state, self.selected, &self.highlighted, self.options.render)
        )
    }

    fn select<W: Write>(&mut self, square: Square, out: &mut W) -> io::Result<()> {
        match self.game_state.board().get(square) {
            Some(piece) if piece.color == self.game_state.turn() && !self.game_state.is_game_over() => {
                self.selected = Some(square);
                self.highlighted = self.game_state.legal_moves(square);
                self.show_board(out)?;
                writeln!(out, "moves {square}: {}", join_squares(&self.highlighted))
            }
            _ => {
                self.clear_selection();
                writeln!(out, "info string select error: no piece of the side to move on {square}")
            }
        }
    }

    fn play<R: BufRead, W: Write>(
        &mut self,
        from: Square,
        to: Square,
        preset: Option<PieceKind>,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        let (result, io_error) = {
            let mut chooser = PromptedPromotion {
                preset,
                input: &mut *input,
                out: &mut *out,
                io_error: None,
            };
            let result = self.game_state.apply_move(from, to, &mut chooser);
            (result, chooser.io_error)
        };

        match (result, io_error) {
            (Ok(outcome), _) => {
                self.clear_selection();
                self.report_outcome(&outcome, out)?;
            }
            (Err(ChessError::InvalidPromotionChoice(_)), Some(err))
                if err.kind() == io::ErrorKind::UnexpectedEof =>
            {
                writeln!(out, "info string promotion error: {err}")?;
            }
            (Err(_), Some(err)) => return Err(err),
            (Err(err), None) => writeln!(out, "info string move error: {err}")?,
        }
        Ok(())
    }

    fn report_outcome<W: Write>(&self, outcome: &MoveOutcome, out: &mut W) -> io::Result<()> {
        let capture = match outcome.captured {
            Some(piece) if self.options.render.unicode => format!(" x{}", piece.glyph()),
            Some(piece) => format!(" x{}", piece.ascii()),
            None => String::new(),
        };
        writeln!(
            out,
            "played {}{}{}{}",
            outcome.from,
            outcome.to,
            capture,
            special_suffix(outcome.special)
        )?;

        if self.debug_mode {
            writeln!(out, "info string history depth {}", self.game_state.history_len())?;
            writeln!(
                out,
                "info string legal moves for {}: {}",
                self.game_state.turn(),
                self.game_state.all_legal_moves().len()
            )?;
            let checkers = self.game_state.checkers();
            if !checkers.is_empty() {
                writeln!(out, "info string checkers {}", join_squares(&checkers))?;
            }
        }

        if self.options.auto_status {
            self.show_board(out)?;
            writeln!(out, "{}", status_line(&self.game_state))?;
        }
        Ok(())
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.highlighted.clear();
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");
        let flag = parse_check_value(&value).ok_or_else(|| format!("invalid value '{value}' for {name}"))?;

        if name.eq_ignore_ascii_case("Unicode") {
            self.options.render.unicode = flag;
        } else if name.eq_ignore_ascii_case("Coordinates") {
            self.options.render.coordinates = flag;
        } else if name.eq_ignore_ascii_case("AutoStatus") {
            self.options.auto_status = flag;
        } else {
            return Err(format!("unknown option '{name}'"));
        }
        Ok(())
    }
}

/// Asks the terminal for a promotion piece, re-prompting until it gets one of
/// Q, R, B or N. A letter given with the move is used without prompting and
/// left for the game state to validate.
struct PromptedPromotion<'a, R, W> {
    preset: Option<PieceKind>,
    input: &'a mut R,
    out: &'a mut W,
    io_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> PromptedPromotion<'_, R, W> {
    fn prompt(&mut self, color: Color) -> io::Result<Option<PieceKind>> {
        write!(self.out, "{color} promotes to (Q, R, B, N): ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a promotion piece was chosen",
            ));
        }

        let mut letters = line.trim().chars();
        let choice = match (letters.next(), letters.next()) {
            (Some(letter), None) => PieceKind::from_letter(letter).filter(|&kind| is_promotion_kind(kind)),
            _ => None,
        };
        Ok(choice)
    }
}

impl<R: BufRead, W: Write> PromotionChooser for PromptedPromotion<'_, R, W> {
    fn request_promotion_choice(&mut self, color: Color) -> PieceKind {
        if let Some(kind) = self.preset {
            return kind;
        }
        loop {
            match self.prompt(color) {
                Ok(Some(kind)) => return kind,
                Ok(None) => continue,
                Err(err) => {
                    self.io_error = Some(err);
                    // Never a valid promotion: the game state refuses the move.
                    return PieceKind::Pawn;
                }
            }
        }
    }
}

fn parse_square_arg(arg: Option<&str>) -> Result<Square, ChessError> {
    algebraic_to_square(arg.unwrap_or_default())
}

fn parse_check_value(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("on") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("off") {
        Some(false)
    } else {
        None
    }
}

fn join_squares(squares: &[Square]) -> String {
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn special_suffix(special: SpecialMove) -> &'static str {
    match special {
        SpecialMove::None => "",
        SpecialMove::Castling => " (castling)",
        SpecialMove::EnPassant => " (en passant)",
        SpecialMove::Promotion => " (promotion)",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{run_loop, TerminalSession};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn run(session: &mut TerminalSession, line: &str, pending_input: &str) -> String {
        let mut input = Cursor::new(pending_input.as_bytes().to_vec());
        let mut out = Vec::new();
        session
            .handle_command(line, &mut input, &mut out)
            .expect("command should not fail on in-memory io");
        String::from_utf8(out).expect("output should be utf-8")
    }

    fn promotion_session() -> TerminalSession {
        let mut board = Board::empty();
        let at = |text: &str| algebraic_to_square(text).expect("test coordinate");
        board.set(at("a7"), Some(Piece::new(PieceKind::Pawn, Color::White).moved()));
        board.set(at("e1"), Some(Piece::new(PieceKind::King, Color::White).moved()));
        board.set(at("h6"), Some(Piece::new(PieceKind::King, Color::Black).moved()));
        TerminalSession::with_game(GameState::from_position(board, Color::White, None))
    }

    #[test]
    fn bare_move_is_played_and_status_follows() {
        let mut session = TerminalSession::new();
        let text = run(&mut session, "e2e4", "");
        assert!(text.contains("played e2e4"));
        assert!(text.contains("Turn: Black"));
        assert_eq!(session.game_state().turn(), Color::Black);
    }

    #[test]
    fn select_then_to_moves_the_selected_piece() {
        let mut session = TerminalSession::new();
        let text = run(&mut session, "select g1", "");
        assert!(text.contains("moves g1: "));
        let text = run(&mut session, "to f3", "");
        assert!(text.contains("played g1f3"));
    }

    #[test]
    fn selecting_an_enemy_piece_clears_the_selection() {
        let mut session = TerminalSession::new();
        run(&mut session, "select e2", "");
        let text = run(&mut session, "select e7", "");
        assert!(text.contains("info string select error"));
        let text = run(&mut session, "to e4", "");
        assert!(text.contains("no piece selected"));
    }

    #[test]
    fn promotion_prompt_repeats_until_a_valid_letter() {
        let mut session = promotion_session();
        let text = run(&mut session, "a7a8", "x\nking\nn\n");
        assert_eq!(text.matches("promotes to").count(), 3);
        assert!(text.contains("(promotion)"));
        let a8 = algebraic_to_square("a8").expect("a8");
        let piece = session.game_state().board().get(a8).expect("promoted piece on a8");
        assert!(piece.is(PieceKind::Knight, Color::White));
    }

    #[test]
    fn promotion_letter_in_the_move_skips_the_prompt() {
        let mut session = promotion_session();
        let text = run(&mut session, "move a7a8r", "");
        assert!(!text.contains("promotes to"));
        let a8 = algebraic_to_square("a8").expect("a8");
        let piece = session.game_state().board().get(a8).expect("promoted piece on a8");
        assert!(piece.is(PieceKind::Rook, Color::White));
    }

    #[test]
    fn invalid_promotion_letter_in_the_move_is_rejected() {
        let mut session = promotion_session();
        let before = session.game_state().clone();
        let text = run(&mut session, "a7a8k", "");
        assert!(text.contains("info string move error: invalid promotion choice"));
        assert_eq!(session.game_state(), &before);
    }

    #[test]
    fn closed_input_during_promotion_leaves_the_game_unchanged() {
        let mut session = promotion_session();
        let before = session.game_state().clone();
        let text = run(&mut session, "a7a8", "");
        assert!(text.contains("info string promotion error"));
        assert_eq!(session.game_state(), &before);
    }

    #[test]
    fn undo_without_history_reports_an_error() {
        let mut session = TerminalSession::new();
        let text = run(&mut session, "undo", "");
        assert_eq!(text.trim(), "info string undo error: no moves to undo");
    }

    #[test]
    fn setoption_switches_rendering_and_rejects_unknown_names() {
        let mut session = TerminalSession::new();
        run(&mut session, "setoption name Unicode value false", "");
        assert!(!session.options().render.unicode);
        let text = run(&mut session, "board", "");
        assert!(text.contains('K') && !text.contains('♔'));

        let text = run(&mut session, "setoption name Hash value true", "");
        assert!(text.contains("info string setoption error: unknown option 'Hash'"));
    }

    #[test]
    fn run_loop_stops_at_quit() {
        let mut input = Cursor::new(b"e2e4\nquit\ne7e5\n".to_vec());
        let mut out = Vec::new();
        run_loop(&mut input, &mut out).expect("loop should run");
        let text = String::from_utf8(out).expect("output should be utf-8");
        assert!(text.contains("played e2e4"));
        assert!(!text.contains("played e7e5"));
    }
}
