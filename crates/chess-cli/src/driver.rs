//! Turns console input into engine calls and engine results into text.

use chess_core::{Color, Square};
use chess_rules::{Board, CastleReport, GameStatus, MoveReport, Rejection};

use crate::config::DriverConfig;

const USAGE: &str = "Please enter a correct rank and file combination, or a colour and \
castle code. For example: \"E2 E4\" or \"B O-O\".";

/// One console game.
pub struct Driver {
    board: Board,
    config: DriverConfig,
    over: bool,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Driver {
            board: Board::new(),
            config,
            over: false,
        }
    }

    /// Lines to print before the first move.
    pub fn start(&self) -> Vec<String> {
        if self.config.announce_start {
            vec!["A new chess game is started!".to_string()]
        } else {
            Vec::new()
        }
    }

    /// Handles one line of input and returns the lines to print.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Vec::new(),
            ["reset"] => {
                self.board.reset();
                self.over = false;
                tracing::info!("game reset");
                self.start()
            }
            ["board"] => vec![self.board.to_string()],
            [_, _] if self.over => {
                vec!["The game is over. Type 'reset' to start a new game.".to_string()]
            }
            [side @ ("W" | "B" | "w" | "b"), code] => {
                let designator = side.chars().next().unwrap_or_default();
                let result = self.board.submit_castle_code(designator, code);
                self.castle_lines(result)
            }
            [from, to] => match (from.parse::<Square>(), to.parse::<Square>()) {
                (Ok(from), Ok(to)) => {
                    let result = self.board.submit_move(from, to);
                    self.move_lines(result)
                }
                (Err(e), _) | (_, Err(e)) => vec![format!("{}!", e), USAGE.to_string()],
            },
            _ => vec![USAGE.to_string()],
        }
    }

    fn move_lines(&mut self, result: Result<MoveReport, Rejection>) -> Vec<String> {
        match result {
            Ok(report) => {
                let mut line = format!(
                    "{}'s {} moves from {} to {}",
                    report.mover, report.piece, report.from, report.to
                );
                if let Some(captured) = report.captured {
                    line.push_str(&format!(
                        " taking {}'s {}",
                        report.mover.opposite(),
                        captured
                    ));
                }
                let mut lines = vec![line];
                lines.extend(self.after_move(report.mover.opposite(), report.opponent_status));
                lines
            }
            Err(reason) => vec![rejection_line(&reason)],
        }
    }

    fn castle_lines(&mut self, result: Result<CastleReport, Rejection>) -> Vec<String> {
        match result {
            Ok(report) => {
                let mut lines = vec![format!("{} castles {}", report.mover, report.side)];
                lines.extend(self.after_move(report.mover.opposite(), report.opponent_status));
                lines
            }
            Err(Rejection::InvalidCastleInput { .. }) => {
                vec!["Sorry, invalid input!".to_string(), USAGE.to_string()]
            }
            Err(reason) => vec![rejection_line(&reason)],
        }
    }

    fn after_move(&mut self, opponent: Color, status: GameStatus) -> Vec<String> {
        let mut lines = Vec::new();
        if self.config.show_board {
            lines.push(self.board.to_string());
        }
        let announcement = match status {
            GameStatus::Continuing => None,
            GameStatus::Check => Some("check"),
            GameStatus::Checkmate => Some("checkmate"),
            GameStatus::Stalemate => Some("stalemate"),
        };
        if let Some(state) = announcement {
            lines.push(format!("{} is in {}", opponent, state));
        }
        if status.is_terminal() {
            self.over = true;
            tracing::info!(?status, "game over");
        }
        lines
    }
}

/// Renders a rejection as a sentence.
fn rejection_line(reason: &Rejection) -> String {
    let text = reason.to_string();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}!", first.to_uppercase(), chars.as_str()),
        None => text,
    }
}
