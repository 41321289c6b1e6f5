//! Chess rules engine.
//!
//! This crate answers one question at a time about a single position:
//! - [`Board`] - the 8x8 grid, side to move, and move execution
//! - [`BoardPiece`] - a piece on the board with its per-kind movement rules
//! - [`GameStatus`] - check, checkmate, and stalemate detection
//! - [`Rejection`] - why a submitted move or castle was refused
//!
//! # Architecture
//!
//! A move is accepted in two stages. The moving piece first decides whether
//! the move fits its movement pattern and path (structural possibility).
//! The board then plays the move on a clone of itself and checks whether the
//! mover's own king is attacked afterwards (legality). The real board is only
//! mutated once both stages pass.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_rules::{Board, GameStatus};
//!
//! let mut board = Board::new();
//! let e2: Square = "E2".parse().unwrap();
//! let e4: Square = "E4".parse().unwrap();
//! let report = board.submit_move(e2, e4).unwrap();
//! assert_eq!(report.opponent_status, GameStatus::Continuing);
//! ```

mod board;
mod castle;
mod game;
pub mod movement;
mod status;

pub use board::{Board, BoardBuilder, SetupError};
pub use castle::{CastleBlock, CastleSide};
pub use game::{CastleReport, MoveReport, Rejection};
pub use movement::BoardPiece;
pub use status::GameStatus;
