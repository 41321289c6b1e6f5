//! Turn orchestration: validating and applying a submitted move.

use chess_core::{Color, Piece, Square};
use thiserror::Error;

use crate::{Board, CastleBlock, CastleSide, GameStatus};

/// Why a submitted move or castle was refused.
///
/// A rejection never changes the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("there is no piece at position {0}")]
    NoPiece(Square),

    #[error("it is not {0}'s turn to move")]
    NotYourTurn(Color),

    #[error("a piece cannot move to the square it's already on")]
    SameSquare,

    #[error("{color}'s {piece} cannot move to {to}")]
    IllegalMove { color: Color, piece: Piece, to: Square },

    #[error("'{designator}' with '{code}' is not a side and castle code")]
    InvalidCastleInput { designator: char, code: String },

    #[error("{color} cannot castle, {reason}")]
    Castle { color: Color, reason: CastleBlock },
}

/// What happened when a move was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub mover: Color,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// The opponent's piece taken on `to`, if any.
    pub captured: Option<Piece>,
    /// Where the move left the opponent.
    pub opponent_status: GameStatus,
}

/// What happened when a castle was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastleReport {
    pub mover: Color,
    pub side: CastleSide,
    pub opponent_status: GameStatus,
}

impl Board {
    /// Plays the piece on `from` to `to` if it is that side's turn and the
    /// move is both structurally possible and legal.
    ///
    /// On success the piece is marked as moved and the opponent's position
    /// is classified. The turn passes to the opponent unless the game just
    /// ended in checkmate or stalemate.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveReport, Rejection> {
        let result = self.try_move(from, to);
        match &result {
            Ok(report) => tracing::debug!(
                mover = %report.mover,
                piece = %report.piece,
                %from,
                %to,
                captured = ?report.captured,
                status = ?report.opponent_status,
                "move applied"
            ),
            Err(reason) => tracing::debug!(%from, %to, %reason, "move rejected"),
        }
        result
    }

    fn try_move(&mut self, from: Square, to: Square) -> Result<MoveReport, Rejection> {
        let piece = *self.piece_at(from).ok_or(Rejection::NoPiece(from))?;
        if piece.color() != self.side_to_move() {
            return Err(Rejection::NotYourTurn(piece.color()));
        }
        if from == to {
            return Err(Rejection::SameSquare);
        }
        if !(piece.is_move_possible(self, from, to) && self.is_move_legal(from, to)) {
            return Err(Rejection::IllegalMove {
                color: piece.color(),
                piece: piece.kind(),
                to,
            });
        }

        let captured = self.make_move(from, to);
        self.mark_moved(to);
        let opponent_status = self.finish_turn();

        Ok(MoveReport {
            mover: piece.color(),
            piece: piece.kind(),
            from,
            to,
            captured,
            opponent_status,
        })
    }

    /// Classifies the opponent's position and hands over the turn unless the
    /// game is over.
    pub(crate) fn finish_turn(&mut self) -> GameStatus {
        let status = self.status_of(self.side_to_move().opposite());
        if !status.is_terminal() {
            self.pass_turn();
        }
        status
    }

    /// Castles from driver input: a side designator (`'W'` or `'B'`, either case) and a
    /// castle code (`"O-O"` or `"O-O-O"`).
    pub fn submit_castle_code(
        &mut self,
        designator: char,
        code: &str,
    ) -> Result<CastleReport, Rejection> {
        match (Color::from_designator(designator), CastleSide::from_code(code)) {
            (Some(color), Some(side)) => self.submit_castle(color, side),
            _ => {
                let reason = Rejection::InvalidCastleInput {
                    designator,
                    code: code.to_string(),
                };
                tracing::debug!(%reason, "castle rejected");
                Err(reason)
            }
        }
    }
}
