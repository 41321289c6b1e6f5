//! Castling: a combined king and rook move with its own preconditions.

use chess_core::{Color, Piece, Square};
use std::fmt;
use thiserror::Error;

use crate::movement::squares_between;
use crate::{Board, CastleReport, Rejection};

/// Which rook the king castles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// `O-O`, with the H-file rook.
    Kingside,
    /// `O-O-O`, with the A-file rook.
    Queenside,
}

impl CastleSide {
    /// Parses a castle code (`"O-O"` or `"O-O-O"`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "O-O" => Some(CastleSide::Kingside),
            "O-O-O" => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Returns the castle code.
    pub const fn code(self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }

    const fn rook_square(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::H1,
            (CastleSide::Queenside, Color::White) => Square::A1,
            (CastleSide::Kingside, Color::Black) => Square::H8,
            (CastleSide::Queenside, Color::Black) => Square::A8,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Kingside => write!(f, "kingside"),
            CastleSide::Queenside => write!(f, "queenside"),
        }
    }
}

/// Which castling precondition failed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CastleBlock {
    #[error("the King has moved previously")]
    KingMoved,

    #[error("the Rook has moved previously")]
    RookMoved,

    #[error("the squares between the King and the Rook are not clear")]
    PathBlocked,

    #[error("the King is in check")]
    InCheck,

    #[error("the King would pass through check")]
    ThroughCheck,

    #[error("the King would move into check")]
    IntoCheck,
}

/// Where the two pieces start and finish.
struct CastlePlan {
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
}

const fn king_home(color: Color) -> Square {
    match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    }
}

fn is_unmoved(board: &Board, sq: Square, kind: Piece, color: Color) -> bool {
    board
        .piece_at(sq)
        .is_some_and(|p| p.kind() == kind && p.color() == color && !p.has_moved())
}

impl Board {
    /// Castles `color` towards `side`.
    ///
    /// Refused unless it is `color`'s turn, the king and rook are on their
    /// home squares and have never moved, every square between them is
    /// empty, and the king is not in check, does not pass through an
    /// attacked square, and does not land on one. A refusal leaves the board
    /// untouched.
    ///
    /// The king moves two squares towards the rook and the rook lands on the
    /// square the king crossed.
    pub fn submit_castle(
        &mut self,
        color: Color,
        side: CastleSide,
    ) -> Result<CastleReport, Rejection> {
        if color != self.side_to_move() {
            let reason = Rejection::NotYourTurn(color);
            tracing::debug!(%color, %side, %reason, "castle rejected");
            return Err(reason);
        }

        let plan = match self.plan_castle(color, side) {
            Ok(plan) => plan,
            Err(reason) => {
                tracing::debug!(%color, %side, %reason, "castle rejected");
                return Err(Rejection::Castle { color, reason });
            }
        };

        self.make_move(plan.king_from, plan.king_to);
        self.make_move(plan.rook_from, plan.rook_to);
        self.mark_moved(plan.king_to);
        self.mark_moved(plan.rook_to);
        let opponent_status = self.finish_turn();

        tracing::debug!(%color, %side, status = ?opponent_status, "castled");
        Ok(CastleReport {
            mover: color,
            side,
            opponent_status,
        })
    }

    /// Runs the castling preconditions in order, stopping at the first that
    /// fails.
    fn plan_castle(&self, color: Color, side: CastleSide) -> Result<CastlePlan, CastleBlock> {
        let king_from = king_home(color);
        let rook_from = side.rook_square(color);

        if !is_unmoved(self, king_from, Piece::King, color) {
            return Err(CastleBlock::KingMoved);
        }
        if !is_unmoved(self, rook_from, Piece::Rook, color) {
            return Err(CastleBlock::RookMoved);
        }
        if squares_between(king_from, rook_from).any(|sq| self.is_occupied(sq)) {
            return Err(CastleBlock::PathBlocked);
        }
        if self.is_in_check(color) {
            return Err(CastleBlock::InCheck);
        }

        let step = king_from.delta(rook_from).1.signum();
        let (Some(crossed), Some(king_to)) =
            (king_from.offset(0, step), king_from.offset(0, 2 * step))
        else {
            return Err(CastleBlock::PathBlocked);
        };
        if !self.is_move_legal(king_from, crossed) {
            return Err(CastleBlock::ThroughCheck);
        }
        if !self.is_move_legal(king_from, king_to) {
            return Err(CastleBlock::IntoCheck);
        }

        Ok(CastlePlan {
            king_from,
            king_to,
            rook_from,
            rook_to: crossed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameStatus;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn castling_position() -> crate::BoardBuilder {
        Board::builder()
            .piece(Square::E1, Piece::King, Color::White)
            .piece(Square::A1, Piece::Rook, Color::White)
            .piece(Square::H1, Piece::Rook, Color::White)
            .piece(Square::E8, Piece::King, Color::Black)
            .piece(Square::A8, Piece::Rook, Color::Black)
            .piece(Square::H8, Piece::Rook, Color::Black)
    }

    #[test]
    fn codes() {
        assert_eq!(CastleSide::from_code("O-O"), Some(CastleSide::Kingside));
        assert_eq!(CastleSide::from_code("O-O-O"), Some(CastleSide::Queenside));
        assert_eq!(CastleSide::from_code("0-0"), None);
        assert_eq!(CastleSide::Queenside.code(), "O-O-O");
        assert_eq!(CastleSide::Kingside.to_string(), "kingside");
    }

    #[test]
    fn white_kingside() {
        let mut board = castling_position().build().unwrap();
        let report = board.submit_castle(Color::White, CastleSide::Kingside).unwrap();
        assert_eq!(report.mover, Color::White);
        assert_eq!(report.opponent_status, GameStatus::Continuing);
        let king = board.piece_at(sq("G1")).unwrap();
        let rook = board.piece_at(sq("F1")).unwrap();
        assert_eq!(king.kind(), Piece::King);
        assert_eq!(rook.kind(), Piece::Rook);
        assert!(king.has_moved() && rook.has_moved());
        assert!(!board.is_occupied(Square::E1));
        assert!(!board.is_occupied(Square::H1));
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn black_queenside() {
        let mut board = castling_position()
            .side_to_move(Color::Black)
            .build()
            .unwrap();
        board.submit_castle(Color::Black, CastleSide::Queenside).unwrap();
        assert_eq!(board.piece_at(sq("C8")).unwrap().kind(), Piece::King);
        assert_eq!(board.piece_at(sq("D8")).unwrap().kind(), Piece::Rook);
        assert!(!board.is_occupied(Square::A8));
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn not_your_turn() {
        let mut board = castling_position().build().unwrap();
        assert_eq!(
            board.submit_castle(Color::Black, CastleSide::Kingside),
            Err(Rejection::NotYourTurn(Color::Black))
        );
    }

    #[test]
    fn moved_king_or_rook() {
        let mut board = castling_position()
            .moved_piece(Square::E1, Piece::King, Color::White)
            .build()
            .unwrap();
        assert_eq!(
            board.submit_castle(Color::White, CastleSide::Kingside),
            Err(Rejection::Castle {
                color: Color::White,
                reason: CastleBlock::KingMoved
            })
        );

        let mut board = castling_position()
            .moved_piece(Square::H1, Piece::Rook, Color::White)
            .build()
            .unwrap();
        assert_eq!(
            board.submit_castle(Color::White, CastleSide::Kingside),
            Err(Rejection::Castle {
                color: Color::White,
                reason: CastleBlock::RookMoved
            })
        );
        assert!(board.submit_castle(Color::White, CastleSide::Queenside).is_ok());
    }

    #[test]
    fn missing_rook() {
        let mut board = castling_position()
            .piece(Square::A1, Piece::Knight, Color::White)
            .build()
            .unwrap();
        assert_eq!(
            board.submit_castle(Color::White, CastleSide::Queenside),
            Err(Rejection::Castle {
                color: Color::White,
                reason: CastleBlock::RookMoved
            })
        );
    }

    #[test]
    fn blocked_path_leaves_board_untouched() {
        let mut board = castling_position()
            .piece(sq("B1"), Piece::Knight, Color::White)
            .build()
            .unwrap();
        let before = board.clone();
        let err = board
            .submit_castle(Color::White, CastleSide::Queenside)
            .unwrap_err();
        assert_eq!(
            err,
            Rejection::Castle {
                color: Color::White,
                reason: CastleBlock::PathBlocked
            }
        );
        assert_eq!(
            err.to_string(),
            "White cannot castle, the squares between the King and the Rook are not clear"
        );
        assert_eq!(board, before);
    }

    #[test]
    fn attacked_squares() {
        let cases = [
            ("E5", CastleBlock::InCheck),
            ("F5", CastleBlock::ThroughCheck),
            ("G5", CastleBlock::IntoCheck),
        ];
        for (rook_at, expected) in cases {
            let mut board = castling_position()
                .piece(sq(rook_at), Piece::Rook, Color::Black)
                .build()
                .unwrap();
            assert_eq!(
                board.submit_castle(Color::White, CastleSide::Kingside),
                Err(Rejection::Castle {
                    color: Color::White,
                    reason: expected
                }),
                "rook on {rook_at}"
            );
        }
    }

    #[test]
    fn attacked_rook_does_not_stop_castling() {
        let mut board = castling_position()
            .piece(sq("H5"), Piece::Rook, Color::Black)
            .build()
            .unwrap();
        assert!(board.submit_castle(Color::White, CastleSide::Kingside).is_ok());
    }
}
