//! Per-piece movement rules.
//!
//! Every piece kind answers the same two questions about a move from the
//! square it stands on:
//! - [`BoardPiece::is_move_possible`] - does the move fit the piece's pattern,
//!   with a clear path and a free or capturable destination?
//! - [`BoardPiece::is_any_legal_move_possible`] - does the piece have at least
//!   one such move that also keeps its own king safe?
//!
//! Dispatch is an exhaustive `match` on [`Piece`], so adding a kind without
//! rules does not compile.

mod king;
mod knight;
mod line;
mod pawn;
mod slider;

pub use line::squares_between;

use chess_core::{Color, Piece, Square};

use crate::Board;

/// A piece standing on a board.
///
/// It does not know its own square; the [`Board`] holding it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPiece {
    kind: Piece,
    color: Color,
    has_moved: bool,
}

impl BoardPiece {
    /// Creates a piece that has not moved yet.
    pub const fn new(kind: Piece, color: Color) -> Self {
        BoardPiece {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn kind(&self) -> Piece {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns true once the piece has made at least one move.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub(crate) fn set_moved(&mut self) {
        self.has_moved = true;
    }

    /// Returns true if this piece, standing on `from`, can structurally move
    /// to `to` on `board`.
    ///
    /// King safety is not considered; see [`Board::is_move_legal`].
    pub fn is_move_possible(&self, board: &Board, from: Square, to: Square) -> bool {
        match self.kind {
            Piece::Pawn => pawn::is_move_possible(self, board, from, to),
            Piece::Knight => knight::is_move_possible(self, board, from, to),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                slider::is_move_possible(self, board, from, to)
            }
            Piece::King => king::is_move_possible(self, board, from, to),
        }
    }

    /// Returns true if this piece, standing on `square`, has at least one
    /// move that is both structurally possible and legal.
    pub fn is_any_legal_move_possible(&self, board: &Board, square: Square) -> bool {
        match self.kind {
            Piece::Pawn => pawn::is_any_legal_move_possible(self, board, square),
            Piece::Knight => knight::is_any_legal_move_possible(self, board, square),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                slider::is_any_legal_move_possible(self, board, square)
            }
            Piece::King => king::is_any_legal_move_possible(self, board, square),
        }
    }
}

/// The destination is free, or holds a piece this one may capture.
#[inline]
fn can_land(piece: &BoardPiece, board: &Board, to: Square) -> bool {
    board
        .piece_at(to)
        .map_or(true, |target| target.color() != piece.color())
}

/// Tries each fixed offset from `square`, skipping those that leave the board.
fn any_legal_step(
    piece: &BoardPiece,
    board: &Board,
    square: Square,
    offsets: &[(i32, i32)],
) -> bool {
    offsets
        .iter()
        .filter_map(|&(dr, df)| square.offset(dr, df))
        .any(|to| piece.is_move_possible(board, square, to) && board.is_move_legal(square, to))
}
