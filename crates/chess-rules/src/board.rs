//! Board state: the 8x8 grid of pieces and the side to move.

use chess_core::{Color, Piece, Square};
use std::fmt;
use thiserror::Error;

use crate::BoardPiece;

/// Piece order along each back rank, from the A-file to the H-file.
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Errors that can occur when building a custom position.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("a position needs exactly one {color} King, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("{color} is in check but it is not {color}'s turn to move")]
    WaitingSideInCheck { color: Color },
}

/// A chess position: at most one piece per square, plus the side to move.
///
/// The board is the only record of where a piece stands. Cloning a board
/// produces an independent copy of every piece, which is how hypothetical
/// moves are tested without touching the real position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<BoardPiece>; 64],
    side_to_move: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates the standard starting position with White to move.
    pub fn new() -> Self {
        let mut squares = [None; 64];
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let back = color.back_rank() as usize * 8 + file;
                let pawns = color.pawn_rank() as usize * 8 + file;
                squares[back] = Some(BoardPiece::new(kind, color));
                squares[pawns] = Some(BoardPiece::new(Piece::Pawn, color));
            }
        }
        Board {
            squares,
            side_to_move: Color::White,
        }
    }

    /// Starts building a custom position on an empty board.
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    /// Restores the starting position and gives the move back to White.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Returns the side whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub(crate) fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&BoardPiece> {
        self.squares[sq.index()].as_ref()
    }

    /// Returns true if any piece stands on the square.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Returns true if the square holds a piece belonging to the opponent of
    /// `color`.
    #[inline]
    pub fn is_opponent_at(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color() != color)
    }

    /// Iterates over the squares and pieces belonging to `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, &BoardPiece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|p| p.color() == color)
                .map(|p| (sq, p))
        })
    }

    /// Returns the square of `color`'s king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.kind() == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Like [`king_square`](Board::king_square), for queries that are
    /// meaningless without a king.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king. Positions built through
    /// [`BoardBuilder::build`] or [`Board::new`] always have one.
    pub(crate) fn expect_king(&self, color: Color) -> Square {
        match self.king_square(color) {
            Some(sq) => sq,
            None => panic!("the {} King is not on the board", color),
        }
    }

    /// Moves whatever stands on `from` to `to`, discarding any piece on `to`.
    ///
    /// No rule is checked: callers confirm structural possibility and
    /// legality first. Returns the captured piece kind, if there was one.
    /// An empty `from` leaves the board untouched.
    pub fn make_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.squares[from.index()].take()?;
        self.squares[to.index()]
            .replace(moving)
            .map(|captured| captured.kind())
    }

    /// Returns a copy of this board with `from` moved to `to`.
    ///
    /// The original board is not modified.
    pub fn simulate_move(&self, from: Square, to: Square) -> Board {
        let mut sandbox = self.clone();
        sandbox.make_move(from, to);
        sandbox
    }

    /// Returns true if moving the piece on `from` to `to` would not leave its
    /// own king attacked.
    ///
    /// This only checks king safety; whether the piece can make the move at
    /// all is [`BoardPiece::is_move_possible`]. An empty `from`, a null move
    /// and a move onto a friendly piece are never legal.
    pub fn is_move_legal(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        let color = piece.color();
        if from == to || self.piece_at(to).is_some_and(|p| p.color() == color) {
            return false;
        }
        let after = self.simulate_move(from, to);
        let legal = after.king_square(color).is_some() && !after.is_in_check(color);
        tracing::trace!(%from, %to, legal, "legality check");
        legal
    }

    pub(crate) fn mark_moved(&mut self, sq: Square) {
        if let Some(piece) = self.squares[sq.index()].as_mut() {
            piece.set_moved();
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let sq = Square::new(rank, file).map_err(|_| fmt::Error)?;
                let c = self
                    .piece_at(sq)
                    .map_or('.', |p| p.kind().symbol(p.color()));
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   A B C D E F G H")
    }
}

/// Builder for custom positions.
///
/// ```
/// use chess_core::{Color, Piece, Square};
/// use chess_rules::Board;
///
/// let board = Board::builder()
///     .piece(Square::E1, Piece::King, Color::White)
///     .piece(Square::E8, Piece::King, Color::Black)
///     .side_to_move(Color::Black)
///     .build()
///     .unwrap();
/// assert_eq!(board.side_to_move(), Color::Black);
/// ```
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    squares: [Option<BoardPiece>; 64],
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder {
            squares: [None; 64],
            side_to_move: Color::White,
        }
    }
}

impl BoardBuilder {
    /// Places an unmoved piece, replacing anything already on the square.
    pub fn piece(mut self, sq: Square, kind: Piece, color: Color) -> Self {
        self.squares[sq.index()] = Some(BoardPiece::new(kind, color));
        self
    }

    /// Places a piece that has already moved at least once.
    ///
    /// Such a pawn has lost its double step; such a king or rook can no
    /// longer castle.
    pub fn moved_piece(mut self, sq: Square, kind: Piece, color: Color) -> Self {
        let mut piece = BoardPiece::new(kind, color);
        piece.set_moved();
        self.squares[sq.index()] = Some(piece);
        self
    }

    /// Sets the side to move (White by default).
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Finishes the position.
    ///
    /// Fails unless each side has exactly one king and the side that is not
    /// to move is out of check.
    pub fn build(self) -> Result<Board, SetupError> {
        for color in Color::ALL {
            let count = self
                .squares
                .iter()
                .flatten()
                .filter(|p| p.kind() == Piece::King && p.color() == color)
                .count();
            if count != 1 {
                return Err(SetupError::KingCount { color, count });
            }
        }
        let board = Board {
            squares: self.squares,
            side_to_move: self.side_to_move,
        };
        let waiting = board.side_to_move.opposite();
        if board.is_in_check(waiting) {
            return Err(SetupError::WaitingSideInCheck { color: waiting });
        }
        Ok(board)
    }
}
