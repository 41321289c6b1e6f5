//! King rules. Castling is a board-level transaction, not a king move.

use chess_core::Square;

use super::{any_legal_step, can_land, BoardPiece};
use crate::Board;

const NEIGHBOURS: [(i32, i32); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(super) fn is_move_possible(piece: &BoardPiece, board: &Board, from: Square, to: Square) -> bool {
    let (dr, df) = from.delta(to);
    let is_one_square = dr.abs() <= 1 && df.abs() <= 1 && (dr, df) != (0, 0);
    is_one_square && can_land(piece, board, to)
}

pub(super) fn is_any_legal_move_possible(piece: &BoardPiece, board: &Board, square: Square) -> bool {
    any_legal_step(piece, board, square, &NEIGHBOURS)
}
