//! Knight rules. Knights jump, so there is no path to check.

use chess_core::Square;

use super::{any_legal_step, can_land, BoardPiece};
use crate::Board;

const JUMPS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(super) fn is_move_possible(piece: &BoardPiece, board: &Board, from: Square, to: Square) -> bool {
    let (dr, df) = from.delta(to);
    let is_jump = matches!((dr.abs(), df.abs()), (2, 1) | (1, 2));
    is_jump && can_land(piece, board, to)
}

pub(super) fn is_any_legal_move_possible(piece: &BoardPiece, board: &Board, square: Square) -> bool {
    any_legal_step(piece, board, square, &JUMPS)
}
