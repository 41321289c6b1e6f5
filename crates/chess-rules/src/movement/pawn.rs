//! Pawn rules.
//!
//! A pawn moves one square forward onto an empty square, two squares forward
//! from its unmoved state when both squares are empty, and captures one square
//! diagonally forward. Diagonal moves onto empty squares are never possible;
//! en passant is not modelled.

use chess_core::Square;

use super::BoardPiece;
use crate::Board;

pub(super) fn is_move_possible(piece: &BoardPiece, board: &Board, from: Square, to: Square) -> bool {
    let forward = piece.color().pawn_direction();
    let (dr, df) = from.delta(to);

    if df == 0 && dr == forward {
        return !board.is_occupied(to);
    }

    if df == 0 && dr == 2 * forward {
        let skipped_is_empty = from
            .offset(forward, 0)
            .is_some_and(|skipped| !board.is_occupied(skipped));
        return !piece.has_moved() && skipped_is_empty && !board.is_occupied(to);
    }

    df.abs() == 1 && dr == forward && board.is_opponent_at(to, piece.color())
}

pub(super) fn is_any_legal_move_possible(piece: &BoardPiece, board: &Board, square: Square) -> bool {
    let forward = piece.color().pawn_direction();
    let mut candidates = vec![(forward, -1), (forward, 0), (forward, 1)];
    if !piece.has_moved() {
        candidates.push((2 * forward, 0));
    }

    candidates
        .into_iter()
        .filter_map(|(dr, df)| square.offset(dr, df))
        .any(|to| is_move_possible(piece, board, square, to) && board.is_move_legal(square, to))
}
