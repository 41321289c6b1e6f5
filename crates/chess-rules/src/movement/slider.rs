//! Bishop, rook, and queen rules.
//!
//! The three sliding pieces differ only in which directions they may travel;
//! the path must be clear and the destination free or capturable.

use chess_core::{Piece, Square};

use super::line::{is_path_clear, DIAGONALS, ORTHOGONALS};
use super::{can_land, BoardPiece};
use crate::Board;

const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    ORTHOGONALS[0],
    ORTHOGONALS[1],
    ORTHOGONALS[2],
    ORTHOGONALS[3],
    DIAGONALS[0],
    DIAGONALS[1],
    DIAGONALS[2],
    DIAGONALS[3],
];

fn directions(kind: Piece) -> &'static [(i32, i32)] {
    match kind {
        Piece::Bishop => &DIAGONALS,
        Piece::Rook => &ORTHOGONALS,
        _ => &QUEEN_DIRECTIONS,
    }
}

fn fits_pattern(kind: Piece, dr: i32, df: i32) -> bool {
    let diagonal = dr.abs() == df.abs() && dr != 0;
    let straight = (dr == 0) != (df == 0);
    match kind {
        Piece::Bishop => diagonal,
        Piece::Rook => straight,
        _ => diagonal || straight,
    }
}

pub(super) fn is_move_possible(piece: &BoardPiece, board: &Board, from: Square, to: Square) -> bool {
    let (dr, df) = from.delta(to);
    fits_pattern(piece.kind(), dr, df) && is_path_clear(board, from, to) && can_land(piece, board, to)
}

pub(super) fn is_any_legal_move_possible(piece: &BoardPiece, board: &Board, square: Square) -> bool {
    for &(dr, df) in directions(piece.kind()) {
        let mut next = square.offset(dr, df);
        while let Some(to) = next {
            if !is_move_possible(piece, board, square, to) {
                break;
            }
            if board.is_move_legal(square, to) {
                return true;
            }
            next = to.offset(dr, df);
        }
    }
    false
}
