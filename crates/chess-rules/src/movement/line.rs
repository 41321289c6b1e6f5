//! Straight-line and diagonal path tracing.

use chess_core::Square;

use crate::Board;

/// Unit steps along ranks and files.
pub(super) const ORTHOGONALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Unit steps along diagonals.
pub(super) const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Iterates over the squares strictly between `from` and `to`, walking from
/// `from`.
///
/// Yields nothing unless the two squares share a rank, file, or diagonal.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (dr, df) = from.delta(to);
    let aligned = dr == 0 || df == 0 || dr.abs() == df.abs();
    let steps = if aligned { dr.abs().max(df.abs()) } else { 0 };
    let (step_r, step_f) = (dr.signum(), df.signum());
    (1..steps).filter_map(move |i| from.offset(step_r * i, step_f * i))
}

/// Returns true if no piece stands strictly between `from` and `to`.
pub(super) fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to).all(|sq| !board.is_occupied(sq))
}
