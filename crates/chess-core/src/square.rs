//! Board square representation.

use crate::OffBoard;
use std::fmt;
use std::str::FromStr;

/// Number of ranks (and files) on the board.
const SIZE: i32 = 8;

/// A square on the chess board, as a (rank, file) pair.
///
/// Both components are zero-based: rank 0 is the first rank, file 0 is the
/// A-file. A `Square` is always on the board; every constructor validates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Creates a square from rank and file indices.
    ///
    /// Fails with [`OffBoard`] if either index is outside 0-7.
    pub fn new(rank: i32, file: i32) -> Result<Self, OffBoard> {
        Self::checked(rank, file).ok_or_else(|| OffBoard::coords(rank, file))
    }

    /// Parses a square from two-character notation (e.g., "E4").
    ///
    /// The file letter may be upper or lower case.
    pub fn from_algebraic(s: &str) -> Result<Self, OffBoard> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(OffBoard::notation(s));
        }
        let file = match bytes[0].to_ascii_uppercase() {
            c @ b'A'..=b'H' => c - b'A',
            _ => return Err(OffBoard::notation(s)),
        };
        let rank = match bytes[1] {
            c @ b'1'..=b'8' => c - b'1',
            _ => return Err(OffBoard::notation(s)),
        };
        Ok(Square { rank, file })
    }

    /// Returns the square reached by stepping `d_rank` ranks and `d_file`
    /// files from this one, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i32, d_file: i32) -> Option<Self> {
        Self::checked(self.rank as i32 + d_rank, self.file as i32 + d_file)
    }

    #[inline]
    fn checked(rank: i32, file: i32) -> Option<Self> {
        if (0..SIZE).contains(&rank) && (0..SIZE).contains(&file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Returns the rank index (0-7).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the file index (0-7).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the index (0-63), a1 = 0, b1 = 1, ..., h8 = 63.
    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Returns the signed (rank, file) change needed to get from this square
    /// to `to`.
    #[inline]
    pub fn delta(self, to: Square) -> (i32, i32) {
        (
            to.rank as i32 - self.rank as i32,
            to.file as i32 - self.file as i32,
        )
    }

    /// Returns this square reflected across the middle of the board
    /// (rank 1 <-> rank 8), keeping the file.
    #[inline]
    pub const fn mirrored(self) -> Self {
        Square {
            rank: 7 - self.rank,
            file: self.file,
        }
    }

    /// Iterates over all 64 squares, rank by rank from A1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }

    /// Returns the two-character notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'A' + self.file) as char, (b'1' + self.rank) as char)
    }

    // Castling squares
    pub const A1: Square = Square { rank: 0, file: 0 };
    pub const E1: Square = Square { rank: 0, file: 4 };
    pub const H1: Square = Square { rank: 0, file: 7 };
    pub const A8: Square = Square { rank: 7, file: 0 };
    pub const E8: Square = Square { rank: 7, file: 4 };
    pub const H8: Square = Square { rank: 7, file: 7 };
}

impl FromStr for Square {
    type Err = OffBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(3, 4).unwrap();
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.index(), 28);
    }

    #[test]
    fn square_new_off_board() {
        assert!(Square::new(8, 0).is_err());
        assert!(Square::new(0, 8).is_err());
        assert!(Square::new(-1, 3).is_err());
        assert!(Square::new(3, -1).is_err());
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("A1"), Ok(Square::A1));
        assert_eq!(Square::from_algebraic("e4"), Square::new(3, 4));
        assert_eq!(Square::from_algebraic("H8"), Ok(Square::H8));
        assert!(Square::from_algebraic("I1").is_err());
        assert!(Square::from_algebraic("A9").is_err());
        assert!(Square::from_algebraic("A0").is_err());
        assert!(Square::from_algebraic("").is_err());
        assert!(Square::from_algebraic("E22").is_err());
    }

    #[test]
    fn off_board_keeps_input() {
        let err = "Z9".parse::<Square>().unwrap_err();
        assert_eq!(err.input(), "Z9");
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::A1.to_algebraic(), "A1");
        assert_eq!(Square::H8.to_string(), "H8");
        assert_eq!(Square::new(3, 4).unwrap().to_string(), "E4");
    }

    #[test]
    fn offset_stops_at_edges() {
        assert_eq!(Square::E1.offset(1, 0), Square::new(1, 4).ok());
        assert_eq!(Square::E1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::A1.offset(7, 7), Some(Square::H8));
    }

    #[test]
    fn delta_and_mirror() {
        assert_eq!(Square::E1.delta(Square::H8), (7, 3));
        assert_eq!(Square::E1.mirrored(), Square::E8);
        assert_eq!(Square::all().count(), 64);
    }

    proptest! {
        #[test]
        fn notation_roundtrips(rank in 0i32..8, file in 0i32..8) {
            let sq = Square::new(rank, file).unwrap();
            prop_assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }

        #[test]
        fn offset_agrees_with_new(rank in 0i32..8, file in 0i32..8, dr in -9i32..9, df in -9i32..9) {
            let sq = Square::new(rank, file).unwrap();
            prop_assert_eq!(sq.offset(dr, df), Square::new(rank + dr, file + df).ok());
        }
    }
}
