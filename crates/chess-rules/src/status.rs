//! Check, checkmate, and stalemate detection.

use chess_core::{Color, Square};

use crate::movement::squares_between;
use crate::Board;

/// The state a side is left in after its opponent's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Not in check and at least one legal move exists.
    Continuing,
    /// In check, with a way out.
    Check,
    /// In check with no move that removes the check. Ends the game.
    Checkmate,
    /// Not in check, but without a single legal move. Ends the game.
    Stalemate,
}

impl GameStatus {
    /// Returns true if no further moves may be played.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl Board {
    /// Returns the squares of every opposing piece that can structurally
    /// reach `color`'s king.
    ///
    /// Attackers are not held to king safety themselves: a pinned piece
    /// still gives check.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king.
    pub fn attackers_of(&self, color: Color) -> Vec<Square> {
        let king = self.expect_king(color);
        self.pieces(color.opposite())
            .filter(|(sq, piece)| piece.is_move_possible(self, *sq, king))
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Returns true if `color`'s king is attacked.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king.
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self.expect_king(color);
        self.pieces(color.opposite())
            .any(|(sq, piece)| piece.is_move_possible(self, sq, king))
    }

    /// Returns true if `color` is checkmated.
    ///
    /// The king gets the first chance to escape. Failing that, two attackers
    /// are always mate, and a single attacker is mate unless some other piece
    /// can legally capture it or, for a sliding attacker, step into the line
    /// between it and the king.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        let king = self.expect_king(color);
        if let Some(piece) = self.piece_at(king) {
            if piece.is_any_legal_move_possible(self, king) {
                return false;
            }
        }

        let attacker = match self.attackers_of(color).as_slice() {
            [] => return false,
            [single] => *single,
            _ => return true,
        };

        !self
            .pieces(color)
            .filter(|(sq, _)| *sq != king)
            .any(|(defender, _)| self.can_capture_or_block(defender, attacker, king))
    }

    /// Whether the piece on `defender` can legally capture `attacker` or, if
    /// the attacker slides, interpose on the line to `king`.
    fn can_capture_or_block(&self, defender: Square, attacker: Square, king: Square) -> bool {
        let Some(piece) = self.piece_at(defender) else {
            return false;
        };
        let reaches = |to: Square| {
            piece.is_move_possible(self, defender, to) && self.is_move_legal(defender, to)
        };

        if reaches(attacker) {
            return true;
        }

        let attacker_slides = self
            .piece_at(attacker)
            .is_some_and(|p| p.kind().is_slider());
        attacker_slides && squares_between(attacker, king).any(reaches)
    }

    /// Returns true if `color` is not in check but has no legal move.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        if self.is_in_check(color) {
            return false;
        }
        !self
            .pieces(color)
            .any(|(sq, piece)| piece.is_any_legal_move_possible(self, sq))
    }

    /// Classifies the position from `color`'s point of view.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king.
    pub fn status_of(&self, color: Color) -> GameStatus {
        if self.is_in_check(color) {
            if self.is_in_checkmate(color) {
                GameStatus::Checkmate
            } else {
                GameStatus::Check
            }
        } else if self.is_in_stalemate(color) {
            GameStatus::Stalemate
        } else {
            GameStatus::Continuing
        }
    }
}
