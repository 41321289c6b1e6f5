//! Core types for chess.
//!
//! This crate provides the value types shared by the rules engine and its
//! drivers:
//! - [`Square`] for board coordinates, with [`OffBoard`] as its only error
//! - [`Color`] for the two sides
//! - [`Piece`] for the six piece kinds

mod color;
mod error;
mod piece;
mod square;

pub use color::Color;
pub use error::OffBoard;
pub use piece::Piece;
pub use square::Square;
