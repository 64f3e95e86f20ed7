//! Error types for match construction and notation parsing.

use std::fmt;

use super::types::Coord;

/// Error type for algebraic square notation parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Notation must be exactly two characters.
    BadLength { len: usize },
    /// File character outside 'a'..='h'.
    BadFile { found: char },
    /// Rank character outside '1'..='8'.
    BadRank { found: char },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::BadLength { len } => {
                write!(f, "square notation must be 2 characters, got {len}")
            }
            NotationError::BadFile { found } => {
                write!(f, "invalid file '{found}', expected 'a'..'h'")
            }
            NotationError::BadRank { found } => {
                write!(f, "invalid rank '{found}', expected '1'..'8'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for building a match from setup records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Setup record names a piece the catalog does not define.
    UnknownPiece { name: String },
    /// Setup record places a piece off the board.
    OffBoard { coord: Coord },
    /// Two setup records target the same square.
    SquareOccupied { coord: Coord },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::UnknownPiece { name } => {
                write!(f, "no piece definition named '{name}'")
            }
            SetupError::OffBoard { coord } => {
                write!(f, "setup coordinate {coord:?} is not on the board")
            }
            SetupError::SquareOccupied { coord } => {
                write!(f, "square {coord} is already occupied during setup")
            }
        }
    }
}

impl std::error::Error for SetupError {}
