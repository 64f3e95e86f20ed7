//! Board coordinates and algebraic square notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game::error::NotationError;

/// A square on the board as a one-based `(file, rank)` pair.
///
/// Files and ranks run `1..=8`; `a1` is `(1, 1)` and `h8` is `(8, 8)`.
/// Coordinates outside that range are never occupied. [`Coord::INVALID`] is
/// the sentinel produced by failed notation parses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    /// Sentinel for "invalid/unparsed".
    pub const INVALID: Coord = Coord { file: -1, rank: -1 };

    #[inline]
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Coord { file, rank }
    }

    /// Whether this coordinate addresses one of the 64 squares.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.file >= 1 && self.file <= 8 && self.rank >= 1 && self.rank <= 8
    }

    /// File/rank deltas from `self` to `to`.
    #[inline]
    #[must_use]
    pub const fn delta_to(self, to: Coord) -> (i8, i8) {
        (to.file - self.file, to.rank - self.rank)
    }

    /// Parse two-character algebraic notation (`a1`..`h8`).
    ///
    /// Anything else (wrong length, characters out of range) yields
    /// [`Coord::INVALID`] rather than an error; callers that want diagnostics
    /// use the `FromStr` impl instead.
    #[must_use]
    pub fn from_notation(s: &str) -> Coord {
        s.parse().unwrap_or(Coord::INVALID)
    }

    /// Algebraic notation for an on-board coordinate, `"??"` otherwise.
    #[must_use]
    pub fn to_notation(self) -> String {
        if !self.is_on_board() {
            return "??".to_owned();
        }
        let file = (b'a' + (self.file - 1) as u8) as char;
        let rank = (b'0' + self.rank as u8) as char;
        format!("{file}{rank}")
    }
}

impl FromStr for Coord {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(NotationError::BadLength { len: bytes.len() });
        }
        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) {
            return Err(NotationError::BadFile { found: file as char });
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(NotationError::BadRank { found: rank as char });
        }
        Ok(Coord::new((file - b'a') as i8 + 1, (rank - b'0') as i8))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
