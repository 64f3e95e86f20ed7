//! Square-occupancy bookkeeping owned by the board.
//!
//! The record list mirrors piece positions but is the authoritative answer to
//! "what holds this square". The executor updates it on every relocation and
//! removal; it must never diverge from the piece collection in ownership or
//! occupancy. At most one record exists per coordinate.

use super::error::SetupError;
use super::piece::Piece;
use super::types::{Coord, Player};

/// Per-square occupancy record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareRecord {
    /// Catalog name of the occupying piece.
    pub piece_name: String,
    /// Algebraic notation of the square.
    pub notation: String,
    pub owner: Player,
    pub coord: Coord,
    pub is_selected: bool,
    pub is_highlighted: bool,
}

impl SquareRecord {
    /// Build the record mirroring a piece's current state.
    #[must_use]
    pub fn mirroring(piece: &Piece) -> Self {
        SquareRecord {
            piece_name: piece.name().to_owned(),
            notation: piece.coord.to_notation(),
            owner: piece.owner,
            coord: piece.coord,
            is_selected: false,
            is_highlighted: false,
        }
    }
}

/// The occupancy side of the board state.
#[derive(Clone, Debug, Default)]
pub struct Board {
    squares: Vec<SquareRecord>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Board::default()
    }

    #[must_use]
    pub fn record_at(&self, coord: Coord) -> Option<&SquareRecord> {
        self.squares.iter().find(|r| r.coord == coord)
    }

    #[must_use]
    pub fn record_at_mut(&mut self, coord: Coord) -> Option<&mut SquareRecord> {
        self.squares.iter_mut().find(|r| r.coord == coord)
    }

    #[inline]
    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.record_at(coord).is_none()
    }

    #[must_use]
    pub fn owner_at(&self, coord: Coord) -> Option<Player> {
        self.record_at(coord).map(|r| r.owner)
    }

    /// Add a record for a newly placed piece.
    pub fn place(&mut self, record: SquareRecord) -> Result<(), SetupError> {
        if !record.coord.is_on_board() {
            return Err(SetupError::OffBoard {
                coord: record.coord,
            });
        }
        if self.record_at(record.coord).is_some() {
            return Err(SetupError::SquareOccupied {
                coord: record.coord,
            });
        }
        self.squares.push(record);
        Ok(())
    }

    /// Move a record between squares, keeping its selection flags.
    ///
    /// The destination must already be vacant; captures clear it first via
    /// [`Board::remove_at`].
    pub fn relocate(&mut self, from: Coord, to: Coord) -> bool {
        if self.record_at(to).is_some() {
            return false;
        }
        match self.record_at_mut(from) {
            Some(record) => {
                record.coord = to;
                record.notation = to.to_notation();
                true
            }
            None => false,
        }
    }

    /// Rename the record on a square (promotion swaps the piece identity).
    pub fn rename_at(&mut self, coord: Coord, piece_name: &str) -> bool {
        match self.record_at_mut(coord) {
            Some(record) => {
                record.piece_name = piece_name.to_owned();
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, coord: Coord) -> Option<SquareRecord> {
        let index = self.squares.iter().position(|r| r.coord == coord)?;
        Some(self.squares.swap_remove(index))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SquareRecord> {
        self.squares.iter()
    }
}
