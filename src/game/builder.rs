//! Fluent builder for constructing match positions.
//!
//! Lets tests and scenarios set up positions piece by piece instead of
//! spelling out setup records.
//!
//! # Example
//! ```
//! use chess_rules::game::{Coord, MatchBuilder, PieceType, Player};
//!
//! let game = MatchBuilder::new()
//!     .piece(Coord::new(5, 1), Player::One, PieceType::King)
//!     .piece(Coord::new(5, 8), Player::Two, PieceType::King)
//!     .piece(Coord::new(5, 2), Player::One, PieceType::Pawn)
//!     .build();
//! ```

use std::sync::Arc;

use super::catalog::{Catalog, SetupRecord};
use super::error::SetupError;
use super::state::{Match, MatchPhase};
use super::types::{Coord, PieceType, Player};

/// A fluent builder for `Match` positions.
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    catalog: Arc<Catalog>,
    records: Vec<SetupRecord>,
    active: Player,
    moved: Vec<Coord>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchBuilder {
    /// An empty board using the standard catalog.
    #[must_use]
    pub fn new() -> Self {
        MatchBuilder {
            catalog: Catalog::standard(),
            records: Vec::new(),
            active: Player::One,
            moved: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn piece(mut self, coord: Coord, owner: Player, piece_type: PieceType) -> Self {
        self.records
            .push(SetupRecord::new(piece_type.name(), owner, coord));
        self
    }

    /// Mark the piece placed on `coord` as having already moved.
    #[must_use]
    pub fn already_moved(mut self, coord: Coord) -> Self {
        self.moved.push(coord);
        self
    }

    #[must_use]
    pub fn active_player(mut self, player: Player) -> Self {
        self.active = player;
        self
    }

    /// Build the match, panicking on malformed setups.
    ///
    /// Intended for tests and fixed scenarios; fallible construction goes
    /// through [`Match::from_setup`].
    #[must_use]
    pub fn build(self) -> Match {
        match self.try_build() {
            Ok(game) => game,
            Err(err) => panic!("invalid builder setup: {err}"),
        }
    }

    pub fn try_build(self) -> Result<Match, SetupError> {
        let mut game = Match::from_setup(self.catalog, &self.records)?;
        for coord in self.moved {
            if let Some(id) = game.piece_at(coord).map(|(id, _)| id) {
                if let Some(piece) = game.piece_mut(id) {
                    piece.has_moved = true;
                }
            }
        }
        game.phase = MatchPhase::Moving(self.active);
        Ok(game)
    }
}
