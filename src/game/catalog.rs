//! Read-only piece definitions and board-setup records.
//!
//! Definitions are loaded once (by the host's asset layer, or from
//! [`Catalog::standard`]) and shared read-only across every piece that
//! references them. The catalog is injected into match construction rather
//! than reached through process-wide state.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::types::{Coord, PieceType, Player};

/// Immutable identity shared by every piece of one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceDefinition {
    /// Catalog lookup name ("pawn", "queen", ...).
    pub name: String,
    pub piece_type: PieceType,
    /// Single-letter board notation.
    pub notation: char,
}

/// Shared read-only collection of piece definitions.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    definitions: Vec<Arc<PieceDefinition>>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn add(&mut self, definition: PieceDefinition) {
        self.definitions.push(Arc::new(definition));
    }

    /// Look up a definition by its catalog name.
    #[must_use]
    pub fn definition_by_name(&self, name: &str) -> Option<Arc<PieceDefinition>> {
        self.definitions.iter().find(|d| d.name == name).cloned()
    }

    /// Look up a definition by piece type.
    #[must_use]
    pub fn definition_for(&self, piece_type: PieceType) -> Option<Arc<PieceDefinition>> {
        self.definitions
            .iter()
            .find(|d| d.piece_type == piece_type)
            .cloned()
    }

    /// The regulation six-piece catalog, built once and shared.
    #[must_use]
    pub fn standard() -> Arc<Catalog> {
        static STANDARD: Lazy<Arc<Catalog>> = Lazy::new(|| {
            let mut catalog = Catalog::new();
            for piece_type in PieceType::ALL {
                catalog.add(PieceDefinition {
                    name: piece_type.name().to_owned(),
                    piece_type,
                    notation: piece_type.to_char(),
                });
            }
            Arc::new(catalog)
        });
        Arc::clone(&STANDARD)
    }
}

/// One piece placement loaded from board-definition data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupRecord {
    /// Catalog name of the piece to place.
    pub piece_name: String,
    /// Algebraic notation of the target square.
    pub notation: String,
    pub owner: Player,
    pub coord: Coord,
}

impl SetupRecord {
    #[must_use]
    pub fn new(piece_name: &str, owner: Player, coord: Coord) -> Self {
        SetupRecord {
            piece_name: piece_name.to_owned(),
            notation: coord.to_notation(),
            owner,
            coord,
        }
    }
}

/// The regulation starting position, 32 records.
#[must_use]
pub fn standard_setup() -> &'static [SetupRecord] {
    static SETUP: Lazy<Vec<SetupRecord>> = Lazy::new(|| {
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        let mut records = Vec::with_capacity(32);
        for (i, piece_type) in back_rank.iter().enumerate() {
            let file = i as i8 + 1;
            records.push(SetupRecord::new(
                piece_type.name(),
                Player::One,
                Coord::new(file, 1),
            ));
            records.push(SetupRecord::new(
                piece_type.name(),
                Player::Two,
                Coord::new(file, 8),
            ));
        }
        for file in 1..=8 {
            records.push(SetupRecord::new("pawn", Player::One, Coord::new(file, 2)));
            records.push(SetupRecord::new("pawn", Player::Two, Coord::new(file, 7)));
        }
        records
    });
    &SETUP
}
