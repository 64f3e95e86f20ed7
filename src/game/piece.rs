//! Live piece instances.

use std::sync::Arc;

use super::catalog::PieceDefinition;
use super::types::{Coord, PieceType, Player};

/// A piece in play.
///
/// Identity comes from the shared definition; `has_moved` drives the pawn
/// double step and castling eligibility. The three presentation flags persist
/// across frames for the input/render layers but never influence rule
/// decisions here.
#[derive(Clone, Debug)]
pub struct Piece {
    pub definition: Arc<PieceDefinition>,
    pub owner: Player,
    pub coord: Coord,
    pub has_moved: bool,
    pub is_selected: bool,
    pub is_highlighted: bool,
    pub is_being_captured: bool,
}

impl Piece {
    #[must_use]
    pub fn new(definition: Arc<PieceDefinition>, owner: Player, coord: Coord) -> Self {
        Piece {
            definition,
            owner,
            coord,
            has_moved: false,
            is_selected: false,
            is_highlighted: false,
            is_being_captured: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_type(&self) -> PieceType {
        self.definition.piece_type
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }
}
