//! Piece and player types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in setup order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// The four legal promotion targets.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Parse a definition/promotion designator ("queen", "rook", ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<PieceType> {
        match name {
            "pawn" => Some(PieceType::Pawn),
            "bishop" => Some(PieceType::Bishop),
            "knight" => Some(PieceType::Knight),
            "rook" => Some(PieceType::Rook),
            "queen" => Some(PieceType::Queen),
            "king" => Some(PieceType::King),
            _ => None,
        }
    }

    /// Canonical lowercase name used by the definition catalog.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }

    /// Single-letter notation (knight is 'n').
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Whether this type may be promoted to.
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceType::Pawn | PieceType::King)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the two match participants.
///
/// `One` (id 0) advances toward increasing ranks, `Two` (id 1) toward
/// decreasing ranks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::One),
            1 => Some(Player::Two),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Rank direction this player's pawns advance in.
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Rank this player's pawns start on.
    #[inline]
    #[must_use]
    pub const fn pawn_home_rank(self) -> i8 {
        match self {
            Player::One => 2,
            Player::Two => 7,
        }
    }

    /// Farthest rank; a pawn arriving here must promote.
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Player::One => 8,
            Player::Two => 1,
        }
    }

    /// Rank this player's king and rooks start on.
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => 8,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("player 1"),
            Player::Two => f.write_str("player 2"),
        }
    }
}
