//! Move requests and the move-result taxonomy.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::piece::PieceType;

/// Outcome of validating a requested move.
///
/// Every rule violation is a value here, never an error or a panic. The six
/// `Valid*` variants double as the move's semantic classification, consumed
/// by the executor to pick its side effects. Match exhaustively; new variants
/// are intentionally a breaking change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveResult {
    /// Default/uninitialized marker. Never returned by validation.
    #[default]
    Unknown,

    /// Plain relocation, no capture or special effect.
    ValidMoveNormal,
    /// Pawn arrival on the farthest rank (with or without a capture).
    ValidMovePromotion,
    /// Relocation onto an enemy-occupied square.
    ValidCaptureNormal,
    /// Pawn diagonal onto an empty square, taking the just-double-stepped pawn.
    ValidCaptureEnPassant,
    /// King two files toward the h-file rook.
    ValidCastleKingside,
    /// King two files toward the a-file rook.
    ValidCastleQueenside,

    /// A coordinate is off the board (or the invalid sentinel).
    BadLocation,
    /// No piece on the source square.
    NoPiece,
    /// Source piece belongs to the opponent.
    NotYourPiece,
    /// Source and destination are the same square.
    ZeroDistance,
    /// The piece does not move that way.
    WrongShape,
    /// Destination is held by the mover's own piece.
    DestinationBlocked,
    /// A square between source and destination is occupied.
    PathBlocked,
    /// En passant window has closed (or never opened).
    StaleEnPassant,
    /// Promotion-rank arrival without a recognized promotion designator.
    BadPromotion,
    /// The king has already moved.
    CastleKingMoved,
    /// The corner rook has already moved.
    CastleRookMoved,
    /// No rook of the mover's on the corner square.
    CastleRookMissing,
    /// A square between king and rook is occupied.
    CastlePathBlocked,
    /// No match is accepting moves: either none has started yet or a king
    /// has been captured and the match is decided.
    MatchOver,
}

impl MoveResult {
    /// Whether this result permits execution.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(
            self,
            MoveResult::ValidMoveNormal
                | MoveResult::ValidMovePromotion
                | MoveResult::ValidCaptureNormal
                | MoveResult::ValidCaptureEnPassant
                | MoveResult::ValidCastleKingside
                | MoveResult::ValidCastleQueenside
        )
    }

    /// Human-readable description, suitable for surfacing to the player.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            MoveResult::Unknown => "move was not evaluated",
            MoveResult::ValidMoveNormal => "move",
            MoveResult::ValidMovePromotion => "pawn promotion",
            MoveResult::ValidCaptureNormal => "capture",
            MoveResult::ValidCaptureEnPassant => "en passant capture",
            MoveResult::ValidCastleKingside => "kingside castle",
            MoveResult::ValidCastleQueenside => "queenside castle",
            MoveResult::BadLocation => "square is not on the board",
            MoveResult::NoPiece => "no piece on that square",
            MoveResult::NotYourPiece => "that piece is not yours",
            MoveResult::ZeroDistance => "piece is already there",
            MoveResult::WrongShape => "that piece does not move that way",
            MoveResult::DestinationBlocked => "one of your pieces is in the way",
            MoveResult::PathBlocked => "a piece is blocking the path",
            MoveResult::StaleEnPassant => "the en passant opportunity has passed",
            MoveResult::BadPromotion => "promotion requires a valid piece choice",
            MoveResult::CastleKingMoved => "cannot castle after the king has moved",
            MoveResult::CastleRookMoved => "cannot castle after the rook has moved",
            MoveResult::CastleRookMissing => "no rook available to castle with",
            MoveResult::CastlePathBlocked => "pieces are between the king and rook",
            MoveResult::MatchOver => "no match is in progress",
        }
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A candidate move handed to the validator/executor.
///
/// Built by the selection layer for local input, or from a relay message for
/// remote moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Coord,
    pub to: Coord,
    /// Promotion target; `None` when absent or unrecognized.
    pub promotion: Option<PieceType>,
    /// Debug bypass: skips shape, path and ownership-of-destination rules.
    pub teleport: bool,
    /// Arrived from the opponent's side; suppresses the relay re-broadcast.
    pub remote: bool,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        MoveRequest {
            from,
            to,
            promotion: None,
            teleport: false,
            remote: false,
        }
    }

    #[must_use]
    pub const fn promoting_to(mut self, piece: PieceType) -> Self {
        self.promotion = Some(piece);
        self
    }

    /// Attach a promotion designator by name.
    ///
    /// Unrecognized designators (and "pawn"/"king") leave the promotion unset,
    /// which the validator reports as [`MoveResult::BadPromotion`] if the move
    /// actually reaches the farthest rank.
    #[must_use]
    pub fn with_promotion_name(mut self, name: &str) -> Self {
        self.promotion = PieceType::from_name(name).filter(|p| p.is_promotion_target());
        self
    }

    #[must_use]
    pub const fn via_teleport(mut self) -> Self {
        self.teleport = true;
        self
    }

    #[must_use]
    pub const fn from_remote(mut self) -> Self {
        self.remote = true;
        self
    }
}
