//! Move validation: legality pipeline and semantic classification.
//!
//! Validation is pure with respect to match state; it reads the board, the
//! piece collection and the move history but mutates nothing. The pipeline
//! short-circuits on the first failure and always returns the most specific
//! applicable [`MoveResult`].

use super::piece::Piece;
use super::state::{Match, MatchPhase};
use super::types::{Coord, MoveRequest, MoveResult, PieceType, Player};

impl Match {
    /// Decide legality and classify the requested move.
    ///
    /// Never panics and never returns [`MoveResult::Unknown`].
    #[must_use]
    pub fn validate(&self, req: &MoveRequest) -> MoveResult {
        // Sentinel/off-board coordinates are rejected before anything else.
        if !req.from.is_on_board() || !req.to.is_on_board() {
            return MoveResult::BadLocation;
        }
        let active = match self.phase {
            MatchPhase::Moving(player) => player,
            MatchPhase::Attract | MatchPhase::Finished { .. } => return MoveResult::MatchOver,
        };
        let Some((_, mover)) = self.piece_at(req.from) else {
            return MoveResult::NoPiece;
        };
        if mover.owner != active {
            return MoveResult::NotYourPiece;
        }
        if req.from == req.to {
            return MoveResult::ZeroDistance;
        }

        let destination_owner = self.board.owner_at(req.to);
        if req.teleport {
            // Debug bypass: everything below is skipped.
            return if destination_owner.is_some() {
                MoveResult::ValidCaptureNormal
            } else {
                MoveResult::ValidMoveNormal
            };
        }
        if destination_owner == Some(active) {
            return MoveResult::DestinationBlocked;
        }

        let (dx, dy) = req.from.delta_to(req.to);
        match mover.piece_type() {
            PieceType::Pawn => self.validate_pawn(mover, req, destination_owner.is_some()),
            PieceType::Knight => {
                if is_knight_shape(dx, dy) {
                    classify_plain(destination_owner.is_some())
                } else {
                    MoveResult::WrongShape
                }
            }
            PieceType::Rook => self.validate_slider(req, is_rook_shape(dx, dy), destination_owner),
            PieceType::Bishop => {
                self.validate_slider(req, is_bishop_shape(dx, dy), destination_owner)
            }
            PieceType::Queen => self.validate_slider(
                req,
                is_rook_shape(dx, dy) || is_bishop_shape(dx, dy),
                destination_owner,
            ),
            PieceType::King => self.validate_king(mover, req, dx, dy, destination_owner),
        }
    }

    fn validate_slider(
        &self,
        req: &MoveRequest,
        shape_ok: bool,
        destination_owner: Option<Player>,
    ) -> MoveResult {
        if !shape_ok {
            return MoveResult::WrongShape;
        }
        if !self.path_clear(req.from, req.to) {
            return MoveResult::PathBlocked;
        }
        classify_plain(destination_owner.is_some())
    }

    fn validate_king(
        &self,
        mover: &Piece,
        req: &MoveRequest,
        dx: i8,
        dy: i8,
        destination_owner: Option<Player>,
    ) -> MoveResult {
        let single_step = dx.abs() <= 1 && dy.abs() <= 1;
        let castle_shape = dy == 0 && dx.abs() == 2;
        if !single_step && !castle_shape {
            return MoveResult::WrongShape;
        }
        // The one king-safety rule in this rule set: never step next to the
        // enemy king. Full check detection does not exist.
        if let Some((_, enemy_king)) = self.king_of(mover.owner.opponent()) {
            let (kx, ky) = req.to.delta_to(enemy_king.coord);
            if kx.abs() <= 1 && ky.abs() <= 1 {
                return MoveResult::WrongShape;
            }
        }
        if single_step {
            return classify_plain(destination_owner.is_some());
        }
        self.validate_castle(mover, req, dx)
    }

    fn validate_castle(&self, king: &Piece, req: &MoveRequest, dx: i8) -> MoveResult {
        if king.has_moved {
            return MoveResult::CastleKingMoved;
        }
        let kingside = dx > 0;
        let rook_coord = Coord::new(if kingside { 8 } else { 1 }, req.from.rank);
        let rook = match self.piece_at(rook_coord) {
            Some((_, piece))
                if piece.piece_type() == PieceType::Rook && piece.owner == king.owner =>
            {
                piece
            }
            _ => return MoveResult::CastleRookMissing,
        };
        if rook.has_moved {
            return MoveResult::CastleRookMoved;
        }
        if !self.path_clear(req.from, rook_coord) {
            return MoveResult::CastlePathBlocked;
        }
        if kingside {
            MoveResult::ValidCastleKingside
        } else {
            MoveResult::ValidCastleQueenside
        }
    }

    fn validate_pawn(&self, pawn: &Piece, req: &MoveRequest, capturing: bool) -> MoveResult {
        let forward = pawn.owner.forward();
        let (dx, dy) = req.from.delta_to(req.to);
        let promoting = req.to.rank == pawn.owner.promotion_rank();

        if dx == 0 && dy == forward {
            // Single push; only legal onto an empty square.
            if capturing {
                return MoveResult::WrongShape;
            }
            return self.classify_pawn(req, promoting, false);
        }
        if dx == 0 && dy == 2 * forward {
            let eligible = req.from.rank == pawn.owner.pawn_home_rank() || !pawn.has_moved;
            // Only the destination is checked for emptiness; the square the
            // pawn steps over is not. A pawn can double-step over a blocker.
            if !eligible || capturing {
                return MoveResult::WrongShape;
            }
            return MoveResult::ValidMoveNormal;
        }
        if dx.abs() == 1 && dy == forward {
            if capturing {
                return self.classify_pawn(req, promoting, false);
            }
            // Diagonal onto an empty square is only ever en passant.
            if self.en_passant_allowed(req.from, req.to) {
                return self.classify_pawn(req, promoting, true);
            }
            return MoveResult::StaleEnPassant;
        }
        MoveResult::WrongShape
    }

    fn classify_pawn(&self, req: &MoveRequest, promoting: bool, en_passant: bool) -> MoveResult {
        if promoting {
            // Far-rank arrival requires a recognized promotion designator,
            // whether or not the move also captures. Typed requests (relay
            // messages included) are filtered here, not just the by-name
            // constructor.
            return if req.promotion.is_some_and(|p| p.is_promotion_target()) {
                MoveResult::ValidMovePromotion
            } else {
                MoveResult::BadPromotion
            };
        }
        if en_passant {
            MoveResult::ValidCaptureEnPassant
        } else if self.board.owner_at(req.to).is_some() {
            MoveResult::ValidCaptureNormal
        } else {
            MoveResult::ValidMoveNormal
        }
    }

    /// Whether the immediately preceding move opened an en passant window
    /// that this `from -> to` diagonal closes.
    fn en_passant_allowed(&self, from: Coord, to: Coord) -> bool {
        let Some(last) = self.history.last() else {
            return false;
        };
        if last.piece_type != PieceType::Pawn {
            return false;
        }
        if (last.to.rank - last.from.rank).abs() != 2 {
            return false;
        }
        // The victim sits beside the mover, on the double-step's end square,
        // and the capture lands on the rank the victim skipped.
        let victim = Coord::new(to.file, from.rank);
        last.to == victim && to.rank == (last.from.rank + last.to.rank) / 2
    }

    /// Every square strictly between `from` and `to` is empty.
    ///
    /// Only meaningful for straight or diagonal lines; the destination itself
    /// is not inspected.
    fn path_clear(&self, from: Coord, to: Coord) -> bool {
        let (dx, dy) = from.delta_to(to);
        let step = (dx.signum(), dy.signum());
        let mut cursor = Coord::new(from.file + step.0, from.rank + step.1);
        while cursor != to {
            if !self.board.is_empty_at(cursor) {
                return false;
            }
            cursor = Coord::new(cursor.file + step.0, cursor.rank + step.1);
        }
        true
    }
}

#[inline]
fn classify_plain(capturing: bool) -> MoveResult {
    if capturing {
        MoveResult::ValidCaptureNormal
    } else {
        MoveResult::ValidMoveNormal
    }
}

#[inline]
fn is_rook_shape(dx: i8, dy: i8) -> bool {
    (dx == 0) != (dy == 0)
}

#[inline]
fn is_bishop_shape(dx: i8, dy: i8) -> bool {
    dx != 0 && dx.abs() == dy.abs()
}

#[inline]
fn is_knight_shape(dx: i8, dy: i8) -> bool {
    matches!((dx.abs(), dy.abs()), (2, 1) | (1, 2))
}
