//! Move execution: applies a validated move's side effects.

use super::arena::PieceId;
use super::state::{HistoryEntry, Match, MatchPhase};
use super::types::{Coord, MoveRequest, MoveResult, PieceType};

impl Match {
    /// Apply the requested move.
    ///
    /// Re-validates internally rather than trusting a result cached across
    /// frames; a stale or conflicting request returns `false` with no state
    /// mutated. On success the occupancy records for both squares are
    /// updated, the piece relocates with `has_moved` set, a history entry is
    /// appended, the turn flips, observers are notified, and — unless the
    /// move arrived remotely — the relay broadcast fires.
    pub fn execute(&mut self, req: &MoveRequest) -> bool {
        let result = self.validate(req);
        if !result.is_valid() {
            return false;
        }
        let Some((mover_id, mover)) = self.piece_at(req.from) else {
            return false;
        };
        let mover_type = mover.piece_type();
        let mover_owner = mover.owner;

        match result {
            MoveResult::ValidMoveNormal => {}
            MoveResult::ValidCaptureNormal => self.capture_at(req.to),
            MoveResult::ValidCaptureEnPassant => {
                // The passed pawn sits beside the mover, not on the
                // destination square. It is removed synchronously, without
                // the capture-animation grace period.
                let victim = Coord::new(req.to.file, req.from.rank);
                self.board.remove_at(victim);
                if let Some(victim_id) = self.piece_at(victim).map(|(id, _)| id) {
                    let _ = self.pieces.remove(victim_id);
                }
            }
            MoveResult::ValidMovePromotion => {
                if let Some(promoted) = req.promotion {
                    self.promote(mover_id, promoted);
                }
                if self.board.owner_at(req.to).is_some() {
                    self.capture_at(req.to);
                }
            }
            MoveResult::ValidCastleKingside | MoveResult::ValidCastleQueenside => {
                let kingside = result == MoveResult::ValidCastleKingside;
                let rook_from = Coord::new(if kingside { 8 } else { 1 }, req.from.rank);
                // The rook lands beside the king's new square, toward center.
                let rook_to = Coord::new((req.from.file + req.to.file) / 2, req.from.rank);
                self.relocate(rook_from, rook_to);
            }
            // Covered by is_valid() above.
            _ => return false,
        }

        self.relocate(req.from, req.to);

        let entry = HistoryEntry {
            piece: mover_id,
            piece_type: mover_type,
            from: req.from,
            to: req.to,
        };
        self.history.push(entry);
        self.phase = MatchPhase::Moving(mover_owner.opponent());

        for observer in &self.observers {
            observer.on_move_executed(&entry, result);
        }
        self.announce_turn();

        if !req.remote {
            if let Some(relay) = &self.relay {
                if relay.is_connected() {
                    // Fire-and-forget; no acknowledgment is awaited.
                    relay.notify_local_move(&req.from.to_notation(), &req.to.to_notation());
                }
            }
        }
        true
    }

    /// Move the piece and its occupancy record from one square to another.
    fn relocate(&mut self, from: Coord, to: Coord) {
        if let Some(id) = self.piece_at(from).map(|(id, _)| id) {
            if let Some(piece) = self.pieces.get_mut(id) {
                piece.coord = to;
                piece.has_moved = true;
            }
        }
        self.board.relocate(from, to);
    }

    /// Logically capture the piece on `coord`: clear its occupancy record at
    /// once, then hand it to the scheduler for delayed removal so the capture
    /// animation can play out.
    fn capture_at(&mut self, coord: Coord) {
        let Some((victim_id, victim)) = self.piece_at(coord) else {
            return;
        };
        let victim_type = victim.piece_type();
        self.board.remove_at(coord);
        if let Some(piece) = self.pieces.get_mut(victim_id) {
            piece.is_being_captured = true;
            piece.coord = Coord::INVALID;
        }
        self.scheduler.schedule(victim_id, victim_type);
    }

    /// Swap the piece's definition to the promotion target's.
    fn promote(&mut self, id: PieceId, target: PieceType) {
        let Some(definition) = self.catalog.definition_for(target) else {
            return;
        };
        let name = definition.name.clone();
        let coord = match self.pieces.get_mut(id) {
            Some(piece) => {
                piece.definition = definition;
                piece.coord
            }
            None => return,
        };
        self.board.rename_at(coord, &name);
    }

    /// Notify observers that the next turn has begun, with a board snapshot
    /// for the console dump.
    fn announce_turn(&self) {
        if self.observers.is_empty() {
            return;
        }
        if let MatchPhase::Moving(player) = self.phase {
            let snapshot = self.snapshot();
            for observer in &self.observers {
                observer.on_turn_started(player, &snapshot);
            }
        }
    }
}
