//! Deferred removal of captured pieces.
//!
//! A capture updates occupancy instantly (rule correctness) but leaves the
//! piece in the active collection for a grace period so its capture animation
//! can play. Each frame the scheduler counts the entries down; pieces crossing
//! zero are removed for good, and a captured king ends the match.

use super::arena::PieceId;
use super::state::{Match, MatchPhase};
use super::types::PieceType;

/// Seconds between a logical capture and the piece leaving the collection.
pub const CAPTURE_REMOVAL_DELAY: f32 = 1.0;

/// A piece waiting out its capture animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingRemoval {
    pub piece: PieceId,
    pub remaining: f32,
    pub captured_type: PieceType,
}

/// Countdown list of pending removals. Entries are independent and unordered.
#[derive(Clone, Debug)]
pub(crate) struct RemovalScheduler {
    pending: Vec<PendingRemoval>,
    delay: f32,
}

impl RemovalScheduler {
    pub(crate) fn new() -> Self {
        RemovalScheduler {
            pending: Vec::new(),
            delay: CAPTURE_REMOVAL_DELAY,
        }
    }

    pub(crate) fn set_delay(&mut self, seconds: f32) {
        self.delay = seconds;
    }

    /// Arm one entry for a freshly captured piece.
    pub(crate) fn schedule(&mut self, piece: PieceId, captured_type: PieceType) {
        self.pending.push(PendingRemoval {
            piece,
            remaining: self.delay,
            captured_type,
        });
    }

    /// Count down and extract every entry whose time has elapsed.
    pub(crate) fn advance(&mut self, dt_seconds: f32) -> Vec<PendingRemoval> {
        let mut expired = Vec::new();
        self.pending.retain_mut(|entry| {
            entry.remaining -= dt_seconds;
            if entry.remaining <= 0.0 {
                expired.push(*entry);
                false
            } else {
                true
            }
        });
        expired
    }

    pub(crate) fn pending(&self) -> &[PendingRemoval] {
        &self.pending
    }
}

impl Match {
    /// Per-frame update: finalize removals whose delay has elapsed.
    ///
    /// A finalized king transitions the match to [`MatchPhase::Finished`]
    /// exactly once; the winner is the captured king's opponent.
    pub fn tick(&mut self, dt_seconds: f32) {
        for entry in self.scheduler.advance(dt_seconds) {
            let Some(piece) = self.pieces.remove(entry.piece) else {
                continue;
            };
            for observer in &self.observers {
                observer.on_piece_removed(piece.name(), piece.owner, entry.captured_type);
            }
            if entry.captured_type == PieceType::King {
                if let MatchPhase::Moving(_) = self.phase {
                    let winner = piece.owner.opponent();
                    self.phase = MatchPhase::Finished { winner };
                    for observer in &self.observers {
                        observer.on_match_finished(winner);
                    }
                }
            }
        }
    }

    /// Pieces currently waiting out their capture animation.
    #[must_use]
    pub fn pending_removals(&self) -> &[PendingRemoval] {
        self.scheduler.pending()
    }
}
