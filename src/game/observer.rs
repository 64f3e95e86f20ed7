//! Turn and match lifecycle notifications.
//!
//! Reacting parties (console dumps, sound, UI) register as observers on the
//! match rather than polling it. All hooks default to no-ops so implementors
//! pick what they care about. Hooks are purely observational and never
//! influence rule outcomes.

use super::state::HistoryEntry;
use super::types::{MoveResult, PieceType, Player};

/// Receives match lifecycle events on the update thread.
pub trait MatchObserver {
    /// A move was applied; `result` is its semantic classification.
    fn on_move_executed(&self, _entry: &HistoryEntry, _result: MoveResult) {}

    /// The turn flipped; `snapshot` is an ASCII board dump for consoles.
    fn on_turn_started(&self, _player: Player, _snapshot: &str) {}

    /// A captured piece's grace period elapsed and it left the collection.
    fn on_piece_removed(&self, _name: &str, _owner: Player, _captured_type: PieceType) {}

    /// A king was captured; the match is over.
    fn on_match_finished(&self, _winner: Player) {}
}

/// Observer that forwards match events to the `log` facade.
#[cfg(feature = "logging")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingObserver;

#[cfg(feature = "logging")]
impl MatchObserver for LoggingObserver {
    fn on_move_executed(&self, entry: &HistoryEntry, result: MoveResult) {
        log::info!(
            "{} {} -> {} ({})",
            entry.piece_type,
            entry.from,
            entry.to,
            result
        );
    }

    fn on_turn_started(&self, player: Player, snapshot: &str) {
        log::info!("{player} to move");
        log::debug!("board:\n{snapshot}");
    }

    fn on_piece_removed(&self, name: &str, owner: Player, _captured_type: PieceType) {
        log::info!("{owner}'s {name} removed from play");
    }

    fn on_match_finished(&self, winner: Player) {
        log::info!("match over, {winner} wins");
    }
}
