//! Match root state: piece collection, move history, phase machine.

use std::sync::Arc;

use super::arena::{PieceArena, PieceId};
use super::catalog::{standard_setup, Catalog, SetupRecord};
use super::error::SetupError;
use super::observer::MatchObserver;
use super::occupancy::{Board, SquareRecord};
use super::piece::Piece;
use super::relay::MoveRelay;
use super::removal::RemovalScheduler;
use super::types::{Coord, PieceType, Player};

/// One executed move, appended in chronological order.
///
/// The history is append-only for the match's duration; its only rule use is
/// deciding en passant staleness, which needs the immediately preceding entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub piece: PieceId,
    /// Type at the time the move was made (promotion changes the piece later).
    pub piece_type: PieceType,
    pub from: Coord,
    pub to: Coord,
}

/// Match lifecycle.
///
/// Connection handshakes live in the networking layer; the core only tracks
/// "no match running", the two-player alternation, and the terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    /// No match in progress (attract screen).
    Attract,
    /// The named player is to move.
    Moving(Player),
    /// King captured. Terminal; no further moves are accepted.
    Finished { winner: Player },
}

/// A chess match: the piece collection, occupancy board, history, pending
/// removals and turn state.
///
/// All mutation happens through [`Match::execute`] and [`Match::tick`], both
/// expected to run on the host's single update thread. Remote moves must be
/// funneled through a [`super::RemoteQueue`] and drained once per frame with
/// [`Match::pump_remote`], never applied from a receive callback.
pub struct Match {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) pieces: PieceArena,
    pub(crate) board: Board,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) scheduler: RemovalScheduler,
    pub(crate) phase: MatchPhase,
    pub(crate) observers: Vec<Box<dyn MatchObserver>>,
    pub(crate) relay: Option<Box<dyn MoveRelay>>,
}

impl Match {
    /// An idle match with no pieces, sitting on the attract screen.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Match {
            catalog,
            pieces: PieceArena::new(),
            board: Board::new(),
            history: Vec::new(),
            scheduler: RemovalScheduler::new(),
            phase: MatchPhase::Attract,
            observers: Vec::new(),
            relay: None,
        }
    }

    /// Build a match from board-definition records and start it.
    pub fn from_setup(catalog: Arc<Catalog>, records: &[SetupRecord]) -> Result<Self, SetupError> {
        let mut game = Match::new(catalog);
        game.setup(records)?;
        Ok(game)
    }

    /// A regulation match from the standard catalog and starting position.
    #[must_use]
    pub fn standard() -> Self {
        match Match::from_setup(Catalog::standard(), standard_setup()) {
            Ok(game) => game,
            // The built-in setup never references unknown pieces or bad squares.
            Err(_) => unreachable!("standard setup is well-formed"),
        }
    }

    /// Place pieces per the setup records and enter the first turn.
    pub fn setup(&mut self, records: &[SetupRecord]) -> Result<(), SetupError> {
        for record in records {
            let definition = self
                .catalog
                .definition_by_name(&record.piece_name)
                .ok_or_else(|| SetupError::UnknownPiece {
                    name: record.piece_name.clone(),
                })?;
            if !record.coord.is_on_board() {
                return Err(SetupError::OffBoard {
                    coord: record.coord,
                });
            }
            let piece = Piece::new(definition, record.owner, record.coord);
            self.board.place(SquareRecord::mirroring(&piece))?;
            let _ = self.pieces.insert(piece);
        }
        self.phase = MatchPhase::Moving(Player::One);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The player to move, if the match is running.
    #[must_use]
    pub fn active_player(&self) -> Option<Player> {
        match self.phase {
            MatchPhase::Moving(player) => Some(player),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    #[must_use]
    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id)
    }

    /// Number of pieces still in the active collection (including those
    /// waiting out their capture animation).
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter()
    }

    /// Mutable piece access for the input/selection layer to maintain the
    /// presentation flags. Rule state goes through [`Match::execute`].
    pub fn pieces_mut(&mut self) -> impl Iterator<Item = (PieceId, &mut Piece)> {
        self.pieces.iter_mut()
    }

    /// The piece standing on a square, skipping mid-capture pieces.
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<(PieceId, &Piece)> {
        self.pieces
            .iter()
            .find(|(_, p)| !p.is_being_captured && p.coord == coord)
    }

    /// The player's king, if still in play.
    #[must_use]
    pub fn king_of(&self, player: Player) -> Option<(PieceId, &Piece)> {
        self.pieces.iter().find(|(_, p)| {
            !p.is_being_captured && p.owner == player && p.piece_type() == PieceType::King
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    pub fn set_relay(&mut self, relay: Box<dyn MoveRelay>) {
        self.relay = Some(relay);
    }

    /// Override the capture-animation delay (seconds) for this match.
    pub fn set_capture_delay(&mut self, seconds: f32) {
        self.scheduler.set_delay(seconds);
    }
}
