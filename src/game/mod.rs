//! Chess match state and rules logic.
//!
//! Validates requested moves against the reduced rule set (no check or
//! checkmate detection; king capture ends the match), applies their side
//! effects, and advances turns. Rendering, input, asset loading and network
//! transport live outside this crate and talk to it through the observer and
//! relay traits.
//!
//! # Example
//! ```
//! use chess_rules::game::{Coord, Match, MoveRequest, MoveResult};
//!
//! let mut game = Match::standard();
//! let req = MoveRequest::new(Coord::from_notation("e2"), Coord::from_notation("e4"));
//! assert_eq!(game.validate(&req), MoveResult::ValidMoveNormal);
//! assert!(game.execute(&req));
//! ```

mod arena;
mod builder;
mod catalog;
mod debug;
mod error;
mod execute;
mod observer;
mod occupancy;
mod piece;
mod relay;
mod removal;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use arena::PieceId;
pub use builder::MatchBuilder;
pub use catalog::{standard_setup, Catalog, PieceDefinition, SetupRecord};
pub use error::{NotationError, SetupError};
pub use observer::MatchObserver;
pub use occupancy::{Board, SquareRecord};
pub use piece::Piece;
pub use relay::{MoveRelay, RemoteMove, RemoteQueue};
pub use removal::{PendingRemoval, CAPTURE_REMOVAL_DELAY};
pub use state::{HistoryEntry, Match, MatchPhase};
pub use types::{Coord, MoveRequest, MoveResult, PieceType, Player};

#[cfg(feature = "logging")]
pub use observer::LoggingObserver;
