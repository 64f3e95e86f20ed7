//! Core value types: coordinates, piece identity, move requests and results.

mod coord;
mod piece;
mod result;

pub use coord::Coord;
pub use piece::{PieceType, Player};
pub use result::{MoveRequest, MoveResult};
