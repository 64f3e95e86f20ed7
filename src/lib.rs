pub mod game;

pub use game::{
    Catalog, Coord, Match, MatchBuilder, MatchPhase, MoveRequest, MoveResult, PieceType, Player,
};
