//! Deferred removal and win detection tests.

use crate::game::builder::MatchBuilder;
use crate::game::types::{Coord, MoveRequest, PieceType, Player};
use crate::game::{MatchPhase, CAPTURE_REMOVAL_DELAY};

fn req(from: &str, to: &str) -> MoveRequest {
    MoveRequest::new(Coord::from_notation(from), Coord::from_notation(to))
}

fn at(s: &str) -> Coord {
    Coord::from_notation(s)
}

#[test]
fn removal_waits_for_the_full_delay() {
    let mut game = MatchBuilder::new()
        .piece(at("d4"), Player::One, PieceType::Rook)
        .piece(at("d7"), Player::Two, PieceType::Knight)
        .build();
    assert!(game.execute(&req("d4", "d7")));
    assert_eq!(game.piece_count(), 2);

    game.tick(CAPTURE_REMOVAL_DELAY * 0.5);
    assert_eq!(game.piece_count(), 2);
    assert_eq!(game.pending_removals().len(), 1);

    game.tick(CAPTURE_REMOVAL_DELAY * 0.5);
    assert_eq!(game.piece_count(), 1);
    assert!(game.pending_removals().is_empty());
}

#[test]
fn custom_capture_delay_is_honored() {
    let mut game = MatchBuilder::new()
        .piece(at("d4"), Player::One, PieceType::Rook)
        .piece(at("d7"), Player::Two, PieceType::Knight)
        .build();
    game.set_capture_delay(0.25);
    assert!(game.execute(&req("d4", "d7")));

    game.tick(0.2);
    assert_eq!(game.piece_count(), 2);
    game.tick(0.1);
    assert_eq!(game.piece_count(), 1);
}

#[test]
fn simultaneous_removals_are_independent() {
    let mut game = MatchBuilder::new()
        .piece(at("d4"), Player::One, PieceType::Rook)
        .piece(at("d7"), Player::Two, PieceType::Knight)
        .piece(at("h4"), Player::One, PieceType::Queen)
        .piece(at("h7"), Player::Two, PieceType::Bishop)
        .piece(at("a7"), Player::Two, PieceType::Pawn)
        .build();
    assert!(game.execute(&req("d4", "d7")));
    game.tick(CAPTURE_REMOVAL_DELAY * 0.5);
    assert!(game.execute(&req("a7", "a6")));
    assert!(game.execute(&req("h4", "h7")));
    assert_eq!(game.pending_removals().len(), 2);

    // First victim expires, second still counting down.
    game.tick(CAPTURE_REMOVAL_DELAY * 0.5);
    assert_eq!(game.pending_removals().len(), 1);
    game.tick(CAPTURE_REMOVAL_DELAY);
    assert!(game.pending_removals().is_empty());
}

#[test]
fn king_capture_finishes_the_match_after_the_delay() {
    let mut game = MatchBuilder::new()
        .piece(at("d4"), Player::One, PieceType::Rook)
        .piece(at("d8"), Player::Two, PieceType::King)
        .piece(at("a1"), Player::One, PieceType::King)
        .build();
    assert!(game.execute(&req("d4", "d8")));

    // Not over until the removal actually lands.
    assert_eq!(game.phase(), MatchPhase::Moving(Player::Two));
    game.tick(CAPTURE_REMOVAL_DELAY * 0.9);
    assert_eq!(game.phase(), MatchPhase::Moving(Player::Two));

    game.tick(CAPTURE_REMOVAL_DELAY * 0.2);
    assert_eq!(
        game.phase(),
        MatchPhase::Finished {
            winner: Player::One
        }
    );

    // Further ticks change nothing.
    game.tick(CAPTURE_REMOVAL_DELAY * 2.0);
    assert_eq!(
        game.phase(),
        MatchPhase::Finished {
            winner: Player::One
        }
    );
}

#[test]
fn stale_piece_handles_resolve_to_none() {
    let mut game = MatchBuilder::new()
        .piece(at("d4"), Player::One, PieceType::Rook)
        .piece(at("d7"), Player::Two, PieceType::Knight)
        .build();
    let (victim_id, _) = game.piece_at(at("d7")).expect("knight");
    assert!(game.execute(&req("d4", "d7")));

    // Mid-animation the handle still resolves.
    assert!(game.piece(victim_id).is_some());
    game.tick(CAPTURE_REMOVAL_DELAY * 2.0);
    assert!(game.piece(victim_id).is_none());
}
