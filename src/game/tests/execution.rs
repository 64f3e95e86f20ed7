//! Move execution tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::game::builder::MatchBuilder;
use crate::game::relay::MoveRelay;
use crate::game::types::{Coord, MoveRequest, MoveResult, PieceType, Player};
use crate::game::Match;

fn req(from: &str, to: &str) -> MoveRequest {
    MoveRequest::new(Coord::from_notation(from), Coord::from_notation(to))
}

fn at(s: &str) -> Coord {
    Coord::from_notation(s)
}

#[test]
fn execute_relocates_and_flips_turn() {
    let mut game = Match::standard();
    assert_eq!(game.active_player(), Some(Player::One));
    assert!(game.execute(&req("e2", "e4")));

    assert!(game.board().is_empty_at(at("e2")));
    let record = game.board().record_at(at("e4")).expect("record moved");
    assert_eq!(record.piece_name, "pawn");
    assert_eq!(record.owner, Player::One);
    assert_eq!(record.notation, "e4");

    let (_, piece) = game.piece_at(at("e4")).expect("piece moved");
    assert!(piece.has_moved);
    assert_eq!(game.active_player(), Some(Player::Two));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn execute_rejects_invalid_without_mutation() {
    let mut game = Match::standard();
    let pieces_before = game.piece_count();
    assert!(!game.execute(&req("e2", "e5")));
    assert!(!game.execute(&req("e7", "e5")));
    assert_eq!(game.piece_count(), pieces_before);
    assert_eq!(game.history().len(), 0);
    assert_eq!(game.active_player(), Some(Player::One));
}

#[test]
fn repeating_a_move_fails_after_the_turn_flips() {
    let mut game = Match::standard();
    let request = req("e2", "e4");
    assert_eq!(game.validate(&request), MoveResult::ValidMoveNormal);
    assert!(game.execute(&request));
    // Same mover again: it is the other player's turn now.
    assert_eq!(
        game.validate(&req("e4", "e5")),
        MoveResult::NotYourPiece
    );
}

#[test]
fn capture_clears_occupancy_but_defers_removal() {
    let mut game = MatchBuilder::new()
        .piece(at("d4"), Player::One, PieceType::Rook)
        .piece(at("d7"), Player::Two, PieceType::Knight)
        .build();
    assert_eq!(game.piece_count(), 2);
    assert!(game.execute(&req("d4", "d7")));

    // Occupancy switched hands instantly.
    let record = game.board().record_at(at("d7")).expect("rook record");
    assert_eq!(record.owner, Player::One);
    assert_eq!(game.board().len(), 1);

    // The knight is still in the collection, flagged and off-square.
    assert_eq!(game.piece_count(), 2);
    assert_eq!(game.pending_removals().len(), 1);
    let victim = game
        .pieces()
        .find(|(_, p)| p.is_being_captured)
        .map(|(_, p)| p.clone())
        .expect("victim still present");
    assert_eq!(victim.coord, Coord::INVALID);
    assert_eq!(victim.piece_type(), PieceType::Knight);
}

#[test]
fn en_passant_victim_removed_immediately() {
    let mut game = MatchBuilder::new()
        .piece(at("e5"), Player::One, PieceType::Pawn)
        .piece(at("f7"), Player::Two, PieceType::Pawn)
        .active_player(Player::Two)
        .build();
    assert!(game.execute(&req("f7", "f5")));
    assert!(game.execute(&req("e5", "f6")));

    // Mover landed on f6; the victim vanished from f5 with no grace period.
    assert!(game.piece_at(at("f6")).is_some());
    assert!(game.board().is_empty_at(at("f5")));
    assert_eq!(game.piece_count(), 1);
    assert!(game.pending_removals().is_empty());
}

#[test]
fn promotion_swaps_definition_and_record() {
    let mut game = MatchBuilder::new()
        .piece(at("e7"), Player::One, PieceType::Pawn)
        .build();
    assert!(game.execute(&req("e7", "e8").with_promotion_name("queen")));

    let (_, piece) = game.piece_at(at("e8")).expect("promoted piece");
    assert_eq!(piece.piece_type(), PieceType::Queen);
    assert_eq!(piece.name(), "queen");
    let record = game.board().record_at(at("e8")).expect("record");
    assert_eq!(record.piece_name, "queen");
}

#[test]
fn capturing_promotion_defers_the_victim() {
    let mut game = MatchBuilder::new()
        .piece(at("e7"), Player::One, PieceType::Pawn)
        .piece(at("d8"), Player::Two, PieceType::Rook)
        .build();
    assert!(game.execute(&req("e7", "d8").promoting_to(PieceType::Knight)));

    let (_, piece) = game.piece_at(at("d8")).expect("promoted piece");
    assert_eq!(piece.piece_type(), PieceType::Knight);
    assert_eq!(game.pending_removals().len(), 1);
}

#[test]
fn castling_moves_both_pieces() {
    let mut game = MatchBuilder::new()
        .piece(at("e1"), Player::One, PieceType::King)
        .piece(at("a1"), Player::One, PieceType::Rook)
        .piece(at("e8"), Player::Two, PieceType::King)
        .build();
    assert!(game.execute(&req("e1", "c1")));

    assert_eq!(
        game.piece_at(at("c1")).map(|(_, p)| p.piece_type()),
        Some(PieceType::King)
    );
    assert_eq!(
        game.piece_at(at("d1")).map(|(_, p)| p.piece_type()),
        Some(PieceType::Rook)
    );
    assert!(game.board().is_empty_at(at("e1")));
    assert!(game.board().is_empty_at(at("a1")));
    let (_, rook) = game.piece_at(at("d1")).expect("rook");
    assert!(rook.has_moved);
}

#[test]
fn teleport_executes_like_a_normal_move() {
    let mut game = Match::standard();
    assert!(game.execute(&req("a1", "d5").via_teleport()));
    assert_eq!(
        game.piece_at(at("d5")).map(|(_, p)| p.piece_type()),
        Some(PieceType::Rook)
    );
    assert_eq!(game.active_player(), Some(Player::Two));
}

#[derive(Default)]
struct CountingRelay {
    sent: AtomicUsize,
}

impl MoveRelay for Arc<CountingRelay> {
    fn notify_local_move(&self, _from: &str, _to: &str) {
        self.sent.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn local_moves_broadcast_and_remote_moves_do_not() {
    let relay = Arc::new(CountingRelay::default());
    let mut game = Match::standard();
    game.set_relay(Box::new(Arc::clone(&relay)));

    assert!(game.execute(&req("e2", "e4")));
    assert_eq!(relay.sent.load(Ordering::SeqCst), 1);

    assert!(game.execute(&req("e7", "e5").from_remote()));
    assert_eq!(relay.sent.load(Ordering::SeqCst), 1);
}

#[test]
fn occupancy_and_pieces_stay_in_sync() {
    let mut game = Match::standard();
    let moves = [
        ("e2", "e4"),
        ("d7", "d5"),
        ("e4", "d5"), // capture
        ("d8", "d5"), // recapture
    ];
    for (from, to) in moves {
        assert!(game.execute(&req(from, to)), "{from}->{to}");
        game.tick(10.0);
        for record in game.board().iter() {
            let (_, piece) = game
                .piece_at(record.coord)
                .expect("record backed by a piece");
            assert_eq!(piece.owner, record.owner);
            assert_eq!(piece.name(), record.piece_name);
            assert_eq!(record.notation, record.coord.to_notation());
        }
    }
}
