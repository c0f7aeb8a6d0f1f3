//! End-to-end session flow tests.
//!
//! These drive the public API the way a transport layer would: sessions
//! created through the registry, mutated under its lock, and projected
//! into client views after each step.

use chicken_session::{
    import_pack, Assignment, CardAction, CardPack, GameSession, PlayerId,
    PlayerKind, PlayerStatus, SessionRegistry, SessionStatus, SessionView,
};

fn lobby_with(n: usize, pack: &CardPack) -> (GameSession, Vec<PlayerId>) {
    let mut session = GameSession::new("test-session", 42);
    import_pack(&mut session.cards, pack);
    let mut ids = Vec::new();
    for i in 0..n {
        let id = session
            .create_player(format!("Player {i}"), "default.png".to_string())
            .unwrap();
        session
            .set_player_status(&id, PlayerStatus::Online)
            .unwrap();
        ids.push(id);
    }
    (session, ids)
}

fn deck_chickens(session: &GameSession) -> usize {
    session
        .cards
        .iter()
        .filter(|c| c.action == CardAction::Chicken && c.assignment == Assignment::DrawDeck)
        .count()
}

/// Scenario A: four players dealt from an oversized catalog.
#[test]
fn test_deal_from_oversized_catalog() {
    let pack = CardPack::from_json(
        r#"{"name":"oversized","cards":[
            {"action":"defuse","count":56},
            {"action":"chicken","count":6},
            {"action":"skip","count":15},
            {"action":"attack","count":15}
        ]}"#,
    )
    .unwrap();
    let (mut session, ids) = lobby_with(4, &pack);
    let total = session.cards.len();
    assert_eq!(total, 92);

    session.deal_initial_hands().unwrap();

    // Each player holds exactly 1 defuse + 4 others.
    for id in &ids {
        let assignment = Assignment::Player(id.clone());
        assert_eq!(session.cards.count_assigned(&assignment), 5);
        let defuses = session
            .cards
            .iter()
            .filter(|c| c.action == CardAction::Defuse && c.assignment == assignment)
            .count();
        assert_eq!(defuses, 1);
    }

    // Exactly N-1 chickens in play; leftover chickens are reserve.
    assert_eq!(deck_chickens(&session), 3);
    assert_eq!(session.cards.count_assigned(&Assignment::OutOfPlay), 3);

    // Everything else sits in the draw deck; nothing was created or lost.
    assert_eq!(
        session.cards.count_assigned(&Assignment::DrawDeck),
        total - 4 * 5 - 3
    );
    assert_eq!(session.cards.len(), total);
}

/// Scenario B: kicking a playing, non-exploding player mid-game.
#[test]
fn test_kick_mid_game_rebalances() {
    let (mut session, ids) = lobby_with(4, &CardPack::base());
    session.start_game().unwrap();
    let total = session.cards.len();

    // Kick whoever holds the turn, so the advance-before-removal path runs.
    let seat = session.seat_playing.unwrap();
    let target = session.player_by_seat(seat).unwrap().id.clone();
    let host = ids.iter().find(|id| **id != target).unwrap().clone();

    session.kick_player(&host, &target).unwrap();

    assert_eq!(session.status, SessionStatus::Playing);
    assert_eq!(session.players().len(), 3);
    assert_eq!(session.cards.len(), total);

    // One chicken left the deck with the player.
    assert_eq!(deck_chickens(&session), 2);

    // Seats re-randomized over the three survivors.
    let mut seats: Vec<i32> = session.players().iter().map(|p| p.seat).collect();
    seats.sort_unstable();
    assert_eq!(seats, vec![0, 1, 2]);

    // The turn belongs to a surviving, playing player.
    let holder = session
        .player_by_seat(session.seat_playing.unwrap())
        .unwrap();
    assert_eq!(holder.status, PlayerStatus::Playing);
    assert_ne!(holder.id, target);
}

/// Scenario C: kicking down to one player ends the game.
#[test]
fn test_kick_down_to_one_returns_to_lobby() {
    let (mut session, ids) = lobby_with(2, &CardPack::base());
    session.start_game().unwrap();

    session.kick_player(&ids[0], &ids[1]).unwrap();

    assert_eq!(session.players().len(), 1);
    assert_eq!(session.status, SessionStatus::InLobby);
    assert_eq!(session.seat_playing, None);
    assert_eq!(session.player(&ids[0]).unwrap().status, PlayerStatus::Online);
}

/// A whole round: start, eliminations, winner, and a clean re-deal.
#[test]
fn test_full_round_and_rematch() {
    let (mut session, ids) = lobby_with(4, &CardPack::base());
    let total = session.cards.len();

    session.start_game().unwrap();

    // Three players explode and are eliminated one after another.
    for id in &ids[..3] {
        session.explode_player(id).unwrap();
        session.eliminate_player(id).unwrap();
    }

    // Last player standing: session is back in the lobby.
    assert_eq!(session.status, SessionStatus::InLobby);
    assert_eq!(session.seat_playing, None);
    for player in session.players() {
        assert_eq!(player.status, PlayerStatus::Online);
    }

    // A rematch deals cleanly from the same conserved store.
    session.start_game().unwrap();
    assert_eq!(session.cards.len(), total);
    assert_eq!(deck_chickens(&session), 3);
    for id in &ids {
        assert_eq!(
            session.cards.count_assigned(&Assignment::Player(id.clone())),
            5
        );
    }
}

/// Host succession keeps exactly one host through kicks and transfers.
#[test]
fn test_host_uniqueness_through_lifecycle() {
    let (mut session, ids) = lobby_with(4, &CardPack::base());

    let host_count = |s: &GameSession| {
        s.players()
            .iter()
            .filter(|p| p.kind == PlayerKind::Host)
            .count()
    };
    assert_eq!(host_count(&session), 1);

    session.make_host(&ids[0], &ids[1]);
    assert_eq!(host_count(&session), 1);
    assert_eq!(session.player(&ids[1]).unwrap().kind, PlayerKind::Host);

    // Transferring to yourself changes nothing.
    session.make_host(&ids[1], &ids[1]);
    assert_eq!(session.player(&ids[1]).unwrap().kind, PlayerKind::Host);

    // The old host is an ordinary player and can be kicked.
    session.start_game().unwrap();
    session.kick_player(&ids[1], &ids[0]).unwrap();
    assert_eq!(host_count(&session), 1);
}

/// Driving a session through the registry, the way a server would.
#[test]
fn test_registry_driven_game() {
    let registry = SessionRegistry::new(7);
    let slug = registry.create_session(42);

    let ids = registry
        .mutate(&slug, |session| {
            import_pack(&mut session.cards, &CardPack::base());
            let mut ids = Vec::new();
            for name in ["Ann", "Ben", "Cleo"] {
                let id = session.create_player(name.into(), String::new())?;
                session.set_player_status(&id, PlayerStatus::Online)?;
                ids.push(id);
            }
            Ok(ids)
        })
        .unwrap();

    registry.mutate(&slug, |session| session.start_game()).unwrap();

    // Project for the first player: own hand visible, others counted.
    let view = registry
        .read(&slug, |session| {
            SessionView::project(session, Some(&ids[0]))
        })
        .unwrap();

    assert_eq!(view.slug, slug);
    assert_eq!(view.status, SessionStatus::Playing);
    assert_eq!(view.players.len(), 3);
    for player in &view.players {
        assert_eq!(player.card_count, 5);
        assert_eq!(player.cards.is_some(), player.id == ids[0]);
    }

    // A failing mutation rolls back: the session still has 3 players.
    let err = registry.mutate(&slug, |session| {
        session.create_player("Dai".into(), String::new())?;
        session.start_game()
    });
    assert!(err.is_err());
    assert_eq!(registry.read(&slug, |s| s.players().len()).unwrap(), 3);
}
