//! Client-facing session projection.
//!
//! A `SessionView` is what the transport layer pushes to one client after a
//! mutation: players sorted by seat, the discard pile in order, and session
//! metadata. Only the viewer's own hand carries card identities; everyone
//! else's hand is a count.

use serde::Serialize;

use crate::cards::{Assignment, CardAction};
use crate::core::PlayerId;

use super::{GameSession, PlayerStatus, SessionStatus, TurnDirection};

/// One visible card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub action: CardAction,
    pub position: i32,
}

/// One player as seen by a client.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub nickname: String,
    pub avatar: String,
    pub seat: i32,
    pub status: PlayerStatus,
    pub connection: String,
    /// Hand size; always present.
    pub card_count: usize,
    /// Hand contents; only for the viewer's own player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<CardView>>,
}

/// Full projection of a session for one viewer.
#[derive(Clone, Debug, Serialize)]
pub struct SessionView {
    pub slug: String,
    pub status: SessionStatus,
    pub seat_playing: Option<i32>,
    pub turn_direction: TurnDirection,
    pub turns_remaining: u32,
    pub players: Vec<PlayerView>,
    pub discard_deck: Vec<CardView>,
}

impl SessionView {
    /// Project a session for `viewer`. A `None` viewer (spectator) sees no
    /// hand contents at all.
    #[must_use]
    pub fn project(session: &GameSession, viewer: Option<&PlayerId>) -> Self {
        let mut players: Vec<PlayerView> = session
            .players()
            .iter()
            .map(|p| {
                let assignment = Assignment::Player(p.id.clone());
                let count = session.cards.count_assigned(&assignment);
                let cards = if viewer == Some(&p.id) {
                    Some(filter_cards(session, &assignment))
                } else {
                    None
                };
                PlayerView {
                    id: p.id.clone(),
                    nickname: p.nickname.clone(),
                    avatar: p.avatar.clone(),
                    seat: p.seat,
                    status: p.status,
                    connection: p.connection.clone(),
                    card_count: count,
                    cards,
                }
            })
            .collect();
        players.sort_by_key(|p| p.seat);

        Self {
            slug: session.slug().to_string(),
            status: session.status,
            seat_playing: session.seat_playing,
            turn_direction: session.turn_direction,
            turns_remaining: session.turns_remaining,
            players,
            discard_deck: filter_cards(session, &Assignment::DiscardDeck),
        }
    }
}

/// Cards under one assignment, sorted by local position.
fn filter_cards(session: &GameSession, assignment: &Assignment) -> Vec<CardView> {
    let mut cards: Vec<CardView> = session
        .cards
        .iter()
        .filter(|c| c.assignment == *assignment)
        .map(|c| CardView {
            action: c.action,
            position: c.position,
        })
        .collect();
    cards.sort_by_key(|c| c.position);
    cards
}
