//! Card system: actions, assignments, the card store, and catalog import.
//!
//! ## Key Types
//!
//! - `CardAction`: behavior tag (`Defuse`, `Chicken`, and the playable rest)
//! - `Assignment`: who holds a card — a player or one of the pseudo-owners
//! - `Card`: one card record; identity is its index in the store
//! - `CardStore`: the ordered collection every algorithm mutates
//! - `CardPack`: JSON catalog document imported before a session can deal
//!
//! The store conserves cards: after import, only `assignment` and `position`
//! ever change.

pub mod catalog;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

pub use catalog::{import_pack, CardPack, PackEntry};
pub use store::CardStore;

/// Card behavior tag.
///
/// Only `Defuse` and `Chicken` carry placement rules in this core; the other
/// actions are opaque playable cards whose effects live upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Attack,
    /// The elimination card.
    Chicken,
    /// Neutralizes a drawn chicken.
    Defuse,
    Favor,
    Reverse,
    SeeTheFuture,
    Shuffle,
    Skip,
}

/// Current holder of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignment {
    /// In a player's hand.
    Player(PlayerId),
    /// Face-down draw pile.
    DrawDeck,
    /// Face-up discard pile.
    DiscardDeck,
    /// Removed from the current round.
    OutOfPlay,
}

/// One card record.
///
/// `position` is a dense 0-based ordering among cards sharing the same
/// `assignment`; the store re-establishes density after every removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub action: CardAction,
    pub assignment: Assignment,
    pub position: i32,
}

impl Card {
    /// Create a card in the draw deck at the given position.
    #[must_use]
    pub fn in_draw_deck(action: CardAction, position: i32) -> Self {
        Self {
            action,
            assignment: Assignment::DrawDeck,
            position,
        }
    }
}
