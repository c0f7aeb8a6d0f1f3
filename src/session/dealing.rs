//! Dealing and hand maintenance.
//!
//! The initial deal partitions the card store into defuse / chicken / other
//! buckets and samples from them without replacement: one defuse per player
//! at hand position 0, four other cards at positions 1-4, and exactly N-1
//! chickens into the draw deck. Leftover chickens stay out of play as a
//! fixed reserve.
//!
//! Buckets are rebuilt from `action` regardless of current assignment, so a
//! re-deal after a reset needs no separate card-return pass.

use crate::cards::{Assignment, CardAction};
use crate::core::{GameError, PlayerId};

use super::GameSession;

/// Cards dealt to each player on top of the guaranteed defuse.
const HAND_CARDS: i32 = 4;

impl GameSession {
    /// Deal initial hands to every player and stock the draw deck.
    ///
    /// Preconditions: at least two players, at least N defuse cards and
    /// N-1 chicken cards in the store. All count checks run before any
    /// mutation, so a failed deal leaves the store untouched.
    pub fn deal_initial_hands(&mut self) -> Result<(), GameError> {
        let n = self.players().len();
        if n < 2 {
            return Err(GameError::InvalidOperation(
                "dealing requires at least two players",
            ));
        }

        // Partition by action. Assignments are ignored on purpose: a re-deal
        // reclaims every card wherever it ended up last round.
        let mut defuse_bucket: Vec<usize> = Vec::new();
        let mut chicken_bucket: Vec<usize> = Vec::new();
        let mut other_bucket: Vec<usize> = Vec::new();
        for (i, card) in self.cards.iter().enumerate() {
            match card.action {
                CardAction::Defuse => defuse_bucket.push(i),
                CardAction::Chicken => chicken_bucket.push(i),
                _ => other_bucket.push(i),
            }
        }

        if defuse_bucket.len() < n {
            return Err(GameError::InsufficientCards {
                kind: "defuse",
                needed: n,
                available: defuse_bucket.len(),
            });
        }
        if chicken_bucket.len() < n - 1 {
            return Err(GameError::InsufficientCards {
                kind: "chicken",
                needed: n - 1,
                available: chicken_bucket.len(),
            });
        }
        // Leftover defuses re-enter the playable pool below.
        let playable = other_bucket.len() + defuse_bucket.len() - n;
        if playable < n * HAND_CARDS as usize {
            return Err(GameError::InsufficientCards {
                kind: "playable",
                needed: n * HAND_CARDS as usize,
                available: playable,
            });
        }

        // Every chicken leaves play until explicitly stocked into the deck.
        for &i in &chicken_bucket {
            self.cards.assign(i, Assignment::OutOfPlay, 0);
        }

        // One defuse per player at hand position 0.
        let ids: Vec<_> = self.players().iter().map(|p| p.id.clone()).collect();
        for id in &ids {
            if let Some(card) = self.rng.draw(&mut defuse_bucket) {
                self.cards.assign(card, Assignment::Player(id.clone()), 0);
            }
        }

        // Leftover defuses become ordinary draws.
        other_bucket.append(&mut defuse_bucket);

        // Four more cards per player at positions 1-4.
        for id in &ids {
            for pos in 1..=HAND_CARDS {
                if let Some(card) = self.rng.draw(&mut other_bucket) {
                    self.cards.assign(card, Assignment::Player(id.clone()), pos);
                }
            }
        }

        // Everything still unassigned in the bucket fills the draw deck.
        for (pos, card) in other_bucket.drain(..).enumerate() {
            self.cards.assign(card, Assignment::DrawDeck, pos as i32);
        }

        // Exactly N-1 chickens in play; the rest stay reserve.
        for _ in 0..n - 1 {
            if let Some(card) = self.rng.draw(&mut chicken_bucket) {
                self.cards.assign(card, Assignment::DrawDeck, 0);
            }
        }

        self.shuffle_draw_deck();
        Ok(())
    }

    /// Shuffle the draw deck, reassigning a fresh random permutation of
    /// positions. Decks of size 0 or 1 are no-op successes.
    ///
    /// Returns the number of cards shuffled.
    pub fn shuffle_draw_deck(&mut self) -> usize {
        let mut deck: Vec<usize> = self.cards.assigned_to(&Assignment::DrawDeck).into_vec();
        self.rng.shuffle(&mut deck);

        for (pos, &card) in deck.iter().enumerate() {
            self.cards.assign(card, Assignment::DrawDeck, pos as i32);
        }
        deck.len()
    }

    /// Close position gaps in a player's hand after a card leaves it.
    ///
    /// Stable: cards keep their relative order, so slot indices stay
    /// predictable for clients mid-turn.
    pub fn sort_hand(&mut self, player_id: &PlayerId) {
        self.cards
            .compact_positions(&Assignment::Player(player_id.clone()));
    }

    /// Return every card a player holds to `OutOfPlay`.
    ///
    /// Idempotent: releasing an empty hand does nothing.
    pub fn release_cards(&mut self, player_id: &PlayerId) {
        let held = self.cards.assigned_to(&Assignment::Player(player_id.clone()));
        for card in held {
            self.cards.assign(card, Assignment::OutOfPlay, 0);
        }
    }
}
