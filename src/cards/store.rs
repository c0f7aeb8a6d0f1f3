//! Card store: the ordered collection of card records.
//!
//! The store is the substrate the session algorithms operate on. Cards never
//! enter or leave after catalog import; higher components only rewrite
//! `assignment` and `position`. Group queries (everything in a hand, the
//! draw deck, the discard pile) and dense-position maintenance live here.

use smallvec::SmallVec;

use super::{Assignment, Card, CardAction};

/// Ordered collection of card records.
///
/// Card identity is the index into this collection; indices stay stable for
/// the lifetime of the session.
#[derive(Clone, Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card, returning its index.
    pub fn push(&mut self, card: Card) -> usize {
        self.cards.push(card);
        self.cards.len() - 1
    }

    /// Total card count. Conserved across all session operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the store holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Get a mutable card by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Indices of all cards under the given assignment, in store order.
    #[must_use]
    pub fn assigned_to(&self, assignment: &Assignment) -> SmallVec<[usize; 8]> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.assignment == *assignment)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cards under the given assignment.
    #[must_use]
    pub fn count_assigned(&self, assignment: &Assignment) -> usize {
        self.cards
            .iter()
            .filter(|c| c.assignment == *assignment)
            .count()
    }

    /// Find one card with the given action under the given assignment.
    #[must_use]
    pub fn find_action_in(
        &self,
        action: CardAction,
        assignment: &Assignment,
    ) -> Option<usize> {
        self.cards
            .iter()
            .position(|c| c.action == action && c.assignment == *assignment)
    }

    /// Move a card to a new assignment at the given local position.
    ///
    /// Returns false if the index is out of range.
    pub fn assign(&mut self, index: usize, assignment: Assignment, position: i32) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.assignment = assignment;
                card.position = position;
                true
            }
            None => false,
        }
    }

    /// Re-derive dense positions `0..k-1` for one assignment group,
    /// preserving the pre-existing relative order (stable by old position).
    ///
    /// Returns the group size. Run after any card leaves a group so clients
    /// see no gaps in slot indices.
    pub fn compact_positions(&mut self, assignment: &Assignment) -> usize {
        let mut group: SmallVec<[(i32, usize); 8]> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.assignment == *assignment)
            .map(|(i, c)| (c.position, i))
            .collect();

        group.sort_by_key(|&(old_pos, _)| old_pos);

        for (new_pos, &(_, index)) in group.iter().enumerate() {
            self.cards[index].position = new_pos as i32;
        }

        group.len()
    }
}
