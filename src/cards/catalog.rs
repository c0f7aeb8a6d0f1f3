//! Card catalog import.
//!
//! A `CardPack` is a JSON document listing actions and counts. Packs are
//! imported into a session's card store before the first deal; imported
//! cards start in the draw deck. The built-in base pack mirrors the stock
//! game box.

use serde::{Deserialize, Serialize};

use super::{Card, CardAction, CardStore};

/// One catalog line: how many copies of an action the pack contains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackEntry {
    pub action: CardAction,
    pub count: u32,
}

/// A card catalog document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPack {
    pub name: String,
    pub cards: Vec<PackEntry>,
}

impl CardPack {
    /// Parse a pack from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The stock base pack.
    #[must_use]
    pub fn base() -> Self {
        use CardAction::*;
        let entries = [
            (Attack, 4),
            (Chicken, 4),
            (Defuse, 6),
            (Favor, 4),
            (Reverse, 4),
            (SeeTheFuture, 5),
            (Shuffle, 4),
            (Skip, 4),
        ];
        Self {
            name: "base".to_string(),
            cards: entries
                .into_iter()
                .map(|(action, count)| PackEntry { action, count })
                .collect(),
        }
    }

    /// Total number of cards the pack describes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cards.iter().map(|e| e.count as usize).sum()
    }
}

/// Import a pack into a card store, returning the number of cards added.
///
/// New cards land in the draw deck with dense positions continuing after
/// any cards already there.
pub fn import_pack(store: &mut CardStore, pack: &CardPack) -> usize {
    let mut position = store.count_assigned(&super::Assignment::DrawDeck) as i32;
    let mut imported = 0;

    for entry in &pack.cards {
        for _ in 0..entry.count {
            store.push(Card::in_draw_deck(entry.action, position));
            position += 1;
            imported += 1;
        }
    }

    imported
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Assignment;

    #[test]
    fn test_base_pack_counts() {
        let pack = CardPack::base();

        let defuse = pack
            .cards
            .iter()
            .find(|e| e.action == CardAction::Defuse)
            .map(|e| e.count);
        assert_eq!(defuse, Some(6));
        assert_eq!(pack.total(), 35);
    }

    #[test]
    fn test_import_lands_in_draw_deck() {
        let mut store = CardStore::new();
        let imported = import_pack(&mut store, &CardPack::base());

        assert_eq!(imported, 35);
        assert_eq!(store.len(), 35);
        assert_eq!(store.count_assigned(&Assignment::DrawDeck), 35);

        // Dense positions 0..34.
        let mut positions: Vec<i32> = store.iter().map(|c| c.position).collect();
        positions.sort_unstable();
        assert_eq!(positions, (0..35).collect::<Vec<i32>>());
    }

    #[test]
    fn test_pack_json_round() {
        let json = r#"{
            "name": "mini",
            "cards": [
                { "action": "defuse", "count": 2 },
                { "action": "chicken", "count": 1 },
                { "action": "see_the_future", "count": 3 }
            ]
        }"#;

        let pack = CardPack::from_json(json).unwrap();
        assert_eq!(pack.name, "mini");
        assert_eq!(pack.total(), 6);
        assert_eq!(pack.cards[2].action, CardAction::SeeTheFuture);
    }
}
