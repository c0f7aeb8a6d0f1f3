//! Player identifiers and session slug generation.
//!
//! Player ids are short opaque alphanumeric tokens, unique within a session.
//! Slugs are human-readable `adjective-animal` pairs; the registry
//! regenerates on collision, so the word lists only need to keep collisions
//! rare, not impossible.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Length of generated player id tokens.
const PLAYER_ID_LEN: usize = 10;

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brave", "calm", "clever", "crimson", "dapper", "eager",
    "fuzzy", "gentle", "golden", "happy", "jolly", "lucky", "mellow", "nimble",
    "plucky", "quiet", "rapid", "shiny", "sly", "spry", "sunny", "witty",
];

const ANIMALS: &[&str] = &[
    "badger", "bison", "chicken", "crane", "donkey", "falcon", "ferret",
    "gecko", "heron", "ibex", "jackal", "lemur", "marmot", "newt", "ocelot",
    "otter", "panda", "quail", "racoon", "stoat", "tapir", "viper", "walrus",
    "yak",
];

/// Opaque player identifier, unique within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        Self(rng.token(PLAYER_ID_LEN))
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Generate a human-readable session slug, e.g. `brave-otter`.
#[must_use]
pub fn generate_slug(rng: &mut GameRng) -> String {
    let adjective = ADJECTIVES[rng.gen_range_usize(0..ADJECTIVES.len())];
    let animal = ANIMALS[rng.gen_range_usize(0..ANIMALS.len())];
    format!("{adjective}-{animal}")
}
