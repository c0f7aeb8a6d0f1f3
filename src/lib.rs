//! # chicken-session
//!
//! Session core for a turn-based, multi-player elimination card game:
//! players hold hands, draw and play cards, and the game advances around
//! the table until one player remains.
//!
//! ## Design Principles
//!
//! 1. **Pure in-memory transforms**: every operation is a synchronous
//!    computation over a session snapshot. Persistence and transport live
//!    behind the seams in `registry`.
//!
//! 2. **One sampling primitive**: dealing, shuffling, and seat
//!    randomization all draw without replacement from a shrinking bucket
//!    (`GameRng::draw`). Implemented once, tested once.
//!
//! 3. **Conservation**: the card store never grows or shrinks after catalog
//!    import; operations only rewrite assignments and positions, and every
//!    group keeps dense positions.
//!
//! ## Modules
//!
//! - `core`: player ids, slugs, deterministic RNG, error taxonomy
//! - `cards`: card actions, assignments, the card store, catalog import
//! - `session`: the session state machine — dealing, turns, lifecycle,
//!   orchestration, and client views
//! - `registry`: per-session locking with compute-then-commit, plus the
//!   `SessionStore` persistence trait

pub mod cards;
pub mod core;
pub mod registry;
pub mod session;

// Re-export commonly used types
pub use crate::core::{generate_slug, GameError, GameRng, PlayerId};

pub use crate::cards::{
    import_pack, Assignment, Card, CardAction, CardPack, CardStore, PackEntry,
};

pub use crate::session::{
    CardView, GameSession, Player, PlayerKind, PlayerStatus, PlayerView,
    SessionStatus, SessionView, TurnDirection,
};

pub use crate::registry::{MemoryStore, SessionRegistry, SessionStore};
