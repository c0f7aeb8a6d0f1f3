//! Game session model and the session state machine.
//!
//! A `GameSession` owns its players, its card store, and its own RNG. The
//! component logic is split across submodules, all implemented as methods on
//! `GameSession`:
//!
//! - `dealing`: initial hands, shuffling, hand compaction, card release
//! - `turns`: seat randomization, next-seat resolution, turn advancement
//! - `lifecycle`: player admission, kick, host transfer
//! - `flow`: start / reset / elimination and the terminal condition
//! - `view`: client-facing projection with per-viewer visibility
//!
//! Sessions are plain values: every operation is a synchronous, in-memory
//! transform. The registry layer provides mutual exclusion and
//! compute-then-commit semantics around them.

pub mod dealing;
pub mod flow;
pub mod lifecycle;
pub mod turns;
pub mod view;

use serde::{Deserialize, Serialize};

use crate::cards::CardStore;
use crate::core::{GameRng, PlayerId};

pub use view::{CardView, PlayerView, SessionView};

/// Default admission cap, matching the stock room size.
pub const DEFAULT_ROOM_SIZE: usize = 5;

/// Seat sentinel for players who have not been seated yet.
pub const UNSEATED: i32 = -1;

/// Session lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InLobby,
    Playing,
    /// Wire-level transitional status while a reset is in flight. Resets
    /// complete synchronously in this core, so no operation produces it;
    /// the variant keeps client payloads stable for transports that do
    /// stage their resets.
    Idle,
}

/// Direction the turn passes around the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnDirection {
    Forward,
    Backward,
}

/// Player connection / participation status.
///
/// `Offline`/`Online` are owned by the transport layer; `Playing`,
/// `Exploding`, and `Dead` are gameplay states driven by the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Offline,
    Online,
    Playing,
    Exploding,
    Dead,
}

/// Host or regular player. Exactly one host per non-empty session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Host,
    Player,
}

/// One player in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub nickname: String,
    pub avatar: String,
    /// Seat index in `[0, N)`, or [`UNSEATED`].
    pub seat: i32,
    pub status: PlayerStatus,
    pub kind: PlayerKind,
    /// Opaque transport routing hint.
    pub connection: String,
}

/// One running game session.
///
/// Invariants maintained by the methods here:
/// - card count is conserved; only assignments and positions change
/// - active players hold distinct seats
/// - `seat_playing`, when set, refers to a seated player who is `Playing`
///   (or `Exploding`: drawing the chicken does not move the turn)
/// - position values within any hand or deck are dense from 0
#[derive(Clone, Debug)]
pub struct GameSession {
    slug: String,
    pub status: SessionStatus,
    pub turn_direction: TurnDirection,
    /// Seat currently holding the turn; `None` before play starts.
    pub seat_playing: Option<i32>,
    /// Extra turns owed to the current seat.
    pub turns_remaining: u32,
    /// Admission cap enforced by `create_player`.
    pub room_size: usize,
    players: Vec<Player>,
    pub cards: CardStore,
    rng: GameRng,
}

impl GameSession {
    /// Create an empty lobby session.
    #[must_use]
    pub fn new(slug: impl Into<String>, seed: u64) -> Self {
        Self {
            slug: slug.into(),
            status: SessionStatus::InLobby,
            turn_direction: TurnDirection::Forward,
            seat_playing: None,
            turns_remaining: 0,
            room_size: DEFAULT_ROOM_SIZE,
            players: Vec::new(),
            cards: CardStore::new(),
            rng: GameRng::new(seed),
        }
    }

    /// The session's unique human-readable identifier.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// All players, in insertion order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    pub(crate) fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == *id)
    }

    pub(crate) fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == *id)
    }

    /// Look up the player occupying a seat.
    #[must_use]
    pub fn player_by_seat(&self, seat: i32) -> Option<&Player> {
        self.players.iter().find(|p| p.seat == seat)
    }

    /// Number of players whose status is not `Dead`.
    #[must_use]
    pub fn in_play_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.status != PlayerStatus::Dead)
            .count()
    }

    /// Append a player without any admission check.
    ///
    /// `create_player` is the checked entry point; this exists for callers
    /// that enforce their own room policy.
    pub fn push_player(&mut self, player: Player) {
        self.players.push(player);
    }
}
