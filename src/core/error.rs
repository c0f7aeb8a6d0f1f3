//! Error taxonomy for session operations.
//!
//! Every fallible core operation returns `Result<_, GameError>`. Benign
//! no-ops (kicking yourself, transferring host to yourself) are not errors;
//! they return `Ok` without mutating anything.

use thiserror::Error;

use super::ids::PlayerId;

/// Typed failures surfaced by the session core.
///
/// User-visible wording is owned by the calling layer; these messages are
/// for logs and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No session is registered under the given slug.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// The named player is not part of this session.
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// The operation does not apply in the session's current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// The card catalog cannot support the current player count.
    #[error("not enough {kind} cards: need {needed}, have {available}")]
    InsufficientCards {
        kind: &'static str,
        needed: usize,
        available: usize,
    },

    /// A turn advance found no seat occupied by a playing player.
    ///
    /// Callers must guarantee at least one playing player before advancing;
    /// hitting this indicates a caller-level invariant violation.
    #[error("no playable seat")]
    NoPlayableSeat,

    /// The session is at its admission cap.
    #[error("session full: room size is {room_size}")]
    SessionFull { room_size: usize },

    /// Another mutation holds the session lock. Retryable.
    #[error("session busy: concurrent mutation in flight")]
    SessionBusy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InsufficientCards {
            kind: "defuse",
            needed: 4,
            available: 2,
        };
        assert_eq!(err.to_string(), "not enough defuse cards: need 4, have 2");

        assert_eq!(GameError::NoPlayableSeat.to_string(), "no playable seat");
        assert_eq!(
            GameError::SessionNotFound("brave-otter".into()).to_string(),
            "session not found: brave-otter"
        );
    }
}
