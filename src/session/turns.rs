//! Seat assignment and turn advancement.
//!
//! Seats are dealt like cards: distinct indices in `[0, N)` drawn without
//! replacement. Turn advancement walks the seat ring in the session's
//! direction, skipping any seat whose player is not `Playing`, and fails
//! fast when no such seat exists.

use crate::core::GameError;

use super::{GameSession, PlayerStatus, TurnDirection};

impl GameSession {
    /// Assign each player a distinct random seat in `[0, N)`.
    ///
    /// Used at game start and after any player-count change that is not a
    /// full reset.
    pub fn randomize_seats(&mut self) {
        let n = self.players.len();
        let mut bucket: Vec<i32> = (0..n as i32).collect();
        let mut seats = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(seat) = self.rng.draw(&mut bucket) {
                seats.push(seat);
            }
        }
        for (player, seat) in self.players.iter_mut().zip(seats) {
            player.seat = seat;
        }
    }

    /// Resolve the next seat holding a `Playing` player, honoring direction
    /// and wrapping modulo player count.
    ///
    /// The scan is bounded by the player count: if a full lap finds no
    /// playable seat, this is `NoPlayableSeat` rather than an endless spin.
    /// An unset `seat_playing` starts the scan just before the first seat
    /// in scan order, so a fresh game resolves its opening seat here too.
    pub fn next_seat(&self) -> Result<i32, GameError> {
        let n = self.players().len() as i32;
        if n == 0 {
            return Err(GameError::NoPlayableSeat);
        }

        let mut pos = self.seat_playing.unwrap_or(match self.turn_direction {
            TurnDirection::Forward => -1,
            TurnDirection::Backward => n,
        });

        for _ in 0..n {
            pos = match self.turn_direction {
                TurnDirection::Forward => {
                    if pos >= n - 1 {
                        0
                    } else {
                        pos + 1
                    }
                }
                TurnDirection::Backward => {
                    if pos <= 0 {
                        n - 1
                    } else {
                        pos - 1
                    }
                }
            };
            if let Some(player) = self.player_by_seat(pos) {
                if player.status == PlayerStatus::Playing {
                    return Ok(pos);
                }
            }
        }

        Err(GameError::NoPlayableSeat)
    }

    /// Advance the turn: consume one owed turn if any, otherwise move
    /// `seat_playing` to the next playable seat.
    ///
    /// This is the single authoritative advance; kicks and eliminations
    /// route through it instead of touching `seat_playing` directly.
    pub fn advance_turn(&mut self) -> Result<(), GameError> {
        if self.turns_remaining > 0 {
            self.turns_remaining -= 1;
            return Ok(());
        }
        self.seat_playing = Some(self.next_seat()?);
        Ok(())
    }
}
