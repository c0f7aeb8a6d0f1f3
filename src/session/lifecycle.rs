//! Player admission, removal, and host succession.
//!
//! Kick is the delicate one: the turn must advance while the seat table
//! still contains the outgoing player, the deck loses one chicken when a
//! non-exploding player leaves (preserving per-player elimination odds),
//! and dropping below the viable player count ends the game.

use tracing::debug;

use crate::cards::{Assignment, CardAction};
use crate::core::{GameError, PlayerId};

use super::{GameSession, Player, PlayerKind, PlayerStatus, UNSEATED};

/// Fewest in-play players for which a round can continue.
const MIN_IN_PLAY: usize = 3;

impl GameSession {
    /// Admit a new player. The first player becomes host.
    ///
    /// Fails with `SessionFull` at the room cap. Status starts `Offline`;
    /// the transport layer flips it once the client connects.
    pub fn create_player(
        &mut self,
        nickname: String,
        avatar: String,
    ) -> Result<PlayerId, GameError> {
        if self.players.len() >= self.room_size {
            return Err(GameError::SessionFull {
                room_size: self.room_size,
            });
        }

        let id = PlayerId::generate(&mut self.rng);
        let kind = if self.players.is_empty() {
            PlayerKind::Host
        } else {
            PlayerKind::Player
        };
        self.push_player(Player {
            id: id.clone(),
            nickname,
            avatar,
            seat: UNSEATED,
            status: PlayerStatus::Offline,
            kind,
            connection: String::new(),
        });

        debug!(slug = self.slug(), player = %id, "player created");
        Ok(id)
    }

    /// Remove a player from the session.
    ///
    /// A self-kick is a benign no-op. Otherwise:
    /// 1. note whether the target is exploding and the pre-removal in-play
    ///    count,
    /// 2. return the target's cards out of play,
    /// 3. advance the turn first if the target holds it (the seat table
    ///    must still include them for the wrap math),
    /// 4. remove the player,
    /// 5. end the game if too few players remain,
    /// 6. otherwise retire one draw-deck chicken when the target was not
    ///    exploding, and re-randomize seats. The turn follows its holder to
    ///    their new seat.
    pub fn kick_player(
        &mut self,
        host_id: &PlayerId,
        target_id: &PlayerId,
    ) -> Result<(), GameError> {
        if host_id == target_id {
            return Ok(());
        }

        let target = self
            .player(target_id)
            .ok_or_else(|| GameError::PlayerNotFound(target_id.clone()))?;
        let is_exploding = target.status == PlayerStatus::Exploding;
        let target_seat = target.seat;
        let in_play = self.in_play_count();

        self.release_cards(target_id);

        if self.seat_playing == Some(target_seat) {
            // Owed turns die with the player; the seat has to move on.
            self.turns_remaining = 0;
            match self.advance_turn() {
                Ok(()) => {}
                // No playable seat left: the reset below will clear it.
                Err(GameError::NoPlayableSeat) => self.seat_playing = None,
                Err(e) => return Err(e),
            }
        }

        // Seats renumber below; remember who holds the turn, not where.
        let holder = self
            .seat_playing
            .and_then(|seat| self.player_by_seat(seat))
            .map(|p| p.id.clone());

        let index = self
            .player_index(target_id)
            .ok_or_else(|| GameError::PlayerNotFound(target_id.clone()))?;
        self.players.remove(index);
        debug!(slug = self.slug(), player = %target_id, "player kicked");

        if self.players.len() <= 1 || in_play < MIN_IN_PLAY {
            self.reset_game();
            return Ok(());
        }

        if !is_exploding {
            // Keep roughly one elimination card per remaining player. If no
            // chicken sits in the deck, it already left play; skip silently.
            if let Some(card) = self
                .cards
                .find_action_in(CardAction::Chicken, &Assignment::DrawDeck)
            {
                self.cards.assign(card, Assignment::OutOfPlay, 0);
                self.cards.compact_positions(&Assignment::DrawDeck);
            }
        }
        self.randomize_seats();
        self.seat_playing = holder
            .as_ref()
            .and_then(|id| self.player(id))
            .map(|p| p.seat);
        Ok(())
    }

    /// Transfer host to another player, flipping both types atomically.
    ///
    /// No-op when the ids match or either id is unknown; validation of the
    /// ids belongs to the caller.
    pub fn make_host(&mut self, current_host_id: &PlayerId, successor_id: &PlayerId) {
        if current_host_id == successor_id {
            return;
        }
        let current = self.player_index(current_host_id);
        let successor = self.player_index(successor_id);
        if let (Some(current), Some(successor)) = (current, successor) {
            self.players[current].kind = PlayerKind::Player;
            self.players[successor].kind = PlayerKind::Host;
        }
    }

    /// Update a player's transport routing hint.
    pub fn update_connection(
        &mut self,
        player_id: &PlayerId,
        connection: String,
    ) -> Result<(), GameError> {
        match self.player_mut(player_id) {
            Some(player) => {
                player.connection = connection;
                Ok(())
            }
            None => Err(GameError::PlayerNotFound(player_id.clone())),
        }
    }

    /// Set a player's status.
    ///
    /// `Offline`/`Online` flips belong to the transport layer; the gameplay
    /// states are normally driven through the orchestrator.
    pub fn set_player_status(
        &mut self,
        player_id: &PlayerId,
        status: PlayerStatus,
    ) -> Result<(), GameError> {
        match self.player_mut(player_id) {
            Some(player) => {
                player.status = status;
                Ok(())
            }
            None => Err(GameError::PlayerNotFound(player_id.clone())),
        }
    }
}
