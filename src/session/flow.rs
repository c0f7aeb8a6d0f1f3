//! Session-level orchestration: start, reset, and elimination.
//!
//! The session status machine is `in_lobby -> playing -> in_lobby`; during
//! play, player statuses walk `online -> playing -> {exploding -> dead |
//! playing}`. The triggers live here, the card effects that cause them live
//! upstream.

use tracing::info;

use crate::core::{GameError, PlayerId};

use super::{GameSession, PlayerStatus, SessionStatus, TurnDirection};

impl GameSession {
    /// Start a game from the lobby.
    ///
    /// Every online player joins the round; seats are randomized, hands
    /// dealt, and the opening seat resolved through the normal scan.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.status != SessionStatus::InLobby {
            return Err(GameError::InvalidOperation("game already started"));
        }
        let eligible = self
            .players
            .iter()
            .filter(|p| p.status == PlayerStatus::Online)
            .count();
        if eligible < 2 {
            return Err(GameError::InvalidOperation(
                "starting requires at least two connected players",
            ));
        }

        self.deal_initial_hands()?;
        self.randomize_seats();
        for player in &mut self.players {
            if player.status == PlayerStatus::Online {
                player.status = PlayerStatus::Playing;
            }
        }

        self.status = SessionStatus::Playing;
        self.turn_direction = TurnDirection::Forward;
        self.turns_remaining = 0;
        self.seat_playing = None;
        self.seat_playing = Some(self.next_seat()?);

        info!(slug = self.slug(), players = eligible, "game started");
        Ok(())
    }

    /// Return the session to the lobby rest state.
    ///
    /// Cards stay where they are; the next deal re-buckets them. Connected
    /// players (whatever their round state) go back to `Online`.
    pub fn reset_game(&mut self) {
        self.status = SessionStatus::InLobby;
        self.turn_direction = TurnDirection::Forward;
        self.seat_playing = None;
        self.turns_remaining = 0;
        for player in &mut self.players {
            if player.status != PlayerStatus::Offline {
                player.status = PlayerStatus::Online;
            }
        }
        info!(slug = self.slug(), "game reset");
    }

    /// Mark a playing player as exploding (they drew the chicken).
    pub fn explode_player(&mut self, player_id: &PlayerId) -> Result<(), GameError> {
        let player = self
            .player_mut(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))?;
        if player.status != PlayerStatus::Playing {
            return Err(GameError::InvalidOperation(
                "only a playing player can explode",
            ));
        }
        player.status = PlayerStatus::Exploding;
        Ok(())
    }

    /// Eliminate a player: they are out of the round, their cards leave
    /// play, and the turn moves off their seat if they held it.
    ///
    /// When exactly one player is left standing, the session returns to the
    /// lobby ready for a fresh deal.
    pub fn eliminate_player(&mut self, player_id: &PlayerId) -> Result<(), GameError> {
        let seat = {
            let player = self
                .player_mut(player_id)
                .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))?;
            player.status = PlayerStatus::Dead;
            player.seat
        };
        let held_turn = self.seat_playing == Some(seat);

        self.release_cards(player_id);

        if self.in_play_count() <= 1 {
            info!(slug = self.slug(), player = %player_id, "round over");
            self.reset_game();
            return Ok(());
        }

        if held_turn {
            // A dead seat owes nothing; the scan skips it from here on.
            self.turns_remaining = 0;
            match self.advance_turn() {
                Ok(()) => {}
                Err(GameError::NoPlayableSeat) => self.seat_playing = None,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{import_pack, Assignment, CardPack};
    use crate::session::GameSession;

    fn lobby(n: usize) -> (GameSession, Vec<PlayerId>) {
        let mut session = GameSession::new("test-session", 42);
        import_pack(&mut session.cards, &CardPack::base());
        let mut ids = Vec::new();
        for i in 0..n {
            let id = session
                .create_player(format!("P{i}"), String::new())
                .unwrap();
            session.set_player_status(&id, PlayerStatus::Online).unwrap();
            ids.push(id);
        }
        (session, ids)
    }

    #[test]
    fn test_start_game() {
        let (mut session, _ids) = lobby(4);

        session.start_game().unwrap();

        assert_eq!(session.status, SessionStatus::Playing);
        assert_eq!(session.turn_direction, TurnDirection::Forward);
        assert_eq!(session.turns_remaining, 0);

        // Opening seat belongs to a playing player.
        let seat = session.seat_playing.unwrap();
        let holder = session.player_by_seat(seat).unwrap();
        assert_eq!(holder.status, PlayerStatus::Playing);

        // Everyone is seated and playing with a dealt hand.
        for player in session.players() {
            assert_eq!(player.status, PlayerStatus::Playing);
            assert!(player.seat >= 0);
            assert_eq!(
                session
                    .cards
                    .count_assigned(&Assignment::Player(player.id.clone())),
                5
            );
        }
    }

    #[test]
    fn test_start_requires_lobby() {
        let (mut session, _ids) = lobby(3);
        session.start_game().unwrap();

        assert_eq!(
            session.start_game(),
            Err(GameError::InvalidOperation("game already started"))
        );
    }

    #[test]
    fn test_start_requires_two_online() {
        let (mut session, ids) = lobby(2);
        session
            .set_player_status(&ids[1], PlayerStatus::Offline)
            .unwrap();

        assert_eq!(
            session.start_game(),
            Err(GameError::InvalidOperation(
                "starting requires at least two connected players"
            ))
        );
    }

    #[test]
    fn test_reset_restores_lobby_state() {
        let (mut session, ids) = lobby(3);
        session.start_game().unwrap();
        session
            .set_player_status(&ids[0], PlayerStatus::Exploding)
            .unwrap();

        session.reset_game();

        assert_eq!(session.status, SessionStatus::InLobby);
        assert_eq!(session.seat_playing, None);
        assert_eq!(session.turns_remaining, 0);
        for player in session.players() {
            assert_eq!(player.status, PlayerStatus::Online);
        }
    }

    #[test]
    fn test_redeal_after_reset_conserves_cards() {
        let (mut session, _ids) = lobby(3);
        let total = session.cards.len();

        session.start_game().unwrap();
        session.reset_game();
        session.start_game().unwrap();

        assert_eq!(session.cards.len(), total);
        let deck_chickens = session
            .cards
            .iter()
            .filter(|c| {
                c.action == crate::cards::CardAction::Chicken
                    && c.assignment == Assignment::DrawDeck
            })
            .count();
        assert_eq!(deck_chickens, 2);
    }

    #[test]
    fn test_explode_then_eliminate() {
        let (mut session, _ids) = lobby(4);
        session.start_game().unwrap();

        let seat = session.seat_playing.unwrap();
        let victim = session.player_by_seat(seat).unwrap().id.clone();

        session.explode_player(&victim).unwrap();
        assert_eq!(
            session.player(&victim).unwrap().status,
            PlayerStatus::Exploding
        );

        session.eliminate_player(&victim).unwrap();
        assert_eq!(session.player(&victim).unwrap().status, PlayerStatus::Dead);
        assert_eq!(
            session
                .cards
                .count_assigned(&Assignment::Player(victim.clone())),
            0
        );

        // The turn moved off the dead seat.
        let new_seat = session.seat_playing.unwrap();
        let holder = session.player_by_seat(new_seat).unwrap();
        assert_ne!(holder.id, victim);
        assert_eq!(holder.status, PlayerStatus::Playing);
        assert_eq!(session.status, SessionStatus::Playing);
    }

    #[test]
    fn test_explode_requires_playing() {
        let (mut session, ids) = lobby(2);

        assert_eq!(
            session.explode_player(&ids[0]),
            Err(GameError::InvalidOperation(
                "only a playing player can explode"
            ))
        );
    }

    #[test]
    fn test_last_player_standing_resets_session() {
        let (mut session, ids) = lobby(3);
        session.start_game().unwrap();

        session.eliminate_player(&ids[0]).unwrap();
        assert_eq!(session.status, SessionStatus::Playing);

        session.eliminate_player(&ids[1]).unwrap();

        // One player left standing: back to the lobby.
        assert_eq!(session.status, SessionStatus::InLobby);
        assert_eq!(session.seat_playing, None);
        for player in session.players() {
            assert_eq!(player.status, PlayerStatus::Online);
        }
    }
}
