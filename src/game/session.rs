//! Session snapshots, restore, and navigation payloads.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RestoreError;
use crate::player::Player;

use super::{Game, Phase};

/// A serializable, independent copy of the full session state.
///
/// Field names match the JSON blob the app has always persisted, so
/// sessions survive app updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    /// Player roster with accumulated tallies.
    pub players: Vec<Player>,
    /// The full shuffled deck in draw order.
    pub deck: Vec<Card>,
    /// Index of the card on screen; -1 before the first draw.
    pub current_index: i32,
    /// Index of the player whose turn it is.
    pub current_player_index: usize,
    /// Whether the shown card was accepted.
    pub card_accepted: bool,
    /// Save instant in epoch milliseconds.
    pub timestamp: u64,
}

/// Payload handed to the navigation collaborator when leaving the game
/// screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenPayload {
    /// Snapshot of the session at the moment of navigation.
    pub state: SavedGame,
    /// Whether the deck was played out (routes to the statistics screen).
    pub game_finished: bool,
}

impl Game {
    /// Returns a deep, independent snapshot of the session.
    ///
    /// Later mutation of the live state never aliases into the snapshot.
    #[must_use]
    pub fn snapshot(&self, now_ms: u64) -> SavedGame {
        SavedGame {
            players: self.players.clone(),
            deck: self.deck.cards().to_vec(),
            current_index: self.current_index,
            current_player_index: self.current_player_index,
            card_accepted: self.card_accepted,
            timestamp: now_ms,
        }
    }

    /// Reconstructs the session from a persisted snapshot.
    ///
    /// A snapshot older than the staleness window is discarded; callers
    /// treat that exactly like "no saved session". A valid snapshot
    /// restores indices and tallies exactly: the engine resumes in
    /// [`Phase::CardShown`] if a card was on screen, or
    /// [`Phase::NotStarted`] if none had been drawn yet.
    ///
    /// # Errors
    ///
    /// Returns [`RestoreError::StaleSession`] past the staleness window
    /// and [`RestoreError::InvalidSession`] when the blob violates engine
    /// invariants (roster too small, indices out of range). On error the
    /// engine state is unchanged.
    pub fn restore(&mut self, saved: SavedGame, now_ms: u64) -> Result<(), RestoreError> {
        if now_ms.saturating_sub(saved.timestamp) > self.options.stale_after_ms {
            return Err(RestoreError::StaleSession);
        }

        if saved.players.len() < self.options.min_players {
            return Err(RestoreError::InvalidSession);
        }
        if saved.current_player_index >= saved.players.len() {
            return Err(RestoreError::InvalidSession);
        }
        if saved.current_index < -1 || saved.current_index >= saved.deck.len() as i32 {
            return Err(RestoreError::InvalidSession);
        }

        self.phase = if saved.current_index < 0 {
            Phase::NotStarted
        } else {
            Phase::CardShown
        };
        self.players = saved.players;
        self.deck = Deck::from_cards(saved.deck);
        self.current_index = saved.current_index;
        self.current_player_index = saved.current_player_index;
        self.card_accepted = saved.card_accepted;

        tracing::debug!(
            card = self.current_index,
            player = self.current_player_index,
            "session restored"
        );
        Ok(())
    }

    /// Builds the navigation payload for leaving the game screen.
    #[must_use]
    pub fn exit_payload(&self, now_ms: u64) -> ScreenPayload {
        ScreenPayload {
            state: self.snapshot(now_ms),
            game_finished: self.is_finished(),
        }
    }
}
