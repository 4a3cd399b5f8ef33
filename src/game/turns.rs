use crate::card::Card;
use crate::cues::{HapticIntensity, SoundCue};
use crate::error::{AdvanceError, DecisionError, DrawError};

use super::{Decision, Game, Phase};

impl Game {
    /// Draws the first card of the session.
    ///
    /// Transitions [`Phase::NotStarted`] to [`Phase::CardShown`] and emits
    /// a card-draw sound cue.
    ///
    /// # Errors
    ///
    /// Returns an error if a session is already underway or the deck is
    /// empty (the engine was never initialized).
    pub fn begin_turn(&mut self) -> Result<&Card, DrawError> {
        if self.phase != Phase::NotStarted {
            return Err(DrawError::InvalidState);
        }
        if self.deck.is_empty() {
            return Err(DrawError::DeckExhausted);
        }

        self.current_index = 0;
        self.card_accepted = false;
        self.phase = Phase::CardShown;
        self.cues.play(SoundCue::CardDraw);

        tracing::debug!(card = 0, "first card drawn");
        self.deck.get(0).ok_or(DrawError::DeckExhausted)
    }

    /// Applies the player's decision on the shown card.
    ///
    /// `Accept` commits to the task and leaves every tally untouched.
    /// `Reject` adds the card's drink penalty to the acting player. After
    /// the last card's decision the game is [`Phase::Finished`]; otherwise
    /// the engine waits on the next-player handover.
    ///
    /// # Errors
    ///
    /// Returns an error if no card is awaiting a decision. This indicates
    /// a presentation-layer bug, not a user-facing condition.
    pub fn apply_decision(&mut self, decision: Decision) -> Result<(), DecisionError> {
        if self.phase != Phase::CardShown {
            return Err(DecisionError::InvalidState);
        }

        let index = self.current_index as usize;
        match decision {
            Decision::Accept => {
                self.card_accepted = true;
                self.cues.pulse(HapticIntensity::Light);
                self.cues.play(SoundCue::SwipeRight);
                self.cues.play(SoundCue::PlayerChange);
            }
            Decision::Reject => {
                let drinks = self.deck.get(index).map_or(0, |card| card.drinks);
                if let Some(player) = self.players.get_mut(self.current_player_index) {
                    player.add_drinks(drinks);
                }
                self.cues.play(SoundCue::SwipeLeft);
                self.cues.play(SoundCue::Drink);
            }
        }

        if index + 1 >= self.deck.len() {
            self.phase = Phase::Finished;
            tracing::debug!("deck exhausted, game finished");
        } else {
            self.phase = Phase::AwaitingNextPlayer;
        }

        tracing::debug!(?decision, card = index, "decision applied");
        Ok(())
    }

    /// Acknowledges the next-player interstitial: rotates the turn, draws
    /// the next card, and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting on a handover.
    pub fn acknowledge_next_player(&mut self) -> Result<&Card, AdvanceError> {
        if self.phase != Phase::AwaitingNextPlayer {
            return Err(AdvanceError::InvalidState);
        }

        // apply_decision finishes the game on the last card, so a card is
        // always left to draw here.
        debug_assert!((self.current_index + 1) < self.deck.len() as i32);

        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        self.current_index += 1;
        self.card_accepted = false;
        self.phase = Phase::CardShown;
        self.cues.play(SoundCue::CardDraw);

        tracing::debug!(
            card = self.current_index,
            player = self.current_player_index,
            "next player acknowledged"
        );

        self.deck
            .get(self.current_index as usize)
            .ok_or(AdvanceError::InvalidState)
    }
}
