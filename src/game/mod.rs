//! Deck and turn engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Category};
use crate::cues::Cues;
use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::GameOptions;
use crate::player::Player;

mod session;
pub mod state;
mod turns;

pub use session::{SavedGame, ScreenPayload};
pub use state::{Decision, Phase};

/// A party card game engine that owns the deck, the player roster, and
/// turn progression.
///
/// The engine is the single owner of the session state: collaborators
/// submit intents ([`Game::apply_decision`] and friends) and read state
/// through getters or [`Game::snapshot`], never mutating it directly. Use
/// [`GameOptions`] to configure rules such as the staleness window and
/// cue toggles.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Feedback collaborators.
    cues: Cues,
    /// Current game phase.
    phase: Phase,
    /// The shuffled deck for this session.
    deck: Deck,
    /// Player roster in seating order.
    players: Vec<Player>,
    /// Index of the card on screen; -1 before the first draw.
    current_index: i32,
    /// Index of the player whose turn it is.
    current_player_index: usize,
    /// Whether the shown card was accepted (transient UI flag, persisted
    /// so a restore can resume mid-card).
    card_accepted: bool,
    /// Random number generator for shuffles.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates an empty engine with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut cues = Cues::noop();
        cues.set_sound_enabled(options.sound_enabled);
        cues.set_haptic_enabled(options.haptic_enabled);

        Self {
            options,
            cues,
            phase: Phase::NotStarted,
            deck: Deck::from_cards(Vec::new()),
            players: Vec::new(),
            current_index: -1,
            current_player_index: 0,
            card_accepted: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Attaches feedback collaborators, keeping the option toggles.
    #[must_use]
    pub fn with_cues(mut self, mut cues: Cues) -> Self {
        cues.set_sound_enabled(self.options.sound_enabled);
        cues.set_haptic_enabled(self.options.haptic_enabled);
        self.cues = cues;
        self
    }

    /// Starts a fresh session from the catalog.
    ///
    /// Builds a shuffled deck restricted to `selected` (with the Wildcard
    /// repair pass), resets every drink tally, and leaves the engine in
    /// [`Phase::NotStarted`] ready for [`Game::begin_turn`].
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than the minimum number of players are
    /// given, no categories are selected, or the selection matches no
    /// catalog cards. On error the engine state is unchanged.
    pub fn initialize(
        &mut self,
        players: Vec<Player>,
        catalog: &[Card],
        selected: &[Category],
    ) -> Result<(), SetupError> {
        if players.len() < self.options.min_players {
            return Err(SetupError::NotEnoughPlayers);
        }
        if selected.is_empty() {
            return Err(SetupError::NoCategoriesSelected);
        }

        let deck = Deck::shuffled(catalog, selected, &mut self.rng);
        if deck.is_empty() {
            return Err(SetupError::EmptyDeck);
        }

        tracing::debug!(
            players = players.len(),
            cards = deck.len(),
            "session initialized"
        );

        self.deck = deck;
        self.players = players;
        for player in &mut self.players {
            player.total_drinks = 0;
        }
        self.current_index = -1;
        self.current_player_index = 0;
        self.card_accepted = false;
        self.phase = Phase::NotStarted;

        Ok(())
    }

    /// Discards the in-memory session, returning to [`Phase::NotStarted`].
    ///
    /// The persisted copy is cleared separately through
    /// [`GameStore::clear_game`](crate::store::GameStore::clear_game).
    pub fn clear(&mut self) {
        self.deck = Deck::from_cards(Vec::new());
        self.players.clear();
        self.current_index = -1;
        self.current_player_index = 0;
        self.card_accepted = false;
        self.phase = Phase::NotStarted;
    }

    /// Returns the current game phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the deck has been played out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Returns whether a session is in progress (a card has been drawn
    /// and the game is not over).
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.current_index >= 0 && !self.players.is_empty() && self.phase != Phase::Finished
    }

    /// The card currently on screen, if any.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        if self.current_index < 0 {
            return None;
        }
        self.deck.get(self.current_index as usize)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub const fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Index of the card on screen; -1 before the first draw.
    #[must_use]
    pub const fn current_index(&self) -> i32 {
        self.current_index
    }

    /// Whether the shown card has been accepted.
    #[must_use]
    pub const fn card_accepted(&self) -> bool {
        self.card_accepted
    }

    /// The player roster in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The deck for this session.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of cards left to draw after the current one.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        let shown = (self.current_index + 1).max(0) as usize;
        self.deck.len().saturating_sub(shown)
    }

    /// Enables or disables sound cues.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.options.sound_enabled = enabled;
        self.cues.set_sound_enabled(enabled);
    }

    /// Enables or disables haptic pulses.
    pub fn set_haptic_enabled(&mut self, enabled: bool) {
        self.options.haptic_enabled = enabled;
        self.cues.set_haptic_enabled(enabled);
    }
}

impl core::fmt::Debug for Game {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("players", &self.players.len())
            .field("deck", &self.deck.len())
            .field("current_index", &self.current_index)
            .field("current_player_index", &self.current_player_index)
            .finish_non_exhaustive()
    }
}
