//! A swipe-driven party card game engine.
//!
//! The crate provides two decoupled cores: [`SwipeTracker`], which turns
//! raw pointer/touch samples into discrete swipe decisions with continuous
//! drag feedback, and [`Game`], which owns the shuffled deck, turn
//! rotation, drink tallies, and crash-safe session persistence. The
//! tracker's outcomes drive the engine's transitions, but the engine can
//! equally be driven by buttons.
//!
//! # Example
//!
//! ```
//! use schluck::{Card, Category, Decision, Game, GameOptions, Phase, Player};
//!
//! let catalog = vec![
//!     Card::new(1, Category::Wahrheit, "...", 2),
//!     Card::new(2, Category::Aufgabe, "...", 3),
//! ];
//! let players = vec![Player::new("p1", "Anna", "🦊"), Player::new("p2", "Ben", "🐻")];
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.initialize(players, &catalog, &Category::ALL).unwrap();
//! game.begin_turn().unwrap();
//! game.apply_decision(Decision::Reject).unwrap();
//! assert_ne!(game.phase(), Phase::NotStarted);
//! ```

pub mod autosave;
pub mod card;
pub mod catalog;
pub mod cues;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod store;
pub mod swipe;

// Re-export main types
pub use autosave::Autosave;
pub use card::{Card, Category};
pub use cues::{Cues, HapticIntensity, Haptics, NoopHaptics, NoopSounds, SoundCue, SoundPlayer};
pub use deck::Deck;
pub use error::{
    AdvanceError, CatalogError, DecisionError, DrawError, RestoreError, SetupError, StoreError,
};
pub use game::{Decision, Game, Phase, SavedGame, ScreenPayload};
pub use options::{GameOptions, SwipeOptions, ThresholdPolicy};
pub use player::Player;
pub use store::{GameStore, KeyValueStore, MemoryStore};
pub use swipe::{InputSource, Point, SwipeDirection, SwipeFeedback, SwipeTracker};
