//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when setting up a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// At least two players are required.
    #[error("at least two players are required")]
    NotEnoughPlayers,
    /// No categories selected.
    #[error("no categories selected")]
    NoCategoriesSelected,
    /// The selected categories match no cards in the catalog.
    #[error("selected categories match no cards")]
    EmptyDeck,
}

/// Errors that can occur when drawing the first card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game phase for drawing.
    #[error("invalid game phase for drawing")]
    InvalidState,
    /// No cards left to draw.
    #[error("no cards left to draw")]
    DeckExhausted,
}

/// Errors that can occur when applying a swipe decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// No card is on screen awaiting a decision.
    #[error("no card is awaiting a decision")]
    InvalidState,
}

/// Errors that can occur when acknowledging the next-player interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// The game is not waiting on a player handover.
    #[error("the game is not waiting on a player handover")]
    InvalidState,
}

/// Errors that can occur when restoring a persisted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The saved session is older than the staleness window.
    ///
    /// Callers treat this exactly like "no saved session".
    #[error("saved session is stale")]
    StaleSession,
    /// The saved session violates engine invariants (bad indices or
    /// roster) and cannot be trusted.
    #[error("saved session is invalid")]
    InvalidSession,
}

/// Errors that can occur while parsing the card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON is malformed.
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors that can occur in the storage backend.
///
/// These never escape [`GameStore`](crate::store::GameStore): the wrapper
/// logs them and degrades to in-memory operation. Backend implementations
/// return them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying backend failed (I/O, quota, corruption).
    #[error("storage backend failure: {0}")]
    Backend(String),
    /// A persisted value could not be serialized or parsed.
    #[error("serialization failure: {0}")]
    Serde(#[from] serde_json::Error),
}
