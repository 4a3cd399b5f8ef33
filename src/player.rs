//! Player records and drink tallies.

use serde::{Deserialize, Serialize};

/// A player in the session.
///
/// Only `total_drinks` is mutated after setup, and only by the engine
/// when a drink penalty is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display glyph (emoji or similar).
    pub avatar: String,
    /// Drinks accumulated over the whole game.
    pub total_drinks: u32,
}

impl Player {
    /// Creates a new player with a zero drink tally.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::Player;
    ///
    /// let player = Player::new("p1", "Anna", "🦊");
    /// assert_eq!(player.total_drinks, 0);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            total_drinks: 0,
        }
    }

    /// Adds a drink penalty to the tally.
    pub fn add_drinks(&mut self, drinks: u32) {
        self.total_drinks = self.total_drinks.saturating_add(drinks);
    }
}
