//! Card types and the card catalog format.

use serde::{Deserialize, Serialize};

/// Card category.
///
/// The five tags form a closed set; serialized names match the catalog
/// data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Truth question directed at the current player.
    Wahrheit,
    /// Task the current player has to perform.
    Aufgabe,
    /// Group task involving everyone at the table.
    Gruppe,
    /// Duel between the current player and an opponent.
    Duell,
    /// Wildcard with special effects; never dealt twice in a row.
    Wildcard,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Wahrheit,
        Self::Aufgabe,
        Self::Gruppe,
        Self::Duell,
        Self::Wildcard,
    ];

    /// Returns whether this is the [`Category::Wildcard`] tag.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

/// A drawable card.
///
/// Cards are created once from the static catalog and never mutated. The
/// `text` is display content only; the engine reads `category` and
/// `drinks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Identifier, unique within the card's category.
    pub id: u32,
    /// The card's category tag.
    pub category: Category,
    /// Display text shown on the card face.
    pub text: String,
    /// Drink penalty applied when the card is rejected.
    pub drinks: u32,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::{Card, Category};
    ///
    /// let card = Card::new(1, Category::Wahrheit, "Never have I ever...", 2);
    /// assert_eq!(card.drinks, 2);
    /// ```
    #[must_use]
    pub fn new(id: u32, category: Category, text: impl Into<String>, drinks: u32) -> Self {
        Self {
            id,
            category,
            text: text.into(),
            drinks,
        }
    }
}
