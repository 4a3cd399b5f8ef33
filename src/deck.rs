//! Deck construction: filtered, seeded shuffle with the Wildcard repair
//! pass.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, Category};

/// An ordered sequence of cards for one game session.
///
/// A deck is built once (shuffle plus repair pass) and never reordered
/// afterwards; progress only moves a draw pointer over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a shuffled deck from the catalog, restricted to the selected
    /// categories.
    ///
    /// The shuffle is a uniform Fisher-Yates permutation driven by the
    /// seeded engine RNG, followed by [`repair_wildcards`] so that no two
    /// adjacent cards are both [`Category::Wildcard`].
    #[must_use]
    pub fn shuffled(catalog: &[Card], selected: &[Category], rng: &mut ChaCha8Rng) -> Self {
        let mut cards: Vec<Card> = catalog
            .iter()
            .filter(|card| selected.contains(&card.category))
            .cloned()
            .collect();

        cards.shuffle(rng);
        repair_wildcards(&mut cards);

        Self { cards }
    }

    /// Reconstructs a deck from a persisted card sequence, as-is.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Breaks up adjacent Wildcard pairs with local swaps.
///
/// One forward pass: for each adjacent pair that is both Wildcard, the
/// nearest following non-Wildcard is swapped into the second position.
/// This is a best-effort repair, not a constraint solver. When a pair sits
/// in front of an all-Wildcard tail there is nothing left to swap in and
/// the pair stays; the pass never re-scans from the beginning. The
/// limitation is deliberate and kept reproducible under a fixed seed.
pub(crate) fn repair_wildcards(cards: &mut [Card]) {
    if cards.len() < 2 {
        return;
    }

    for i in 0..cards.len() - 1 {
        if cards[i].category.is_wildcard() && cards[i + 1].category.is_wildcard() {
            let mut swap_index = i + 2;
            while swap_index < cards.len() && cards[swap_index].category.is_wildcard() {
                swap_index += 1;
            }

            if swap_index < cards.len() {
                cards.swap(i + 1, swap_index);
            }
        }
    }
}
