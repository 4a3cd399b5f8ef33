//! Catalog loading and category statistics.
//!
//! The catalog is a flat JSON array of cards shipped with the app. Parsing
//! happens once at startup; the engine only ever borrows slices of the
//! parsed catalog.

use crate::card::{Card, Category};
use crate::error::CatalogError;

/// Parses a JSON card catalog.
///
/// The expected format is a flat array of card objects:
///
/// ```
/// use schluck::catalog;
///
/// let json = r#"[
///     { "id": 1, "category": "Wahrheit", "text": "...", "drinks": 2 },
///     { "id": 1, "category": "Wildcard", "text": "...", "drinks": 0 }
/// ]"#;
/// let cards = catalog::parse(json).unwrap();
/// assert_eq!(cards.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if the JSON is malformed or contains an unknown
/// category tag.
pub fn parse(json: &str) -> Result<Vec<Card>, CatalogError> {
    let cards: Vec<Card> = serde_json::from_str(json)?;
    Ok(cards)
}

/// Counts catalog cards per category, in [`Category::ALL`] order.
#[must_use]
pub fn category_counts(catalog: &[Card]) -> [(Category, usize); 5] {
    Category::ALL.map(|category| {
        let count = catalog.iter().filter(|c| c.category == category).count();
        (category, count)
    })
}
