//! The card catalog.
//!
//! A `Catalog` is the validated, immutable list of card definitions a deck
//! is built from. It keeps input order (deck building walks it in order, so
//! the same catalog and seed give the same deck) and indexes entries by id.
//!
//! Loading fails fast: a malformed catalog never reaches deck building.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::definition::{CardDefinition, CardId, CardType};
use crate::error::CatalogError;

/// Validated card definitions.
///
/// ## Example
///
/// ```
/// use aina_quest::cards::Catalog;
///
/// let catalog = Catalog::from_json(r#"[
///     { "id": "naupaka", "name": "Naupaka", "type": "native", "points": 2, "count": 3 },
///     { "id": "mongoose", "name": "Mongoose", "type": "invasive" }
/// ]"#).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.total_instances(), 4);
/// assert_eq!(catalog.get("mongoose").unwrap().name, "Mongoose");
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: Vec<Arc<CardDefinition>>,
    index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Validate already-typed definitions.
    pub fn new(definitions: Vec<CardDefinition>) -> Result<Self, CatalogError> {
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        let mut cards = Vec::with_capacity(definitions.len());

        for (position, card) in definitions.into_iter().enumerate() {
            if card.count == 0 {
                return Err(CatalogError::ZeroCount {
                    id: card.id.to_string(),
                });
            }
            if index.insert(card.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: card.id.to_string(),
                });
            }
            cards.push(card.into_shared());
        }

        Ok(Self { cards, index })
    }

    /// Parse and validate a catalog JSON document.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Validate a catalog already parsed into JSON values.
    ///
    /// Structural problems are reported per entry before any typed
    /// deserialization happens, so a missing id is named by its position.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let Value::Array(entries) = value else {
            return Err(CatalogError::NotASequence);
        };

        let mut definitions = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let id = match entry.get("id") {
                Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
                _ => return Err(CatalogError::MissingId { index }),
            };
            let card = serde_json::from_value::<CardDefinition>(entry)
                .map_err(|source| CatalogError::InvalidEntry { index, id, source })?;
            definitions.push(card);
        }

        Self::new(definitions)
    }

    /// Get a definition by catalog id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<CardDefinition>> {
        self.index
            .get(&CardId::new(id))
            .map(|&position| &self.cards[position])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(&CardId::new(id))
    }

    /// Number of distinct definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Σ count over all definitions: the size of a freshly built deck.
    #[must_use]
    pub fn total_instances(&self) -> usize {
        self.cards.iter().map(|c| c.count as usize).sum()
    }

    /// Iterate over definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.iter()
    }

    /// Find definitions by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.iter().filter(move |c| c.card_type == card_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_lookup() {
        let catalog = Catalog::new(vec![
            CardDefinition::new("koa", "Koa", CardType::Endemic).with_count(2),
            CardDefinition::new("waa", "Waʻa", CardType::Canoe),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.total_instances(), 3);
        assert!(catalog.contains("koa"));
        assert!(!catalog.contains("ulu"));
        assert_eq!(catalog.get("waa").unwrap().card_type, CardType::Canoe);
    }

    #[test]
    fn test_iteration_keeps_input_order() {
        let catalog = Catalog::new(vec![
            CardDefinition::new("c", "C", CardType::Native),
            CardDefinition::new("a", "A", CardType::Native),
            CardDefinition::new("b", "B", CardType::Native),
        ])
        .unwrap();

        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_find_by_type() {
        let catalog = Catalog::new(vec![
            CardDefinition::new("rat", "Rat", CardType::Invasive),
            CardDefinition::new("koa", "Koa", CardType::Endemic),
            CardDefinition::new("pig", "Pig", CardType::Invasive),
        ])
        .unwrap();

        assert_eq!(catalog.find_by_type(CardType::Invasive).count(), 2);
        assert_eq!(catalog.find_by_type(CardType::Resource).count(), 0);
    }

    #[test]
    fn test_rejects_duplicates_and_zero_counts() {
        let dup = Catalog::new(vec![
            CardDefinition::new("koa", "Koa", CardType::Endemic),
            CardDefinition::new("koa", "Koa again", CardType::Native),
        ]);
        assert!(matches!(dup, Err(CatalogError::DuplicateId { id }) if id == "koa"));

        let zero = Catalog::new(vec![CardDefinition::new("koa", "Koa", CardType::Endemic).with_count(0)]);
        assert!(matches!(zero, Err(CatalogError::ZeroCount { .. })));

        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_json_structural_errors() {
        assert!(matches!(
            Catalog::from_json(r#"{ "id": "koa" }"#),
            Err(CatalogError::NotASequence)
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{ "id": "koa", "name": "Koa", "type": "native" }, { "name": "X" }]"#),
            Err(CatalogError::MissingId { index: 1 })
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{ "id": "  ", "name": "Blank", "type": "native" }]"#),
            Err(CatalogError::MissingId { index: 0 })
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{ "id": 7, "name": "Seven", "type": "native" }]"#),
            Err(CatalogError::MissingId { index: 0 })
        ));
        assert!(matches!(Catalog::from_json("[1, 2"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_from_json_entry_errors_name_the_card() {
        let err = Catalog::from_json(r#"[{ "id": "koa", "type": "native" }]"#).unwrap_err();
        match err {
            CatalogError::InvalidEntry { index, id, .. } => {
                assert_eq!(index, 0);
                assert_eq!(id, "koa");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            Catalog::from_json(r#"[{ "id": "koa", "name": "Koa", "type": "native", "count": 0 }]"#),
            Err(CatalogError::ZeroCount { .. })
        ));
    }
}
