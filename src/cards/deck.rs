//! The draw deck.
//!
//! `Deck::build` expands every catalog entry into `count` instances, in
//! catalog order, then shuffles. The top of the deck is the end of the
//! vector: `draw` pops from there.

use tracing::debug;

use super::catalog::Catalog;
use super::instance::CardInstance;
use crate::core::GameRng;

/// An ordered, shuffled pile of card instances.
#[derive(Debug, Default)]
pub struct Deck {
    cards: Vec<CardInstance>,
}

impl Deck {
    /// Build and shuffle a fresh deck from the catalog.
    ///
    /// The catalog itself is untouched; every call mints a new set of
    /// instances with ids `<catalogId>__0 .. <catalogId>__<count-1>`.
    ///
    /// ```
    /// use aina_quest::cards::{Catalog, Deck};
    /// use aina_quest::core::GameRng;
    ///
    /// let catalog = Catalog::from_json(
    ///     r#"[{ "id": "koa", "name": "Koa", "type": "endemic", "count": 5 }]"#,
    /// ).unwrap();
    /// let deck = Deck::build(&catalog, &mut GameRng::new(1));
    /// assert_eq!(deck.len(), 5);
    /// ```
    #[must_use]
    pub fn build(catalog: &Catalog, rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(catalog.total_instances());
        for definition in catalog.iter() {
            for copy in 0..definition.count {
                cards.push(CardInstance::new(definition.clone(), copy));
            }
        }
        rng.shuffle(&mut cards);

        debug!(cards = cards.len(), "built deck");
        Self { cards }
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<CardInstance> {
        self.cards.pop()
    }

    /// Take up to `n` cards from the top, in draw order.
    pub fn draw_many(&mut self, n: usize) -> Vec<CardInstance> {
        let keep = self.cards.len().saturating_sub(n);
        let mut drawn = self.cards.split_off(keep);
        drawn.reverse();
        drawn
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The next card `draw` would return.
    #[must_use]
    pub fn peek(&self) -> Option<&CardInstance> {
        self.cards.last()
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }
}
