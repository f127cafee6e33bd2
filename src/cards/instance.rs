//! Card instances - the physical copies in play.
//!
//! A catalog entry with `count: 3` becomes three `CardInstance`s when the
//! deck is built, identified `<catalogId>__0`, `__1` and `__2`.
//!
//! ## Ownership
//!
//! `CardInstance` is deliberately not `Clone`. Exactly one container (the
//! deck, a hand, a planted slot, a tableau or the discard pile) owns each
//! instance, and moving a card between containers moves the value. The
//! compiler rules out a card being in two places at once.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, CardType};
use super::icons::IconColors;
use crate::error::ParseInstanceIdError;

const SEPARATOR: &str = "__";

/// Stable identifier of one physical card.
///
/// Rendered and parsed as `<catalogId>__<copy>`.
///
/// ```
/// use aina_quest::cards::InstanceId;
///
/// let id: InstanceId = "naupaka__2".parse().unwrap();
/// assert_eq!(id.card_id().as_str(), "naupaka");
/// assert_eq!(id.copy(), 2);
/// assert_eq!(id.to_string(), "naupaka__2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct InstanceId {
    card: CardId,
    copy: u32,
}

impl InstanceId {
    #[must_use]
    pub fn new(card: CardId, copy: u32) -> Self {
        Self { card, copy }
    }

    /// The catalog entry this copy was made from.
    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.card
    }

    /// 0-based copy index within the entry's count.
    #[must_use]
    pub fn copy(&self) -> u32 {
        self.copy
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.card, SEPARATOR, self.copy)
    }
}

impl FromStr for InstanceId {
    type Err = ParseInstanceIdError;

    // Catalog ids may themselves contain "__", so split at the last one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (card, copy) = s
            .rsplit_once(SEPARATOR)
            .ok_or_else(|| ParseInstanceIdError(s.to_string()))?;
        if card.is_empty() {
            return Err(ParseInstanceIdError(s.to_string()));
        }
        let copy = copy
            .parse()
            .map_err(|_| ParseInstanceIdError(s.to_string()))?;
        Ok(Self::new(CardId::new(card), copy))
    }
}

impl From<InstanceId> for String {
    fn from(id: InstanceId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for InstanceId {
    type Error = ParseInstanceIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One physical card: a shared catalog definition plus its own identity.
#[derive(Debug)]
pub struct CardInstance {
    id: InstanceId,
    definition: Arc<CardDefinition>,
}

impl CardInstance {
    /// Mint copy number `copy` of `definition`.
    ///
    /// Only the deck builder should call this; minting the same copy twice
    /// breaks card conservation.
    #[must_use]
    pub fn new(definition: Arc<CardDefinition>, copy: u32) -> Self {
        Self {
            id: InstanceId::new(definition.id.clone(), copy),
            definition,
        }
    }

    #[must_use]
    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    #[must_use]
    pub fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.definition.card_type
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.definition.points
    }

    #[must_use]
    pub fn icon_colors(&self) -> &IconColors {
        &self.definition.icon_colors
    }

    #[must_use]
    pub fn front(&self) -> Option<&str> {
        self.definition.front.as_deref()
    }
}
