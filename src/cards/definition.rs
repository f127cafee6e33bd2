//! Card definitions - static catalog data.
//!
//! `CardDefinition` holds the immutable properties of a catalog entry:
//! name, type, points, how many copies go into the deck, its icon colors and
//! the front image. Per-copy identity lives in `CardInstance`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::icons::IconColors;

/// Catalog identifier of a card (e.g. `"naupaka"`).
///
/// Identifies the kind of card, not one physical copy.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of card. Decides how a committed card is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Native,
    Endemic,
    Indigenous,
    Canoe,
    /// Reserved for a future effect system: no points, no icons.
    Resource,
    /// No points; counts toward the end-game penalty.
    Invasive,
}

impl CardType {
    /// Does this card contribute its points and icons to a round score?
    #[must_use]
    pub const fn scores(self) -> bool {
        match self {
            CardType::Native | CardType::Endemic | CardType::Indigenous | CardType::Canoe => true,
            CardType::Resource | CardType::Invasive => false,
        }
    }

    /// Is this card tracked for the invasive penalty?
    #[must_use]
    pub const fn is_invasive(self) -> bool {
        matches!(self, CardType::Invasive)
    }

    /// Lowercase name as it appears in the catalog.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Native => "native",
            CardType::Endemic => "endemic",
            CardType::Indigenous => "indigenous",
            CardType::Canoe => "canoe",
            CardType::Resource => "resource",
            CardType::Invasive => "invasive",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_count() -> u32 {
    1
}

/// Static card definition.
///
/// Field names follow the catalog JSON (`iconColors`, `front`).
///
/// ## Example
///
/// ```
/// use aina_quest::cards::{CardDefinition, CardType};
///
/// let naupaka = CardDefinition::new("naupaka", "Naupaka", CardType::Native)
///     .with_points(3)
///     .with_count(4)
///     .with_icon("green");
///
/// assert!(naupaka.icon_colors.contains("green"));
/// assert_eq!(naupaka.count, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Unique catalog identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Card type.
    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Face value.
    #[serde(default)]
    pub points: u32,

    /// Copies of this card in a freshly built deck.
    #[serde(default = "default_count")]
    pub count: u32,

    /// Icon color tags printed on the card.
    #[serde(default)]
    pub icon_colors: IconColors,

    /// Front image reference, opaque to the engine.
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
}

impl CardDefinition {
    /// Create a one-copy, zero-point definition with no icons.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            card_type,
            points: 0,
            count: 1,
            icon_colors: IconColors::default(),
            front: None,
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, color: impl Into<String>) -> Self {
        self.icon_colors.insert(color);
        self
    }

    #[must_use]
    pub fn with_front(mut self, front: impl Into<String>) -> Self {
        self.front = Some(front.into());
        self
    }

    /// Freeze into a shareable catalog entry.
    #[must_use]
    pub fn into_shared(self) -> Arc<CardDefinition> {
        Arc::new(self)
    }
}
