//! Icon color tags.
//!
//! Cards print zero, one or (rarely) more colored icons. The engine treats
//! colors as opaque tags; only the `IconBonusTable` gives them value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The set of icon colors on one card.
///
/// Sorted and duplicate-free, so a card declaring `["pink", "pink"]` counts
/// pink once. Inline storage covers the usual one or two colors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct IconColors(SmallVec<[String; 2]>);

impl IconColors {
    /// Add a color. Returns false if it was already present.
    pub fn insert(&mut self, color: impl Into<String>) -> bool {
        let color = color.into();
        match self.0.binary_search(&color) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, color);
                true
            }
        }
    }

    #[must_use]
    pub fn contains(&self, color: &str) -> bool {
        self.0.iter().any(|c| c == color)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for IconColors {
    fn from(colors: Vec<String>) -> Self {
        let mut set = IconColors::default();
        for color in colors {
            set.insert(color);
        }
        set
    }
}

impl<'a> FromIterator<&'a str> for IconColors {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = IconColors::default();
        for color in iter {
            set.insert(color);
        }
        set
    }
}
