//! Card locations.
//!
//! Every card instance in a session sits in exactly one `Zone`. The zone
//! also decides who may see the card's face.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where a card instance currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    /// The shared draw deck.
    Deck,
    /// A player's hand.
    Hand(PlayerId),
    /// A player's face-down planted slot for the current turn.
    Planted(PlayerId),
    /// A player's committed cards for the current round.
    Tableau(PlayerId),
    /// Tableaus of earlier rounds, kept until the next deck rebuild.
    Discard,
}

/// Who may see card faces in a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneVisibility {
    /// Everyone at the table.
    Public,
    /// Only the owning player, and only while they hold the device.
    OwnerOnly,
    /// Nobody.
    Hidden,
}

impl Zone {
    /// The player a zone belongs to, `None` for shared zones.
    #[must_use]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Zone::Hand(p) | Zone::Planted(p) | Zone::Tableau(p) => Some(p),
            Zone::Deck | Zone::Discard => None,
        }
    }

    /// Face visibility, given whether the current turn's Huli has happened.
    #[must_use]
    pub fn visibility(self, huli_revealed: bool) -> ZoneVisibility {
        match self {
            Zone::Deck => ZoneVisibility::Hidden,
            Zone::Hand(_) => ZoneVisibility::OwnerOnly,
            Zone::Planted(_) if huli_revealed => ZoneVisibility::Public,
            Zone::Planted(_) => ZoneVisibility::Hidden,
            Zone::Tableau(_) | Zone::Discard => ZoneVisibility::Public,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Deck => f.write_str("deck"),
            Zone::Hand(p) => write!(f, "{p} hand"),
            Zone::Planted(p) => write!(f, "{p} planted"),
            Zone::Tableau(p) => write!(f, "{p} tableau"),
            Zone::Discard => f.write_str("discard"),
        }
    }
}
