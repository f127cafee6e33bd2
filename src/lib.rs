//! # aina-quest
//!
//! Hot-seat engine for ʻĀinaQuest, a planting card game for 2 to 8 players
//! sharing one device.
//!
//! Each round every player is dealt a hand. Each turn every player, one at a
//! time, secretly plants one card face-down; then all planted cards are
//! revealed at once (the Huli), committed to their owners' tableaus, and the
//! remaining hands are passed to the next seat. After the last turn the
//! tableaus are scored. After the last round whoever holds the most invasive
//! cards loses a penalty and the final standings are ranked.
//!
//! ## Design Principles
//!
//! 1. **One owner per card**: `CardInstance` is not `Clone`. Every instance
//!    lives in exactly one container (deck, hand, planted slot, tableau or
//!    discard pile) and moves between them by value.
//!
//! 2. **Explicit transitions**: every control is a `&mut self` method on
//!    `GameSession`. Calling one in the wrong phase is an error that leaves
//!    the session untouched.
//!
//! 3. **Reproducible**: decks are shuffled by a seeded ChaCha8 `GameRng`. The
//!    same seed and the same controls give the same game, and every accepted
//!    action is recorded in order.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, rule configuration, action records
//! - `cards`: definitions, instances, the catalog and the deck
//! - `zones`: where a card is and who may see it
//! - `rules`: round scoring and final standings
//! - `session`: the turn state machine, snapshots and the table
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use aina_quest::{Catalog, GameConfig, HuliOutcome, Table};
//!
//! let catalog = Catalog::from_json(
//!     r#"[{ "id": "naupaka", "name": "Naupaka", "type": "native",
//!           "points": 2, "count": 30, "iconColors": ["blue"] }]"#,
//! ).unwrap();
//! let mut table = Table::new(catalog, GameConfig::default()).unwrap().with_seed(5);
//! let session = table.start_game(&["Kai", "Lani"]).unwrap();
//!
//! for _ in 0..2 {
//!     let id = session.reveal_hand_to_current_picker().unwrap()[0].id().clone();
//!     session.plant(&id).unwrap();
//! }
//! assert_eq!(session.trigger_huli().unwrap(), HuliOutcome::Revealed);
//! session.trigger_huli().unwrap();
//! assert_eq!(session.turn(), 2);
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod zones;

pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, GameRngState, IconBonusTable, PlayerId, PlayerMap,
};

pub use crate::cards::{
    CardDefinition, CardId, CardInstance, CardType, Catalog, Deck, IconColors, InstanceId,
};

pub use crate::error::{CatalogError, ConfigError, GameError, ParseInstanceIdError, SelectionError};

pub use crate::rules::{RoundScore, Standing};

pub use crate::session::{
    GameSession, HuliOutcome, Phase, PlantOutcome, PlantedCard, RevealState, RoundOutcome,
    SessionSnapshot, Table, TurnOutcome,
};

pub use crate::zones::{Zone, ZoneVisibility};
