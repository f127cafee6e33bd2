//! Card system: definitions, instances, the catalog and the deck.
//!
//! ## Key Types
//!
//! - `CardDefinition`: immutable catalog entry (name, type, points, count, icons)
//! - `CardType`: closed set of card kinds; scoring matches on it exhaustively
//! - `CardInstance`: one physical copy, owned by exactly one container
//! - `Catalog`: validated definitions loaded from JSON
//! - `Deck`: shuffled instances, drawn from the top

pub mod catalog;
pub mod deck;
pub mod definition;
pub mod icons;
pub mod instance;

pub use catalog::Catalog;
pub use deck::Deck;
pub use definition::{CardDefinition, CardId, CardType};
pub use icons::IconColors;
pub use instance::{CardInstance, InstanceId};
