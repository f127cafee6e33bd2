//! Game sessions: the hot-seat turn machine and the table that hosts it.
//!
//! ## Key Types
//!
//! - `Table`: catalog + rules, starts and resets games
//! - `GameSession`: one game, every card and per-seat record in it
//! - `Phase`: where the session is in its turn cycle
//! - `SessionSnapshot`: serializable, visibility-filtered view for renderers

pub mod game;
pub mod phase;
pub mod player;
pub mod snapshot;
pub mod table;

pub use game::{GameSession, PlantedCard};
pub use phase::{HuliOutcome, Phase, PlantOutcome, RevealState, RoundOutcome, TurnOutcome};
pub use player::{InvasiveRecord, PlayerState};
pub use snapshot::{CardView, PlantedView, PlayerSnapshot, SessionSnapshot};
pub use table::Table;
