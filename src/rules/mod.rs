//! Scoring rules.
//!
//! Pure functions over tableaus and tallies. The session calls them at the
//! end of each round and at the end of the game; nothing here mutates game
//! state.

pub mod scoring;

pub use scoring::{
    basic_round_score, final_standings, icon_triples_bonus, penalized_seats, IconBonus,
    PlayerTally, RoundScore, Standing,
};
