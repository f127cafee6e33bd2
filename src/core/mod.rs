//! Core engine types: players, RNG, configuration, actions.
//!
//! These building blocks know nothing about turn phases or scoring.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, IconBonusTable};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
