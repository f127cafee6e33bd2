//! Error types.
//!
//! - `CatalogError`: the card catalog could not be loaded. Fatal to starting
//!   a game; fixed only by loading a corrected catalog.
//! - `ConfigError`: rule constants that cannot produce a playable game.
//! - `SelectionError`: a plant with no selection or a stale instance id.
//!   Session state is untouched when this is returned.
//! - `GameError`: everything a session or table action can reject,
//!   including a session started with an invalid `GameConfig`.

use thiserror::Error;

use crate::cards::InstanceId;
use crate::session::Phase;

/// Failure to load or validate the card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog must be a sequence of card entries")]
    NotASequence,

    #[error("catalog contains no cards")]
    Empty,

    #[error("catalog entry {index} has no id")]
    MissingId { index: usize },

    #[error("catalog entry {index} ({id}) is invalid: {source}")]
    InvalidEntry {
        index: usize,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("card {id} has a count of zero")]
    ZeroCount { id: String },

    #[error("card id {id} appears more than once")]
    DuplicateId { id: String },
}

/// Rule constants that cannot produce a playable game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(String),

    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },

    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        max: usize,
        value: usize,
    },

    #[error("turns per round ({turns}) exceeds hand size ({hand_size})")]
    TurnsExceedHand { turns: usize, hand_size: usize },

    #[error("min players ({min}) exceeds max players ({max})")]
    PlayerBounds { min: usize, max: usize },

    #[error("at most 255 players supported, got {0}")]
    TooManySeats(usize),
}

/// A string that is not of the form `<catalogId>__<copy>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed instance id: {0}")]
pub struct ParseInstanceIdError(pub String);

/// A plant that cannot happen. Treated as a no-op by the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no card is selected")]
    NoSelection,

    #[error("card {0} is not in the current hand")]
    NotInHand(InstanceId),
}

/// Errors returned by session and table actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("need at least {required} player names, got {supplied}")]
    InsufficientPlayers { required: usize, supplied: usize },

    #[error("at most {max} players allowed, got {supplied}")]
    TooManyPlayers { max: usize, supplied: usize },

    #[error("catalog holds {available} cards but a deal needs {needed}")]
    CatalogTooSmall { available: usize, needed: usize },

    #[error("cannot {action} during {phase}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("no game in progress")]
    NoSession,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
