//! Game configuration.
//!
//! `GameConfig` holds the rule constants of a game: hand size, turns per
//! round, number of rounds, seat bounds, the invasive penalty and the
//! icon-color bonus table. `Default` is the standard ʻĀinaQuest rule set.
//! Configs can be built with the `with_*` methods or loaded from JSON, where
//! every missing field falls back to the standard value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Standard number of cards dealt to each player per round.
pub const HAND_SIZE: usize = 9;
/// Standard number of turns per round.
pub const TURNS_PER_ROUND: usize = 9;
/// Standard number of rounds per game.
pub const ROUNDS: usize = 3;
/// Standard penalty for holding the most invasive cards.
pub const INVASIVE_PENALTY: i64 = 20;
/// Largest hand a config may deal.
pub const MAX_HAND_SIZE: usize = 1024;
/// Most rounds a config may schedule.
pub const MAX_ROUNDS: usize = 1024;

/// Points per completed triple of each icon color.
///
/// Colors absent from the table are worth nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconBonusTable(BTreeMap<String, i64>);

impl IconBonusTable {
    /// An empty table: no color earns anything.
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the bonus for one color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>, bonus: i64) -> Self {
        self.0.insert(color.into(), bonus);
        self
    }

    /// Points per triple of `color`, 0 for unknown colors.
    #[must_use]
    pub fn bonus_for(&self, color: &str) -> i64 {
        self.0.get(color).copied().unwrap_or(0)
    }

    /// Iterate over (color, bonus) pairs in color order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(c, b)| (c.as_str(), *b))
    }
}

impl Default for IconBonusTable {
    fn default() -> Self {
        Self::empty()
            .with_color("blue", 5)
            .with_color("orange", 10)
            .with_color("green", 15)
            .with_color("pink", 20)
    }
}

/// Complete rule configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,

    /// Turns per round. Each turn every player plants one card.
    pub turns_per_round: usize,

    /// Rounds per game.
    pub rounds: usize,

    /// Fewest seats a game may start with.
    pub min_players: usize,

    /// Most seats a game may start with.
    pub max_players: usize,

    /// Points deducted from each player tied for the most invasive cards.
    pub invasive_penalty: i64,

    /// Icon-triple bonus per color.
    pub icon_bonus: IconBonusTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            turns_per_round: TURNS_PER_ROUND,
            rounds: ROUNDS,
            min_players: 2,
            max_players: 8,
            invasive_penalty: INVASIVE_PENALTY,
            icon_bonus: IconBonusTable::default(),
        }
    }
}

impl GameConfig {
    /// The standard rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON. Missing fields take their standard values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_turns_per_round(mut self, turns: usize) -> Self {
        self.turns_per_round = turns;
        self
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_invasive_penalty(mut self, penalty: i64) -> Self {
        self.invasive_penalty = penalty;
        self
    }

    #[must_use]
    pub fn with_icon_bonus(mut self, table: IconBonusTable) -> Self {
        self.icon_bonus = table;
        self
    }

    /// Cards one deal consumes for `player_count` seats.
    #[must_use]
    pub fn cards_per_deal(&self, player_count: usize) -> usize {
        player_count * self.hand_size
    }

    /// Check that these rules can produce a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let at_least = |field, min, value| {
            if value < min {
                Err(ConfigError::TooSmall { field, min, value })
            } else {
                Ok(())
            }
        };
        at_least("hand size", 1, self.hand_size)?;
        at_least("turns per round", 1, self.turns_per_round)?;
        at_least("rounds", 1, self.rounds)?;
        at_least("min players", 2, self.min_players)?;

        let at_most = |field, max, value| {
            if value > max {
                Err(ConfigError::TooLarge { field, max, value })
            } else {
                Ok(())
            }
        };
        at_most("hand size", MAX_HAND_SIZE, self.hand_size)?;
        at_most("rounds", MAX_ROUNDS, self.rounds)?;

        if self.turns_per_round > self.hand_size {
            return Err(ConfigError::TurnsExceedHand {
                turns: self.turns_per_round,
                hand_size: self.hand_size,
            });
        }
        if self.min_players > self.max_players {
            return Err(ConfigError::PlayerBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.max_players > 255 {
            return Err(ConfigError::TooManySeats(self.max_players));
        }
        Ok(())
    }
}
