//! The table: a loaded catalog, a rule set, and at most one game at a time.

use std::sync::Arc;

use tracing::info;

use super::game::GameSession;
use crate::cards::Catalog;
use crate::core::{GameConfig, GameRng};
use crate::error::{ConfigError, GameError};

/// Owns the catalog and config and starts, holds and resets sessions.
#[derive(Debug)]
pub struct Table {
    catalog: Arc<Catalog>,
    config: GameConfig,
    seeds: Option<GameRng>,
    session: Option<GameSession>,
}

impl Table {
    /// A table whose games shuffle from OS entropy.
    pub fn new(catalog: Catalog, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            catalog: Arc::new(catalog),
            config,
            seeds: None,
            session: None,
        })
    }

    /// Seed every game this table starts from one master seed.
    ///
    /// Two tables built with the same seed deal the same games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeds = Some(GameRng::new(seed));
        self
    }

    /// Start a game with the non-blank names, in order.
    ///
    /// Names are trimmed; blank entries are dropped before the seat count is
    /// checked. Any game in progress is replaced.
    pub fn start_game<S: AsRef<str>>(&mut self, names: &[S]) -> Result<&mut GameSession, GameError> {
        self.start(clean_names(names))
    }

    /// Start a game with exactly `requested` seats.
    ///
    /// Fewer than `requested` non-blank names is an error; names past
    /// `requested` are ignored.
    pub fn start_game_with_count<S: AsRef<str>>(
        &mut self,
        names: &[S],
        requested: usize,
    ) -> Result<&mut GameSession, GameError> {
        let mut names = clean_names(names);
        if names.len() < requested {
            return Err(GameError::InsufficientPlayers {
                required: requested,
                supplied: names.len(),
            });
        }
        names.truncate(requested);
        self.start(names)
    }

    /// Drop the current game, if any.
    pub fn reset_game(&mut self) {
        if self.session.take().is_some() {
            info!("game reset");
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    /// The current game, or `GameError::NoSession`.
    pub fn require_session_mut(&mut self) -> Result<&mut GameSession, GameError> {
        self.session.as_mut().ok_or(GameError::NoSession)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn next_rng(&mut self) -> GameRng {
        match self.seeds.as_mut() {
            Some(seeds) => GameRng::new(seeds.next_seed()),
            None => GameRng::from_entropy(),
        }
    }

    fn start(&mut self, names: Vec<String>) -> Result<&mut GameSession, GameError> {
        let rng = self.next_rng();
        let session = GameSession::new(names, self.catalog.clone(), self.config.clone(), rng)?;
        Ok(self.session.insert(session))
    }
}

fn clean_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.as_ref().trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}
