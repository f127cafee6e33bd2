//! Per-seat state of a session.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, InstanceId};
use crate::rules::RoundScore;

/// An invasive card a player committed.
///
/// The card itself stays in the tableau; this record outlives the round so
/// the end-game penalty can count it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvasiveRecord {
    pub instance_id: InstanceId,
    pub name: String,
    pub round: u32,
    pub turn: u32,
}

/// Everything one seat holds.
#[derive(Debug)]
pub struct PlayerState {
    pub(crate) name: String,
    pub(crate) hand: Vec<CardInstance>,
    pub(crate) planted: Option<CardInstance>,
    pub(crate) tableau: Vec<CardInstance>,
    pub(crate) invasive_history: Vec<InvasiveRecord>,
    pub(crate) round_scores: Vec<Option<RoundScore>>,
}

impl PlayerState {
    pub(crate) fn new(name: String, rounds: usize) -> Self {
        Self {
            name,
            hand: Vec::new(),
            planted: None,
            tableau: Vec::new(),
            invasive_history: Vec::new(),
            round_scores: vec![None; rounds],
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    /// The face-down card for this turn, if planted.
    #[must_use]
    pub fn planted(&self) -> Option<&CardInstance> {
        self.planted.as_ref()
    }

    #[must_use]
    pub fn has_planted(&self) -> bool {
        self.planted.is_some()
    }

    /// Cards committed this round, in commit order.
    #[must_use]
    pub fn tableau(&self) -> &[CardInstance] {
        &self.tableau
    }

    /// Every invasive card committed this game.
    #[must_use]
    pub fn invasive_history(&self) -> &[InvasiveRecord] {
        &self.invasive_history
    }

    #[must_use]
    pub fn invasive_count(&self) -> usize {
        self.invasive_history.len()
    }

    /// Score of round `round` (1-based), once that round has ended.
    #[must_use]
    pub fn round_score(&self, round: u32) -> Option<&RoundScore> {
        let index = (round as usize).checked_sub(1)?;
        self.round_scores.get(index)?.as_ref()
    }

    /// One slot per round; `None` until the round ends.
    #[must_use]
    pub fn round_scores(&self) -> &[Option<RoundScore>] {
        &self.round_scores
    }

    /// Totals of the rounds played so far.
    #[must_use]
    pub fn round_totals(&self) -> Vec<i64> {
        self.round_scores.iter().flatten().map(|s| s.total).collect()
    }

    pub(crate) fn find_in_hand(&self, id: &InstanceId) -> Option<usize> {
        self.hand.iter().position(|c| c.id() == id)
    }
}
