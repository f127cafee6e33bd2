//! Session actions and the action history.
//!
//! Every accepted transition of a session is recorded as an `ActionRecord`.
//! The history is append-only and ordered by `sequence`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::InstanceId;

/// One player-facing control of the hot-seat game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The device reached the picker, who opened their hand.
    RevealHand,
    /// The picker highlighted a card.
    Select(InstanceId),
    /// The picker handed the device back without planting.
    CancelSelection,
    /// The picker planted a card face-down.
    Plant(InstanceId),
    /// Everyone's planted cards were turned face up.
    Huli,
    /// Planted cards joined the tableaus and hands were passed.
    CommitTurn,
    /// The round score screen was dismissed.
    AdvanceRound,
}

/// An accepted action with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted, `None` for table-wide controls (Huli, commit).
    pub player: Option<PlayerId>,

    /// The action taken.
    pub action: Action,

    /// Round when the action was taken (1-based).
    pub round: u32,

    /// Turn when the action was taken (1-based).
    pub turn: u32,

    /// Position in the session history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: Option<PlayerId>, action: Action, round: u32, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            turn,
            sequence,
        }
    }
}
