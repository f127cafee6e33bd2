//! Turn phases and the outcomes session actions report.
//!
//! ```text
//! Gate ─reveal─▶ Choosing ─plant─▶ Gate (next picker)
//!   ▲              │                   …
//!   │              └─cancel─▶ Gate
//!   │
//!   │            last picker planted
//!   │                  ▼
//!   │            Huli(Hidden) ─huli─▶ Huli(Revealed) ─commit─┐
//!   └──────────────── next turn ◀───────────────────────────┤
//!                                                            ▼
//!                         GameOver ◀─last round─ RoundComplete
//! ```

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::Standing;

/// Whether this turn's planted cards are face up yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Where a session is in its round/turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Waiting for the device to reach the current picker.
    Gate,
    /// The current picker sees their hand and picks one card.
    Choosing,
    /// Everyone has planted; cards are waiting to be (or have been) shown.
    Huli(RevealState),
    /// Round scores are in; waiting to deal the next round.
    RoundComplete,
    /// Final standings are in.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Gate => f.write_str("gate"),
            Phase::Choosing => f.write_str("choosing"),
            Phase::Huli(RevealState::Hidden) => f.write_str("huli (hidden)"),
            Phase::Huli(RevealState::Revealed) => f.write_str("huli (revealed)"),
            Phase::RoundComplete => f.write_str("round complete"),
            Phase::GameOver => f.write_str("game over"),
        }
    }
}

/// What happened after a successful plant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlantOutcome {
    /// Pass the device to this player for their secret pick.
    NextPicker(PlayerId),
    /// Everybody has planted: show the face-down cards.
    HuliPending,
}

/// What happened after a turn was committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Hands were passed and this turn begins at the gate.
    NextTurn { turn: u32 },
    /// The last turn is done and round scores are recorded.
    RoundComplete { round: u32 },
}

/// What the Huli control did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HuliOutcome {
    /// Planted cards are now face up.
    Revealed,
    /// Cards were already up, so the turn was committed.
    Committed(TurnOutcome),
}

/// What happened when the round score screen was dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// This round has been dealt.
    NextRound { round: u32 },
    /// The game is over.
    GameOver(Vec<Standing>),
}
