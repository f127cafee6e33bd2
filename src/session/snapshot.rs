//! Serializable views of a session for a rendering layer.
//!
//! A snapshot only carries what the table may see right now: planted cards
//! stay masked until Huli, and the only hand included is the one the device
//! is showing.

use serde::{Deserialize, Serialize};

use super::game::{GameSession, PlantedCard};
use super::phase::Phase;
use crate::cards::{CardInstance, CardType, InstanceId};
use crate::core::PlayerId;
use crate::rules::{RoundScore, Standing};

/// The face of one card instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub instance_id: InstanceId,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub points: u32,
    pub icon_colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
}

impl From<&CardInstance> for CardView {
    fn from(card: &CardInstance) -> Self {
        Self {
            instance_id: card.id().clone(),
            name: card.name().to_string(),
            card_type: card.card_type(),
            points: card.points(),
            icon_colors: card.icon_colors().iter().map(str::to_string).collect(),
            front: card.front().map(str::to_string),
        }
    }
}

/// A planted slot, masked while the turn is hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "card", rename_all = "camelCase")]
pub enum PlantedView {
    Empty,
    FaceDown,
    FaceUp(CardView),
}

impl From<PlantedCard<'_>> for PlantedView {
    fn from(planted: PlantedCard<'_>) -> Self {
        match planted {
            PlantedCard::Empty => PlantedView::Empty,
            PlantedCard::FaceDown => PlantedView::FaceDown,
            PlantedCard::FaceUp(card) => PlantedView::FaceUp(card.into()),
        }
    }
}

/// What the table may see of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub seat: PlayerId,
    pub name: String,
    pub hand_size: usize,
    /// Present only for the player currently choosing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<Vec<CardView>>,
    pub planted: PlantedView,
    pub tableau: Vec<CardView>,
    pub invasive_count: usize,
    pub round_scores: Vec<Option<RoundScore>>,
}

/// A point-in-time view of a whole session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub round: u32,
    pub turn: u32,
    pub rounds: usize,
    pub turns_per_round: usize,
    pub current_picker: PlayerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<InstanceId>,
    pub deck_size: usize,
    pub players: Vec<PlayerSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standings: Option<Vec<Standing>>,
}

impl GameSession {
    /// Capture what a renderer may show right now.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let choosing = self.phase() == Phase::Choosing;
        let players = self
            .players()
            .zip(self.planted_views())
            .map(|((seat, player), planted)| PlayerSnapshot {
                seat,
                name: player.name().to_string(),
                hand_size: player.hand().len(),
                hand: (choosing && seat == self.current_picker())
                    .then(|| player.hand().iter().map(CardView::from).collect()),
                planted: planted.into(),
                tableau: player.tableau().iter().map(CardView::from).collect(),
                invasive_count: player.invasive_count(),
                round_scores: player.round_scores().to_vec(),
            })
            .collect();

        SessionSnapshot {
            phase: self.phase(),
            round: self.round(),
            turn: self.turn(),
            rounds: self.config().rounds,
            turns_per_round: self.config().turns_per_round,
            current_picker: self.current_picker(),
            selection: self.selection().cloned(),
            deck_size: self.deck_len(),
            players,
            standings: self.standings().map(<[Standing]>::to_vec),
        }
    }
}
