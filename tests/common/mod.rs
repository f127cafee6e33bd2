//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use aina_quest::cards::{CardDefinition, CardType, Catalog, InstanceId};
use aina_quest::core::{GameConfig, GameRng};
use aina_quest::session::{GameSession, HuliOutcome, PlantOutcome, TurnOutcome};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test output when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The sample catalog shipped in `data/cards.json`.
pub fn sample_catalog() -> Catalog {
    Catalog::from_json(include_str!("../../data/cards.json")).expect("sample catalog loads")
}

/// A catalog of `copies` scoring natives and `copies` invasives.
pub fn small_catalog(copies: u32) -> Catalog {
    Catalog::new(vec![
        CardDefinition::new("naupaka", "Naupaka", CardType::Native)
            .with_points(2)
            .with_count(copies)
            .with_icon("blue"),
        CardDefinition::new("miconia", "Miconia", CardType::Invasive).with_count(copies),
    ])
    .expect("small catalog is valid")
}

pub fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Player {i}")).collect()
}

pub fn new_session(players: usize, seed: u64) -> GameSession {
    init_tracing();
    GameSession::new(
        names(players),
        Arc::new(sample_catalog()),
        GameConfig::default(),
        GameRng::new(seed),
    )
    .expect("session starts")
}

/// Reveal the current picker's hand and plant the card `pick` chooses.
pub fn plant_with(
    session: &mut GameSession,
    pick: impl Fn(&[aina_quest::cards::CardInstance]) -> usize,
) -> PlantOutcome {
    let hand = session.reveal_hand_to_current_picker().expect("gate phase");
    let id: InstanceId = hand[pick(hand)].id().clone();
    session.plant(&id).expect("card is in hand")
}

/// Every seat plants its first card, then Huli twice.
pub fn play_turn(session: &mut GameSession) -> TurnOutcome {
    play_turn_with(session, |_| 0)
}

pub fn play_turn_with(
    session: &mut GameSession,
    pick: impl Fn(&[aina_quest::cards::CardInstance]) -> usize,
) -> TurnOutcome {
    for _ in 0..session.player_count() {
        plant_with(session, &pick);
    }
    assert_eq!(session.trigger_huli().expect("huli"), HuliOutcome::Revealed);
    match session.trigger_huli().expect("commit") {
        HuliOutcome::Committed(outcome) => outcome,
        HuliOutcome::Revealed => panic!("second huli should commit"),
    }
}

/// Play every turn of the current round.
pub fn play_round(session: &mut GameSession) {
    loop {
        if let TurnOutcome::RoundComplete { .. } = play_turn(session) {
            return;
        }
    }
}
