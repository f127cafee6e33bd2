//! The game session: one hot-seat game from first deal to final standings.
//!
//! A `GameSession` owns every card in play and every per-seat record. Each
//! player-facing control is one `&mut self` method; a control used in the
//! wrong phase returns `GameError::WrongPhase` and changes nothing.
//!
//! ## Turn cycle
//!
//! 1. `reveal_hand_to_current_picker` (Gate → Choosing)
//! 2. `select_card` / `plant_selected` (or `plant`) (Choosing → Gate for the
//!    next seat, or Huli(Hidden) after the last seat)
//! 3. `trigger_huli` (Huli(Hidden) → Huli(Revealed))
//! 4. `trigger_huli` again or `advance_turn`: commit planted cards, pass
//!    hands, then next turn or round end
//! 5. `advance_round` (RoundComplete → next deal, or GameOver)

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info, warn};

use super::phase::{HuliOutcome, Phase, PlantOutcome, RevealState, RoundOutcome, TurnOutcome};
use super::player::{InvasiveRecord, PlayerState};
use crate::cards::{CardInstance, Catalog, Deck, InstanceId};
use crate::core::{Action, ActionRecord, GameConfig, GameRng, PlayerId, PlayerMap};
use crate::error::{GameError, SelectionError};
use crate::rules::{basic_round_score, final_standings, PlayerTally, RoundScore, Standing};
use crate::zones::{Zone, ZoneVisibility};

/// A planted slot as the table may see it.
#[derive(Clone, Copy, Debug)]
pub enum PlantedCard<'a> {
    /// Nothing planted yet this turn.
    Empty,
    /// Planted, face hidden until Huli.
    FaceDown,
    /// Planted and revealed.
    FaceUp(&'a CardInstance),
}

/// One hot-seat game.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    catalog: Arc<Catalog>,
    players: PlayerMap<PlayerState>,
    deck: Deck,
    discard: Vec<CardInstance>,
    rng: GameRng,
    round: u32,
    turn: u32,
    current_picker: PlayerId,
    phase: Phase,
    selection: Option<InstanceId>,
    history: Vector<ActionRecord>,
    standings: Option<Vec<Standing>>,
}

impl GameSession {
    /// Start a game: build the deck and deal round 1.
    ///
    /// `names` are used as given, in seat order. Name cleanup belongs to
    /// `Table::start_game`. The config is validated first; an unplayable one
    /// is `GameError::Config`.
    pub fn new(
        names: Vec<String>,
        catalog: Arc<Catalog>,
        config: GameConfig,
        mut rng: GameRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if names.len() < config.min_players {
            return Err(GameError::InsufficientPlayers {
                required: config.min_players,
                supplied: names.len(),
            });
        }
        if names.len() > config.max_players {
            return Err(GameError::TooManyPlayers {
                max: config.max_players,
                supplied: names.len(),
            });
        }
        let needed = config.cards_per_deal(names.len());
        if catalog.total_instances() < needed {
            return Err(GameError::CatalogTooSmall {
                available: catalog.total_instances(),
                needed,
            });
        }

        let deck = Deck::build(&catalog, &mut rng);
        let rounds = config.rounds;
        let players = PlayerMap::from_vec(
            names
                .into_iter()
                .map(|name| PlayerState::new(name, rounds))
                .collect(),
        );

        info!(
            players = players.player_count(),
            seed = rng.seed(),
            deck = deck.len(),
            "starting game"
        );

        let mut session = Self {
            config,
            catalog,
            players,
            deck,
            discard: Vec::new(),
            rng,
            round: 1,
            turn: 1,
            current_picker: PlayerId::new(0),
            phase: Phase::Gate,
            selection: None,
            history: Vector::new(),
            standings: None,
        };
        session.deal_round();
        Ok(session)
    }

    // === Round dealing ===

    /// Clear the table and deal a fresh hand to every seat.
    ///
    /// Last round's tableaus go to the discard pile. If the deck cannot cover
    /// a full deal it is rebuilt from the catalog and the discard pile is
    /// dropped with the old deck: nothing is reclaimed.
    fn deal_round(&mut self) {
        for (_, player) in self.players.iter_mut() {
            self.discard.append(&mut player.tableau);
            self.discard.append(&mut player.hand);
            if let Some(card) = player.planted.take() {
                self.discard.push(card);
            }
        }
        self.selection = None;

        let needed = self.config.cards_per_deal(self.players.player_count());
        if self.deck.len() < needed {
            debug!(
                remaining = self.deck.len(),
                needed,
                dropped = self.discard.len(),
                "deck too small for a deal, rebuilding from catalog"
            );
            self.discard.clear();
            self.deck = Deck::build(&self.catalog, &mut self.rng);
        }

        let hand_size = self.config.hand_size;
        for (_, player) in self.players.iter_mut() {
            player.hand = self.deck.draw_many(hand_size);
        }

        self.turn = 1;
        self.current_picker = PlayerId::new(0);
        self.phase = Phase::Gate;

        info!(round = self.round, hand_size, deck = self.deck.len(), "dealt round");
    }

    // === Turn state machine ===

    /// The device reached the current picker: show them their hand.
    pub fn reveal_hand_to_current_picker(&mut self) -> Result<&[CardInstance], GameError> {
        self.expect_phase(Phase::Gate, "reveal a hand")?;

        self.phase = Phase::Choosing;
        self.selection = None;
        self.record(Some(self.current_picker), Action::RevealHand);

        Ok(&self.players[self.current_picker].hand)
    }

    /// Highlight a card of the current picker's hand.
    pub fn select_card(&mut self, id: &InstanceId) -> Result<(), GameError> {
        self.expect_phase(Phase::Choosing, "select a card")?;

        if self.players[self.current_picker].find_in_hand(id).is_none() {
            warn!(picker = %self.current_picker, card = %id, "selected card is not in hand");
            return Err(SelectionError::NotInHand(id.clone()).into());
        }

        self.selection = Some(id.clone());
        self.record(Some(self.current_picker), Action::Select(id.clone()));
        Ok(())
    }

    /// Hand the device back without planting.
    pub fn cancel_selection(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Choosing, "cancel a selection")?;

        self.selection = None;
        self.phase = Phase::Gate;
        self.record(Some(self.current_picker), Action::CancelSelection);
        Ok(())
    }

    /// Plant the selected card face-down.
    ///
    /// Without a selection, or with a selection that is no longer in the
    /// hand, nothing changes and a `SelectionError` is returned.
    pub fn plant_selected(&mut self) -> Result<PlantOutcome, GameError> {
        self.expect_phase(Phase::Choosing, "plant a card")?;

        let picker = self.current_picker;
        let Some(id) = self.selection.clone() else {
            warn!(picker = %picker, "plant without a selection ignored");
            return Err(SelectionError::NoSelection.into());
        };
        let player = &mut self.players[picker];
        let Some(position) = player.find_in_hand(&id) else {
            warn!(picker = %picker, card = %id, "stale selection ignored");
            return Err(SelectionError::NotInHand(id).into());
        };

        let card = player.hand.remove(position);
        if let Some(previous) = player.planted.replace(card) {
            player.hand.push(previous);
        }
        self.selection = None;
        debug!(picker = %picker, round = self.round, turn = self.turn, "planted a card");
        self.record(Some(picker), Action::Plant(id));

        if picker == self.players.last_player() {
            self.phase = Phase::Huli(RevealState::Hidden);
            Ok(PlantOutcome::HuliPending)
        } else {
            self.current_picker = picker.next(self.players.player_count());
            self.phase = Phase::Gate;
            Ok(PlantOutcome::NextPicker(self.current_picker))
        }
    }

    /// Select and plant in one step.
    pub fn plant(&mut self, id: &InstanceId) -> Result<PlantOutcome, GameError> {
        self.select_card(id)?;
        self.plant_selected()
    }

    /// The Huli control: reveal planted cards, or commit once revealed.
    pub fn trigger_huli(&mut self) -> Result<HuliOutcome, GameError> {
        match self.phase {
            Phase::Huli(RevealState::Hidden) => {
                self.phase = Phase::Huli(RevealState::Revealed);
                debug!(round = self.round, turn = self.turn, "huli");
                self.record(None, Action::Huli);
                Ok(HuliOutcome::Revealed)
            }
            Phase::Huli(RevealState::Revealed) => self.advance_turn().map(HuliOutcome::Committed),
            phase => {
                warn!(%phase, "huli outside the huli phase ignored");
                Err(GameError::WrongPhase {
                    action: "call huli",
                    phase,
                })
            }
        }
    }

    /// Commit revealed cards to tableaus, pass hands, move on.
    pub fn advance_turn(&mut self) -> Result<TurnOutcome, GameError> {
        self.expect_phase(Phase::Huli(RevealState::Revealed), "commit the turn")?;

        let (round, turn) = (self.round, self.turn);
        for (_, player) in self.players.iter_mut() {
            let Some(card) = player.planted.take() else {
                continue;
            };
            if card.card_type().is_invasive() {
                player.invasive_history.push(InvasiveRecord {
                    instance_id: card.id().clone(),
                    name: card.name().to_string(),
                    round,
                    turn,
                });
            }
            player.tableau.push(card);
        }
        self.rotate_hands_left();
        self.record(None, Action::CommitTurn);

        if (self.turn as usize) < self.config.turns_per_round {
            self.turn += 1;
            self.current_picker = PlayerId::new(0);
            self.phase = Phase::Gate;
            Ok(TurnOutcome::NextTurn { turn: self.turn })
        } else {
            self.end_round();
            Ok(TurnOutcome::RoundComplete { round: self.round })
        }
    }

    /// Every seat's remaining hand moves to the next seat.
    fn rotate_hands_left(&mut self) {
        self.players.pass_forward(|player| &mut player.hand);
        debug!(turn = self.turn, "passed hands");
    }

    // === Scoring ===

    fn end_round(&mut self) {
        let slot = self.round as usize - 1;
        for (seat, player) in self.players.iter_mut() {
            let score = basic_round_score(&player.tableau, &self.config.icon_bonus);
            debug!(%seat, base = score.base, bonus = score.icon_bonus, total = score.total, "round score");
            player.round_scores[slot] = Some(score);
        }
        self.phase = Phase::RoundComplete;
        info!(round = self.round, "round complete");
    }

    /// Dismiss the round scores: deal the next round or finish the game.
    pub fn advance_round(&mut self) -> Result<RoundOutcome, GameError> {
        self.expect_phase(Phase::RoundComplete, "start the next round")?;
        self.record(None, Action::AdvanceRound);

        if (self.round as usize) < self.config.rounds {
            self.round += 1;
            self.deal_round();
            Ok(RoundOutcome::NextRound { round: self.round })
        } else {
            let standings = self.finalize();
            Ok(RoundOutcome::GameOver(standings))
        }
    }

    fn finalize(&mut self) -> Vec<Standing> {
        let tallies = self
            .players
            .iter()
            .map(|(seat, player)| PlayerTally {
                seat,
                name: player.name.clone(),
                round_totals: player.round_totals(),
                invasive_count: player.invasive_count(),
            })
            .collect();
        let standings = final_standings(tallies, self.config.invasive_penalty);

        if let Some(winner) = standings.first() {
            info!(winner = %winner.name, score = winner.final_score, "game over");
        }
        self.phase = Phase::GameOver;
        self.standings = Some(standings.clone());
        standings
    }

    // === Bookkeeping ===

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            warn!(action, phase = %self.phase, "action rejected in this phase");
            Err(GameError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn record(&mut self, player: Option<PlayerId>, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, self.round, self.turn, sequence));
    }

    // === Read access ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Current turn within the round (1-based).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn current_picker(&self) -> PlayerId {
        self.current_picker
    }

    #[must_use]
    pub fn current_picker_name(&self) -> &str {
        &self.players[self.current_picker].name
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &PlayerState {
        &self.players[seat]
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &PlayerState)> {
        self.players.iter()
    }

    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.values().map(|p| p.name.as_str())
    }

    #[must_use]
    pub fn tableau(&self, seat: PlayerId) -> &[CardInstance] {
        self.players[seat].tableau()
    }

    #[must_use]
    pub fn invasive_count(&self, seat: PlayerId) -> usize {
        self.players[seat].invasive_count()
    }

    /// Score of `seat` in round `round` (1-based), once that round ended.
    #[must_use]
    pub fn round_score(&self, seat: PlayerId, round: u32) -> Option<&RoundScore> {
        self.players[seat].round_score(round)
    }

    /// Finished round totals per seat, in seat order.
    #[must_use]
    pub fn round_totals(&self) -> Vec<Vec<i64>> {
        self.players.values().map(PlayerState::round_totals).collect()
    }

    /// The hand the device is currently showing, only while choosing.
    #[must_use]
    pub fn visible_hand(&self) -> Option<&[CardInstance]> {
        (self.phase == Phase::Choosing).then(|| self.players[self.current_picker].hand.as_slice())
    }

    /// The highlighted card, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&InstanceId> {
        self.selection.as_ref()
    }

    /// Every seat's planted slot as the table sees it right now.
    #[must_use]
    pub fn planted_views(&self) -> Vec<PlantedCard<'_>> {
        let revealed = self.phase == Phase::Huli(RevealState::Revealed);
        self.players
            .iter()
            .map(|(seat, player)| match &player.planted {
                None => PlantedCard::Empty,
                Some(card) => match Zone::Planted(seat).visibility(revealed) {
                    ZoneVisibility::Public => PlantedCard::FaceUp(card),
                    ZoneVisibility::OwnerOnly | ZoneVisibility::Hidden => PlantedCard::FaceDown,
                },
            })
            .collect()
    }

    /// Final standings, once the game is over.
    #[must_use]
    pub fn standings(&self) -> Option<&[Standing]> {
        self.standings.as_deref()
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Every accepted action so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The seed that shuffled this game's decks.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Every card instance in the session with its zone.
    pub fn cards(&self) -> impl Iterator<Item = (Zone, &CardInstance)> {
        let deck = self.deck.iter().map(|c| (Zone::Deck, c));
        let seats = self.players.iter().flat_map(|(seat, player)| {
            let hand = player.hand.iter().map(move |c| (Zone::Hand(seat), c));
            let planted = player.planted.iter().map(move |c| (Zone::Planted(seat), c));
            let tableau = player.tableau.iter().map(move |c| (Zone::Tableau(seat), c));
            hand.chain(planted).chain(tableau)
        });
        let discard = self.discard.iter().map(|c| (Zone::Discard, c));
        deck.chain(seats).chain(discard)
    }

    /// Where a card instance currently is.
    #[must_use]
    pub fn locate(&self, id: &InstanceId) -> Option<Zone> {
        self.cards()
            .find(|(_, card)| card.id() == id)
            .map(|(zone, _)| zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardType};
    use crate::error::ConfigError;

    fn catalog(copies: u32) -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                CardDefinition::new("koa", "Koa", CardType::Endemic)
                    .with_points(2)
                    .with_count(copies)
                    .with_icon("blue"),
                CardDefinition::new("rat", "Rat", CardType::Invasive).with_count(copies),
            ])
            .unwrap(),
        )
    }

    fn session(players: usize) -> GameSession {
        let names = (1..=players).map(|i| format!("Player {i}")).collect();
        GameSession::new(names, catalog(30), GameConfig::default(), GameRng::new(7)).unwrap()
    }

    fn plant_first(session: &mut GameSession) -> PlantOutcome {
        session.reveal_hand_to_current_picker().unwrap();
        let id = session.visible_hand().unwrap()[0].id().clone();
        session.plant(&id).unwrap()
    }

    #[test]
    fn test_new_session_deals_round_one() {
        let session = session(3);

        assert_eq!(session.phase(), Phase::Gate);
        assert_eq!(session.round(), 1);
        assert_eq!(session.turn(), 1);
        assert_eq!(session.current_picker(), PlayerId::new(0));
        assert_eq!(session.deck_len(), 60 - 27);
        for (_, player) in session.players() {
            assert_eq!(player.hand().len(), 9);
            assert!(player.tableau().is_empty());
            assert!(!player.has_planted());
        }
    }

    #[test]
    fn test_rejects_bad_seat_counts() {
        let one = GameSession::new(vec!["Solo".into()], catalog(30), GameConfig::default(), GameRng::new(1));
        assert!(matches!(
            one,
            Err(GameError::InsufficientPlayers {
                required: 2,
                supplied: 1
            })
        ));

        let names = (0..9).map(|i| i.to_string()).collect();
        let nine = GameSession::new(names, catalog(60), GameConfig::default(), GameRng::new(1));
        assert!(matches!(nine, Err(GameError::TooManyPlayers { max: 8, supplied: 9 })));
    }

    #[test]
    fn test_rejects_unplayable_config() {
        let start = |names: Vec<String>, config: GameConfig| {
            GameSession::new(names, catalog(30), config, GameRng::new(1))
        };

        let no_seats = start(Vec::new(), GameConfig::default().with_player_bounds(0, 8));
        assert!(matches!(
            no_seats,
            Err(GameError::Config(ConfigError::TooSmall { field: "min players", .. }))
        ));

        let no_rounds = start(vec!["A".into(), "B".into()], GameConfig::default().with_rounds(0));
        assert!(matches!(
            no_rounds,
            Err(GameError::Config(ConfigError::TooSmall { field: "rounds", .. }))
        ));

        let huge_hand = start(
            vec!["A".into(), "B".into()],
            GameConfig::default()
                .with_hand_size(usize::MAX)
                .with_turns_per_round(1),
        );
        assert!(matches!(
            huge_hand,
            Err(GameError::Config(ConfigError::TooLarge { field: "hand size", .. }))
        ));
    }

    #[test]
    fn test_rejects_catalog_smaller_than_a_deal() {
        let result = GameSession::new(
            vec!["A".into(), "B".into()],
            catalog(8),
            GameConfig::default(),
            GameRng::new(1),
        );
        assert!(matches!(
            result,
            Err(GameError::CatalogTooSmall {
                available: 16,
                needed: 18
            })
        ));
    }

    #[test]
    fn test_plant_passes_to_next_picker_then_huli() {
        let mut session = session(3);

        assert_eq!(plant_first(&mut session), PlantOutcome::NextPicker(PlayerId::new(1)));
        assert_eq!(session.phase(), Phase::Gate);
        assert_eq!(plant_first(&mut session), PlantOutcome::NextPicker(PlayerId::new(2)));
        assert_eq!(plant_first(&mut session), PlantOutcome::HuliPending);
        assert_eq!(session.phase(), Phase::Huli(RevealState::Hidden));

        let views = session.planted_views();
        assert!(views.iter().all(|v| matches!(v, PlantedCard::FaceDown)));
    }

    #[test]
    fn test_plant_without_selection_is_a_no_op() {
        let mut session = session(2);
        session.reveal_hand_to_current_picker().unwrap();

        let err = session.plant_selected().unwrap_err();
        assert_eq!(err, GameError::Selection(SelectionError::NoSelection));
        assert_eq!(session.phase(), Phase::Choosing);
        assert_eq!(session.player(PlayerId::new(0)).hand().len(), 9);
        assert!(!session.player(PlayerId::new(0)).has_planted());
    }

    #[test]
    fn test_plant_of_foreign_card_is_a_no_op() {
        let mut session = session(2);
        let foreign = session.player(PlayerId::new(1)).hand()[0].id().clone();
        session.reveal_hand_to_current_picker().unwrap();

        let err = session.plant(&foreign).unwrap_err();
        assert_eq!(err, GameError::Selection(SelectionError::NotInHand(foreign)));
        assert_eq!(session.player(PlayerId::new(0)).hand().len(), 9);
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_cancel_returns_to_gate() {
        let mut session = session(2);
        session.reveal_hand_to_current_picker().unwrap();
        let id = session.visible_hand().unwrap()[3].id().clone();
        session.select_card(&id).unwrap();

        session.cancel_selection().unwrap();

        assert_eq!(session.phase(), Phase::Gate);
        assert_eq!(session.selection(), None);
        assert!(session.visible_hand().is_none());
        assert_eq!(session.current_picker(), PlayerId::new(0));
    }

    #[test]
    fn test_wrong_phase_actions_change_nothing() {
        let mut session = session(2);

        assert!(matches!(
            session.trigger_huli(),
            Err(GameError::WrongPhase { phase: Phase::Gate, .. })
        ));
        assert!(matches!(session.advance_turn(), Err(GameError::WrongPhase { .. })));
        assert!(matches!(session.advance_round(), Err(GameError::WrongPhase { .. })));
        assert!(matches!(session.plant_selected(), Err(GameError::WrongPhase { .. })));
        assert_eq!(session.phase(), Phase::Gate);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_huli_reveals_then_commits() {
        let mut session = session(2);
        plant_first(&mut session);
        plant_first(&mut session);

        assert!(matches!(session.advance_turn(), Err(GameError::WrongPhase { .. })));
        assert_eq!(session.trigger_huli().unwrap(), HuliOutcome::Revealed);
        assert!(session
            .planted_views()
            .iter()
            .all(|v| matches!(v, PlantedCard::FaceUp(_))));

        assert_eq!(
            session.trigger_huli().unwrap(),
            HuliOutcome::Committed(TurnOutcome::NextTurn { turn: 2 })
        );
        assert_eq!(session.phase(), Phase::Gate);
        assert_eq!(session.current_picker(), PlayerId::new(0));
        for (_, player) in session.players() {
            assert_eq!(player.tableau().len(), 1);
            assert_eq!(player.hand().len(), 8);
            assert!(!player.has_planted());
        }
    }

    #[test]
    fn test_commit_tracks_invasives() {
        let mut session = session(2);
        for _ in 0..2 {
            session.reveal_hand_to_current_picker().unwrap();
            let hand = session.visible_hand().unwrap();
            let id = hand
                .iter()
                .find(|c| c.card_type().is_invasive())
                .or_else(|| hand.first())
                .unwrap()
                .id()
                .clone();
            session.plant(&id).unwrap();
        }
        session.trigger_huli().unwrap();
        session.advance_turn().unwrap();

        for (_, player) in session.players() {
            let invasive_in_tableau = player
                .tableau()
                .iter()
                .filter(|c| c.card_type().is_invasive())
                .count();
            assert_eq!(player.invasive_count(), invasive_in_tableau);
            for record in player.invasive_history() {
                assert_eq!(record.round, 1);
                assert_eq!(record.turn, 1);
            }
        }
    }

    #[test]
    fn test_history_records_accepted_actions() {
        let mut session = session(2);
        plant_first(&mut session);

        let actions: Vec<_> = session.history().iter().map(|r| r.action.clone()).collect();
        assert!(matches!(actions[0], Action::RevealHand));
        assert!(matches!(actions[1], Action::Select(_)));
        assert!(matches!(actions[2], Action::Plant(_)));
        assert_eq!(session.history()[2].sequence, 2);
        assert_eq!(session.history()[2].player, Some(PlayerId::new(0)));
    }

    #[test]
    fn test_locate_follows_a_card() {
        let mut session = session(2);
        session.reveal_hand_to_current_picker().unwrap();
        let id = session.visible_hand().unwrap()[0].id().clone();
        assert_eq!(session.locate(&id), Some(Zone::Hand(PlayerId::new(0))));

        session.plant(&id).unwrap();
        assert_eq!(session.locate(&id), Some(Zone::Planted(PlayerId::new(0))));

        plant_first(&mut session);
        session.trigger_huli().unwrap();
        session.trigger_huli().unwrap();
        assert_eq!(session.locate(&id), Some(Zone::Tableau(PlayerId::new(0))));
    }
}
