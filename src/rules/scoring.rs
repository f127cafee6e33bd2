//! Scoring: round scores and end-of-game standings.
//!
//! ## Round score
//!
//! Only cards whose type scores (see `CardType::scores`) count. Their points
//! form the base. Every color they print adds one to that color's counter;
//! each full group of three earns the color's bonus from the
//! `IconBonusTable`.
//!
//! ## Final standings
//!
//! Round totals are summed. Every player tied for the highest invasive count
//! loses the invasive penalty, unless nobody holds an invasive card at all.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{IconBonusTable, PlayerId};

/// Icon-triple bonus breakdown for one tableau.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconBonus {
    /// Total bonus points.
    pub bonus: i64,
    /// Completed triples per counted color (colors with fewer than 3 map to 0).
    pub triples_by_color: BTreeMap<String, u32>,
    /// Raw icon count per color.
    pub counts: BTreeMap<String, u32>,
}

/// One player's score for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScore {
    pub base: i64,
    pub icon_bonus: i64,
    pub triples_by_color: BTreeMap<String, u32>,
    pub total: i64,
}

/// Count icon colors across a tableau and price the completed triples.
pub fn icon_triples_bonus(tableau: &[CardInstance], table: &IconBonusTable) -> IconBonus {
    let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
    for card in tableau.iter().filter(|c| c.card_type().scores()) {
        for color in card.icon_colors().iter() {
            *counts.entry(color).or_insert(0) += 1;
        }
    }

    let mut result = IconBonus::default();
    for (color, count) in counts {
        let triples = count / 3;
        result.bonus += i64::from(triples) * table.bonus_for(color);
        result.triples_by_color.insert(color.to_string(), triples);
        result.counts.insert(color.to_string(), count);
    }
    result
}

/// Score a tableau: base points plus icon-triple bonus.
pub fn basic_round_score(tableau: &[CardInstance], table: &IconBonusTable) -> RoundScore {
    let base = tableau
        .iter()
        .filter(|c| c.card_type().scores())
        .map(|c| i64::from(c.points()))
        .sum::<i64>();
    let icons = icon_triples_bonus(tableau, table);

    RoundScore {
        base,
        icon_bonus: icons.bonus,
        total: base + icons.bonus,
        triples_by_color: icons.triples_by_color,
    }
}

/// Which seats take the invasive penalty.
///
/// Everyone tied at the maximum count is penalized; a maximum of zero
/// penalizes nobody.
///
/// ```
/// use aina_quest::rules::penalized_seats;
///
/// assert_eq!(penalized_seats(&[2, 2, 0]), vec![true, true, false]);
/// assert_eq!(penalized_seats(&[0, 0, 0]), vec![false, false, false]);
/// ```
#[must_use]
pub fn penalized_seats(invasive_counts: &[usize]) -> Vec<bool> {
    let max = invasive_counts.iter().copied().max().unwrap_or(0);
    invasive_counts
        .iter()
        .map(|&count| max > 0 && count == max)
        .collect()
}

/// What the final tally needs to know about one seat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerTally {
    pub seat: PlayerId,
    pub name: String,
    pub round_totals: Vec<i64>,
    pub invasive_count: usize,
}

/// A player's place in the final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// 1-based rank. Equal finals share a rank (1, 1, 3).
    pub rank: usize,
    pub seat: PlayerId,
    pub name: String,
    pub sum_rounds: i64,
    pub invasive_count: usize,
    pub penalty: i64,
    pub final_score: i64,
}

/// Rank players by final score, highest first.
///
/// The sort is stable over seat order, so equal finals list the lower seat
/// first.
#[must_use]
pub fn final_standings(tallies: Vec<PlayerTally>, invasive_penalty: i64) -> Vec<Standing> {
    let counts: Vec<usize> = tallies.iter().map(|t| t.invasive_count).collect();
    let penalized = penalized_seats(&counts);

    let mut standings: Vec<Standing> = tallies
        .into_iter()
        .zip(penalized)
        .map(|(tally, is_penalized)| {
            let sum_rounds: i64 = tally.round_totals.iter().sum();
            let penalty = if is_penalized { invasive_penalty } else { 0 };
            Standing {
                rank: 0,
                seat: tally.seat,
                name: tally.name,
                sum_rounds,
                invasive_count: tally.invasive_count,
                penalty,
                final_score: sum_rounds - penalty,
            }
        })
        .collect();

    standings.sort_by(|a, b| b.final_score.cmp(&a.final_score));

    let mut previous: Option<(i64, usize)> = None;
    for (position, standing) in standings.iter_mut().enumerate() {
        let rank = match previous {
            Some((score, rank)) if score == standing.final_score => rank,
            _ => position + 1,
        };
        standing.rank = rank;
        previous = Some((standing.final_score, rank));
    }

    standings
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardDefinition, CardType};

    fn card(id: &str, card_type: CardType, points: u32, colors: &[&str]) -> CardInstance {
        let mut def = CardDefinition::new(id, id, card_type).with_points(points);
        for color in colors {
            def = def.with_icon(*color);
        }
        CardInstance::new(Arc::new(def), 0)
    }

    fn tally(seat: u8, totals: &[i64], invasives: usize) -> PlayerTally {
        PlayerTally {
            seat: PlayerId::new(seat),
            name: format!("Player {}", seat + 1),
            round_totals: totals.to_vec(),
            invasive_count: invasives,
        }
    }

    #[test]
    fn test_three_blue_natives_and_an_invasive() {
        let tableau = vec![
            card("a", CardType::Native, 2, &["blue"]),
            card("b", CardType::Native, 3, &["blue"]),
            card("c", CardType::Native, 1, &["blue"]),
            card("rat", CardType::Invasive, 50, &["blue"]),
        ];

        let score = basic_round_score(&tableau, &IconBonusTable::default());

        assert_eq!(score.base, 6);
        assert_eq!(score.triples_by_color.get("blue"), Some(&1));
        assert_eq!(score.icon_bonus, 5);
        assert_eq!(score.total, 11);
    }

    #[test]
    fn test_multi_color_card_counts_each_color() {
        let tableau = vec![
            card("a", CardType::Endemic, 0, &["green", "pink"]),
            card("b", CardType::Indigenous, 0, &["green", "pink"]),
            card("c", CardType::Canoe, 0, &["green"]),
        ];

        let icons = icon_triples_bonus(&tableau, &IconBonusTable::default());

        assert_eq!(icons.counts.get("green"), Some(&3));
        assert_eq!(icons.counts.get("pink"), Some(&2));
        assert_eq!(icons.triples_by_color.get("green"), Some(&1));
        assert_eq!(icons.triples_by_color.get("pink"), Some(&0));
        assert_eq!(icons.bonus, 15);
    }

    #[test]
    fn test_resource_cards_score_nothing() {
        let tableau = vec![
            card("a", CardType::Resource, 9, &["orange"]),
            card("b", CardType::Resource, 9, &["orange"]),
            card("c", CardType::Resource, 9, &["orange"]),
        ];

        let score = basic_round_score(&tableau, &IconBonusTable::default());
        assert_eq!(score, RoundScore::default());
    }

    #[test]
    fn test_remainders_and_unknown_colors() {
        let seven_orange: Vec<_> = (0..7)
            .map(|i| card(&format!("o{i}"), CardType::Native, 1, &["orange", "teal"]))
            .collect();

        let score = basic_round_score(&seven_orange, &IconBonusTable::default());

        assert_eq!(score.base, 7);
        assert_eq!(score.triples_by_color.get("orange"), Some(&2));
        assert_eq!(score.triples_by_color.get("teal"), Some(&2));
        assert_eq!(score.icon_bonus, 20);
        assert_eq!(score.total, 27);
    }

    #[test]
    fn test_empty_tableau() {
        let score = basic_round_score(&[], &IconBonusTable::default());
        assert_eq!(score.total, 0);
        assert!(score.triples_by_color.is_empty());
    }

    #[test]
    fn test_penalty_hits_everyone_tied_at_max() {
        let standings = final_standings(
            vec![tally(0, &[30, 20, 10], 2), tally(1, &[10, 10, 10], 2), tally(2, &[5, 5, 5], 0)],
            20,
        );

        let by_seat = |seat: u8| {
            standings
                .iter()
                .find(|s| s.seat == PlayerId::new(seat))
                .unwrap()
        };
        assert_eq!(by_seat(0).penalty, 20);
        assert_eq!(by_seat(0).final_score, 40);
        assert_eq!(by_seat(1).penalty, 20);
        assert_eq!(by_seat(1).final_score, 10);
        assert_eq!(by_seat(2).penalty, 0);
        assert_eq!(by_seat(2).final_score, 15);

        let order: Vec<_> = standings.iter().map(|s| s.seat.index()).collect();
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_no_invasives_no_penalty() {
        let standings = final_standings(vec![tally(0, &[1], 0), tally(1, &[2], 0)], 20);
        assert!(standings.iter().all(|s| s.penalty == 0));
    }

    #[test]
    fn test_ties_keep_seat_order_and_share_rank() {
        let standings = final_standings(
            vec![tally(0, &[5], 0), tally(1, &[9], 0), tally(2, &[5], 0), tally(3, &[1], 0)],
            20,
        );

        let order: Vec<_> = standings.iter().map(|s| (s.seat.index(), s.rank)).collect();
        assert_eq!(order, vec![(1, 1), (0, 2), (2, 2), (3, 4)]);
    }

    #[test]
    fn test_single_invasive_holder() {
        assert_eq!(penalized_seats(&[0, 1, 0]), vec![false, true, false]);
        assert!(penalized_seats(&[]).is_empty());
    }
}
