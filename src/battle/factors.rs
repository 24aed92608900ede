//! Static matchup analysis.
//!
//! Four 0-100 sub-scores computed purely from the two decks' static
//! properties, independent of the simulation trials. 50 is neutral;
//! above 50 favors the first deck.

use serde::{Deserialize, Serialize};

use crate::catalog::CardType;
use crate::deck::Deck;

use super::tables::MasterAffinities;

/// Ideal share of the deck per cost bucket {0, 1, 2, 3, 4, 5+}.
const IDEAL_CURVE: [f64; 6] = [0.0, 0.15, 0.15, 0.2, 0.2, 0.3];

/// Static matchup sub-scores (each 0-100, 50 = neutral).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleFactors {
    /// Which deck's cost distribution sits closer to the ideal curve.
    pub cost_curve: f64,

    /// Combined faction + strategy synergy comparison.
    pub synergy: f64,

    /// Which deck better fits its master's thematic affinity.
    pub master_synergy: f64,

    /// Counter-play potential of the first deck against the second.
    pub counterplay: f64,
}

/// Analyze all four factors for a matchup.
#[must_use]
pub fn analyze(deck1: &Deck, deck2: &Deck, affinities: &MasterAffinities) -> BattleFactors {
    BattleFactors {
        cost_curve: cost_curve(deck1, deck2),
        synergy: synergy(deck1, deck2),
        master_synergy: master_synergy(deck1, deck2, affinities),
        counterplay: counterplay(deck1, deck2),
    }
}

/// Distance of a deck's cost distribution from the ideal curve.
///
/// 0 is a perfect fit; more negative is worse.
fn curve_score(deck: &Deck) -> f64 {
    let mut buckets = [0usize; 6];
    for card in &deck.cards {
        let bucket = (card.cost as usize).min(5);
        buckets[bucket] += 1;
    }

    let len = deck.cards.len() as f64;
    IDEAL_CURVE
        .iter()
        .zip(buckets)
        .map(|(ideal, count)| -(ideal - count as f64 / len).abs())
        .sum()
}

fn cost_curve(deck1: &Deck, deck2: &Deck) -> f64 {
    let diff = curve_score(deck1) - curve_score(deck2);
    (((diff + 1.0) * 50.0).round()).clamp(0.0, 100.0)
}

fn synergy(deck1: &Deck, deck2: &Deck) -> f64 {
    let s1 = deck1.strategy_synergy + deck1.faction_synergy;
    let s2 = deck2.strategy_synergy + deck2.faction_synergy;
    (((s1 - s2) / 200.0 + 1.0) * 50.0).round()
}

fn master_synergy(deck1: &Deck, deck2: &Deck, affinities: &MasterAffinities) -> f64 {
    let m1 = affinities.deck_synergy(&deck1.master, deck1.cards.iter().map(AsRef::as_ref));
    let m2 = affinities.deck_synergy(&deck2.master, deck2.cards.iter().map(AsRef::as_ref));
    ((m1 - m2 + 1.0) * 50.0).round()
}

fn counterplay(deck1: &Deck, deck2: &Deck) -> f64 {
    let mut score: f64 = 0.0;

    // AOE against a low-cost swarm
    let aoe = deck1.count_ability("Area_Damage");
    let swarm = deck2.count_cost_at_most(2);
    if aoe > 0 && swarm > 5 {
        score += 0.3;
    }

    // Healing against aggressive curves
    let heal = deck1.count_ability("Heal");
    if heal > 0 && deck2.average_cost <= 2.5 {
        score += 0.2;
    }

    // Armor against direct-damage spells
    let armor = deck1.count_ability("Armor");
    let spells = deck2
        .cards
        .iter()
        .filter(|c| c.card_type == CardType::Spell)
        .count();
    if armor > 0 && spells > 3 {
        score += 0.2;
    }

    (score * 100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Card, Faction, Master, Rarity};
    use crate::deck::{DeckId, Strategy, DECK_SIZE};
    use smallvec::SmallVec;
    use std::sync::Arc;

    fn deck_of(costs: [u32; DECK_SIZE], abilities: &[&str], card_type: CardType) -> Deck {
        let master = Arc::new(Master::new(
            "m",
            "Test",
            20,
            Faction::Legion,
            Vec::<String>::new(),
        ));
        let cards: SmallVec<[Arc<Card>; DECK_SIZE]> = costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| {
                let mut card = Card::new(
                    format!("c{i}"),
                    format!("Card {i}"),
                    cost,
                    2,
                    2,
                    Faction::Legion,
                    Rarity::Common,
                    card_type,
                );
                for a in abilities {
                    card = card.with_ability(*a);
                }
                Arc::new(card)
            })
            .collect();
        Deck::assemble(DeckId::new(0), master, cards, Strategy::Mixed)
    }

    #[test]
    fn test_identical_decks_are_neutral() {
        let a = deck_of([1, 1, 2, 2, 3, 3, 4, 4, 5, 5], &[], CardType::Minion);
        let b = deck_of([1, 1, 2, 2, 3, 3, 4, 4, 5, 5], &[], CardType::Minion);

        let factors = analyze(&a, &b, &MasterAffinities::builtin());
        assert_eq!(factors.cost_curve, 50.0);
        assert_eq!(factors.synergy, 50.0);
        assert_eq!(factors.master_synergy, 50.0);
        assert_eq!(factors.counterplay, 0.0);
    }

    #[test]
    fn test_better_curve_scores_above_neutral() {
        // Matches the ideal shares closely
        let good = deck_of([1, 2, 2, 3, 3, 4, 4, 5, 5, 5], &[], CardType::Minion);
        // All weight in one bucket
        let bad = deck_of([1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[], CardType::Minion);

        let factors = analyze(&good, &bad, &MasterAffinities::builtin());
        assert!(factors.cost_curve > 50.0);

        let reversed = analyze(&bad, &good, &MasterAffinities::builtin());
        assert!(reversed.cost_curve < 50.0);
    }

    #[test]
    fn test_counterplay_heal_vs_aggro() {
        let healer = deck_of([3; DECK_SIZE], &["Heal"], CardType::Minion);
        let aggro = deck_of([1; DECK_SIZE], &[], CardType::Minion);

        let factors = analyze(&healer, &aggro, &MasterAffinities::builtin());
        // Heal vs cheap curve (+0.2); no AOE in the healer deck
        assert_eq!(factors.counterplay, 20.0);
    }

    #[test]
    fn test_counterplay_aoe_vs_swarm() {
        let aoe = deck_of([3; DECK_SIZE], &["Area_Damage", "Heal"], CardType::Minion);
        let swarm = deck_of([1; DECK_SIZE], &[], CardType::Minion);

        let factors = analyze(&aoe, &swarm, &MasterAffinities::builtin());
        // AOE vs swarm (+0.3) and heal vs cheap curve (+0.2)
        assert_eq!(factors.counterplay, 50.0);
    }

    #[test]
    fn test_counterplay_armor_vs_spells() {
        let armored = deck_of([4; DECK_SIZE], &["Armor"], CardType::Minion);
        let spells = deck_of([4; DECK_SIZE], &[], CardType::Spell);

        let factors = analyze(&armored, &spells, &MasterAffinities::builtin());
        assert_eq!(factors.counterplay, 20.0);
    }

    #[test]
    fn test_factors_in_range() {
        let a = deck_of([1; DECK_SIZE], &["Heal", "Area_Damage"], CardType::Minion);
        let b = deck_of([5; DECK_SIZE], &[], CardType::Spell);

        for (x, y) in [(&a, &b), (&b, &a)] {
            let f = analyze(x, y, &MasterAffinities::builtin());
            for value in [f.cost_curve, f.synergy, f.master_synergy, f.counterplay] {
                assert!((0.0..=100.0).contains(&value), "factor {value} out of range");
            }
        }
    }
}
