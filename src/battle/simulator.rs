//! Win-rate estimation through repeated simplified matches.
//!
//! One `simulate_battle` call runs [`SIMULATION_ROUNDS`] independent
//! matches with freshly shuffled hands and averages the outcomes. The
//! estimate is deterministic for a given RNG seed and statistically
//! stable across seeds; low variance comes from trial count, not from
//! reproducing any one match.
//!
//! Match model: both sides start at their master's health, mana grows by
//! one per turn to a cap of ten, minions and buildings pile attack onto
//! the board while spells hit face immediately, and master perks add
//! mana-gated damage. The first deck resolves before the second each
//! turn, so its lethal damage is checked first.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::{Card, CardType, Master};
use crate::core::SimRng;
use crate::deck::{Deck, DeckId, DECK_SIZE};

use super::factors::{self, BattleFactors};
use super::tables::{AbilityBonuses, MasterAffinities, PerkRules};

/// Independent matches per battle estimate.
pub const SIMULATION_ROUNDS: u32 = 100;

/// Turn cap; a match that reaches it is decided by remaining health.
const MAX_TURNS: u32 = 50;

/// Mana cap.
const MAX_MANA: i32 = 10;

/// Pairwise battle outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Deck1,
    Deck2,
    Draw,
}

/// Aggregated result of one battle estimate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleResult {
    pub deck1: DeckId,
    pub deck2: DeckId,

    /// Deck1 wins above 50% win rate, Deck2 below, Draw at exactly 50%.
    pub winner: Winner,

    /// Deck1's win rate over the trials, rounded, 0-100.
    pub score: f64,

    /// Average match length in turns, rounded.
    pub battle_length: u32,

    /// Static matchup analysis, independent of the trials.
    pub factors: BattleFactors,
}

/// Statistical battle estimator.
///
/// ## Example
///
/// ```
/// use deckforge::battle::BattleSimulator;
/// use deckforge::catalog;
/// use deckforge::core::SimRng;
/// use deckforge::deck::DeckGenerator;
///
/// let catalog = catalog::builtin();
/// let decks = DeckGenerator::new(SimRng::new(1)).generate(&catalog, 10, None);
/// let mut simulator = BattleSimulator::new(SimRng::new(2));
///
/// let result = simulator.simulate_battle(&decks[0], &decks[1]);
/// assert!((0.0..=100.0).contains(&result.score));
/// assert!(result.battle_length <= 50);
/// ```
pub struct BattleSimulator {
    rng: SimRng,
    rounds: u32,
    abilities: AbilityBonuses,
    perks: PerkRules,
    affinities: MasterAffinities,
}

impl BattleSimulator {
    /// Create a simulator with built-in rule tables.
    #[must_use]
    pub fn new(rng: SimRng) -> Self {
        Self {
            rng,
            rounds: SIMULATION_ROUNDS,
            abilities: AbilityBonuses::builtin(),
            perks: PerkRules::builtin(),
            affinities: MasterAffinities::builtin(),
        }
    }

    /// Create a simulator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SimRng::from_entropy())
    }

    /// Override the trial count (builder pattern).
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Override the ability bonus table (builder pattern).
    #[must_use]
    pub fn with_ability_bonuses(mut self, abilities: AbilityBonuses) -> Self {
        self.abilities = abilities;
        self
    }

    /// Override the perk rule table (builder pattern).
    #[must_use]
    pub fn with_perk_rules(mut self, perks: PerkRules) -> Self {
        self.perks = perks;
        self
    }

    /// Override the master affinity table (builder pattern).
    #[must_use]
    pub fn with_affinities(mut self, affinities: MasterAffinities) -> Self {
        self.affinities = affinities;
        self
    }

    /// Estimate the matchup between two decks.
    ///
    /// Panics if either deck does not hold exactly [`DECK_SIZE`] cards;
    /// that is a caller bug which would invalidate every derived
    /// statistic, so it fails fast instead of being tolerated.
    pub fn simulate_battle(&mut self, deck1: &Deck, deck2: &Deck) -> BattleResult {
        assert_eq!(
            deck1.cards.len(),
            DECK_SIZE,
            "deck {} violates the size invariant",
            deck1.id
        );
        assert_eq!(
            deck2.cards.len(),
            DECK_SIZE,
            "deck {} violates the size invariant",
            deck2.id
        );

        let mut deck1_wins = 0u32;
        let mut total_length = 0u32;

        for _ in 0..self.rounds {
            let mut trial_rng = self.rng.fork();
            let (winner, length) = self.run_match(deck1, deck2, &mut trial_rng);
            if winner == Winner::Deck1 {
                deck1_wins += 1;
            }
            total_length += length;
        }

        let win_rate = f64::from(deck1_wins) / f64::from(self.rounds) * 100.0;
        let winner = if win_rate > 50.0 {
            Winner::Deck1
        } else if win_rate < 50.0 {
            Winner::Deck2
        } else {
            Winner::Draw
        };

        BattleResult {
            deck1: deck1.id,
            deck2: deck2.id,
            winner,
            score: win_rate.round(),
            battle_length: (f64::from(total_length) / f64::from(self.rounds)).round() as u32,
            factors: factors::analyze(deck1, deck2, &self.affinities),
        }
    }

    /// Run one match; draws cannot occur here, only at the estimate level.
    fn run_match(&self, deck1: &Deck, deck2: &Deck, rng: &mut SimRng) -> (Winner, u32) {
        let mut health1 = deck1.master.health;
        let mut health2 = deck2.master.health;
        let mut turn = 0u32;
        let mut mana1 = 1i32;
        let mut mana2 = 1i32;

        let mut hand1: Vec<Arc<Card>> = deck1.cards.to_vec();
        let mut hand2: Vec<Arc<Card>> = deck2.cards.to_vec();
        rng.shuffle(&mut hand1);
        rng.shuffle(&mut hand2);

        let mut board1: Vec<Arc<Card>> = Vec::new();
        let mut board2: Vec<Arc<Card>> = Vec::new();

        while health1 > 0 && health2 > 0 && turn < MAX_TURNS {
            turn += 1;
            mana1 = (mana1 + 1).min(MAX_MANA);
            mana2 = (mana2 + 1).min(MAX_MANA);

            // Deck1 resolves first: its lethal is checked before deck2 acts
            let damage1 = self.play_turn(&mut hand1, &mut board1, mana1, &deck1.master);
            health2 -= damage1;
            if health2 <= 0 {
                return (Winner::Deck1, turn);
            }

            let damage2 = self.play_turn(&mut hand2, &mut board2, mana2, &deck2.master);
            health1 -= damage2;
            if health1 <= 0 {
                return (Winner::Deck2, turn);
            }
        }

        // Timeout: strictly higher health wins, exact ties go to deck2
        if health1 > health2 {
            (Winner::Deck1, turn)
        } else {
            (Winner::Deck2, turn)
        }
    }

    /// Resolve one side's turn and return the damage dealt to the enemy
    /// master.
    fn play_turn(
        &self,
        hand: &mut Vec<Arc<Card>>,
        board: &mut Vec<Arc<Card>>,
        mana: i32,
        master: &Master,
    ) -> i32 {
        let mut remaining = mana;
        let mut damage: i32 = board.iter().map(|c| c.attack as i32).sum();

        // Greedy play: best efficiency first, until mana runs out
        let mut candidates: Vec<Arc<Card>> = hand
            .iter()
            .filter(|c| c.cost as i32 <= remaining)
            .cloned()
            .collect();
        candidates.sort_by(|a, b| {
            self.abilities
                .efficiency(b)
                .total_cmp(&self.abilities.efficiency(a))
        });

        for card in candidates {
            let cost = card.cost as i32;
            if remaining < cost {
                continue;
            }
            remaining -= cost;

            match card.card_type {
                // Permanents attack from the next turn onward
                CardType::Minion | CardType::Building => board.push(Arc::clone(&card)),
                // Spells hit face immediately and are discarded
                CardType::Spell => damage += card.attack as i32,
            }

            if let Some(pos) = hand.iter().position(|c| c.id == card.id) {
                hand.remove(pos);
            }
        }

        damage += self.perks.damage_for(master, mana);
        damage.max(0)
    }
}
