//! Deck aggregate and strategy archetypes.
//!
//! A deck is a master plus exactly [`DECK_SIZE`] unique cards (singleton
//! format). Derived stats (cost totals, synergy percentages) are
//! computed once at creation; decks are read-only afterwards. The
//! tester keeps win/loss tallies outside the deck.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{Card, Master};

/// Number of cards in every deck.
pub const DECK_SIZE: usize = 10;

/// Unique identifier for a deck within one generated population.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeckId(pub u32);

impl DeckId {
    /// Create a new deck ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deck_{}", self.0)
    }
}

/// Coarse archetype label.
///
/// Biases deck construction and buckets meta-trend analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Aggro,
    Control,
    Midrange,
    Combo,
    Mixed,
}

impl Strategy {
    /// All archetypes, construction-biasing ones first.
    pub const ALL: [Strategy; 5] = [
        Strategy::Aggro,
        Strategy::Control,
        Strategy::Midrange,
        Strategy::Combo,
        Strategy::Mixed,
    ];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Aggro => "AGGRO",
            Strategy::Control => "CONTROL",
            Strategy::Midrange => "MIDRANGE",
            Strategy::Combo => "COMBO",
            Strategy::Mixed => "MIXED",
        };
        write!(f, "{name}")
    }
}

/// A generated deck: master, ten unique cards, and derived stats.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Unique within one generated population, assigned sequentially.
    pub id: DeckId,

    pub master: Arc<Master>,

    /// Exactly [`DECK_SIZE`] cards, pairwise-unique by id.
    pub cards: SmallVec<[Arc<Card>; DECK_SIZE]>,

    pub strategy: Strategy,

    /// Sum of card costs.
    pub total_cost: u32,

    /// `total_cost / DECK_SIZE`.
    pub average_cost: f64,

    /// Percentage of cards matching the master's faction or Neutral (0-100).
    pub faction_synergy: f64,

    /// How well the cost distribution fits the strategy's ideal curve (0-100).
    pub strategy_synergy: f64,
}

impl Deck {
    /// Assemble a deck and compute its derived stats.
    ///
    /// Panics if `cards` is not exactly [`DECK_SIZE`] entries; generation
    /// discards short candidates before ever reaching this point.
    #[must_use]
    pub fn assemble(
        id: DeckId,
        master: Arc<Master>,
        cards: SmallVec<[Arc<Card>; DECK_SIZE]>,
        strategy: Strategy,
    ) -> Self {
        assert_eq!(cards.len(), DECK_SIZE, "deck must hold {DECK_SIZE} cards");

        let total_cost: u32 = cards.iter().map(|c| c.cost).sum();
        let average_cost = f64::from(total_cost) / cards.len() as f64;
        let faction_synergy = faction_synergy(&master, &cards);
        let strategy_synergy = strategy_synergy(&cards, strategy);

        Self {
            id,
            master,
            cards,
            strategy,
            total_cost,
            average_cost,
            faction_synergy,
            strategy_synergy,
        }
    }

    /// Count cards with the given ability keyword.
    #[must_use]
    pub fn count_ability(&self, ability: &str) -> usize {
        self.cards.iter().filter(|c| c.has_ability(ability)).count()
    }

    /// Count cards with cost at or below the threshold.
    #[must_use]
    pub fn count_cost_at_most(&self, cost: u32) -> usize {
        self.cards.iter().filter(|c| c.cost <= cost).count()
    }
}

/// Percentage of cards matching the master's faction or Neutral.
fn faction_synergy(master: &Master, cards: &[Arc<Card>]) -> f64 {
    let matching = cards
        .iter()
        .filter(|c| c.fits_faction(master.faction))
        .count();
    matching as f64 / cards.len() as f64 * 100.0
}

/// Score the cost distribution against the strategy's ideal curve.
///
/// Rounded to the nearest integer percentage.
fn strategy_synergy(cards: &[Arc<Card>], strategy: Strategy) -> f64 {
    let avg = cards.iter().map(|c| f64::from(c.cost)).sum::<f64>() / cards.len() as f64;

    let synergy = match strategy {
        Strategy::Aggro => {
            if avg <= 2.5 {
                100.0
            } else {
                (100.0 - (avg - 2.5) * 20.0).max(0.0)
            }
        }
        Strategy::Control => {
            if avg >= 3.0 {
                100.0
            } else {
                (avg * 25.0).max(0.0)
            }
        }
        Strategy::Midrange => {
            if (2.5..=3.5).contains(&avg) {
                100.0
            } else {
                (100.0 - (avg - 3.0).abs() * 30.0).max(0.0)
            }
        }
        Strategy::Combo | Strategy::Mixed => 50.0,
    };

    synergy.round()
}
