//! # deckforge
//!
//! A brute-force deck optimization engine for a card game: generate
//! candidate decks, estimate pairwise win rates with a simplified battle
//! simulator, and rank a whole population tournament-style.
//!
//! ## Design Principles
//!
//! 1. **Estimator, Not Engine**: The battle simulator is a statistical
//!    estimator. Confidence comes from trial count, never from modeling
//!    the real game faithfully.
//!
//! 2. **Explicit Randomness**: Every randomized component takes a
//!    seedable [`core::SimRng`]. Tests pin seeds and assert exact
//!    outputs; production seeds from entropy.
//!
//! 3. **Tables Over Branching**: Per-entity special cases (ability
//!    bonuses, master perks, master affinities) are data tables, so new
//!    cards and masters extend data instead of control flow.
//!
//! 4. **Read-Only Inputs**: The catalog and every generated deck are
//!    immutable for the duration of a run; the tester owns all mutable
//!    tallies.
//!
//! ## Modules
//!
//! - `core`: RNG, error taxonomy
//! - `catalog`: cards, masters, registry, loader cache
//! - `deck`: decks, strategies, the combinatorial generator
//! - `battle`: battle simulator, rule tables, matchup factors
//! - `tester`: tournament loop, cancellation, results, meta trends
//!
//! ## Example
//!
//! ```
//! use deckforge::catalog;
//! use deckforge::core::SimRng;
//! use deckforge::deck::DeckGenerator;
//! use deckforge::tester::{analyze_meta_trends, DeckTester, TestConfig, TestDepth};
//!
//! let catalog = catalog::builtin();
//! let decks = DeckGenerator::new(SimRng::new(1)).generate(&catalog, 20, None);
//!
//! let mut tester = DeckTester::new(SimRng::new(2));
//! let config = TestConfig::default().with_depth(TestDepth::Quick);
//! let results = tester.run_test(&decks, &config, None).unwrap();
//!
//! let trends = analyze_meta_trends(&results);
//! assert!(results.completed_tests <= results.total_tests);
//! assert!(!trends.top_masters.is_empty() || results.best_decks.is_empty());
//! ```

pub mod battle;
pub mod catalog;
pub mod core;
pub mod deck;
pub mod tester;

// Re-export commonly used types
pub use crate::core::{ConfigError, SimRng};

pub use crate::catalog::{Card, CardCache, CardId, CardType, Catalog, Faction, Master, MasterId, Rarity};

pub use crate::deck::{Deck, DeckGenerator, DeckId, Strategy, DECK_SIZE};

pub use crate::battle::{
    AbilityBonuses, BattleFactors, BattleResult, BattleSimulator, MasterAffinities, PerkRules,
    Winner, SIMULATION_ROUNDS,
};

pub use crate::tester::{
    analyze_meta_trends, DeckTester, MetaTrends, StopHandle, TestConfig, TestDepth, TestResults,
    TrendEntry,
};
