//! Test run configuration.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::deck::Strategy;

/// Preset controlling how many opponents each deck faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestDepth {
    /// 10 random opponents per deck.
    Quick,
    /// 15 random plus 5 strategically interesting opponents per deck.
    Normal,
    /// Full round robin, capped.
    Extensive,
}

impl TestDepth {
    /// Planned battle count for a population of `deck_count` decks.
    #[must_use]
    pub fn planned_battles(self, deck_count: usize) -> usize {
        match self {
            TestDepth::Quick => (deck_count * 10).min(1_000),
            TestDepth::Normal => (deck_count * 20).min(5_000),
            TestDepth::Extensive => (deck_count * deck_count.saturating_sub(1) / 2).min(20_000),
        }
    }
}

/// Configuration for one test run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestConfig {
    /// Advisory population ceiling; the population itself is supplied by
    /// the caller.
    pub max_decks: usize,

    /// Strategies of interest. Must be non-empty.
    pub strategies: Vec<Strategy>,

    pub test_depth: TestDepth,

    /// Advisory: accepted and validated, but does not filter results.
    pub min_win_rate: i32,

    /// Advisory count of top decks to focus on.
    pub test_against_top: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            max_decks: 100,
            strategies: Strategy::ALL.to_vec(),
            test_depth: TestDepth::Normal,
            min_win_rate: 0,
            test_against_top: 10,
        }
    }
}

impl TestConfig {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck population ceiling.
    #[must_use]
    pub fn with_max_decks(mut self, max_decks: usize) -> Self {
        self.max_decks = max_decks;
        self
    }

    /// Set the strategies of interest.
    #[must_use]
    pub fn with_strategies(mut self, strategies: impl Into<Vec<Strategy>>) -> Self {
        self.strategies = strategies.into();
        self
    }

    /// Set the test depth.
    #[must_use]
    pub fn with_depth(mut self, depth: TestDepth) -> Self {
        self.test_depth = depth;
        self
    }

    /// Set the advisory minimum win rate.
    #[must_use]
    pub fn with_min_win_rate(mut self, min_win_rate: i32) -> Self {
        self.min_win_rate = min_win_rate;
        self
    }

    /// Check the configuration before a run starts.
    ///
    /// The engine refuses to start on a bad config rather than silently
    /// defaulting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }
        if self.max_decks == 0 {
            return Err(ConfigError::ZeroDecks);
        }
        if !(0..=100).contains(&self.min_win_rate) {
            return Err(ConfigError::OutOfRange {
                field: "min_win_rate",
                value: i64::from(self.min_win_rate),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planned_battles() {
        assert_eq!(TestDepth::Quick.planned_battles(20), 200);
        assert_eq!(TestDepth::Quick.planned_battles(500), 1_000);
        assert_eq!(TestDepth::Normal.planned_battles(20), 400);
        assert_eq!(TestDepth::Normal.planned_battles(1_000), 5_000);
        assert_eq!(TestDepth::Extensive.planned_battles(20), 190);
        assert_eq!(TestDepth::Extensive.planned_battles(1_000), 20_000);
    }

    #[test]
    fn test_extensive_handles_tiny_populations() {
        assert_eq!(TestDepth::Extensive.planned_battles(0), 0);
        assert_eq!(TestDepth::Extensive.planned_battles(1), 0);
        assert_eq!(TestDepth::Extensive.planned_battles(2), 1);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(TestConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_strategies_rejected() {
        let config = TestConfig::default().with_strategies(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::NoStrategies));
    }

    #[test]
    fn test_zero_decks_rejected() {
        let config = TestConfig::default().with_max_decks(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDecks));
    }

    #[test]
    fn test_min_win_rate_range() {
        let config = TestConfig::default().with_min_win_rate(150);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "min_win_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = TestConfig::default().with_depth(TestDepth::Extensive);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TestConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.test_depth, TestDepth::Extensive);
    }
}
