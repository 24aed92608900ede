//! Deck tester properties.
//!
//! Planned battle counts per depth, ranking rules, cancellation, and
//! the meta-trend view.

use deckforge::catalog;
use deckforge::core::{ConfigError, SimRng};
use deckforge::deck::{Deck, DeckGenerator};
use deckforge::tester::{analyze_meta_trends, DeckTester, TestConfig, TestDepth};

fn population(count: usize, seed: u64) -> Vec<Deck> {
    let catalog = catalog::builtin();
    DeckGenerator::new(SimRng::new(seed)).generate(&catalog, count, None)
}

/// End-to-end: QUICK over 20 decks plans exactly 200 battles and never
/// exceeds them.
#[test]
fn test_quick_depth_plans_200_battles() {
    let decks = population(20, 1);
    assert_eq!(decks.len(), 20);

    let mut tester = DeckTester::new(SimRng::new(2));
    let config = TestConfig::default().with_depth(TestDepth::Quick);
    let results = tester.run_test(&decks, &config, None).unwrap();

    assert_eq!(results.total_tests, 200);
    assert!(results.completed_tests <= 200);
}

/// Completed battles never exceed the plan at any depth.
#[test]
fn test_completed_within_plan_at_all_depths() {
    let decks = population(15, 3);

    for depth in [TestDepth::Quick, TestDepth::Normal, TestDepth::Extensive] {
        let mut tester = DeckTester::new(SimRng::new(4));
        let config = TestConfig::default().with_depth(depth);
        let results = tester.run_test(&decks, &config, None).unwrap();

        assert!(
            results.completed_tests <= results.total_tests,
            "{depth:?}: {} > {}",
            results.completed_tests,
            results.total_tests
        );
    }
}

/// Ranked decks qualified with at least 5 games and are sorted
/// descending by win rate.
#[test]
fn test_ranking_rules() {
    let decks = population(20, 5);
    let mut tester = DeckTester::new(SimRng::new(6));
    let config = TestConfig::default().with_depth(TestDepth::Extensive);
    let results = tester.run_test(&decks, &config, None).unwrap();

    assert!(!results.best_decks.is_empty());
    assert!(results.best_decks.len() <= 10);
    assert!(results.worst_decks.len() <= 5);

    // Qualification: every ranked deck is in the results map
    for deck in results.best_decks.iter().chain(&results.worst_decks) {
        assert!(results.win_rate(deck.id).is_some());
    }

    // Descending order
    for pair in results.best_decks.windows(2) {
        let a = results.win_rate(pair[0].id).unwrap();
        let b = results.win_rate(pair[1].id).unwrap();
        assert!(a >= b);
    }

    // Average matches the map
    let mean: f64 = results.results.values().sum::<f64>() / results.results.len() as f64;
    assert!((results.average_win_rate - mean).abs() < 1e-9);

    for rate in results.results.values() {
        assert!((0.0..=100.0).contains(rate));
    }
}

/// Stopping mid-run returns partial results without an error.
#[test]
fn test_cancellation_keeps_partial_results() {
    let decks = population(20, 7);
    let mut tester = DeckTester::new(SimRng::new(8));
    let handle = tester.stop_handle();

    let config = TestConfig::default().with_depth(TestDepth::Quick);
    let mut stopped = false;
    let mut callback = |percent: f64, _status: &str| {
        if percent >= 10.0 && !stopped {
            handle.stop();
            stopped = true;
        }
    };

    let results = tester.run_test(&decks, &config, Some(&mut callback)).unwrap();

    assert!(stopped, "progress never reached the stop threshold");
    assert!(results.completed_tests < results.total_tests);
    assert!(!tester.is_running());
}

/// Progress moves forward and ends at 100.
#[test]
fn test_progress_reporting() {
    let decks = population(10, 9);
    let mut tester = DeckTester::new(SimRng::new(10));

    let mut percents: Vec<f64> = Vec::new();
    let mut callback = |percent: f64, _status: &str| percents.push(percent);

    let config = TestConfig::default().with_depth(TestDepth::Quick);
    tester.run_test(&decks, &config, Some(&mut callback)).unwrap();

    assert!(percents.len() >= 2);
    assert_eq!(*percents.last().unwrap(), 100.0);
    for pair in percents.windows(2) {
        assert!(pair[1] >= pair[0], "progress went backwards");
    }
    assert_eq!(tester.current_progress(), 100.0);
}

/// Invalid configurations are rejected before any battles run.
#[test]
fn test_config_rejection() {
    let decks = population(5, 11);
    let mut tester = DeckTester::new(SimRng::new(12));

    let no_strategies = TestConfig::default().with_strategies(Vec::new());
    assert_eq!(
        tester.run_test(&decks, &no_strategies, None).unwrap_err(),
        ConfigError::NoStrategies
    );

    let zero_decks = TestConfig::default().with_max_decks(0);
    assert_eq!(
        tester.run_test(&decks, &zero_decks, None).unwrap_err(),
        ConfigError::ZeroDecks
    );
}

/// An empty population completes trivially.
#[test]
fn test_empty_population() {
    let mut tester = DeckTester::new(SimRng::new(13));
    let config = TestConfig::default().with_depth(TestDepth::Quick);

    let results = tester.run_test(&[], &config, None).unwrap();
    assert_eq!(results.total_tests, 0);
    assert_eq!(results.completed_tests, 0);
    assert!(results.best_decks.is_empty());
    assert!(results.results.is_empty());
    assert_eq!(results.average_win_rate, 0.0);
}

/// Meta trends cover the best decks and come sorted.
#[test]
fn test_meta_trends_over_run() {
    let decks = population(20, 14);
    let mut tester = DeckTester::new(SimRng::new(15));
    let config = TestConfig::default().with_depth(TestDepth::Extensive);
    let results = tester.run_test(&decks, &config, None).unwrap();

    let trends = analyze_meta_trends(&results);

    let strategy_count: usize = trends.top_strategies.iter().map(|e| e.count).sum();
    assert_eq!(strategy_count, results.best_decks.len());

    for table in [
        &trends.top_strategies,
        &trends.top_masters,
        &trends.top_factions,
    ] {
        for pair in table.windows(2) {
            assert!(pair[0].avg_win_rate >= pair[1].avg_win_rate);
        }
        for entry in table {
            assert!((0.0..=100.0).contains(&entry.avg_win_rate));
            assert!(entry.count >= 1);
        }
    }
}

/// Two testers with the same seed produce identical rankings.
#[test]
fn test_seeded_run_is_reproducible() {
    let decks = population(12, 16);
    let config = TestConfig::default().with_depth(TestDepth::Normal);

    let a = DeckTester::new(SimRng::new(17))
        .run_test(&decks, &config, None)
        .unwrap();
    let b = DeckTester::new(SimRng::new(17))
        .run_test(&decks, &config, None)
        .unwrap();

    assert_eq!(a.completed_tests, b.completed_tests);
    let ids_a: Vec<_> = a.best_decks.iter().map(|d| d.id).collect();
    let ids_b: Vec<_> = b.best_decks.iter().map(|d| d.id).collect();
    assert_eq!(ids_a, ids_b);
    for (id, rate) in &a.results {
        assert_eq!(b.results.get(id), Some(rate));
    }
}
