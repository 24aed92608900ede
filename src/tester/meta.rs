//! Meta-trend analysis over finished test results.
//!
//! A pure post-processing view: groups the best decks by strategy,
//! master, and faction, averaging win rates. No new battles are run.

use serde::{Deserialize, Serialize};

use super::results::TestResults;

/// One group in a trend table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    /// Group key: strategy tag, master name, or faction name.
    pub key: String,

    /// Mean win rate of the group's members, 0-100.
    pub avg_win_rate: f64,

    /// Number of best decks in the group.
    pub count: usize,
}

/// Trend tables over the best decks, each sorted descending by average
/// win rate.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetaTrends {
    pub top_strategies: Vec<TrendEntry>,
    pub top_masters: Vec<TrendEntry>,
    pub top_factions: Vec<TrendEntry>,
}

/// Summarize which strategies, masters, and factions dominate the best
/// decks of a finished run.
#[must_use]
pub fn analyze_meta_trends(results: &TestResults) -> MetaTrends {
    let win_rate = |deck_id| results.win_rate(deck_id).unwrap_or(0.0);

    MetaTrends {
        top_strategies: group_by(results, |deck| deck.strategy.to_string(), win_rate),
        top_masters: group_by(results, |deck| deck.master.name.clone(), win_rate),
        top_factions: group_by(results, |deck| deck.master.faction.to_string(), win_rate),
    }
}

fn group_by(
    results: &TestResults,
    key: impl Fn(&crate::deck::Deck) -> String,
    win_rate: impl Fn(crate::deck::DeckId) -> f64,
) -> Vec<TrendEntry> {
    // Insertion-ordered grouping keeps output stable for equal averages
    let mut groups: Vec<(String, f64, usize)> = Vec::new();

    for deck in &results.best_decks {
        let k = key(deck);
        let rate = win_rate(deck.id);
        match groups.iter_mut().find(|(existing, _, _)| *existing == k) {
            Some((_, total, count)) => {
                *total += rate;
                *count += 1;
            }
            None => groups.push((k, rate, 1)),
        }
    }

    let mut entries: Vec<TrendEntry> = groups
        .into_iter()
        .map(|(key, total, count)| TrendEntry {
            key,
            avg_win_rate: total / count as f64,
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.avg_win_rate.total_cmp(&a.avg_win_rate));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::core::SimRng;
    use crate::deck::DeckGenerator;
    use rustc_hash::FxHashMap;

    fn results_with_best(count: usize) -> TestResults {
        let catalog = catalog::builtin();
        let decks = DeckGenerator::new(SimRng::new(1)).generate(&catalog, count, None);

        let mut rates = FxHashMap::default();
        for (i, deck) in decks.iter().enumerate() {
            rates.insert(deck.id, 40.0 + i as f64 * 5.0);
        }

        TestResults {
            total_tests: 0,
            completed_tests: 0,
            best_decks: decks,
            worst_decks: Vec::new(),
            average_win_rate: 0.0,
            results: rates,
        }
    }

    #[test]
    fn test_trend_counts_cover_all_best_decks() {
        let results = results_with_best(10);
        let trends = analyze_meta_trends(&results);

        let total: usize = trends.top_strategies.iter().map(|e| e.count).sum();
        assert_eq!(total, results.best_decks.len());

        let total: usize = trends.top_masters.iter().map(|e| e.count).sum();
        assert_eq!(total, results.best_decks.len());
    }

    #[test]
    fn test_trends_sorted_descending() {
        let results = results_with_best(10);
        let trends = analyze_meta_trends(&results);

        for table in [
            &trends.top_strategies,
            &trends.top_masters,
            &trends.top_factions,
        ] {
            for pair in table.windows(2) {
                assert!(pair[0].avg_win_rate >= pair[1].avg_win_rate);
            }
        }
    }

    #[test]
    fn test_empty_results_yield_empty_trends() {
        let results = TestResults {
            total_tests: 0,
            completed_tests: 0,
            best_decks: Vec::new(),
            worst_decks: Vec::new(),
            average_win_rate: 0.0,
            results: FxHashMap::default(),
        };

        let trends = analyze_meta_trends(&results);
        assert!(trends.top_strategies.is_empty());
        assert!(trends.top_masters.is_empty());
        assert!(trends.top_factions.is_empty());
    }
}
