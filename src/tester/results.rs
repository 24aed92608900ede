//! Terminal aggregate of one test run.

use rustc_hash::FxHashMap;

use crate::deck::{Deck, DeckId};

/// Decks need at least this many recorded games to be ranked.
pub(crate) const MIN_GAMES: u32 = 5;

/// Running win/loss tally for one deck.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Tally {
    /// Wins; draws credit 0.5 to each side.
    pub wins: f64,
    pub total: u32,
    /// Recomputed after every battle, 0-100.
    pub win_rate: f64,
}

impl Tally {
    pub(crate) fn record(&mut self, win_share: f64) {
        self.wins += win_share;
        self.total += 1;
        self.win_rate = self.wins / f64::from(self.total) * 100.0;
    }
}

/// Aggregated outcome of one test run.
///
/// `completed_tests` is the ground truth of how much work was done; it
/// falls short of `total_tests` when the run was cancelled.
#[derive(Clone, Debug)]
pub struct TestResults {
    /// Planned battle count.
    pub total_tests: usize,

    /// Battles actually executed.
    pub completed_tests: usize,

    /// Ranked decks, highest win rate first; top 10 of the qualifying
    /// population.
    pub best_decks: Vec<Deck>,

    /// The 5 qualifying decks with the lowest win rates.
    pub worst_decks: Vec<Deck>,

    /// Mean win rate across qualifying decks.
    pub average_win_rate: f64,

    /// Win rate per qualifying deck (at least 5 recorded games), 0-100.
    pub results: FxHashMap<DeckId, f64>,
}

impl TestResults {
    /// Win rate for a deck, when it qualified for ranking.
    #[must_use]
    pub fn win_rate(&self, id: DeckId) -> Option<f64> {
        self.results.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::default();
        tally.record(1.0);
        tally.record(0.0);
        tally.record(0.5);

        assert_eq!(tally.total, 3);
        assert!((tally.wins - 1.5).abs() < 1e-9);
        assert!((tally.win_rate - 50.0).abs() < 1e-9);
    }
}
