//! The brute-force test loop.
//!
//! Single-threaded and cooperative: the battle loop is the sole
//! long-running operation, and the progress callback checkpoints double
//! as the host's chance to observe cancellation promptly. Stopping is
//! best effort; battles already counted stay counted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use crate::battle::{BattleSimulator, Winner};
use crate::core::{ConfigError, SimRng};
use crate::deck::{Deck, DeckId};

use super::config::{TestConfig, TestDepth};
use super::results::{Tally, TestResults, MIN_GAMES};

/// Cooperative cancellation handle for a running test.
///
/// Cloneable and cheap; `stop()` takes effect at the next battle
/// boundary. Statistics recorded before the stop are kept.
#[derive(Clone, Debug)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Request the run to stop at the next battle boundary.
    pub fn stop(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    fn keep_running(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Progress callback: percentage complete (0-100) and a status line.
pub type ProgressFn<'a> = dyn FnMut(f64, &str) + 'a;

/// Orchestrates pairwise battles across a deck population.
///
/// ## Example
///
/// ```
/// use deckforge::catalog;
/// use deckforge::core::SimRng;
/// use deckforge::deck::DeckGenerator;
/// use deckforge::tester::{DeckTester, TestConfig, TestDepth};
///
/// let catalog = catalog::builtin();
/// let decks = DeckGenerator::new(SimRng::new(1)).generate(&catalog, 10, None);
/// let mut tester = DeckTester::new(SimRng::new(2));
///
/// let config = TestConfig::default().with_depth(TestDepth::Quick);
/// let results = tester.run_test(&decks, &config, None).unwrap();
/// assert!(results.completed_tests <= results.total_tests);
/// ```
pub struct DeckTester {
    simulator: BattleSimulator,
    rng: SimRng,
    running: Arc<AtomicBool>,
    current_progress: f64,
}

impl DeckTester {
    /// Create a tester; the RNG drives opponent selection and seeds the
    /// battle simulator.
    #[must_use]
    pub fn new(mut rng: SimRng) -> Self {
        let simulator = BattleSimulator::new(rng.for_context("battle"));
        Self {
            simulator,
            rng,
            running: Arc::new(AtomicBool::new(false)),
            current_progress: 0.0,
        }
    }

    /// Create a tester seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SimRng::from_entropy())
    }

    /// Replace the battle simulator (builder pattern).
    #[must_use]
    pub fn with_simulator(mut self, simulator: BattleSimulator) -> Self {
        self.simulator = simulator;
        self
    }

    /// Handle for cancelling a run from the progress callback or another
    /// owner of the handle.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.running))
    }

    /// Whether a test run is currently in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Progress of the current or last run, 0-100.
    #[must_use]
    pub fn current_progress(&self) -> f64 {
        self.current_progress
    }

    /// Run pairwise battles across `decks` per the configured depth.
    ///
    /// Validates the configuration before any work starts. Returns
    /// partial results when cancelled: `completed_tests` reflects the
    /// battles actually executed.
    pub fn run_test(
        &mut self,
        decks: &[Deck],
        config: &TestConfig,
        mut on_progress: Option<&mut ProgressFn<'_>>,
    ) -> Result<TestResults, ConfigError> {
        config.validate()?;

        self.running.store(true, Ordering::Relaxed);
        self.current_progress = 0.0;

        let mut tallies: FxHashMap<DeckId, Tally> = decks
            .iter()
            .map(|deck| (deck.id, Tally::default()))
            .collect();

        let stop = self.stop_handle();
        let total_battles = config.test_depth.planned_battles(decks.len());
        let mut completed = 0usize;

        for (i, deck) in decks.iter().enumerate() {
            if !stop.keep_running() || completed >= total_battles {
                break;
            }

            self.report(
                &mut on_progress,
                completed,
                total_battles,
                &format!("Testing {} - {}", deck.master.name, deck.strategy),
            );
            debug!("testing deck {} ({} opponents done)", deck.id, completed);

            let opponents = self.select_opponents(decks, i, config.test_depth);

            for opponent_idx in opponents {
                // The planned count is a hard ceiling on the run
                if !stop.keep_running() || completed >= total_battles {
                    break;
                }

                let opponent = &decks[opponent_idx];
                let outcome = self.simulator.simulate_battle(deck, opponent);

                let (share1, share2) = match outcome.winner {
                    Winner::Deck1 => (1.0, 0.0),
                    Winner::Deck2 => (0.0, 1.0),
                    // Draw credits half a win to each side
                    Winner::Draw => (0.5, 0.5),
                };
                tallies.get_mut(&deck.id).expect("deck tallied").record(share1);
                tallies
                    .get_mut(&opponent.id)
                    .expect("opponent tallied")
                    .record(share2);

                completed += 1;
                if completed % 10 == 0 {
                    self.report(
                        &mut on_progress,
                        completed,
                        total_battles,
                        &format!("{completed}/{total_battles} battles completed"),
                    );
                }
            }
        }

        let results = Self::finalize(decks, &tallies, total_battles, completed);

        self.current_progress = 100.0;
        if let Some(callback) = on_progress.as_mut() {
            callback(100.0, "Test completed!");
        }
        self.running.store(false, Ordering::Relaxed);

        Ok(results)
    }

    fn report(
        &mut self,
        on_progress: &mut Option<&mut ProgressFn<'_>>,
        completed: usize,
        total: usize,
        message: &str,
    ) {
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        self.current_progress = percent;
        if let Some(callback) = on_progress.as_mut() {
            callback(percent, message);
        }
    }

    /// Pick opponent indices for the deck at `current`.
    fn select_opponents(
        &mut self,
        decks: &[Deck],
        current: usize,
        depth: TestDepth,
    ) -> Vec<usize> {
        let mut opponents = Vec::new();
        if decks.len() < 2 {
            return opponents;
        }

        match depth {
            TestDepth::Quick => {
                self.push_random_opponents(&mut opponents, decks.len(), current, 10);
            }
            TestDepth::Normal => {
                self.push_random_opponents(&mut opponents, decks.len(), current, 15);

                // Strategically interesting: similarity closest to 0.5,
                // neither near-identical nor maximally dissimilar
                let mut candidates: Vec<usize> =
                    (0..decks.len()).filter(|&j| j != current).collect();
                candidates.sort_by(|&a, &b| {
                    let da = (0.5 - similarity(&decks[current], &decks[a])).abs();
                    let db = (0.5 - similarity(&decks[current], &decks[b])).abs();
                    da.total_cmp(&db)
                });
                opponents.extend(candidates.into_iter().take(5));
            }
            TestDepth::Extensive => {
                // Upper triangle: each pair battles exactly once across
                // the whole run, both tallies update per battle
                opponents.extend(current + 1..decks.len());
            }
        }

        opponents
    }

    /// Uniform random opponents, re-rolled to avoid self-matches.
    fn push_random_opponents(
        &mut self,
        opponents: &mut Vec<usize>,
        population: usize,
        current: usize,
        count: usize,
    ) {
        for _ in 0..count.min(population - 1) {
            let mut idx = self.rng.gen_range_usize(0..population);
            while idx == current {
                idx = self.rng.gen_range_usize(0..population);
            }
            opponents.push(idx);
        }
    }

    /// Rank qualifying decks and assemble the terminal aggregate.
    fn finalize(
        decks: &[Deck],
        tallies: &FxHashMap<DeckId, Tally>,
        total_battles: usize,
        completed: usize,
    ) -> TestResults {
        // Population order in, stable sort: win-rate ties keep generation
        // order
        let mut ranked: Vec<(&Deck, Tally)> = decks
            .iter()
            .filter_map(|deck| {
                let tally = tallies.get(&deck.id).copied()?;
                (tally.total >= MIN_GAMES).then_some((deck, tally))
            })
            .collect();
        ranked.sort_by(|a, b| b.1.win_rate.total_cmp(&a.1.win_rate));

        let results: FxHashMap<DeckId, f64> = ranked
            .iter()
            .map(|(deck, tally)| (deck.id, tally.win_rate))
            .collect();

        let average_win_rate = if results.is_empty() {
            0.0
        } else {
            results.values().sum::<f64>() / results.len() as f64
        };

        let best_decks = ranked
            .iter()
            .take(10)
            .map(|(deck, _)| (*deck).clone())
            .collect();
        let worst_decks = ranked
            .iter()
            .skip(ranked.len().saturating_sub(5))
            .map(|(deck, _)| (*deck).clone())
            .collect();

        TestResults {
            total_tests: total_battles,
            completed_tests: completed,
            best_decks,
            worst_decks,
            average_win_rate,
            results,
        }
    }
}

/// Deck similarity in [0, 1]: 0 = completely different, 1 = identical.
fn similarity(deck1: &Deck, deck2: &Deck) -> f64 {
    let mut similarity = 0.0;

    if deck1.master.faction == deck2.master.faction {
        similarity += 0.2;
    }
    if deck1.master.name == deck2.master.name {
        similarity += 0.3;
    }
    if deck1.strategy == deck2.strategy {
        similarity += 0.3;
    }

    let cost_diff = (deck1.average_cost - deck2.average_cost).abs();
    similarity += (0.2 - cost_diff * 0.1).max(0.0);

    similarity.min(1.0)
}
