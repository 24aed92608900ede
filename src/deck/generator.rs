//! Combinatorial deck generation.
//!
//! Produces candidate decks two ways: uniform random sampling without
//! replacement over a faction-preferred ordering of the catalog, and
//! strategy-biased construction from archetype filters. Candidates that
//! cannot reach [`DECK_SIZE`] unique cards are discarded, never emitted,
//! so every returned deck satisfies the size invariant.

use std::sync::Arc;

use log::debug;
use smallvec::SmallVec;

use crate::catalog::{Card, CardType, Catalog, Master};
use crate::core::SimRng;

use super::deck::{Deck, DeckId, Strategy, DECK_SIZE};

/// Cap on random draw attempts per master, so generation terminates even
/// when the requested population dwarfs what the catalog can produce.
const MAX_ATTEMPTS_PER_MASTER: usize = 10_000;

/// Randomized deck generator.
///
/// ## Example
///
/// ```
/// use deckforge::catalog;
/// use deckforge::core::SimRng;
/// use deckforge::deck::DeckGenerator;
///
/// let catalog = catalog::builtin();
/// let mut generator = DeckGenerator::new(SimRng::new(7));
/// let decks = generator.generate(&catalog, 20, None);
///
/// assert!(decks.len() <= 20);
/// assert!(decks.iter().all(|d| d.cards.len() == 10));
/// ```
pub struct DeckGenerator {
    rng: SimRng,
}

impl DeckGenerator {
    /// Create a generator driven by the given RNG.
    #[must_use]
    pub fn new(rng: SimRng) -> Self {
        Self { rng }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SimRng::from_entropy())
    }

    /// Generate up to `max_decks` decks across all masters in the catalog.
    ///
    /// The budget is split evenly per master (integer division; rounding
    /// leftovers are simply not produced). With a strategy tag, each
    /// master additionally gets one archetype-constructed deck when the
    /// catalog supports it. Best effort: the result may be shorter than
    /// requested, never longer, and every deck has exactly [`DECK_SIZE`]
    /// unique cards.
    pub fn generate(
        &mut self,
        catalog: &Catalog,
        max_decks: usize,
        strategy: Option<Strategy>,
    ) -> Vec<Deck> {
        let masters = catalog.masters();
        if masters.is_empty() || catalog.is_empty() {
            return Vec::new();
        }

        let per_master = max_decks / masters.len();
        let mut drafts: Vec<(Arc<Master>, SmallVec<[Arc<Card>; DECK_SIZE]>, Strategy)> =
            Vec::new();

        for master in masters {
            let before = drafts.len();
            let preferred = faction_preferred(catalog, master);

            // Random sampling, capped for termination
            for _ in 0..per_master.min(MAX_ATTEMPTS_PER_MASTER) {
                if let Some(cards) = self.draw_random(&preferred) {
                    drafts.push((
                        Arc::clone(master),
                        cards,
                        strategy.unwrap_or(Strategy::Mixed),
                    ));
                }
            }

            // Strategy-biased construction
            if let Some(strategy) = strategy {
                if let Some(cards) = strategic_cards(&preferred, strategy) {
                    drafts.push((Arc::clone(master), cards, strategy));
                }
            }

            let produced = drafts.len() - before;
            if produced < per_master {
                debug!(
                    "generation shortfall for {}: {produced}/{per_master} decks",
                    master.name
                );
            }
        }

        // Strategic decks can push a master over its budget; the overall
        // contract is len(result) <= max_decks.
        drafts.truncate(max_decks);

        drafts
            .into_iter()
            .enumerate()
            .map(|(i, (master, cards, strategy))| {
                Deck::assemble(DeckId::new(i as u32), master, cards, strategy)
            })
            .collect()
    }

    /// Draw [`DECK_SIZE`] distinct cards uniformly at random.
    ///
    /// Returns `None` when the pool runs dry before reaching a full deck.
    fn draw_random(
        &mut self,
        pool: &[Arc<Card>],
    ) -> Option<SmallVec<[Arc<Card>; DECK_SIZE]>> {
        let mut deck: SmallVec<[Arc<Card>; DECK_SIZE]> = SmallVec::new();

        for _ in 0..DECK_SIZE {
            let remaining: Vec<&Arc<Card>> = pool
                .iter()
                .filter(|c| deck.iter().all(|picked| picked.id != c.id))
                .collect();

            if remaining.is_empty() {
                return None;
            }

            let pick = self.rng.gen_range_usize(0..remaining.len());
            deck.push(Arc::clone(remaining[pick]));
        }

        Some(deck)
    }
}

/// Catalog cards reordered so faction matches (or Neutral) come first.
///
/// Stable: relative order within each group is catalog order.
fn faction_preferred(catalog: &Catalog, master: &Master) -> Vec<Arc<Card>> {
    let mut cards: Vec<Arc<Card>> = catalog.cards().to_vec();
    cards.sort_by_key(|c| !c.fits_faction(master.faction));
    cards
}

/// First [`DECK_SIZE`] cards passing the archetype filter, in pool order.
///
/// Only AGGRO and CONTROL have construction filters; other archetypes
/// yield nothing here and rely on random sampling alone.
fn strategic_cards(
    pool: &[Arc<Card>],
    strategy: Strategy,
) -> Option<SmallVec<[Arc<Card>; DECK_SIZE]>> {
    let filter: fn(&Card) -> bool = match strategy {
        Strategy::Aggro => {
            |c| c.cost <= 3 && (c.has_ability("Fast") || f64::from(c.attack) >= f64::from(c.cost) * 1.5)
        }
        Strategy::Control => {
            |c| c.cost >= 3
                || c.has_ability("Heal")
                || c.has_ability("Armor")
                || c.card_type == CardType::Building
        }
        _ => return None,
    };

    let cards: SmallVec<[Arc<Card>; DECK_SIZE]> = pool
        .iter()
        .filter(|c| filter(c.as_ref()))
        .take(DECK_SIZE)
        .cloned()
        .collect();

    (cards.len() == DECK_SIZE).then_some(cards)
}
