//! Catalog registry and card cache.
//!
//! The `Catalog` stores all cards and masters for a run and provides
//! fast lookup by id. It is built once by a data provider and treated
//! as read-only by the engine.
//!
//! `CardCache` is the explicit, injectable cache a loader uses to avoid
//! recomputing the same card repeatedly. It is an owned object with a
//! `clear()` operation, not a process-wide singleton, so tests can use
//! an isolated instance.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};
use super::master::{Master, MasterId};

/// Registry of cards and masters.
///
/// ## Example
///
/// ```
/// use deckforge::catalog;
///
/// let catalog = catalog::builtin();
/// assert!(catalog.card(&"scrat".into()).is_some());
/// assert_eq!(catalog.masters().len(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Arc<Card>>,
    masters: Vec<Arc<Master>>,
    cards_by_id: FxHashMap<CardId, Arc<Card>>,
    masters_by_id: FxHashMap<MasterId, Arc<Master>>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from card and master sequences.
    #[must_use]
    pub fn from_parts(
        cards: impl IntoIterator<Item = Card>,
        masters: impl IntoIterator<Item = Master>,
    ) -> Self {
        let mut catalog = Self::new();
        for card in cards {
            catalog.add_card(card);
        }
        for master in masters {
            catalog.add_master(master);
        }
        catalog
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn add_card(&mut self, card: Card) {
        assert!(
            !self.cards_by_id.contains_key(&card.id),
            "card {} already registered",
            card.id
        );
        let card = Arc::new(card);
        self.cards_by_id.insert(card.id.clone(), Arc::clone(&card));
        self.cards.push(card);
    }

    /// Register a master.
    ///
    /// Panics if a master with the same ID already exists.
    pub fn add_master(&mut self, master: Master) {
        assert!(
            !self.masters_by_id.contains_key(&master.id),
            "master {} already registered",
            master.id
        );
        let master = Arc::new(master);
        self.masters_by_id
            .insert(master.id.clone(), Arc::clone(&master));
        self.masters.push(master);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Arc<Card>> {
        self.cards_by_id.get(id)
    }

    /// Get a master by ID.
    #[must_use]
    pub fn master(&self, id: &MasterId) -> Option<&Arc<Master>> {
        self.masters_by_id.get(id)
    }

    /// All cards, in registration order.
    #[must_use]
    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    /// All masters, in registration order.
    #[must_use]
    pub fn masters(&self) -> &[Arc<Master>] {
        &self.masters
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the catalog has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Arc<Card>>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}

/// Explicit card cache for catalog loaders.
///
/// Keyed by card id; loaders call [`CardCache::get_or_insert_with`] so a
/// card is only built once per cache lifetime.
#[derive(Clone, Debug, Default)]
pub struct CardCache {
    entries: FxHashMap<CardId, Arc<Card>>,
}

impl CardCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached card, building and caching it on first access.
    pub fn get_or_insert_with<F>(&mut self, id: &CardId, build: F) -> Arc<Card>
    where
        F: FnOnce() -> Card,
    {
        if let Some(card) = self.entries.get(id) {
            return Arc::clone(card);
        }
        let card = Arc::new(build());
        self.entries.insert(id.clone(), Arc::clone(&card));
        card
    }

    /// Look up a cached card without building.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Arc<Card>> {
        self.entries.get(id)
    }

    /// Number of cached cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
