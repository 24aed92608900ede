//! Card catalog: the read-only data the engine operates on.
//!
//! Cards and masters are immutable values created at catalog load and
//! shared by reference (`Arc`) for the lifetime of a run. The engine
//! never mutates them; everything downstream (decks, battles, test
//! results) is derived data.

pub mod builtin;
pub mod card;
pub mod catalog;
pub mod master;

pub use builtin::builtin;
pub use card::{Card, CardId, CardType, Faction, Rarity, SpecialEffects};
pub use catalog::{CardCache, Catalog};
pub use master::{Master, MasterId};
