//! Decks and the combinatorial deck generator.

pub mod deck;
pub mod generator;

pub use deck::{Deck, DeckId, Strategy, DECK_SIZE};
pub use generator::DeckGenerator;
