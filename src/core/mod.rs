//! Core engine types: deterministic RNG and the error taxonomy.
//!
//! Everything here is domain-agnostic plumbing shared by the generator,
//! simulator, and tester.

pub mod error;
pub mod rng;

pub use error::ConfigError;
pub use rng::SimRng;
