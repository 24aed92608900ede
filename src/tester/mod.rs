//! Tournament-style deck testing.
//!
//! Drives pairwise battles across a deck population at a configured
//! depth, accumulates win/loss tallies, and produces ranked results
//! plus meta-trend summaries. Long-running and cancellable; progress is
//! reported through a caller-supplied callback.

pub mod config;
pub mod meta;
pub mod results;
pub mod tester;

pub use config::{TestConfig, TestDepth};
pub use meta::{analyze_meta_trends, MetaTrends, TrendEntry};
pub use results::TestResults;
pub use tester::{DeckTester, StopHandle};
