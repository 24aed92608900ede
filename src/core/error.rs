//! Configuration error taxonomy.
//!
//! Configuration problems are surfaced before any generation or testing
//! work begins; the engine refuses to start rather than silently
//! defaulting. Programming errors (a malformed deck handed to the
//! simulator) are asserted instead, since tolerating them would
//! invalidate every derived statistic.

use thiserror::Error;

/// A test configuration was rejected before any work started.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The strategy set was empty.
    #[error("no strategies selected")]
    NoStrategies,

    /// The requested deck population was zero.
    #[error("max_decks must be positive")]
    ZeroDecks,

    /// An advisory field held a value outside its meaningful range.
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ConfigError::NoStrategies.to_string(), "no strategies selected");
        assert_eq!(
            ConfigError::OutOfRange {
                field: "min_win_rate",
                value: -5
            }
            .to_string(),
            "min_win_rate out of range: -5"
        );
    }
}
