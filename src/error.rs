//! Error types for bloomtrial operations.
//!
//! The failure surface is small: filters reject degenerate parameters at
//! construction, and the statistics helpers reject samples they cannot
//! summarize. Everything else is avoided by construction (wide arithmetic in
//! the universal hash, explicit `Option` for undefined rates).
//!
//! # Error Propagation
//!
//! ```
//! use bloomtrial::{Result, BloomTrialError};
//! use bloomtrial::core::params::FilterParams;
//!
//! fn table_size(n: usize, c: usize, k: usize) -> Result<usize> {
//!     let params = FilterParams::new(n, c, k)?;
//!     Ok(params.table_size())
//! }
//! # assert_eq!(table_size(100, 10, 4).unwrap(), 1000);
//! # assert!(table_size(0, 10, 4).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bloomtrial operations.
pub type Result<T> = std::result::Result<T, BloomTrialError>;

/// Errors that can occur while building filters or summarizing trials.
///
/// `Clone` + `PartialEq` keep errors easy to compare in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomTrialError {
    /// Parameters that don't fit any more specific variant.
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// Expected subset size `n` is zero.
    InvalidItemCount {
        /// The invalid count that was provided.
        count: usize,
    },

    /// Bits-per-element multiplier `c` is zero.
    InvalidMultiplier {
        /// The invalid multiplier that was provided.
        multiplier: usize,
    },

    /// Number of hash slots `k` is outside the supported range.
    InvalidHashCount {
        /// The invalid hash count provided.
        count: usize,
        /// Minimum allowed value.
        min: usize,
        /// Maximum allowed value.
        max: usize,
    },

    /// Table size `m = c·n` is zero or overflows `usize`.
    InvalidFilterSize {
        /// Expected subset size.
        items: usize,
        /// Bits-per-element multiplier.
        multiplier: usize,
    },

    /// Universal hash modulus is too small to draw coefficients from.
    InvalidModulus {
        /// The rejected modulus.
        modulus: u64,
    },

    /// Strategy was built for a different slot count than the filter expects.
    StrategyMismatch {
        /// Slot count the filter parameters require.
        expected: usize,
        /// Slot count the strategy provides.
        actual: usize,
    },

    /// A statistic was requested over an empty sample.
    EmptySample {
        /// Name of the statistic.
        statistic: &'static str,
    },
}

impl fmt::Display for BloomTrialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { message } => {
                write!(f, "Invalid Bloom filter parameters: {}.", message)
            }
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Expected items must be greater than 0.",
                    count
                )
            }
            Self::InvalidMultiplier { multiplier } => {
                write!(
                    f,
                    "Invalid bits-per-item multiplier: {}. Must be greater than 0.",
                    multiplier
                )
            }
            Self::InvalidHashCount { count, min, max } => {
                write!(
                    f,
                    "Invalid hash function count: {}. Must be in range [{}, {}].",
                    count, min, max
                )
            }
            Self::InvalidFilterSize { items, multiplier } => {
                write!(
                    f,
                    "Invalid filter size: {} items x {} bits per item does not fit in memory.",
                    items, multiplier
                )
            }
            Self::InvalidModulus { modulus } => {
                write!(
                    f,
                    "Invalid universal hash modulus: {}. Must be at least 2.",
                    modulus
                )
            }
            Self::StrategyMismatch { expected, actual } => {
                write!(
                    f,
                    "Hash strategy provides {} slots but the filter requires {}.",
                    actual, expected
                )
            }
            Self::EmptySample { statistic } => {
                write!(f, "Cannot compute {} of an empty sample.", statistic)
            }
        }
    }
}

impl std::error::Error for BloomTrialError {}

impl BloomTrialError {
    /// Create an `InvalidParameters` error with a formatted message.
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create an `InvalidMultiplier` error.
    #[must_use]
    pub fn invalid_multiplier(multiplier: usize) -> Self {
        Self::InvalidMultiplier { multiplier }
    }

    /// Create an `InvalidHashCount` error.
    #[must_use]
    pub fn invalid_hash_count(count: usize, min: usize, max: usize) -> Self {
        Self::InvalidHashCount { count, min, max }
    }

    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(items: usize, multiplier: usize) -> Self {
        Self::InvalidFilterSize { items, multiplier }
    }

    /// Create an `InvalidModulus` error.
    #[must_use]
    pub fn invalid_modulus(modulus: u64) -> Self {
        Self::InvalidModulus { modulus }
    }

    /// Create a `StrategyMismatch` error.
    #[must_use]
    pub fn strategy_mismatch(expected: usize, actual: usize) -> Self {
        Self::StrategyMismatch { expected, actual }
    }

    /// Create an `EmptySample` error.
    #[must_use]
    pub fn empty_sample(statistic: &'static str) -> Self {
        Self::EmptySample { statistic }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_parameters() {
        let err = BloomTrialError::invalid_parameters("test message");
        let display = format!("{err}");
        assert!(display.contains("Invalid Bloom filter parameters"));
        assert!(display.contains("test message"));
        assert!(display.ends_with('.'));
    }

    #[test]
    fn test_error_display_invalid_item_count() {
        let err = BloomTrialError::invalid_item_count(0);
        let display = format!("{err}");
        assert!(display.contains("0"));
        assert!(display.contains("greater than 0"));
    }

    #[test]
    fn test_error_display_invalid_multiplier() {
        let display = format!("{}", BloomTrialError::invalid_multiplier(0));
        assert!(display.contains("multiplier"));
    }

    #[test]
    fn test_error_display_invalid_hash_count() {
        let err = BloomTrialError::invalid_hash_count(0, 1, 32);
        let display = format!("{err}");
        assert!(display.contains("0"));
        assert!(display.contains("[1, 32]"));
    }

    #[test]
    fn test_error_display_invalid_filter_size() {
        let err = BloomTrialError::invalid_filter_size(usize::MAX, 10);
        let display = format!("{err}");
        assert!(display.contains(&usize::MAX.to_string()));
        assert!(display.contains("10 bits per item"));
    }

    #[test]
    fn test_error_display_invalid_modulus() {
        let display = format!("{}", BloomTrialError::invalid_modulus(1));
        assert!(display.contains("modulus: 1"));
    }

    #[test]
    fn test_error_display_strategy_mismatch() {
        let display = format!("{}", BloomTrialError::strategy_mismatch(4, 3));
        assert!(display.contains("provides 3 slots"));
        assert!(display.contains("requires 4"));
    }

    #[test]
    fn test_error_display_empty_sample() {
        let display = format!("{}", BloomTrialError::empty_sample("median"));
        assert_eq!(display, "Cannot compute median of an empty sample.");
    }

    #[test]
    fn test_error_implements_std_error() {
        let _err: Box<dyn std::error::Error + Send + Sync> =
            Box::new(BloomTrialError::invalid_parameters("test"));
    }

    #[test]
    fn test_error_clone() {
        let err1 = BloomTrialError::invalid_hash_count(40, 1, 32);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(BloomTrialError::invalid_item_count(0))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert_eq!(outer(), Err(BloomTrialError::invalid_item_count(0)));
    }
}
