//! Filter parameters and the classical false-positive estimate.
//!
//! # Mathematical Background
//!
//! Given:
//! - `n`: expected number of elements
//! - `c`: bits per element, so the table holds `m = c·n` bits
//! - `k`: number of hash slots per key
//!
//! The probability that a key never inserted reports as present is
//! approximately:
//!
//! ```text
//! p = (1 - e^(-kn/m))^k
//! ```
//!
//! For a fixed `c` this is minimized at `k = c · ln 2`.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomTrialError, Result};
use std::f64::consts::LN_2;

/// Maximum supported number of hash slots.
///
/// Beyond 32 slots the per-key cost grows while the false-positive rate no
/// longer improves for any practical `c`.
pub const MAX_HASH_FUNCTIONS: usize = 32;

/// Minimum number of hash slots.
pub const MIN_HASH_FUNCTIONS: usize = 1;

/// Validated `(n, c, k)` triple with the derived table size `m`.
///
/// # Examples
///
/// ```
/// use bloomtrial::core::params::FilterParams;
///
/// let params = FilterParams::new(100, 10, 4).unwrap();
/// assert_eq!(params.table_size(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterParams {
    expected_items: usize,
    bits_per_item: usize,
    hash_count: usize,
    table_size: usize,
}

impl FilterParams {
    /// Validate `(n, c, k)` and compute `m = c·n`.
    ///
    /// # Errors
    ///
    /// - [`BloomTrialError::InvalidItemCount`] if `n == 0`
    /// - [`BloomTrialError::InvalidMultiplier`] if `c == 0`
    /// - [`BloomTrialError::InvalidHashCount`] if `k` is outside
    ///   `[MIN_HASH_FUNCTIONS, MAX_HASH_FUNCTIONS]`
    /// - [`BloomTrialError::InvalidFilterSize`] if `c·n` overflows
    pub fn new(expected_items: usize, bits_per_item: usize, hash_count: usize) -> Result<Self> {
        if expected_items == 0 {
            return Err(BloomTrialError::invalid_item_count(expected_items));
        }
        if bits_per_item == 0 {
            return Err(BloomTrialError::invalid_multiplier(bits_per_item));
        }
        if !(MIN_HASH_FUNCTIONS..=MAX_HASH_FUNCTIONS).contains(&hash_count) {
            return Err(BloomTrialError::invalid_hash_count(
                hash_count,
                MIN_HASH_FUNCTIONS,
                MAX_HASH_FUNCTIONS,
            ));
        }

        let table_size = expected_items
            .checked_mul(bits_per_item)
            .ok_or_else(|| BloomTrialError::invalid_filter_size(expected_items, bits_per_item))?;

        Ok(Self {
            expected_items,
            bits_per_item,
            hash_count,
            table_size,
        })
    }

    /// Expected subset size `n`.
    #[must_use]
    #[inline]
    pub const fn expected_items(&self) -> usize {
        self.expected_items
    }

    /// Bits-per-element multiplier `c`.
    #[must_use]
    #[inline]
    pub const fn bits_per_item(&self) -> usize {
        self.bits_per_item
    }

    /// Number of hash slots `k`.
    #[must_use]
    #[inline]
    pub const fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Table size `m = c·n`.
    #[must_use]
    #[inline]
    pub const fn table_size(&self) -> usize {
        self.table_size
    }

    /// Theoretical false-positive rate after `inserted` distinct keys.
    #[must_use]
    pub fn expected_fp_rate(&self, inserted: usize) -> f64 {
        fp_rate_estimate(self.table_size, inserted, self.hash_count)
    }
}

/// Calculate the expected false positive rate `(1 - e^(-kn/m))^k`.
///
/// # Errors
///
/// - [`BloomTrialError::InvalidParameters`] if `m == 0`
/// - [`BloomTrialError::InvalidHashCount`] if `k` is outside valid bounds
///
/// # Examples
///
/// ```
/// use bloomtrial::core::params::expected_fp_rate;
///
/// // c = 10, k = 4
/// let fp = expected_fp_rate(1000, 100, 4).unwrap();
/// assert!((fp - 0.0118).abs() < 0.0005);
/// ```
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(BloomTrialError::invalid_parameters(
            "table size must be greater than 0",
        ));
    }
    if !(MIN_HASH_FUNCTIONS..=MAX_HASH_FUNCTIONS).contains(&k) {
        return Err(BloomTrialError::invalid_hash_count(
            k,
            MIN_HASH_FUNCTIONS,
            MAX_HASH_FUNCTIONS,
        ));
    }
    Ok(fp_rate_estimate(m, n, k))
}

fn fp_rate_estimate(m: usize, n: usize, k: usize) -> f64 {
    // Empty filter never reports a positive
    if n == 0 {
        return 0.0;
    }

    let k_f64 = k as f64;
    let exponent = -(k_f64 * n as f64) / m as f64;
    let prob_bit_one = 1.0 - exponent.exp();

    prob_bit_one.powf(k_f64).clamp(0.0, 1.0)
}

/// Slot count minimizing the false-positive rate for `c` bits per element.
///
/// Implements `k = c · ln 2`, rounded and clamped to
/// `[MIN_HASH_FUNCTIONS, MAX_HASH_FUNCTIONS]`.
///
/// ```
/// use bloomtrial::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(10), 7);
/// assert_eq!(optimal_hash_count(1), 1);
/// ```
#[must_use]
pub fn optimal_hash_count(bits_per_item: usize) -> usize {
    let k = (bits_per_item as f64 * LN_2).round() as usize;
    k.clamp(MIN_HASH_FUNCTIONS, MAX_HASH_FUNCTIONS)
}
