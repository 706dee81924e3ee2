//! Fixed-size bit table backing a Bloom filter.
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! The table is monotonic: there is no operation that resets a bit once it
//! has been set.
//!
//! # Examples
//!
//! ```
//! use bloomtrial::core::BitTable;
//!
//! let mut table = BitTable::new(100).unwrap();
//! table.set(42);
//! assert!(table.test(42));
//! assert!(!table.test(43));
//! assert_eq!(table.count_ones(), 1);
//! ```

use crate::error::{BloomTrialError, Result};

/// Fixed-size array of single-bit flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitTable {
    words: Box<[u64]>,
    len: usize,
}

impl BitTable {
    /// Create a table of `num_bits` flags, all unset.
    ///
    /// # Errors
    ///
    /// Returns [`BloomTrialError::InvalidParameters`] if `num_bits` is 0, and
    /// [`BloomTrialError::InvalidFilterSize`] if the words cannot be allocated.
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomTrialError::invalid_parameters(
                "bit table size must be greater than 0",
            ));
        }

        let too_large = || BloomTrialError::invalid_filter_size(num_bits, 1);
        let num_words = num_bits.checked_add(63).ok_or_else(too_large)? / 64;

        let mut words = Vec::new();
        words.try_reserve_exact(num_words).map_err(|_| too_large())?;
        words.resize(num_words, 0u64);

        Ok(Self {
            words: words.into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Number of flags in the table.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed table; present for API completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark position `index` as present. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching slice indexing.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "BitTable index out of bounds: index={} len={}",
            index,
            self.len
        );
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Whether position `index` is marked.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn test(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitTable index out of bounds: index={} len={}",
            index,
            self.len
        );
        (self.words[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Number of marked positions.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Fraction of marked positions, in `[0, 1]`.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.len as f64
    }

    /// Heap bytes held by the table.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let table = BitTable::new(100).unwrap();
        assert_eq!(table.len(), 100);
        assert_eq!(table.memory_usage(), 16); // ⌈100/64⌉ = 2 words
        assert!(!table.is_empty());
        assert_eq!(table.count_ones(), 0);
    }

    #[test]
    fn test_new_zero_bits_error() {
        assert!(BitTable::new(0).is_err());
    }

    #[test]
    fn test_new_word_count_overflow() {
        for num_bits in [usize::MAX, usize::MAX - 62] {
            assert!(matches!(
                BitTable::new(num_bits),
                Err(BloomTrialError::InvalidFilterSize { items, multiplier: 1 }) if items == num_bits
            ));
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_new_allocation_failure() {
        // 2⁶¹ bytes, beyond any virtual address space
        assert!(matches!(
            BitTable::new(usize::MAX - 63),
            Err(BloomTrialError::InvalidFilterSize { .. })
        ));
    }

    #[test]
    fn test_set_test_across_word_boundaries() {
        let mut table = BitTable::new(128).unwrap();
        assert!(!table.test(0));

        table.set(0);
        table.set(63);
        table.set(64);
        table.set(127);

        assert!(table.test(0));
        assert!(table.test(63));
        assert!(table.test(64));
        assert!(table.test(127));
        assert!(!table.test(32));
        assert_eq!(table.count_ones(), 4);
    }

    #[test]
    fn test_set_idempotent() {
        let mut table = BitTable::new(64).unwrap();
        table.set(10);
        table.set(10);
        table.set(10);
        assert!(table.test(10));
        assert_eq!(table.count_ones(), 1);
    }

    #[test]
    fn test_non_multiple_of_64() {
        let mut table = BitTable::new(70).unwrap();
        table.set(69);
        assert!(table.test(69));
        assert_eq!(table.count_ones(), 1);
    }

    #[test]
    fn test_fill_ratio() {
        let mut table = BitTable::new(10).unwrap();
        for i in 0..5 {
            table.set(i);
        }
        assert!((table.fill_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds() {
        let mut table = BitTable::new(64).unwrap();
        table.set(64);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_test_out_of_bounds() {
        let table = BitTable::new(100).unwrap();
        let _ = table.test(100);
    }
}
