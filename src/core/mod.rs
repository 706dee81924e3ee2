//! Core building blocks shared by every filter in the crate.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── bit_table.rs - Fixed-size bit table
//! ├── params.rs    - Parameter validation and false-positive estimates
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomtrial::core::{BitTable, FilterParams};
//!
//! let params = FilterParams::new(100, 10, 4).unwrap();
//! let mut table = BitTable::new(params.table_size()).unwrap();
//! table.set(999);
//! assert!(table.test(999));
//! ```

pub mod bit_table;
pub mod params;

pub use bit_table::BitTable;
pub use params::{
    expected_fp_rate, optimal_hash_count, FilterParams, MAX_HASH_FUNCTIONS, MIN_HASH_FUNCTIONS,
};
