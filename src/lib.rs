//! # dynseq: Growable Arrays, Lazy Sequence Operators and Multi-Key Ordering
//!
//! This crate provides a growable, index-addressable array with an explicit
//! amortized growth policy, a library of lazy sequence operators over
//! anything iterable, and a stable multi-key ordering engine.
//!
//! ## Key Features
//!
//! - **DynArray**: contiguous growable array with checked access, shifting
//!   insert/remove, slicing and concatenation
//! - **Configurable Growth**: doubling up to a threshold, then fractional
//!   growth, tunable through [`GrowthConfig`] presets, environment or JSON
//! - **Lazy Operators**: map, filter, take, skip, enumerate and friends that
//!   do nothing until pulled
//! - **Aggregations**: folds, min/max, first-match and predicates
//! - **Multi-Key Ordering**: `order_by` / `then_by` chains with per-level
//!   direction and custom comparers, sorted stably on first iteration
//!
//! ## Quick Start
//!
//! ```rust
//! use dynseq::{DynArray, SeqExt, seq};
//!
//! let mut arr = DynArray::new();
//! arr.push(1);
//! arr.push(2);
//! arr.push(3);
//! arr.insert(2, 99).unwrap();
//! assert_eq!(arr.to_string(), "[1, 2, 99, 3]");
//! assert_eq!(arr.remove_at(2).unwrap(), 99);
//!
//! // Lazy operators
//! let doubled = seq::map(&arr, |x| x * 2).to_dyn_array();
//! assert_eq!(doubled.to_string(), "[2, 4, 6]");
//!
//! // Stable multi-key ordering
//! let ordered = vec![4, 1, 3, 2]
//!     .order_by(|x| x % 2)
//!     .then_by(|x| *x)
//!     .to_dyn_array();
//! assert_eq!(ordered.to_string(), "[2, 4, 1, 3]");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod containers;
pub mod error;
pub mod order;
pub mod seq;

// Re-export core types
pub use config::{Config, GrowthConfig};
pub use containers::DynArray;
pub use error::{DynSeqError, Result};
pub use order::{OrderedSeq, SortDirection, SortEngine, SortStats, Sorted};
pub use seq::SeqExt;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing dynseq v{}", VERSION);
}
