//! An ordered map based on an AVL tree.
//!
//! Every insertion and removal rebalances the path it touched, so lookups, insertions and
//! removals all run in `O(log n)` comparisons.

#![deny(missing_docs)]

mod error;
pub mod map;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

pub use error::IterationExhausted;
pub use map::TreeMap;
