//! Static, flat augmented interval tree for stabbing queries.
//!
//! `intree` indexes a fixed collection of one-dimensional `f64` intervals and
//! answers "which intervals contain this value?" queries:
//!
//! - **Input contract** — the [`Bounds`] trait and the plain-pair
//!   [`SimpleBounds`] implementation
//! - **The index** — [`IntervalIndex`], built once with a randomized
//!   partition into a lower-bound-sorted implicit BST plus a bottom-up
//!   subtree-maximum augmentation
//! - **Queries** — [`IntervalIndex::including`] and friends, a pruned
//!   traversal in O(log n + k) expected time
//! - **Errors** — [`IntreeError`] and [`Result`], used only by the optional
//!   validating constructor
//!
//! The index is immutable after construction; queries take `&self` and never
//! write, so a built index can be queried from any number of threads.
//!
//! # Quick start
//!
//! ```
//! use intree::{IntervalIndex, SimpleBounds};
//!
//! let index = IntervalIndex::new(&[
//!     SimpleBounds::new(0.0, 10.0),
//!     SimpleBounds::new(2.0, 4.0),
//!     SimpleBounds::new(6.0, 8.0),
//! ]);
//!
//! let mut hits = index.including(3.0);
//! hits.sort_unstable();
//! assert_eq!(hits, vec![0, 1]);
//! assert!(index.including(11.0).is_empty());
//! ```

pub mod bounds;
pub mod error;
pub mod index;
mod rng;

pub use bounds::{Bounds, SimpleBounds};
pub use error::{IntreeError, Result};
pub use index::IntervalIndex;
