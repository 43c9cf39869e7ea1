//! Ordered map implementation in Rust with a dict-like API.
//!
//! This crate provides a generic, comparison-ordered key/value store backed
//! by a red-black tree, supporting efficient insertion, deletion, lookup,
//! bidirectional traversal, and range queries. Nodes live in a slab arena
//! addressed by stable IDs, iteration is available both as plain `Iterator`
//! adapters and as a seekable [`Cursor`], and an optional statistics layer
//! records operation counts, timings, and tree height.
//!
//! # Examples
//!
//! ```
//! use ordmap::{Direction, OrderedMap};
//!
//! let mut map = OrderedMap::new();
//! for (key, value) in [(5, "five"), (2, "two"), (8, "eight")] {
//!     map.insert(key, value);
//! }
//!
//! assert_eq!(map.get(&5), Some(&"five"));
//! assert_eq!(map.min_key(), Some(&2));
//!
//! let keys: Vec<i32> = map.keys().copied().collect();
//! assert_eq!(keys, vec![2, 5, 8]);
//!
//! let mut cursor = map.cursor(Direction::Backward);
//! assert_eq!(cursor.key(), Some(&8));
//! ```
//!
//! The map is single-threaded by design: it performs no internal
//! synchronization, and callers needing concurrent access must serialize
//! operations themselves.

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod macros;
mod stats;
mod tree_structure;
mod types;
mod validation;

pub use arena::ArenaStats;
pub use error::{KeyResult, MapError, MapResult, ModifyResult};
pub use iteration::{Cursor, Direction, Iter, Keys, RangeIter, Values};
pub use stats::MapStats;
pub use types::{NodeId, OrderedMap, NULL_NODE};

// Re-exported for macro-generated test suites.
#[doc(hidden)]
pub use paste;
