//! Construction and initialization logic for OrderedMap.
//!
//! Creation is infallible: key ordering is supplied by the key type's `Ord`
//! implementation, value and key cleanup by `Drop`, and copying by `Clone`,
//! so there is no runtime configuration left to validate.

use crate::arena::NodeArena;
use crate::stats::StatsTracker;
use crate::types::{OrderedMap, NULL_NODE};

impl<K: Ord + Clone, V: Clone> OrderedMap<K, V> {
    /// Creates a new, empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::<i32, String>::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            nodes: NodeArena::new(),
            stats: StatsTracker::default(),
            stats_enabled: false,
        }
    }

    /// Creates a new, empty map with arena storage pre-reserved for
    /// `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::with_capacity(1024);
    /// map.insert(1, "one");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            nodes: NodeArena::with_capacity(capacity),
            stats: StatsTracker::default(),
            stats_enabled: false,
        }
    }
}

impl<K: Ord + Clone, V: Clone> Default for OrderedMap<K, V> {
    /// Creates an empty map.
    fn default() -> Self {
        Self::new()
    }
}

/// Deep structural copy: the clone owns fresh node storage and shares
/// nothing with the source, so mutating one never affects the other.
/// Statistics state is carried over with the contents.
impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            len: self.len,
            nodes: self.nodes.clone(),
            stats: self.stats.clone(),
            stats_enabled: self.stats_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_empty() {
        let map = OrderedMap::<i32, String>::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.root, NULL_NODE);
    }

    #[test]
    fn test_default_matches_new() {
        let map = OrderedMap::<i32, String>::default();
        assert!(map.is_empty());
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let map = OrderedMap::<i32, i32>::with_capacity(64);
        assert!(map.is_empty());
        assert_eq!(map.arena_stats().allocated_count, 0);
    }

    #[test]
    fn test_clone_is_structurally_independent() {
        let mut source = OrderedMap::new();
        for key in 0..20 {
            source.insert(key, key * 10);
        }

        let mut copy = source.clone();
        assert_eq!(copy.len(), source.len());

        copy.insert(100, 1000);
        copy.remove(&0);
        assert_eq!(source.len(), 20);
        assert_eq!(source.get(&0), Some(&0));
        assert_eq!(source.get(&100), None);

        source.insert(0, 999);
        assert_eq!(copy.get(&0), None);
    }
}
