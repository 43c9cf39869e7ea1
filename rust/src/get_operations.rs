//! Read operations for OrderedMap.
//!
//! Key lookup, presence tests, extreme-key accessors, and bounded range
//! counting. Lookup misses are not errors here; the checked accessors map
//! them to `KeyNotFound` for callers that want a `Result`.

use std::ops::RangeBounds;

use crate::error::{KeyResult, MapError, MapResult};
use crate::types::{OrderedMap, NULL_NODE};

impl<K: Ord + Clone, V: Clone> OrderedMap<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let started = self.begin_op();
        let node = self.find_node(key);
        self.finish_search(started);
        self.nodes.get(node).map(|node| &node.value)
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "ONE";
    /// }
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let started = self.begin_op();
        let node = self.find_node(key);
        self.finish_search(started);
        self.nodes.get_mut(node).map(|node| &mut node.value)
    }

    /// Check if a key exists in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Get the value for a key, returning `KeyNotFound` when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.get_item(&1).unwrap(), &"one");
    /// assert!(map.get_item(&2).is_err());
    /// ```
    pub fn get_item(&self, key: &K) -> KeyResult<&V> {
        self.get(key).ok_or(MapError::KeyNotFound)
    }

    /// Get the value for a key, or the caller-supplied default when absent.
    /// The map is never mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.get_or_default(&1, &"default"), &"one");
    /// assert_eq!(map.get_or_default(&2, &"default"), &"default");
    /// ```
    pub fn get_or_default<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Look up several keys at once; fails with `KeyNotFound` if any key is
    /// absent.
    pub fn get_many(&self, keys: &[K]) -> MapResult<Vec<&V>> {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            match self.get(key) {
                Some(value) => values.push(value),
                None => return Err(MapError::KeyNotFound),
            }
        }
        Ok(values)
    }

    // ============================================================================
    // EXTREME-KEY ACCESSORS
    // ============================================================================

    /// Smallest key in the map, `None` when empty. O(log n) descent.
    pub fn min_key(&self) -> Option<&K> {
        self.nodes.get(self.subtree_min(self.root)).map(|node| &node.key)
    }

    /// Largest key in the map, `None` when empty.
    pub fn max_key(&self) -> Option<&K> {
        self.nodes.get(self.subtree_max(self.root)).map(|node| &node.key)
    }

    /// Value stored under the smallest key, `None` when empty.
    pub fn min_value(&self) -> Option<&V> {
        self.nodes.get(self.subtree_min(self.root)).map(|node| &node.value)
    }

    /// Value stored under the largest key, `None` when empty.
    pub fn max_value(&self) -> Option<&V> {
        self.nodes.get(self.subtree_max(self.root)).map(|node| &node.value)
    }

    /// First key-value pair in ascending order.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.nodes
            .get(self.subtree_min(self.root))
            .map(|node| (&node.key, &node.value))
    }

    /// Last key-value pair in ascending order.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.nodes
            .get(self.subtree_max(self.root))
            .map(|node| (&node.key, &node.value))
    }

    // ============================================================================
    // RANGE QUERIES
    // ============================================================================

    /// Number of keys inside `range`. O(log n + k) bounded walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// for i in 0..10 {
    ///     map.insert(i, i * 10);
    /// }
    /// assert_eq!(map.count_range(3..7), 4);
    /// assert_eq!(map.count_range(3..=7), 5);
    /// assert_eq!(map.count_range(..), 10);
    /// ```
    pub fn count_range<R>(&self, range: R) -> usize
    where
        R: RangeBounds<K>,
    {
        let mut current = self.find_lower_bound(range.start_bound());
        let mut count = 0;
        while let Some(node) = self.nodes.get(current) {
            if Self::past_end_bound(&node.key, range.end_bound()) {
                break;
            }
            count += 1;
            current = self.successor_of(current);
        }
        count
    }
}
