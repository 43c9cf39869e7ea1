//! Iterator and cursor implementations for OrderedMap.
//!
//! Two traversal surfaces are provided: plain `Iterator` adapters (`iter`,
//! `keys`, `values`, `range`) for idiomatic for-loops, and the seekable
//! [`Cursor`] for callers that need explicit positioning, direction control,
//! and stepwise advancement. Every traversal object borrows the map shared,
//! so structural mutation during traversal is rejected at compile time.

use std::ops::{Bound, RangeBounds};

use crate::error::{MapError, MapResult};
use crate::types::{NodeId, OrderedMap, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Traversal direction for cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending key order.
    Forward,
    /// Descending key order.
    Backward,
}

/// Iterator over key-value pairs in ascending key order.
pub struct Iter<'a, K, V> {
    map: &'a OrderedMap<K, V>,
    current: NodeId,
}

/// Iterator over keys in ascending order.
pub struct Keys<'a, K, V> {
    items: Iter<'a, K, V>,
}

/// Iterator over values in ascending key order.
pub struct Values<'a, K, V> {
    items: Iter<'a, K, V>,
}

/// Iterator over the key-value pairs inside a key range.
pub struct RangeIter<'a, K, V> {
    map: &'a OrderedMap<K, V>,
    current: NodeId,
    end: Bound<K>,
}

/// Seekable traversal cursor over a map.
///
/// A cursor is either **positioned** on a live node or **exhausted**. It is
/// created positioned on the first element in traversal order (the minimum
/// key forward, the maximum backward) and becomes exhausted after advancing
/// past the last one. A failed [`seek`](Cursor::seek) invalidates the cursor
/// until it is repositioned.
///
/// # Examples
///
/// ```
/// use ordmap::{Direction, OrderedMap};
///
/// let mut map = OrderedMap::new();
/// for i in 1..=3 {
///     map.insert(i, i * 10);
/// }
///
/// let mut cursor = map.cursor(Direction::Backward);
/// let mut seen = Vec::new();
/// while cursor.has_next() {
///     seen.push(*cursor.key().unwrap());
///     cursor.advance().unwrap();
/// }
/// assert_eq!(seen, vec![3, 2, 1]);
/// ```
pub struct Cursor<'a, K, V> {
    map: &'a OrderedMap<K, V>,
    current: NodeId,
    direction: Direction,
    valid: bool,
}

// ============================================================================
// MAP ITERATOR METHODS
// ============================================================================

impl<K: Ord + Clone, V: Clone> OrderedMap<K, V> {
    /// Returns an iterator over all key-value pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            map: self,
            current: self.subtree_min(self.root),
        }
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { items: self.iter() }
    }

    /// Returns an iterator over all values in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { items: self.iter() }
    }

    /// Returns an iterator over the key-value pairs inside `range`, using
    /// Rust's range syntax. Positioning the start is O(log n).
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
    ///
    /// let keys: Vec<i32> = map.range(3..7).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![3, 4, 5, 6]);
    ///
    /// let keys: Vec<i32> = map.range(8..).map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![8, 9]);
    /// ```
    pub fn range<R>(&self, range: R) -> RangeIter<'_, K, V>
    where
        R: RangeBounds<K>,
    {
        let end = match range.end_bound() {
            Bound::Included(key) => Bound::Included(key.clone()),
            Bound::Excluded(key) => Bound::Excluded(key.clone()),
            Bound::Unbounded => Bound::Unbounded,
        };
        RangeIter {
            map: self,
            current: self.find_lower_bound(range.start_bound()),
            end,
        }
    }

    /// Creates a cursor positioned at the first element in traversal order.
    /// The cursor is exhausted immediately when the map is empty.
    pub fn cursor(&self, direction: Direction) -> Cursor<'_, K, V> {
        Cursor::new(self, direction)
    }
}

impl<'a, K: Ord + Clone, V: Clone> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a, K: Ord + Clone, V: Clone> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current;
        let node = self.map.nodes.get(id)?;
        self.current = self.map.successor_of(id);
        Some((&node.key, &node.value))
    }
}

impl<'a, K: Ord + Clone, V: Clone> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(key, _)| key)
    }
}

impl<'a, K: Ord + Clone, V: Clone> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, value)| value)
    }
}

impl<'a, K: Ord + Clone, V: Clone> Iterator for RangeIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current;
        let node = self.map.nodes.get(id)?;
        if OrderedMap::<K, V>::past_end_bound(&node.key, self.end.as_ref()) {
            self.current = NULL_NODE;
            return None;
        }
        self.current = self.map.successor_of(id);
        Some((&node.key, &node.value))
    }
}

// ============================================================================
// CURSOR IMPLEMENTATION
// ============================================================================

impl<'a, K: Ord + Clone, V: Clone> Cursor<'a, K, V> {
    pub(crate) fn new(map: &'a OrderedMap<K, V>, direction: Direction) -> Self {
        let current = match direction {
            Direction::Forward => map.subtree_min(map.root),
            Direction::Backward => map.subtree_max(map.root),
        };
        Self {
            map,
            current,
            direction,
            valid: true,
        }
    }

    /// The direction this cursor traverses in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True while the cursor is positioned on a live element.
    pub fn has_next(&self) -> bool {
        self.valid && self.current != NULL_NODE
    }

    /// Key under the cursor, `None` when exhausted or invalidated.
    pub fn key(&self) -> Option<&'a K> {
        if !self.valid {
            return None;
        }
        self.map.nodes.get(self.current).map(|node| &node.key)
    }

    /// Value under the cursor, `None` when exhausted or invalidated.
    pub fn value(&self) -> Option<&'a V> {
        if !self.valid {
            return None;
        }
        self.map.nodes.get(self.current).map(|node| &node.value)
    }

    /// Steps to the next element in traversal order.
    ///
    /// Fails with `IteratorInvalid` after an unrepaired failed seek and with
    /// `IteratorExhausted` when stepping past the end.
    pub fn advance(&mut self) -> MapResult<()> {
        if !self.valid {
            return Err(MapError::IteratorInvalid);
        }
        if self.current == NULL_NODE {
            return Err(MapError::IteratorExhausted);
        }
        self.current = match self.direction {
            Direction::Forward => self.map.successor_of(self.current),
            Direction::Backward => self.map.predecessor_of(self.current),
        };
        Ok(())
    }

    /// Repositions the cursor on `key` via a fresh O(log n) search.
    ///
    /// A miss invalidates the cursor and fails with `KeyNotFound`; a later
    /// `seek`, `seek_first`, or `seek_last` makes it usable again.
    pub fn seek(&mut self, key: &K) -> MapResult<()> {
        let node = self.map.find_node(key);
        if node == NULL_NODE {
            self.current = NULL_NODE;
            self.valid = false;
            return Err(MapError::KeyNotFound);
        }
        self.current = node;
        self.valid = true;
        Ok(())
    }

    /// Repositions to the first element in traversal order: the minimum key
    /// for a forward cursor, the maximum for a backward one.
    pub fn seek_first(&mut self) {
        self.current = match self.direction {
            Direction::Forward => self.map.subtree_min(self.map.root),
            Direction::Backward => self.map.subtree_max(self.map.root),
        };
        self.valid = true;
    }

    /// Repositions to the last element in traversal order, the mirror of
    /// [`seek_first`](Self::seek_first).
    pub fn seek_last(&mut self) {
        self.current = match self.direction {
            Direction::Forward => self.map.subtree_max(self.map.root),
            Direction::Backward => self.map.subtree_min(self.map.root),
        };
        self.valid = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> OrderedMap<i32, i32> {
        let mut map = OrderedMap::new();
        for key in [5, 2, 8, 1, 9, 3, 7, 4, 6] {
            map.insert(key, key * 10);
        }
        map
    }

    #[test]
    fn test_iter_yields_ascending_order() {
        let map = sample_map();
        let keys: Vec<i32> = map.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, (1..=9).collect::<Vec<_>>());

        let values: Vec<i32> = map.values().copied().collect();
        assert_eq!(values, (1..=9).map(|key| key * 10).collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_on_empty_map() {
        let map: OrderedMap<i32, i32> = OrderedMap::new();
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn test_range_bound_combinations() {
        let map = sample_map();
        let collect = |iter: RangeIter<'_, i32, i32>| -> Vec<i32> {
            iter.map(|(key, _)| *key).collect()
        };

        assert_eq!(collect(map.range(3..7)), vec![3, 4, 5, 6]);
        assert_eq!(collect(map.range(3..=7)), vec![3, 4, 5, 6, 7]);
        assert_eq!(collect(map.range(..3)), vec![1, 2]);
        assert_eq!(collect(map.range(7..)), vec![7, 8, 9]);
        assert_eq!(collect(map.range(..)), (1..=9).collect::<Vec<_>>());
        assert_eq!(collect(map.range(10..20)), Vec::<i32>::new());
    }

    #[test]
    fn test_cursor_forward_traversal() {
        let map = sample_map();
        let mut cursor = map.cursor(Direction::Forward);
        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push((*cursor.key().unwrap(), *cursor.value().unwrap()));
            cursor.advance().unwrap();
        }
        assert_eq!(seen, (1..=9).map(|key| (key, key * 10)).collect::<Vec<_>>());
    }

    #[test]
    fn test_cursor_backward_traversal() {
        let map = sample_map();
        let mut cursor = map.cursor(Direction::Backward);
        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(*cursor.key().unwrap());
            cursor.advance().unwrap();
        }
        assert_eq!(seen, (1..=9).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_cursor_on_empty_map_is_exhausted() {
        let map: OrderedMap<i32, i32> = OrderedMap::new();
        let mut cursor = map.cursor(Direction::Forward);
        assert!(!cursor.has_next());
        assert_eq!(cursor.key(), None);
        assert_eq!(cursor.advance(), Err(MapError::IteratorExhausted));
    }

    #[test]
    fn test_cursor_seek_hit_and_miss() {
        let map = sample_map();
        let mut cursor = map.cursor(Direction::Forward);

        cursor.seek(&5).unwrap();
        assert_eq!(cursor.key(), Some(&5));

        assert_eq!(cursor.seek(&99), Err(MapError::KeyNotFound));
        assert!(!cursor.has_next());
        assert_eq!(cursor.key(), None);
        assert_eq!(cursor.advance(), Err(MapError::IteratorInvalid));

        // A successful reposition repairs the cursor.
        cursor.seek_first();
        assert_eq!(cursor.key(), Some(&1));
    }

    #[test]
    fn test_seek_extremes_honor_direction() {
        let map = sample_map();

        let mut forward = map.cursor(Direction::Forward);
        forward.seek_last();
        assert_eq!(forward.key(), Some(&9));
        forward.seek_first();
        assert_eq!(forward.key(), Some(&1));

        let mut backward = map.cursor(Direction::Backward);
        backward.seek_first();
        assert_eq!(backward.key(), Some(&9));
        backward.seek_last();
        assert_eq!(backward.key(), Some(&1));
    }

    #[test]
    fn test_cursor_resume_after_seek() {
        let map = sample_map();
        let mut cursor = map.cursor(Direction::Forward);
        cursor.seek(&7).unwrap();

        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(*cursor.key().unwrap());
            cursor.advance().unwrap();
        }
        assert_eq!(seen, vec![7, 8, 9]);
    }
}
