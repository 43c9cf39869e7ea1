//! Insert operations for OrderedMap.
//!
//! Key-value insertion and its balancing fix-up, plus the conditional write
//! variants (`put_if_absent`, `replace`, `replace_if_present`) and `merge`.

use std::cmp::Ordering;
use std::mem;

use crate::error::{MapError, ModifyResult};
use crate::types::{Color, Node, NodeId, OrderedMap, NULL_NODE};

impl<K: Ord + Clone, V: Clone> OrderedMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the key was already present the value is replaced in place and the
    /// old value returned; the tree shape and length are unchanged. A new
    /// key is linked as a red leaf at its comparator-determined position and
    /// the balancing fix-up runs afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(5, 50), None);
    /// assert_eq!(map.insert(5, 55), Some(50));
    /// assert_eq!(map.get(&5), Some(&55));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let started = self.begin_op();
        let old_value = self.insert_inner(key, value);
        self.finish_insert(started);
        old_value
    }

    /// Fallible insert that reports node ID space exhaustion as
    /// `CapacityExceeded` instead of panicking.
    pub fn try_insert(&mut self, key: K, value: V) -> ModifyResult<Option<V>> {
        // Updates reuse the existing node, so only a fresh key needs a slot.
        if !self.nodes.can_allocate() && !self.contains_key(&key) {
            return Err(MapError::capacity_exceeded(
                "node arena",
                "u32 id space exhausted",
            ));
        }
        Ok(self.insert(key, value))
    }

    fn insert_inner(&mut self, key: K, value: V) -> Option<V> {
        // Comparator-driven descent to the attachment leaf, updating in
        // place when the key is already present.
        let mut parent = NULL_NODE;
        let mut current = self.root;
        while current != NULL_NODE {
            let ordering = match self.nodes.get(current) {
                Some(node) => key.cmp(&node.key),
                None => break,
            };
            if ordering == Ordering::Equal {
                return self
                    .nodes
                    .get_mut(current)
                    .map(|node| mem::replace(&mut node.value, value));
            }
            parent = current;
            current = if ordering == Ordering::Less {
                self.left_of(current)
            } else {
                self.right_of(current)
            };
        }

        let link_left = match self.nodes.get(parent) {
            Some(node) => key < node.key,
            None => false,
        };
        let id = self.nodes.allocate(Node::new(key, value, parent));

        if parent == NULL_NODE {
            self.root = id;
        } else if link_left {
            self.set_left(parent, id);
        } else {
            self.set_right(parent, id);
        }

        self.insert_fixup(id);
        self.len += 1;
        None
    }

    /// Restores the coloring invariants after linking the red node `z`.
    ///
    /// Walks upward while the parent is red: a red uncle means recolor and
    /// continue from the grandparent; a black uncle is resolved with one or
    /// two rotations. The root is forced black at the end.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.color_of(self.parent_of(z)) == Color::Red {
            let parent = self.parent_of(z);
            let grandparent = self.parent_of(parent);

            if parent == self.left_of(grandparent) {
                let uncle = self.right_of(grandparent);
                if self.color_of(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if z == self.right_of(parent) {
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.parent_of(z);
                    let grandparent = self.parent_of(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left_of(grandparent);
                if self.color_of(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if z == self.left_of(parent) {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.parent_of(z);
                    let grandparent = self.parent_of(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    // ============================================================================
    // CONDITIONAL WRITES
    // ============================================================================

    /// Inserts only if the key is absent. Returns true when the pair was
    /// inserted; an existing key is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 10);
    /// assert!(!map.put_if_absent(1, 999));
    /// assert_eq!(map.get(&1), Some(&10));
    /// assert!(map.put_if_absent(2, 20));
    /// ```
    pub fn put_if_absent(&mut self, key: K, value: V) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        self.insert(key, value);
        true
    }

    /// Updates the value for an existing key, returning the old value.
    /// Fails with `KeyNotFound` when the key is absent; the map is unchanged.
    pub fn replace(&mut self, key: &K, value: V) -> ModifyResult<V> {
        let started = self.begin_op();
        let node = self.find_node(key);
        match self
            .nodes
            .get_mut(node)
            .map(|node| mem::replace(&mut node.value, value))
        {
            Some(old_value) => {
                self.finish_insert(started);
                Ok(old_value)
            }
            None => Err(MapError::KeyNotFound),
        }
    }

    /// Updates the value for an existing key; an absent key is a silent
    /// no-op. Returns the old value when a replacement happened.
    pub fn replace_if_present(&mut self, key: &K, value: V) -> Option<V> {
        self.replace(key, value).ok()
    }

    /// Inserts every key-value pair of `other` into this map, cloning the
    /// payloads. `other` is unmodified; on key collisions the incoming value
    /// wins, matching repeated `insert` calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut dest = OrderedMap::new();
    /// dest.insert(1, "one");
    /// let mut src = OrderedMap::new();
    /// src.insert(2, "two");
    ///
    /// dest.merge(&src);
    /// assert_eq!(dest.len(), 2);
    /// assert_eq!(src.len(), 1);
    /// ```
    pub fn merge(&mut self, other: &OrderedMap<K, V>) {
        for (key, value) in other.iter() {
            self.insert(key.clone(), value.clone());
        }
    }
}
