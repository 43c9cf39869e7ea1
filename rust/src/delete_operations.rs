//! Delete operations for OrderedMap.
//!
//! Key removal with the black-height fix-up, plus `remove_range` and the
//! checked `try_remove` variant.

use std::ops::RangeBounds;

use crate::error::{MapError, ModifyResult};
use crate::types::{Color, NodeId, OrderedMap, NULL_NODE};

impl<K: Ord + Clone, V: Clone> OrderedMap<K, V> {
    /// Removes a key from the map, returning its value.
    ///
    /// `None` is returned when the key is absent and the map is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let started = self.begin_op();
        let target = self.find_node(key);
        if target == NULL_NODE {
            return None;
        }
        let value = self.unlink_node(target);
        self.finish_delete(started);
        value
    }

    /// Removes a key, failing with `KeyNotFound` when it is absent.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<V> {
        self.remove(key).ok_or(MapError::KeyNotFound)
    }

    /// Removes every key inside `range`, returning how many were removed.
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
    /// assert_eq!(map.remove_range(3..=5), 3);
    /// assert_eq!(map.len(), 7);
    /// assert!(!map.contains_key(&4));
    /// ```
    pub fn remove_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<K>,
    {
        let doomed: Vec<K> = self.range(range).map(|(key, _)| key.clone()).collect();
        for key in &doomed {
            self.remove(key);
        }
        doomed.len()
    }

    /// Unlinks `z` from the tree, rebalances, and returns its value.
    ///
    /// A node with two children is replaced by its in-order successor via
    /// transplant; the successor inherits the target's color so only the
    /// spliced-out position can lose a black node. The fix-up runs from that
    /// position whenever the removed color was black.
    pub(crate) fn unlink_node(&mut self, z: NodeId) -> Option<V> {
        let z_left = self.left_of(z);
        let z_right = self.right_of(z);

        let removed_color;
        // The replacement may be nil, so its parent is tracked separately
        // for the fix-up walk.
        let x: NodeId;
        let x_parent: NodeId;

        if z_left == NULL_NODE {
            removed_color = self.color_of(z);
            x = z_right;
            x_parent = self.parent_of(z);
            self.transplant(z, z_right);
        } else if z_right == NULL_NODE {
            removed_color = self.color_of(z);
            x = z_left;
            x_parent = self.parent_of(z);
            self.transplant(z, z_left);
        } else {
            let successor = self.subtree_min(z_right);
            removed_color = self.color_of(successor);
            x = self.right_of(successor);

            if self.parent_of(successor) == z {
                x_parent = successor;
                self.set_parent(x, successor);
            } else {
                x_parent = self.parent_of(successor);
                self.transplant(successor, x);
                self.set_right(successor, z_right);
                self.set_parent(z_right, successor);
            }

            self.transplant(z, successor);
            self.set_left(successor, z_left);
            self.set_parent(z_left, successor);
            let z_color = self.color_of(z);
            self.set_color(successor, z_color);
        }

        if removed_color == Color::Black {
            self.delete_fixup(x, x_parent);
        }

        self.len -= 1;
        self.nodes.deallocate(z).map(|node| node.value)
    }

    /// Restores the black-height invariant after a black node left the tree
    /// at position `x` (possibly nil) under `parent`.
    ///
    /// The classic four-case repair per side: a red sibling is rotated into
    /// a black one; a black sibling with two black children pushes the
    /// deficit upward; a near-side red sibling child is rotated to the far
    /// side; a far-side red sibling child absorbs the deficit with a final
    /// rotation. Terminates at the root or at a red node, which is
    /// blackened.
    fn delete_fixup(&mut self, mut x: NodeId, mut parent: NodeId) {
        while x != self.root && self.color_of(x) == Color::Black {
            if x == self.left_of(parent) {
                let mut sibling = self.right_of(parent);
                if self.color_of(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sibling = self.right_of(parent);
                }
                if self.color_of(self.left_of(sibling)) == Color::Black
                    && self.color_of(self.right_of(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    x = parent;
                    parent = self.parent_of(x);
                } else {
                    if self.color_of(self.right_of(sibling)) == Color::Black {
                        let near = self.left_of(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = self.right_of(parent);
                    }
                    let parent_color = self.color_of(parent);
                    self.set_color(sibling, parent_color);
                    self.set_color(parent, Color::Black);
                    let far = self.right_of(sibling);
                    self.set_color(far, Color::Black);
                    self.rotate_left(parent);
                    x = self.root;
                }
            } else {
                let mut sibling = self.left_of(parent);
                if self.color_of(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sibling = self.left_of(parent);
                }
                if self.color_of(self.right_of(sibling)) == Color::Black
                    && self.color_of(self.left_of(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    x = parent;
                    parent = self.parent_of(x);
                } else {
                    if self.color_of(self.left_of(sibling)) == Color::Black {
                        let near = self.right_of(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = self.left_of(parent);
                    }
                    let parent_color = self.color_of(parent);
                    self.set_color(sibling, parent_color);
                    self.set_color(parent, Color::Black);
                    let far = self.left_of(sibling);
                    self.set_color(far, Color::Black);
                    self.rotate_right(parent);
                    x = self.root;
                }
            }
        }
        self.set_color(x, Color::Black);
    }
}
