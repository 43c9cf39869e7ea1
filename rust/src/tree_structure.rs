//! Tree structure management for OrderedMap.
//!
//! This module contains the structural primitives every mutating operation
//! is built from: nil-tolerant link accessors, left/right rotation,
//! transplant, extreme-node descent, successor/predecessor walks, and the
//! recursive height computation, plus the size and clear operations.

use std::cmp::Ordering;
use std::ops::Bound;

use crate::types::{Color, NodeId, OrderedMap, NULL_NODE};

impl<K: Ord + Clone, V: Clone> OrderedMap<K, V> {
    // ============================================================================
    // SIZE AND CLEAR
    // ============================================================================

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements. The arena's slot storage is released, but the
    /// map remains usable and its statistics are retained.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NULL_NODE;
        self.len = 0;
    }

    /// Longest root-to-leaf path, counting nodes. An empty map has height 0.
    pub fn height(&self) -> usize {
        self.height_below(self.root)
    }

    pub(crate) fn height_below(&self, id: NodeId) -> usize {
        match self.nodes.get(id) {
            Some(node) => 1 + self.height_below(node.left).max(self.height_below(node.right)),
            None => 0,
        }
    }

    // ============================================================================
    // NIL-TOLERANT LINK ACCESSORS
    // ============================================================================
    //
    // Each accessor treats NULL_NODE (and any dead slot) as nil: reads yield
    // NULL_NODE or black, writes are no-ops. This mirrors the shared nil
    // sentinel the balancing algorithm is written against and keeps the
    // fix-up loops free of per-step unwrapping.

    #[inline]
    pub(crate) fn left_of(&self, id: NodeId) -> NodeId {
        self.nodes.get(id).map_or(NULL_NODE, |node| node.left)
    }

    #[inline]
    pub(crate) fn right_of(&self, id: NodeId) -> NodeId {
        self.nodes.get(id).map_or(NULL_NODE, |node| node.right)
    }

    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.nodes.get(id).map_or(NULL_NODE, |node| node.parent)
    }

    #[inline]
    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        self.nodes.get(id).map_or(Color::Black, |node| node.color)
    }

    #[inline]
    pub(crate) fn set_left(&mut self, id: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.left = child;
        }
    }

    #[inline]
    pub(crate) fn set_right(&mut self, id: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.right = child;
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = parent;
        }
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.color = color;
        }
    }

    // ============================================================================
    // ROTATIONS AND TRANSPLANT
    // ============================================================================

    /// Left rotation around `x`: `x`'s right child takes `x`'s place and `x`
    /// becomes its left child. In-order sequence is preserved; the root
    /// reference is updated when the rotation happens at the top.
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        let y = self.right_of(x);
        let y_left = self.left_of(y);

        self.set_right(x, y_left);
        self.set_parent(y_left, x);

        let x_parent = self.parent_of(x);
        self.set_parent(y, x_parent);

        if x_parent == NULL_NODE {
            self.root = y;
        } else if self.left_of(x_parent) == x {
            self.set_left(x_parent, y);
        } else {
            self.set_right(x_parent, y);
        }

        self.set_left(y, x);
        self.set_parent(x, y);
    }

    /// Mirror image of [`rotate_left`](Self::rotate_left).
    pub(crate) fn rotate_right(&mut self, y: NodeId) {
        let x = self.left_of(y);
        let x_right = self.right_of(x);

        self.set_left(y, x_right);
        self.set_parent(x_right, y);

        let y_parent = self.parent_of(y);
        self.set_parent(x, y_parent);

        if y_parent == NULL_NODE {
            self.root = x;
        } else if self.right_of(y_parent) == y {
            self.set_right(y_parent, x);
        } else {
            self.set_left(y_parent, x);
        }

        self.set_right(x, y);
        self.set_parent(y, x);
    }

    /// Replaces the subtree rooted at `u` with the subtree rooted at `v` in
    /// `u`'s parent. `v` may be nil.
    pub(crate) fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.parent_of(u);
        if parent == NULL_NODE {
            self.root = v;
        } else if self.left_of(parent) == u {
            self.set_left(parent, v);
        } else {
            self.set_right(parent, v);
        }
        self.set_parent(v, parent);
    }

    // ============================================================================
    // NAVIGATION
    // ============================================================================

    /// Leftmost node of the subtree rooted at `id`, or nil for a nil subtree.
    pub(crate) fn subtree_min(&self, id: NodeId) -> NodeId {
        let mut current = id;
        loop {
            let left = self.left_of(current);
            if left == NULL_NODE {
                return current;
            }
            current = left;
        }
    }

    /// Rightmost node of the subtree rooted at `id`, or nil for a nil subtree.
    pub(crate) fn subtree_max(&self, id: NodeId) -> NodeId {
        let mut current = id;
        loop {
            let right = self.right_of(current);
            if right == NULL_NODE {
                return current;
            }
            current = right;
        }
    }

    /// In-order successor: the extreme of the right subtree if one exists,
    /// otherwise the first ancestor reached from a left child.
    pub(crate) fn successor_of(&self, id: NodeId) -> NodeId {
        let right = self.right_of(id);
        if right != NULL_NODE {
            return self.subtree_min(right);
        }

        let mut current = id;
        let mut parent = self.parent_of(current);
        while parent != NULL_NODE && current == self.right_of(parent) {
            current = parent;
            parent = self.parent_of(parent);
        }
        parent
    }

    /// In-order predecessor, the mirror of [`successor_of`](Self::successor_of).
    pub(crate) fn predecessor_of(&self, id: NodeId) -> NodeId {
        let left = self.left_of(id);
        if left != NULL_NODE {
            return self.subtree_max(left);
        }

        let mut current = id;
        let mut parent = self.parent_of(current);
        while parent != NULL_NODE && current == self.left_of(parent) {
            current = parent;
            parent = self.parent_of(parent);
        }
        parent
    }

    /// Comparator-driven descent from the root; nil when the key is absent.
    pub(crate) fn find_node(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while let Some(node) = self.nodes.get(current) {
            match key.cmp(&node.key) {
                Ordering::Equal => return current,
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        NULL_NODE
    }

    /// First node in ascending order whose key satisfies the start bound,
    /// or nil when no key does.
    pub(crate) fn find_lower_bound(&self, bound: Bound<&K>) -> NodeId {
        let (key, inclusive) = match bound {
            Bound::Unbounded => return self.subtree_min(self.root),
            Bound::Included(key) => (key, true),
            Bound::Excluded(key) => (key, false),
        };

        let mut current = self.root;
        let mut candidate = NULL_NODE;
        while let Some(node) = self.nodes.get(current) {
            let in_range = match node.key.cmp(key) {
                Ordering::Greater => true,
                Ordering::Equal => inclusive,
                Ordering::Less => false,
            };
            if in_range {
                candidate = current;
                current = node.left;
            } else {
                current = node.right;
            }
        }
        candidate
    }

    /// True if `key` lies beyond the end bound of a forward walk.
    pub(crate) fn past_end_bound(key: &K, bound: Bound<&K>) -> bool {
        match bound {
            Bound::Unbounded => false,
            Bound::Included(end) => key > end,
            Bound::Excluded(end) => key >= end,
        }
    }
}
