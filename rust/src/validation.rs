//! Validation and debugging utilities for OrderedMap.
//!
//! The invariant checker verifies the full coloring discipline (black root,
//! no red node with a red parent, equal black-height on every path), strict
//! key ordering, parent-link consistency, and that the recorded length
//! matches both the reachable node count and the arena occupancy.

use std::fmt::Debug;

use crate::types::{Color, NodeId, OrderedMap, NULL_NODE};

impl<K: Ord + Clone, V: Clone> OrderedMap<K, V> {
    // ============================================================================
    // VALIDATION METHODS
    // ============================================================================

    /// Check if the tree maintains all structural invariants.
    /// Returns true if every invariant is satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if self.color_of(self.root) == Color::Red {
            return Err("root is red".to_string());
        }
        if self.root != NULL_NODE && self.parent_of(self.root) != NULL_NODE {
            return Err("root has a parent link".to_string());
        }

        let mut count = 0;
        self.check_subtree(self.root, NULL_NODE, None, None, &mut count)?;

        if count != self.len {
            return Err(format!(
                "length {} does not match {} reachable nodes",
                self.len, count
            ));
        }

        let allocated = self.nodes.allocated_count();
        if allocated != self.len {
            return Err(format!(
                "length {} does not match {} allocated arena slots",
                self.len, allocated
            ));
        }

        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Recursively checks the subtree at `id`, returning its black-height.
    ///
    /// `min`/`max` are the exclusive key bounds inherited from ancestors;
    /// nil subtrees have black-height 1.
    fn check_subtree(
        &self,
        id: NodeId,
        expected_parent: NodeId,
        min: Option<&K>,
        max: Option<&K>,
        count: &mut usize,
    ) -> Result<usize, String> {
        let node = match self.nodes.get(id) {
            Some(node) => node,
            None if id == NULL_NODE => return Ok(1),
            None => return Err(format!("node {} is missing from the arena", id)),
        };

        if node.parent != expected_parent {
            return Err(format!(
                "node {} has parent {} but is linked under {}",
                id, node.parent, expected_parent
            ));
        }

        if let Some(min) = min {
            if node.key <= *min {
                return Err(format!("node {} violates the lower key bound", id));
            }
        }
        if let Some(max) = max {
            if node.key >= *max {
                return Err(format!("node {} violates the upper key bound", id));
            }
        }

        if node.color == Color::Red
            && (self.color_of(node.left) == Color::Red
                || self.color_of(node.right) == Color::Red)
        {
            return Err(format!("red node {} has a red child", id));
        }

        *count += 1;

        let left_height = self.check_subtree(node.left, id, min, Some(&node.key), count)?;
        let right_height = self.check_subtree(node.right, id, Some(&node.key), max, count)?;

        if left_height != right_height {
            return Err(format!(
                "node {} has unequal black-heights {} and {}",
                id, left_height, right_height
            ));
        }

        Ok(left_height + usize::from(node.color == Color::Black))
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Returns all key-value pairs as a vector (for testing/debugging).
    pub fn slice(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Prints the tree shape with colors for debugging.
    pub fn print_structure(&self)
    where
        K: Debug,
        V: Debug,
    {
        println!("OrderedMap (len: {}):", self.len);
        if self.root == NULL_NODE {
            println!("  (empty)");
            return;
        }
        self.print_node(self.root, 0);
    }

    fn print_node(&self, id: NodeId, depth: usize)
    where
        K: Debug,
        V: Debug,
    {
        let indent = "  ".repeat(depth + 1);
        match self.nodes.get(id) {
            Some(node) => {
                let color = match node.color {
                    Color::Red => "red",
                    Color::Black => "black",
                };
                println!(
                    "{}[id={}, {}] {:?} -> {:?}",
                    indent, id, color, node.key, node.value
                );
                if node.left != NULL_NODE {
                    self.print_node(node.left, depth + 1);
                }
                if node.right != NULL_NODE {
                    self.print_node(node.right, depth + 1);
                }
            }
            None => println!("{}[id={}] <missing>", indent, id),
        }
    }
}
