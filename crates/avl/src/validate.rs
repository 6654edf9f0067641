//! Structural invariant checking.
//!
//! Walks the whole tree and recomputes everything the tree otherwise only
//! stores: key order, heights, balance factors and the node count. Intended
//! for tests and debug assertions; O(n).

use std::cmp;

use thiserror::Error;

use crate::node::Node;
use crate::AvlTree;

/// First invariant violation found by [`AvlTree::check_invariants`].
///
/// Positions are in-order indexes (0 is the smallest key).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A key is not strictly between its ancestors' bounds.
    #[error("key at in-order position {position} breaks search-tree ordering")]
    Unordered { position: usize },

    /// A node's stored height disagrees with its children.
    #[error("node at in-order position {position} stores height {stored}, expected {computed}")]
    HeightMismatch {
        position: usize,
        stored: i32,
        computed: i32,
    },

    /// Child heights differ by more than one.
    #[error("node at in-order position {position} has balance factor {factor}")]
    Unbalanced { position: usize, factor: i32 },

    /// The tree's node count disagrees with the nodes reachable from the root.
    #[error("tree reports {reported} entries but {actual} nodes are reachable")]
    SizeMismatch { reported: usize, actual: usize },
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Verifies ordering, stored heights, balance and size.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] encountered, in in-order
    /// position order.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut position = 0;
        let (_, actual) = walk(self.root.as_deref(), None, None, &mut position)?;
        if actual != self.size {
            return Err(InvariantViolation::SizeMismatch {
                reported: self.size,
                actual,
            });
        }
        Ok(())
    }
}

/// Returns `(height, node count)` of the subtree rooted at `node`.
fn walk<K: Ord, V>(
    node: Option<&Node<K, V>>,
    lower: Option<&K>,
    upper: Option<&K>,
    position: &mut usize,
) -> Result<(i32, usize), InvariantViolation> {
    let Some(node) = node else {
        return Ok((-1, 0));
    };

    let (left_height, left_count) = walk(node.left.as_deref(), lower, Some(&node.key), position)?;

    let here = *position;
    *position += 1;
    let above_lower = lower.map_or(true, |bound| *bound < node.key);
    let below_upper = upper.map_or(true, |bound| node.key < *bound);
    if !above_lower || !below_upper {
        return Err(InvariantViolation::Unordered { position: here });
    }

    let (right_height, right_count) =
        walk(node.right.as_deref(), Some(&node.key), upper, position)?;

    let computed = 1 + cmp::max(left_height, right_height);
    if node.height != computed {
        return Err(InvariantViolation::HeightMismatch {
            position: here,
            stored: node.height,
            computed,
        });
    }

    let factor = left_height - right_height;
    if factor.abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            position: here,
            factor,
        });
    }

    Ok((computed, left_count + right_count + 1))
}
