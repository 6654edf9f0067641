//! # AVL - Height-Balanced Ordered Map
//!
//! An ordered key-value map backed by an AVL tree. Every completed operation
//! leaves the tree satisfying:
//!
//! - **Ordering**: keys in a left subtree < node key < keys in the right subtree.
//! - **Heights**: `height(n) = 1 + max(height(left), height(right))`, a leaf
//!   has height 0 and an absent child counts as -1.
//! - **Balance**: child heights of every node differ by at most one.
//!
//! Keys are unique and immutable once inserted; inserting an existing key is a
//! silent no-op. There is no removal: the tree only grows until it is cleared
//! or dropped.
//!
//! ## Module Responsibilities
//!
//! | Module       | Purpose                                                  |
//! |--------------|----------------------------------------------------------|
//! | `lib.rs`     | `AvlTree`, lifecycle (`clear`, `Clone`, `Drop`), accessors |
//! | `search`     | `search()`, `search_mut()`, `update()`, `contains_key()`  |
//! | `insert`     | descent with an explicit ancestor stack, height refresh  |
//! | `rotate`     | single rotations and the four-case dispatcher            |
//! | `distance`   | edge count between two keys via their split node         |
//! | `iter`       | in-order `iter()`, `keys()`, `values()`, `heights()`     |
//! | `validate`   | full invariant check                                     |
//!
//! ## Example
//!
//! ```rust
//! use avl::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key, key * 100);
//! }
//!
//! assert_eq!(tree.search(&20), Some(&2000));
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
//! assert_eq!(tree.distance(&10, &30), Some(2));
//! ```

mod distance;
mod insert;
mod iter;
mod node;
mod rotate;
mod search;
mod validate;

use std::fmt;

use node::{teardown, Link};

pub use iter::{Heights, Iter, Keys, Values};
pub use rotate::{Rotation, RotationStats};
pub use validate::InvariantViolation;

/// A height-balanced binary search tree mapping `K` to `V`.
///
/// Nodes are owned through `Box`ed child slots; the tree stores no parent
/// links. Lookups, insertion and [`distance`](AvlTree::distance) are
/// O(log n).
pub struct AvlTree<K, V> {
    pub(crate) root: Link<K, V>,
    /// Number of distinct keys inserted since creation or the last `clear`.
    pub(crate) size: usize,
    pub(crate) rotations: RotationStats,
}

impl<K, V> AvlTree<K, V> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
            rotations: RotationStats::default(),
        }
    }

    /// Number of keys in the tree. O(1).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`](AvlTree::size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, or -1 for an empty tree. O(1).
    #[must_use]
    pub fn height(&self) -> i32 {
        node::height_of(&self.root)
    }

    /// Rebalancing cases applied since creation or the last `clear`.
    #[must_use]
    pub fn rotation_stats(&self) -> RotationStats {
        self.rotations
    }

    /// Frees every node and returns to the empty state. Idempotent.
    pub fn clear(&mut self) {
        teardown(self.root.take());
        self.size = 0;
        self.rotations = RotationStats::default();
    }
}

impl<K: Ord + Clone, V: Clone> AvlTree<K, V> {
    /// Re-inserts every entry below `node`, visiting the node before its left
    /// and then its right subtree.
    fn insert_preorder(&mut self, node: Option<&node::Node<K, V>>) {
        if let Some(node) = node {
            self.insert(node.key.clone(), node.value.clone());
            self.insert_preorder(node.left.as_deref());
            self.insert_preorder(node.right.as_deref());
        }
    }
}

impl<K, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an independent node set by re-inserting the source's entries in
/// preorder. The copy holds the same entries; its shape may differ.
impl<K: Ord + Clone, V: Clone> Clone for AvlTree<K, V> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.insert_preorder(self.root.as_deref());
        copy
    }

    /// Clears `self` completely before copying from `source`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.insert_preorder(source.root.as_deref());
    }
}

impl<K, V> Drop for AvlTree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTree<K, V> {
    /// Inserts pairs in iteration order; later duplicates are ignored.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests;
