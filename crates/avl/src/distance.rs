//! Structural distance between two keys.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::node::Node;
use crate::AvlTree;

impl<K: Ord, V> AvlTree<K, V> {
    /// Number of edges on the path between the nodes holding `k1` and `k2`.
    ///
    /// Returns `None` if either key is absent and `Some(0)` when both keys are
    /// equal. The result is symmetric in its arguments.
    ///
    /// The path is found by locating the split node: starting again from the
    /// root, the first node that holds one of the keys or that the two keys
    /// fall on opposite sides of. The answer is the sum of the descents from
    /// the split node to each key.
    pub fn distance<Q>(&self, k1: &Q, k2: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains_key(k1) || !self.contains_key(k2) {
            return None;
        }
        if k1 == k2 {
            return Some(0);
        }

        let root = self.root.as_deref()?;
        let split = split_node(root, k1, k2);
        Some(edges_to(split, k1)? + edges_to(split, k2)?)
    }
}

fn split_node<'a, K, V, Q>(root: &'a Node<K, V>, k1: &Q, k2: &Q) -> &'a Node<K, V>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let root_key = root.key.borrow();
    if k1 == root_key || k2 == root_key {
        return root;
    }

    let mut cursor = root;
    loop {
        let key = cursor.key.borrow();
        let next = match (k1.cmp(key), k2.cmp(key)) {
            (Ordering::Less, Ordering::Less) => cursor.left.as_deref(),
            (Ordering::Greater, Ordering::Greater) => cursor.right.as_deref(),
            _ => return cursor,
        };
        match next {
            Some(node) => cursor = node,
            None => return cursor,
        }
    }
}

/// Edges walked from `from` down to the node holding `key`, or `None` if the
/// key is not below `from`.
fn edges_to<K, V, Q>(from: &Node<K, V>, key: &Q) -> Option<usize>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut cursor = from;
    let mut edges = 0;
    loop {
        cursor = match key.cmp(cursor.key.borrow()) {
            Ordering::Equal => return Some(edges),
            Ordering::Less => cursor.left.as_deref()?,
            Ordering::Greater => cursor.right.as_deref()?,
        };
        edges += 1;
    }
}
