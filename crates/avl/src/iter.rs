//! In-order traversal.
//!
//! Every iterator here is single-pass: take a fresh one from the tree for each
//! consumption. They walk an explicit stack, so no recursion is involved.

use std::iter::FusedIterator;

use crate::node::Node;
use crate::AvlTree;

/// Walks nodes in ascending key order.
struct Nodes<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Nodes<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut nodes = Self {
            stack: Vec::new(),
            remaining: len,
        };
        nodes.descend_left(root);
        nodes
    }

    fn descend_left(&mut self, mut cursor: Option<&'a Node<K, V>>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Nodes<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// `(key, value)` pairs in ascending key order.
pub struct Iter<'a, K, V> {
    nodes: Nodes<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| (&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

/// Keys in ascending order.
pub struct Keys<'a, K, V> {
    nodes: Nodes<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

/// Values in ascending key order.
pub struct Values<'a, K, V> {
    nodes: Nodes<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

/// Stored node heights in ascending key order.
pub struct Heights<'a, K, V> {
    nodes: Nodes<'a, K, V>,
}

impl<K, V> Iterator for Heights<'_, K, V> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.height)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> ExactSizeIterator for Heights<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Heights<'_, K, V> {}

impl<K, V> AvlTree<K, V> {
    fn nodes(&self) -> Nodes<'_, K, V> {
        Nodes::new(self.root.as_deref(), self.size)
    }

    /// Iterates over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { nodes: self.nodes() }
    }

    /// Iterates over keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { nodes: self.nodes() }
    }

    /// Iterates over values, ordered by their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { nodes: self.nodes() }
    }

    /// Iterates over each node's stored height, ordered by key. Mostly useful
    /// for checking the tree's shape.
    pub fn heights(&self) -> Heights<'_, K, V> {
        Heights { nodes: self.nodes() }
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
