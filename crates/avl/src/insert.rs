//! Insertion engine.
//!
//! The descent detaches each visited node from its parent and pushes it on an
//! explicit ancestor stack together with the side taken. Unwinding the stack
//! re-attaches every subtree, refreshing heights and handing the lowest
//! unbalanced ancestor to the rotation engine.

use std::cmp::Ordering;

use crate::node::{Node, Side};
use crate::rotate;
use crate::AvlTree;

impl<K: Ord, V> AvlTree<K, V> {
    /// Inserts `key` with `value`.
    ///
    /// If `key` is already present nothing changes: the stored value is kept
    /// and no node is allocated.
    pub fn insert(&mut self, key: K, value: V) {
        let mut ancestors: Vec<(Box<Node<K, V>>, Side)> = Vec::new();
        let mut cursor = self.root.take();

        let (mut subtree, inserted) = loop {
            let Some(mut node) = cursor else {
                self.size += 1;
                break (Node::leaf(key, value), true);
            };
            let side = match key.cmp(&node.key) {
                Ordering::Equal => break (node, false),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            cursor = node.child_mut(side).take();
            ancestors.push((node, side));
        };

        let mut rotated = false;
        while let Some((mut parent, side)) = ancestors.pop() {
            *parent.child_mut(side) = Some(subtree);
            if inserted {
                parent.update_height();
                if parent.balance_factor().abs() > 1 {
                    debug_assert!(!rotated, "second rebalance during one insertion");
                    let (root, case) = rotate::rotate_to_fix(parent);
                    self.rotations.record(case);
                    rotated = true;
                    parent = root;
                }
            }
            subtree = parent;
        }
        self.root = Some(subtree);
    }
}
