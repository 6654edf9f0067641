//! Tree node and the child-slot helpers shared by every operation.

use std::cmp;

/// An owned child slot. `None` is an absent child.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Which child slot of a node a descent went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single tree node.
///
/// Each node exclusively owns its two subtrees. There is no parent link;
/// operations that need the ancestor chain build it on a transient stack.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// 0 for a leaf. An absent child counts as -1.
    pub(crate) height: i32,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Allocates a detached leaf.
    pub(crate) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            height: 0,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left_height(&self) -> i32 {
        height_of(&self.left)
    }

    pub(crate) fn right_height(&self) -> i32 {
        height_of(&self.right)
    }

    /// `height(left) - height(right)`.
    pub(crate) fn balance_factor(&self) -> i32 {
        self.left_height() - self.right_height()
    }

    /// Recomputes the stored height from the children's stored heights.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + cmp::max(self.left_height(), self.right_height());
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<K, V> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Height of a possibly absent subtree.
pub(crate) fn height_of<K, V>(link: &Link<K, V>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

/// Frees a subtree, children before the node that owns them.
pub(crate) fn teardown<K, V>(link: Link<K, V>) {
    if let Some(mut node) = link {
        teardown(node.left.take());
        teardown(node.right.take());
    }
}
