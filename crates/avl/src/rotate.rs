//! Rotation engine: the two primitive rotations and the four-case dispatcher.
//!
//! Rotations work on owned subtrees. The caller hands over the pivot by value
//! and gets back whichever node now roots that subtree; re-linking the result
//! into the pivot's former parent is the caller's job (the insertion engine
//! does it while unwinding its ancestor stack, which also refreshes the
//! parent's height). Nodes are only relinked, never copied or reallocated.

use crate::node::Node;

/// The four AVL imbalance cases, named after the path from the pivot to the
/// grandchild subtree that grew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Single right rotation at the pivot.
    LeftLeft,
    /// Left rotation at the pivot's left child, then right rotation at the pivot.
    LeftRight,
    /// Single left rotation at the pivot.
    RightRight,
    /// Right rotation at the pivot's right child, then left rotation at the pivot.
    RightLeft,
}

/// Running count of rebalancing cases applied by a tree since it was created
/// or last cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationStats {
    pub left_left: u64,
    pub left_right: u64,
    pub right_right: u64,
    pub right_left: u64,
}

impl RotationStats {
    /// Number of rebalancing fixes (a double rotation counts once).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.left_left + self.left_right + self.right_right + self.right_left
    }

    pub(crate) fn record(&mut self, case: Rotation) {
        match case {
            Rotation::LeftLeft => self.left_left += 1,
            Rotation::LeftRight => self.left_right += 1,
            Rotation::RightRight => self.right_right += 1,
            Rotation::RightLeft => self.right_left += 1,
        }
    }
}

/// Single right rotation around `pivot`; its left child becomes the subtree
/// root and `pivot` becomes that child's right child.
///
/// # Panics
///
/// Panics if `pivot` has no left child.
pub(crate) fn rotate_right<K, V>(mut pivot: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut left = pivot
        .left
        .take()
        .expect("right rotation requires a left child");
    pivot.left = left.right.take();
    pivot.update_height();
    left.right = Some(pivot);
    left.update_height();
    left
}

/// Mirror of [`rotate_right`].
///
/// # Panics
///
/// Panics if `pivot` has no right child.
pub(crate) fn rotate_left<K, V>(mut pivot: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut right = pivot
        .right
        .take()
        .expect("left rotation requires a right child");
    pivot.right = right.left.take();
    pivot.update_height();
    right.left = Some(pivot);
    right.update_height();
    right
}

/// Restores the balance invariant at an unbalanced `pivot`, returning the new
/// subtree root and the case that was applied.
///
/// Ties on the heavy child's grandchildren resolve to the double rotation.
///
/// # Panics
///
/// Panics if `pivot` is not actually unbalanced.
pub(crate) fn rotate_to_fix<K, V>(mut pivot: Box<Node<K, V>>) -> (Box<Node<K, V>>, Rotation) {
    let hl = pivot.left_height();
    let hr = pivot.right_height();
    assert!(
        (hl - hr).abs() > 1,
        "rotate_to_fix on a balanced node (left {hl}, right {hr})"
    );

    if hl > hr {
        let left = pivot
            .left
            .take()
            .expect("left-leaning pivot has a left child");
        if left.left_height() > left.right_height() {
            pivot.left = Some(left);
            (rotate_right(pivot), Rotation::LeftLeft)
        } else {
            pivot.left = Some(rotate_left(left));
            (rotate_right(pivot), Rotation::LeftRight)
        }
    } else {
        let right = pivot
            .right
            .take()
            .expect("right-leaning pivot has a right child");
        if right.left_height() < right.right_height() {
            pivot.right = Some(right);
            (rotate_left(pivot), Rotation::RightRight)
        } else {
            pivot.right = Some(rotate_right(right));
            (rotate_left(pivot), Rotation::RightLeft)
        }
    }
}
