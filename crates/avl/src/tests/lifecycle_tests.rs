use std::cell::Cell;
use std::rc::Rc;

use super::helpers::*;
use crate::AvlTree;

/// Counts how many times values are dropped.
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn clear_empties_tree() {
    let mut tree = tree_from(&[1, 2, 3, 4, 5]);
    tree.clear();

    assert_eq!(tree.size(), 0);
    assert_eq!(tree.height(), -1);
    assert!(tree.is_empty());
    for k in 1..=5 {
        assert_eq!(tree.search(&k), None);
    }
    assert_eq!(tree.rotation_stats().total(), 0);
}

#[test]
fn clear_is_idempotent() {
    let mut tree = tree_from(&[1, 2]);
    tree.clear();
    tree.clear();
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn tree_is_usable_after_clear() {
    let mut tree = tree_from(&[1, 2, 3]);
    tree.clear();
    tree.insert(9, 90);
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.search(&9), Some(&90));
}

#[test]
fn clear_frees_every_value_once() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = AvlTree::new();
    for k in 0..100 {
        tree.insert(k, DropCounter(drops.clone()));
    }
    assert_eq!(drops.get(), 0);

    tree.clear();
    assert_eq!(drops.get(), 100);
}

#[test]
fn drop_frees_every_value_once() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut tree = AvlTree::new();
        for k in 0..64 {
            tree.insert(k, DropCounter(drops.clone()));
        }
    }
    assert_eq!(drops.get(), 64);
}

#[test]
fn duplicate_insert_drops_rejected_value() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = AvlTree::new();
    tree.insert(1, DropCounter(drops.clone()));
    tree.insert(1, DropCounter(drops.clone()));

    assert_eq!(drops.get(), 1);
    assert_eq!(tree.size(), 1);
}

// -------------------- Copy / assignment --------------------

#[test]
fn clone_of_empty_is_empty() {
    let tree: AvlTree<i32, i32> = AvlTree::new();
    let copy = tree.clone();
    assert_eq!(copy.size(), 0);
    assert_eq!(copy.height(), -1);
}

#[test]
fn clone_has_same_entries() {
    let tree = tree_from(&[50, 20, 80, 10, 30, 70, 90, 60]);
    let copy = tree.clone();

    assert_eq!(copy.size(), tree.size());
    assert_eq!(
        copy.iter().collect::<Vec<_>>(),
        tree.iter().collect::<Vec<_>>()
    );
    assert_eq!(copy.check_invariants(), Ok(()));
}

#[test]
fn mutating_clone_leaves_source_untouched() {
    let mut tree = tree_from(&[1, 2, 3]);
    let mut copy = tree.clone();

    *copy.search_mut(&2).unwrap() = -2;
    copy.insert(4, 40);
    assert_eq!(tree.search(&2), Some(&20));
    assert_eq!(tree.search(&4), None);

    *tree.search_mut(&3).unwrap() = -3;
    assert_eq!(copy.search(&3), Some(&30));
}

#[test]
fn clone_from_replaces_destination_content() {
    let source = tree_from(&[5, 6, 7]);
    let mut dest = tree_from(&[100, 200, 300, 400]);

    dest.clone_from(&source);

    assert_eq!(dest.size(), 3);
    assert_eq!(dest.keys().copied().collect::<Vec<_>>(), vec![5, 6, 7]);
    assert_eq!(dest.search(&100), None);
    assert_eq!(dest.check_invariants(), Ok(()));
}

#[test]
fn clone_from_empty_source_empties_destination() {
    let source: AvlTree<i32, i32> = AvlTree::new();
    let mut dest = tree_from(&[1, 2, 3]);
    dest.clone_from(&source);
    assert!(dest.is_empty());
    assert_eq!(dest.size(), 0);
}

#[test]
fn debug_renders_as_ordered_map() {
    let tree = tree_from(&[2, 1, 3]);
    assert_eq!(format!("{:?}", tree), "{1: 10, 2: 20, 3: 30}");
}
