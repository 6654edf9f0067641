use super::helpers::*;
use crate::AvlTree;

#[test]
fn keys_are_ascending() {
    let tree = tree_from(&[50, 10, 40, 20, 30]);
    assert_eq!(
        tree.keys().copied().collect::<Vec<_>>(),
        vec![10, 20, 30, 40, 50]
    );
}

#[test]
fn values_follow_key_order() {
    let tree = tree_from(&[3, 1, 2]);
    assert_eq!(tree.values().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[test]
fn iter_yields_pairs_and_reports_exact_len() {
    let tree = tree_from(&[3, 1, 2]);
    let mut iter = tree.iter();

    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some((&1, &10)));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some((&2, &20)));
    assert_eq!(iter.next(), Some((&3, &30)));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn each_call_starts_a_fresh_traversal() {
    let tree = tree_from(&[1, 2, 3]);
    let mut first = tree.keys();
    first.next();

    assert_eq!(tree.keys().count(), 3);
    assert_eq!(first.count(), 2);
}

#[test]
fn heights_track_shape() {
    let tree = tree_from(&[10, 20, 30]);
    assert_eq!(tree.heights().collect::<Vec<_>>(), vec![0, 1, 0]);
}

#[test]
fn empty_tree_traversals_are_empty() {
    let tree: AvlTree<i32, i32> = AvlTree::new();
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree.keys().len(), 0);
    assert_eq!(tree.heights().count(), 0);
}

#[test]
fn ref_into_iterator_works_in_for_loops() {
    let tree = tree_from(&[2, 1]);
    let mut seen = Vec::new();
    for (k, v) in &tree {
        seen.push((*k, *v));
    }
    assert_eq!(seen, vec![(1, 10), (2, 20)]);
}
