use super::helpers::*;
use crate::AvlTree;

#[test]
fn distance_to_self_is_zero() {
    let tree = tree_from(&[10, 20, 30]);
    for k in [10, 20, 30] {
        assert_eq!(tree.distance(&k, &k), Some(0));
    }
}

#[test]
fn distance_with_missing_key_is_none() {
    let tree = tree_from(&[10, 20, 30]);
    assert_eq!(tree.distance(&10, &99), None);
    assert_eq!(tree.distance(&99, &10), None);
    assert_eq!(tree.distance(&99, &99), None);
}

#[test]
fn distance_on_empty_tree_is_none() {
    let tree: AvlTree<i32, i32> = AvlTree::new();
    assert_eq!(tree.distance(&1, &1), None);
}

#[test]
fn ascending_five_distance_matches_shape() {
    // Shape: 20(10, 40(30, 50)).
    let tree = tree_from(&[10, 20, 30, 40, 50]);
    assert_eq!(tree.heights().collect::<Vec<_>>(), vec![0, 2, 0, 1, 0]);

    assert_eq!(tree.distance(&10, &50), Some(3));
    assert_eq!(tree.distance(&10, &50), Some(path_distance(&tree, 10, 50)));
}

#[test]
fn split_at_root_when_an_endpoint_is_the_root() {
    let tree = tree_from(&[10, 20, 30, 40, 50]);
    assert_eq!(tree.distance(&20, &50), Some(2));
    assert_eq!(tree.distance(&10, &20), Some(1));
}

#[test]
fn split_below_root_when_an_endpoint_is_the_split_node() {
    // 40 is the split node for (40, 50) and (30, 40).
    let tree = tree_from(&[10, 20, 30, 40, 50]);
    assert_eq!(tree.distance(&40, &50), Some(1));
    assert_eq!(tree.distance(&30, &40), Some(1));
    assert_eq!(tree.distance(&50, &40), Some(1));
}

#[test]
fn siblings_are_two_apart() {
    let tree = tree_from(&[10, 20, 30, 40, 50]);
    assert_eq!(tree.distance(&30, &50), Some(2));
    assert_eq!(tree.distance(&10, &30), Some(3));
}

#[test]
fn distance_is_symmetric_and_matches_paths() {
    let keys: Vec<i32> = (1..=40).map(|k| (k * 37) % 101).collect();
    let tree = tree_from(&keys);

    for &a in &keys {
        for &b in &keys {
            let d = tree.distance(&a, &b);
            assert_eq!(d, tree.distance(&b, &a));
            assert_eq!(d, Some(path_distance(&tree, a, b)), "distance({a}, {b})");
        }
    }
}
