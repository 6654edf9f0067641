use crate::node::Node;
use crate::AvlTree;

/// Builds a tree by inserting `keys` in order, each mapped to `key * 10`.
pub fn tree_from(keys: &[i32]) -> AvlTree<i32, i32> {
    let mut tree = AvlTree::new();
    for &k in keys {
        tree.insert(k, k * 10);
    }
    tree
}

/// Key held by the root, if any.
pub fn root_key<K: Copy, V>(tree: &AvlTree<K, V>) -> Option<K> {
    tree.root.as_ref().map(|n| n.key)
}

/// `(key, height)` of the root's left and right children.
pub fn children<V>(tree: &AvlTree<i32, V>) -> (Option<(i32, i32)>, Option<(i32, i32)>) {
    let root = tree.root.as_ref().expect("tree is empty");
    let describe = |n: &Node<i32, V>| (n.key, n.height);
    (root.left.as_deref().map(describe), root.right.as_deref().map(describe))
}

/// Keys on the root-to-node path for `key`, root first.
pub fn path_to(tree: &AvlTree<i32, i32>, key: i32) -> Vec<i32> {
    let mut path = Vec::new();
    let mut cursor = tree.root.as_deref();
    while let Some(node) = cursor {
        path.push(node.key);
        cursor = match key.cmp(&node.key) {
            std::cmp::Ordering::Equal => break,
            std::cmp::Ordering::Less => node.left.as_deref(),
            std::cmp::Ordering::Greater => node.right.as_deref(),
        };
    }
    path
}

/// Graph distance computed from root paths: depth(a) + depth(b) - 2 * depth(lca).
pub fn path_distance(tree: &AvlTree<i32, i32>, a: i32, b: i32) -> usize {
    let pa = path_to(tree, a);
    let pb = path_to(tree, b);
    let common = pa.iter().zip(&pb).take_while(|(x, y)| x == y).count();
    (pa.len() - common) + (pb.len() - common)
}

/// Standard AVL height bound for `n` keys.
pub fn avl_height_bound(n: usize) -> f64 {
    1.44 * ((n + 2) as f64).log2() - 1.0
}
