//! Per-column AVL indexes.

use anyhow::{Context, Result};
use avl::AvlTree;
use table::Table;

/// Maps the values of one column to the byte offset of the first record that
/// holds each value.
#[derive(Debug)]
pub struct Index {
    column: String,
    tree: AvlTree<String, u64>,
}

/// Shape of an index as reported at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub column: String,
    pub size: usize,
    pub height: i32,
}

impl Index {
    /// Scans `table` front to back and inserts `(value, offset)` for every
    /// record. Inserting a value already in the tree is a no-op, so the
    /// first record wins.
    pub(crate) fn build(table: &Table, column: &str) -> Result<Self> {
        let values = table
            .column_values(column)
            .with_context(|| format!("failed to scan column '{column}' of '{}'", table.name()))?;

        let mut tree = AvlTree::new();
        for (offset, value) in values {
            tree.insert(value, offset);
        }
        debug_assert!(tree.check_invariants().is_ok(), "index on '{column}' is not balanced");

        Ok(Self {
            column: column.to_string(),
            tree,
        })
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Offset of the first record whose column equals `value`.
    #[must_use]
    pub fn lookup(&self, value: &str) -> Option<u64> {
        self.tree.search(value).copied()
    }

    /// Number of distinct values.
    #[must_use]
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Tree height; `-1` for an empty table.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.tree.height()
    }

    #[must_use]
    pub fn tree(&self) -> &AvlTree<String, u64> {
        &self.tree
    }

    #[must_use]
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            column: self.column.clone(),
            size: self.size(),
            height: self.height(),
        }
    }
}
