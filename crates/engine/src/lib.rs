//! # Engine - myDB Query Engine
//!
//! Ties the [`table`] files, the [`avl`] tree and the [`query`] parser
//! together into a read-only database over a single table.
//!
//! ## Architecture
//!
//! ```text
//! Database::open(dir, table)
//!   |
//!   |-- <table>.meta -> schema (columns, index flags, record size)
//!   |-- <table>.data -> record file
//!   |
//!   '-- for each indexed column:
//!         scan records in file order
//!         insert (column value -> record offset) into an AvlTree
//!
//! Database::select(query)
//!   |
//!   |-- where column indexed?  yes -> tree search -> read one record
//!   '--                        no  -> linear scan -> read every match
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module       | Purpose                                              |
//! |--------------|------------------------------------------------------|
//! | [`lib.rs`]   | `Database` struct, `open()`, accessors, `Debug`       |
//! | [`index`]    | `Index`: one tree per indexed column, `IndexStats`    |
//! | [`select`]   | `select()`, `Row`                                     |
//!
//! ## Duplicate Values
//!
//! An index maps each distinct column value to the offset of the **first**
//! record holding it; later duplicates are dropped by the tree. Lookups on
//! non-indexed columns return every matching record.
mod index;
mod select;

use anyhow::{Context, Result};
use std::path::Path;
use table::{Table, TableMeta};

pub use index::{Index, IndexStats};
pub use select::Row;

/// A table opened for querying, with its column indexes built in memory.
pub struct Database {
    pub(crate) table: Table,
    /// One per indexed column, in schema order.
    pub(crate) indexes: Vec<Index>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("table", &self.table.name())
            .field("record_size", &self.table.meta().record_size)
            .field("records", &self.table.data().record_count())
            .field("columns", &self.table.meta().num_columns())
            .field("indexes", &self.index_stats())
            .finish()
    }
}

impl Database {
    /// Opens `<dir>/<table>.meta` and `<dir>/<table>.data` and builds one
    /// index per column flagged as indexed.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing or malformed, or if a record
    /// cannot be read while building an index.
    pub fn open<P: AsRef<Path>>(dir: P, table: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let table = Table::open(dir, table)
            .with_context(|| format!("failed to open table '{table}' in {}", dir.display()))?;

        let mut indexes = Vec::new();
        for (_, column) in table.meta().indexed_columns() {
            let index = Index::build(&table, &column.name)?;
            tracing::info!(
                table = table.name(),
                column = %column.name,
                size = index.size(),
                height = index.height(),
                "built index"
            );
            indexes.push(index);
        }

        Ok(Self { table, indexes })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.table.name()
    }

    #[must_use]
    pub fn meta(&self) -> &TableMeta {
        self.table.meta()
    }

    /// Column names in record order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.table.meta().column_names().collect()
    }

    /// Size and height of every index, in schema order.
    #[must_use]
    pub fn index_stats(&self) -> Vec<IndexStats> {
        self.indexes.iter().map(Index::stats).collect()
    }

    /// The index on `column`, if it has one.
    #[must_use]
    pub fn index(&self, column: &str) -> Option<&Index> {
        self.indexes.iter().find(|i| i.column() == column)
    }
}

#[cfg(test)]
mod tests;
