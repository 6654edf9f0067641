//! `.meta` schema files.
//!
//! ```text
//! record_size num_columns
//! column_1 flag_1
//! ...
//! column_n flag_n
//! ```
//!
//! Tokens are whitespace-separated (line breaks are not significant). A flag of
//! `1` marks an indexed column, `0` a column that is only searched linearly.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, TableError};

/// One column of a table schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// `true` if lookups on this column go through an index.
    pub indexed: bool,
}

/// Parsed contents of `<table>.meta`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMeta {
    pub table: String,
    /// Size in bytes of every record in `<table>.data`.
    pub record_size: u64,
    /// Columns in record order.
    pub columns: Vec<Column>,
}

/// Path of the schema file for `table` inside `dir`.
pub fn meta_path(dir: &Path, table: &str) -> PathBuf {
    dir.join(format!("{table}.meta"))
}

/// Path of the record file for `table` inside `dir`.
pub fn data_path(dir: &Path, table: &str) -> PathBuf {
    dir.join(format!("{table}.data"))
}

impl TableMeta {
    /// Reads and parses `<dir>/<table>.meta`.
    ///
    /// # Errors
    ///
    /// [`TableError::Missing`] if the file does not exist, [`TableError::BadMeta`]
    /// if it cannot be parsed, or an I/O error.
    pub fn load(dir: &Path, table: &str) -> Result<Self> {
        let path = meta_path(dir, table);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TableError::Missing { kind: "meta", path })
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(table, &text)
    }

    /// Parses schema text for `table`.
    pub fn parse(table: &str, text: &str) -> Result<Self> {
        let bad = |reason: String| TableError::BadMeta {
            table: table.to_string(),
            reason,
        };

        let mut tokens = text.split_whitespace();
        let record_size: u64 = tokens
            .next()
            .ok_or_else(|| bad("missing record size".into()))?
            .parse()
            .map_err(|_| bad("record size is not a number".into()))?;
        if record_size == 0 {
            return Err(bad("record size must be positive".into()));
        }
        let num_columns: usize = tokens
            .next()
            .ok_or_else(|| bad("missing column count".into()))?
            .parse()
            .map_err(|_| bad("column count is not a number".into()))?;

        let mut columns = Vec::with_capacity(num_columns);
        while let Some(name) = tokens.next() {
            let flag = tokens
                .next()
                .ok_or_else(|| bad(format!("column '{name}' has no index flag")))?;
            let indexed = match flag {
                "1" => true,
                "0" => false,
                other => return Err(bad(format!("column '{name}' has index flag '{other}'"))),
            };
            if columns.iter().any(|c: &Column| c.name == name) {
                return Err(bad(format!("column '{name}' is declared twice")));
            }
            columns.push(Column {
                name: name.to_string(),
                indexed,
            });
        }

        if columns.is_empty() || columns.len() != num_columns {
            return Err(bad(format!(
                "declares {num_columns} columns but defines {}",
                columns.len()
            )));
        }

        Ok(Self {
            table: table.to_string(),
            record_size,
            columns,
        })
    }

    /// Renders the schema in `.meta` form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("{} {}\n", self.record_size, self.columns.len());
        for column in &self.columns {
            out.push_str(&format!("{} {}\n", column.name, u8::from(column.indexed)));
        }
        out
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Position of `name` in record order.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Column names in record order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// `(position, column)` for every indexed column, in record order.
    pub fn indexed_columns(&self) -> impl Iterator<Item = (usize, &Column)> {
        self.columns.iter().enumerate().filter(|(_, c)| c.indexed)
    }
}
