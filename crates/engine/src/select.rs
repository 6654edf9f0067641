//! Read path: select().

use anyhow::{Context, Result};
use query::{Projection, Select};

use crate::Database;

/// One result row: `(column, value)` pairs for the projected columns, in
/// record order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(pub Vec<(String, String)>);

impl Row {
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Value of `column`, if it was projected.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields().find(|(c, _)| *c == column).map(|(_, v)| v)
    }
}

/// One `column: value` line per field.
impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (column, value) in self.fields() {
            writeln!(f, "{column}: {value}")?;
        }
        Ok(())
    }
}

impl Database {
    /// Runs a validated `select`.
    ///
    /// An indexed where-column is answered from its tree and yields at most
    /// one row (the first record holding the value). Any other column is
    /// answered by a linear scan and yields every matching record in file
    /// order. An empty result means nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if a column is not in the schema or a record cannot
    /// be read.
    pub fn select(&self, query: &Select) -> Result<Vec<Row>> {
        anyhow::ensure!(
            self.meta().has_column(&query.where_column),
            "unknown where column '{}'",
            query.where_column
        );
        let offsets = match self.index(&query.where_column) {
            Some(index) => {
                tracing::debug!(column = %query.where_column, value = %query.value, "index lookup");
                index.lookup(&query.value).into_iter().collect()
            }
            None => {
                tracing::debug!(column = %query.where_column, value = %query.value, "linear scan");
                self.table
                    .linear_search(&query.where_column, &query.value)
                    .with_context(|| format!("failed to scan column '{}'", query.where_column))?
            }
        };

        let projected = self.projection(&query.projection)?;
        let mut rows = Vec::with_capacity(offsets.len());
        for offset in offsets {
            let record = self
                .table
                .read_record(offset)
                .with_context(|| format!("failed to read record at offset {offset}"))?;
            rows.push(Row(
                projected
                    .iter()
                    .map(|&(i, name)| (name.to_string(), record[i].clone()))
                    .collect(),
            ));
        }
        Ok(rows)
    }

    /// `(position, name)` of every projected column.
    fn projection(&self, projection: &Projection) -> Result<Vec<(usize, &str)>> {
        let meta = self.table.meta();
        match projection {
            Projection::All => Ok(meta.column_names().enumerate().collect()),
            Projection::Column(name) => {
                let i = meta
                    .column_index(name)
                    .with_context(|| format!("unknown column '{name}'"))?;
                Ok(vec![(i, meta.columns[i].name.as_str())])
            }
        }
    }
}
