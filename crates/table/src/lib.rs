//! # Table - Flat-File Records
//!
//! Read side of the fixed-size record tables that `mydb` queries. A table
//! named `students` lives in two files inside the data directory:
//!
//! | File             | Contents                                           |
//! |------------------|----------------------------------------------------|
//! | `students.meta`  | record size, column count, `name flag` per column  |
//! | `students.data`  | fixed-size records, values separated by whitespace |
//!
//! See [`meta`] and [`data`] for the exact layouts.
//!
//! The tree indexes built on top of a table only ever store record byte
//! offsets; this crate turns an offset back into a row.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use table::Table;
//!
//! let table = Table::open(Path::new("."), "students").unwrap();
//! for offset in table.linear_search("lastname", "smith").unwrap() {
//!     println!("{:?}", table.read_record(offset).unwrap());
//! }
//! ```

pub mod data;
mod error;
pub mod meta;

use std::path::Path;

pub use data::{DataFile, DataFileWriter};
pub use error::{Result, TableError};
pub use meta::{data_path, meta_path, Column, TableMeta};

/// A table's schema together with its open record file.
#[derive(Debug)]
pub struct Table {
    meta: TableMeta,
    data: DataFile,
}

impl Table {
    /// Loads `<dir>/<name>.meta` and opens `<dir>/<name>.data`.
    pub fn open(dir: &Path, name: &str) -> Result<Self> {
        let meta = TableMeta::load(dir, name)?;
        let data = DataFile::open(
            meta::data_path(dir, name),
            meta.record_size,
            meta.num_columns(),
        )?;
        Ok(Self { meta, data })
    }

    /// Writes both files for a new table, replacing any existing ones.
    pub fn create<R, S>(dir: &Path, meta: &TableMeta, rows: R) -> Result<()>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        std::fs::write(meta::meta_path(dir, &meta.table), meta.render())?;
        DataFileWriter::write(meta::data_path(dir, &meta.table), meta.record_size, rows)
    }

    #[must_use]
    pub fn meta(&self) -> &TableMeta {
        &self.meta
    }

    #[must_use]
    pub fn data(&self) -> &DataFile {
        &self.data
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.meta.table
    }

    /// Values of the record at `offset`, in column order.
    pub fn read_record(&self, offset: u64) -> Result<Vec<String>> {
        self.data.read_record(offset)
    }

    /// `(offset, value)` of the named column for every record.
    pub fn column_values(&self, column: &str) -> Result<Vec<(u64, String)>> {
        self.data.column_values(self.column_index(column)?)
    }

    /// Offsets of every record whose `column` equals `value`.
    pub fn linear_search(&self, column: &str, value: &str) -> Result<Vec<u64>> {
        self.data.linear_search(self.column_index(column)?, value)
    }

    fn column_index(&self, column: &str) -> Result<usize> {
        self.meta
            .column_index(column)
            .ok_or_else(|| TableError::UnknownColumn(column.to_string()))
    }
}
