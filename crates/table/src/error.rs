use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing table files.
#[derive(Debug, Error)]
pub enum TableError {
    /// An underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The `.meta` or `.data` file does not exist.
    #[error("couldn't open {kind} file '{}'", .path.display())]
    Missing { kind: &'static str, path: PathBuf },

    /// The `.meta` file could not be parsed.
    #[error("malformed meta for table '{table}': {reason}")]
    BadMeta { table: String, reason: String },

    /// A column name that the schema does not define.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// A record offset at or past the end of the data file.
    #[error("offset {offset} is outside the data file ({len} bytes)")]
    OutOfRange { offset: u64, len: u64 },

    /// A record holding fewer values than the schema has columns.
    #[error("record at offset {offset} has {found} values, expected {expected}")]
    ShortRecord {
        offset: u64,
        expected: usize,
        found: usize,
    },

    /// A row that does not fit in a fixed-size record when writing.
    #[error("row needs {needed} bytes but records are {record_size} bytes")]
    RecordTooLong { needed: usize, record_size: u64 },

    /// The data file handle's lock was poisoned by a panicking reader.
    #[error("data file lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, TableError>;
