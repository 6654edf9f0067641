//! `.data` record files.
//!
//! A data file is a run of fixed-size records. Record `i` starts at byte
//! `i * record_size` and holds the row's values separated by whitespace,
//! padded up to `record_size` bytes. The final record may be cut short.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Result, TableError};

/// Read access to a table's record file.
///
/// The file handle stays open for the reader's lifetime and is wrapped in a
/// `Mutex` so lookups work through `&self`. Every lookup is one seek plus one
/// record-sized read.
pub struct DataFile {
    /// Kept for diagnostics.
    path: PathBuf,
    file: Mutex<BufReader<File>>,
    len: u64,
    record_size: u64,
    num_columns: usize,
}

impl std::fmt::Debug for DataFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataFile")
            .field("path", &self.path)
            .field("len", &self.len)
            .field("record_size", &self.record_size)
            .field("num_columns", &self.num_columns)
            .finish()
    }
}

impl DataFile {
    /// Opens a record file laid out as `record_size`-byte records of
    /// `num_columns` values.
    ///
    /// # Errors
    ///
    /// [`TableError::Missing`] if the file does not exist, or an I/O error.
    pub fn open<P: AsRef<Path>>(path: P, record_size: u64, num_columns: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TableError::Missing { kind: "data", path })
            }
            Err(e) => return Err(e.into()),
        };
        let len = file.metadata()?.len();

        Ok(Self {
            path,
            file: Mutex::new(BufReader::new(file)),
            len,
            record_size,
            num_columns,
        })
    }

    /// File size in bytes.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of records, counting a trailing partial record.
    #[must_use]
    pub fn record_count(&self) -> u64 {
        self.len.div_ceil(self.record_size)
    }

    /// Byte offsets of every record, in file order.
    pub fn offsets(&self) -> impl Iterator<Item = u64> {
        let record_size = self.record_size;
        (0..self.record_count()).map(move |i| i * record_size)
    }

    /// Reads the record starting at `offset`.
    ///
    /// # Errors
    ///
    /// [`TableError::OutOfRange`] if `offset` is not inside the file,
    /// [`TableError::ShortRecord`] if the record holds too few values.
    pub fn read_record(&self, offset: u64) -> Result<Vec<String>> {
        if offset >= self.len {
            return Err(TableError::OutOfRange {
                offset,
                len: self.len,
            });
        }

        let mut f = self.file.lock().map_err(|_| TableError::Poisoned)?;
        f.seek(SeekFrom::Start(offset))?;
        let mut buf = Vec::with_capacity(self.record_size as usize);
        (&mut *f).take(self.record_size).read_to_end(&mut buf)?;
        drop(f);

        self.parse_record(offset, &buf)
    }

    /// Calls `visit(offset, values)` for every record, front to back. A
    /// whitespace-only fragment at the end of the file is not a record.
    ///
    /// # Errors
    ///
    /// Stops at the first I/O failure or short record.
    pub fn for_each_record<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(u64, Vec<String>),
    {
        let mut f = self.file.lock().map_err(|_| TableError::Poisoned)?;
        f.seek(SeekFrom::Start(0))?;

        let mut buf = Vec::with_capacity(self.record_size as usize);
        for offset in self.offsets() {
            buf.clear();
            (&mut *f).take(self.record_size).read_to_end(&mut buf)?;
            let last = offset + self.record_size >= self.len;
            if last && buf.iter().all(u8::is_ascii_whitespace) {
                // Blank tail after the final record.
                break;
            }
            visit(offset, self.parse_record(offset, &buf)?);
        }
        Ok(())
    }

    /// `(offset, value)` of `column` for every record, in file order.
    pub fn column_values(&self, column: usize) -> Result<Vec<(u64, String)>> {
        self.check_column(column)?;
        let mut out = Vec::new();
        self.for_each_record(|offset, mut values| {
            out.push((offset, values.swap_remove(column)));
        })?;
        Ok(out)
    }

    /// Offsets of every record whose `column` equals `value`, in file order.
    pub fn linear_search(&self, column: usize, value: &str) -> Result<Vec<u64>> {
        self.check_column(column)?;
        let mut hits = Vec::new();
        self.for_each_record(|offset, values| {
            if values[column] == value {
                hits.push(offset);
            }
        })?;
        Ok(hits)
    }

    fn check_column(&self, column: usize) -> Result<()> {
        if column >= self.num_columns {
            return Err(TableError::UnknownColumn(format!("#{column}")));
        }
        Ok(())
    }

    fn parse_record(&self, offset: u64, bytes: &[u8]) -> Result<Vec<String>> {
        let text = String::from_utf8_lossy(bytes);
        let values: Vec<String> = text
            .split_whitespace()
            .take(self.num_columns)
            .map(str::to_string)
            .collect();
        if values.len() < self.num_columns {
            return Err(TableError::ShortRecord {
                offset,
                expected: self.num_columns,
                found: values.len(),
            });
        }
        Ok(values)
    }
}

/// Writes rows as fixed-size records.
///
/// Each row's values are joined with single spaces, padded with spaces and
/// terminated by a newline so that every record is exactly `record_size`
/// bytes. The file is written to `<path>.tmp`, synced, then renamed over
/// `path`.
pub struct DataFileWriter {}

impl DataFileWriter {
    /// # Errors
    ///
    /// [`TableError::RecordTooLong`] if a row plus its newline does not fit in
    /// `record_size` bytes, or an I/O error.
    pub fn write<P, R, S>(path: P, record_size: u64, rows: R) -> Result<()>
    where
        P: AsRef<Path>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let tmp = path.with_extension("data.tmp");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp)?;
        let mut w = BufWriter::new(file);

        for row in rows {
            let line = row
                .into_iter()
                .map(|v| v.as_ref().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let needed = line.len() + 1;
            if needed as u64 > record_size {
                return Err(TableError::RecordTooLong {
                    needed,
                    record_size,
                });
            }
            w.write_all(line.as_bytes())?;
            w.write_all(&vec![b' '; record_size as usize - needed])?;
            w.write_all(b"\n")?;
        }

        let file = w.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}
