use std::path::Path;

use anyhow::Result;
use table::{Column, Table, TableMeta};

pub const STUDENT_ROWS: [[&str; 4]; 6] = [
    ["3", "carol", "smith", "cs"],
    ["1", "alice", "jones", "math"],
    ["5", "erin", "smith", "physics"],
    ["2", "bob", "lee", "cs"],
    ["4", "dave", "smith", "cs"],
    ["6", "alice", "park", "math"],
];

pub const RECORD_SIZE: u64 = 40;

/// `students(id*, firstname*, lastname, major)`; `*` marks indexed columns.
pub fn write_students(dir: &Path) -> Result<()> {
    write_table(
        dir,
        "students",
        &[("id", true), ("firstname", true), ("lastname", false), ("major", false)],
        STUDENT_ROWS,
    )
}

pub fn write_table<R, S>(dir: &Path, name: &str, columns: &[(&str, bool)], rows: R) -> Result<()>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let meta = TableMeta {
        table: name.to_string(),
        record_size: RECORD_SIZE,
        columns: columns
            .iter()
            .map(|&(name, indexed)| Column {
                name: name.to_string(),
                indexed,
            })
            .collect(),
    };
    Table::create(dir, &meta, rows)?;
    Ok(())
}

pub fn select_all(where_column: &str, value: &str) -> query::Select {
    query::Select {
        projection: query::Projection::All,
        where_column: where_column.to_string(),
        value: value.to_string(),
    }
}

pub fn select_one(column: &str, where_column: &str, value: &str) -> query::Select {
    query::Select {
        projection: query::Projection::Column(column.to_string()),
        where_column: where_column.to_string(),
        value: value.to_string(),
    }
}
