//! The read-eval-print loop, generic over its input and output so tests can
//! drive it without a terminal.

use anyhow::Result;
use config::Config;
use engine::Database;
use query::Command;
use std::io::{BufRead, Write};

pub const TABLE_PROMPT: &str = "Welcome to myDB, please enter tablename> ";
pub const QUERY_PROMPT: &str = "Enter query> ";
pub const NOT_FOUND: &str = "Not found...";

/// Runs one session: pick a table, build its indexes, answer queries.
///
/// # Errors
///
/// Returns an error if the table cannot be opened or the output cannot be
/// written. Invalid queries and failed lookups are reported inline and the
/// session continues.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, out: &mut W) -> Result<()> {
    let mut lines = input.lines();

    write!(out, "{TABLE_PROMPT}")?;
    out.flush()?;
    let table = match &config.table {
        Some(table) => {
            writeln!(out, "{table}")?;
            table.clone()
        }
        None => match lines.next() {
            Some(line) => line?.trim_end_matches('\r').to_string(),
            None => {
                writeln!(out)?;
                return Ok(());
            }
        },
    };

    writeln!(out, "Reading meta-data...")?;
    writeln!(out, "Building index tree(s)...")?;
    let db = Database::open(&config.data_dir, &table)?;
    tracing::info!(table = %table, dir = %config.data_dir.display(), "table opened");

    for stats in db.index_stats() {
        writeln!(out, "Index column: {}", stats.column)?;
        writeln!(out, "  Tree size: {}", stats.size)?;
        writeln!(out, "  Tree height: {}", stats.height)?;
    }
    writeln!(out)?;

    let columns = db.column_names();
    loop {
        write!(out, "{QUERY_PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let line = line.trim_end_matches('\r');
        tracing::debug!(query = line, "received");

        match query::parse(line, db.name(), &columns) {
            Ok(Command::Exit) => break,
            Ok(Command::Select(select)) => match db.select(&select) {
                Ok(rows) if rows.is_empty() => writeln!(out, "{NOT_FOUND}")?,
                Ok(rows) => {
                    for row in rows {
                        write!(out, "{row}")?;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %format!("{e:#}"), "select failed");
                    writeln!(out, "**Error: {e:#}")?;
                }
            },
            Err(invalid) => writeln!(out, "{invalid}")?,
        }
        writeln!(out)?;
    }

    Ok(())
}
