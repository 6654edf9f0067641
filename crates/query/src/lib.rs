//! # Query - Shell Command Parsing
//!
//! The shell understands two commands:
//!
//! ```text
//! exit
//! select <column|*> from <table> where <column> = <value>
//! ```
//!
//! [`parse`] tokenizes a line and validates it against the open table's name
//! and columns. Validation runs the same checks, in the same order, for every
//! query and reports the first one that fails as a [`QueryError`] whose
//! `Display` is the message the shell prints.

use thiserror::Error;

/// Why a query line was rejected. The `Display` text is user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The first word is neither `select` nor `exit`.
    #[error("Unknown query, ignored...")]
    Unknown,

    /// The projection is neither `*` nor a column of the table.
    #[error("Invalid select column, ignored...")]
    SelectColumn,

    /// A keyword is missing or misplaced, or the word count is wrong.
    #[error("Invalid select query, ignored...")]
    Malformed,

    /// The query names a table other than the open one.
    #[error("Invalid table name, ignored...")]
    TableName,

    /// The `where` column is not a column of the table.
    #[error("Invalid where column, ignored...")]
    WhereColumn,
}

/// Columns a `select` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// `select *`
    All,
    /// `select <column>`
    Column(String),
}

/// A validated `select` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub projection: Projection,
    pub where_column: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Select(Select),
}

/// Splits `line` on single spaces.
///
/// Runs of spaces produce empty tokens and an empty line produces none.
#[must_use]
pub fn tokenize(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    let mut tokens: Vec<&str> = line.split(' ').collect();
    // A trailing separator does not start another token.
    if tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
}

/// Parses one shell line for the table `table` with the given `columns`.
///
/// # Errors
///
/// The first failing check, in this order: command word, select column,
/// `from`, table name, `where`, where column, `=`, word count. A word that is
/// missing where a check needs it is reported as [`QueryError::Malformed`].
pub fn parse<C: AsRef<str>>(line: &str, table: &str, columns: &[C]) -> Result<Command, QueryError> {
    if line == "exit" {
        return Ok(Command::Exit);
    }

    let tokens = tokenize(line);
    let is_column = |name: &str| columns.iter().any(|c| c.as_ref() == name);
    let token = |i: usize| tokens.get(i).copied().ok_or(QueryError::Malformed);

    match tokens.first() {
        Some(&"select") | Some(&"exit") => {}
        _ => return Err(QueryError::Unknown),
    }

    let selected = token(1)?;
    if selected != "*" && !is_column(selected) {
        return Err(QueryError::SelectColumn);
    }
    if token(2)? != "from" {
        return Err(QueryError::Malformed);
    }
    if token(3)? != table {
        return Err(QueryError::TableName);
    }
    if token(4)? != "where" {
        return Err(QueryError::Malformed);
    }
    let where_column = token(5)?;
    if !is_column(where_column) {
        return Err(QueryError::WhereColumn);
    }
    if token(6)? != "=" {
        return Err(QueryError::Malformed);
    }
    if tokens.len() != 8 {
        return Err(QueryError::Malformed);
    }
    // `exit` followed by words passes the first check but is never a select.
    if tokens[0] != "select" {
        return Err(QueryError::Malformed);
    }

    let projection = match selected {
        "*" => Projection::All,
        column => Projection::Column(column.to_string()),
    };
    Ok(Command::Select(Select {
        projection,
        where_column: where_column.to_string(),
        value: tokens[7].to_string(),
    }))
}
