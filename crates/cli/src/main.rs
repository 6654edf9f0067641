//! # CLI - myDB Interactive Shell
//!
//! Opens one table, builds its column indexes, then answers queries read
//! from stdin until `exit` or end of input. Works both interactively and
//! with piped input.
//!
//! ## Queries
//!
//! ```text
//! select * from <table> where <column> = <value>
//! select <column> from <table> where <column> = <value>
//! exit
//! ```
//!
//! ## Configuration
//!
//! ```text
//! MYDB_DATA_DIR  directory holding the table files  (default: ".")
//! MYDB_TABLE     table to open without prompting    (default: prompt)
//! MYDB_LOG       log filter, written to stderr      (default: "warn")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ MYDB_DATA_DIR=data cargo run -p cli
//! Welcome to myDB, please enter tablename> students
//! Reading meta-data...
//! Building index tree(s)...
//! Index column: id
//!   Tree size: 5
//!   Tree height: 2
//!
//! Enter query> select name from students where id = 3
//! name: carol
//!
//! Enter query> exit
//! ```

mod shell;

use anyhow::{Context, Result};
use config::Config;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(Config::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    init_logging(&config.log_filter);
    tracing::debug!(?config, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&config, stdin.lock(), &mut stdout.lock())
}
