//! SQLite pool setup and schema bootstrap.

use anyhow::{Context, Result};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{path::Path, str::FromStr};

/// Raw SQL bootstrap script, executed statement by statement.
const BOOTSTRAP_SQL: &str = include_str!("../migrations/0001_init.sql");

/// Open a pool for `database_url`, creating the database file and its parent
/// directory when they are missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    tracing::debug!("Connecting using raw URL => {}", database_url);

    if let Some(parent) = database_file(database_url).and_then(Path::parent) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating database directory {:?}", parent))?;
            tracing::info!("Created missing directory {:?}", parent);
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("parsing database URL `{}`", database_url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("connecting to {}", database_url))?;

    Ok(pool)
}

/// Create the `users` and `file_metadata` tables if they do not exist.
pub async fn bootstrap(pool: &SqlitePool) -> Result<()> {
    let statements = BOOTSTRAP_SQL
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    tracing::info!("Running {} bootstrap statements...", statements.len());

    for stmt in statements {
        tracing::debug!("Executing bootstrap SQL: {}", stmt);
        sqlx::query(stmt)
            .execute(pool)
            .await
            .context("executing schema bootstrap")?;
    }

    Ok(())
}

/// Local file path behind a SQLite URL, or `None` for in-memory databases.
fn database_file(database_url: &str) -> Option<&Path> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .trim_start_matches("file:");
    let path = path.split('?').next().unwrap_or(path);

    if path.is_empty() || path.starts_with(":memory:") || database_url.contains("mode=memory") {
        None
    } else {
        Some(Path::new(path))
    }
}
