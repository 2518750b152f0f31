use crate::domain::Page;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub mod sqlite;

// the exporter only ever reads; db specific implementations live next to this ("sqlite.rs")
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// All pages, in the order the store returns them.
    async fn get_all_pages(&self) -> Result<Vec<Page>>;
}

/// Opens an existing SQLite store for reading. A missing file is an error, it is never created.
pub async fn connect_read_only(database_url: &str) -> Result<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url {}", database_url))?
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to database at {}", database_url))?;

    Ok(pool)
}
