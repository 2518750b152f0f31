//! Exports the `pages` table of the legacy SQLite store to a json file.
//!
//! Run with:
//! ```
//! cargo run --bin dump-pages
//! ```

use tracing::info;
use whoknows_seeds::config::MigrateConfig;
use whoknows_seeds::database::connect_read_only;
use whoknows_seeds::database::sqlite::SqliteRepository;
use whoknows_seeds::features::export::export_pages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();
    whoknows_seeds::init_tracing();

    let config = MigrateConfig::from_env()?;

    let pool = connect_read_only(&config.database_url).await?;
    info!("Connected to database at {}", config.database_url);

    let repo = SqliteRepository::new(pool);
    let exported = export_pages(&repo, &config.pages_json_path).await?;
    repo.close().await;

    info!(
        "Exported {} pages to {}",
        exported,
        config.pages_json_path.display()
    );

    Ok(())
}
