//! Renders the exported pages json into an Ecto `seeds.exs` script.
//!
//! Run with:
//! ```
//! cargo run --bin generate-seeds
//! ```

use tracing::info;
use whoknows_seeds::config::MigrateConfig;
use whoknows_seeds::features::seeds::{SeedTemplate, generate_seeds};
use whoknows_seeds::io::{read_pages_json, write_script};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    whoknows_seeds::init_tracing();

    let config = MigrateConfig::from_env()?;

    let pages = read_pages_json(&config.pages_json_path)?;
    info!(
        "Read {} pages from {}",
        pages.len(),
        config.pages_json_path.display()
    );

    let template = SeedTemplate::new(config.app_module.clone());
    let script = generate_seeds(&pages, &template)?;
    write_script(&config.seeds_path, &script.content)?;

    info!(
        "✓ Generated {} with {} pages",
        config.seeds_path.display(),
        script.page_count
    );

    Ok(())
}
