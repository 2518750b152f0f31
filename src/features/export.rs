use crate::database::PageRepository;
use crate::io::write_pages_json;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Dumps every page the repository holds into a json file and returns how many were written.
pub async fn export_pages(repo: &dyn PageRepository, path: &Path) -> Result<usize> {
    let pages = repo.get_all_pages().await?;
    debug!("Fetched {} pages from the store", pages.len());

    write_pages_json(path, &pages)?;

    Ok(pages.len())
}
