use crate::domain::Page;
use crate::features::pages::model::JsonPage;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes pages as a pretty printed json array. Non-ASCII text is written as-is.
pub fn write_pages_json(path: &Path, pages: &[Page]) -> Result<()> {
    let json_pages: Vec<JsonPage> = pages.iter().map(JsonPage::from).collect();

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &json_pages)
        .with_context(|| format!("Failed to serialize pages to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

pub fn read_pages_json(path: &Path) -> Result<Vec<Page>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let json_pages: Vec<JsonPage> = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed pages json in {}", path.display()))?;

    Ok(json_pages.into_iter().map(Page::from).collect())
}

/// Writes the rendered script, creating its directory (e.g. `priv/repo`) first.
pub fn write_script(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
