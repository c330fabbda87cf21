use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use unicode_coverage::Catalog;

/// прочитать и разобрать файл каталога
pub fn load(path: &Path) -> Result<Catalog>
{
    if !path.exists() {
        bail!("catalog file not found: {}", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;

    debug!(path = %path.display(), bytes = source.len(), "catalog read");

    let catalog = Catalog::from_json(&source)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;

    info!(
        path = %path.display(),
        characters = catalog.len(),
        version = catalog.version.as_deref().unwrap_or("-"),
        "catalog loaded"
    );

    Ok(catalog)
}
