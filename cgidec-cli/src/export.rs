//! Report export.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Writes the rendered report document to `path`.
pub fn write_report<P: AsRef<Path>>(path: P, report: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!("Report exported to {}", path.display());
    Ok(())
}
