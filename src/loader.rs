use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads and parses one match timeline document.
pub fn load_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read timeline {}", path.display()))?;

    let parsed: Value = serde_json::from_str(&contents)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;

    info!(path = %path.display(), bytes = contents.len(), "loaded timeline document");

    Ok(parsed)
}
