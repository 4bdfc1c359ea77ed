pub mod config;
pub mod error;
pub mod loader;
pub mod match_key;
pub mod normalize;
pub mod parquet_sink;
pub mod records;
pub mod relation;
pub mod sink;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::config::{ExportConfig, OutputFormat};
use crate::normalize::NormalizedMatch;
use crate::parquet_sink::ParquetSink;
use crate::sink::{CsvSink, TableSink};

/// Loads the configured timeline, normalizes it and writes every relation.
/// Returns the resolved output directory.
pub fn run(config: &ExportConfig) -> Result<PathBuf> {
    let document = loader::load_document(&config.input)?;

    let normalized = normalize::normalize(&document)
        .with_context(|| format!("failed to normalize {}", config.input.display()))?;

    let mut sink: Box<dyn TableSink> = match config.format {
        OutputFormat::Csv => Box::new(CsvSink::new(&config.out_dir)?),
        OutputFormat::Parquet => Box::new(ParquetSink::new(&config.out_dir)?),
    };

    write_all(&normalized, sink.as_mut())?;

    let resolved = fs::canonicalize(&config.out_dir)
        .with_context(|| format!("failed to resolve {}", config.out_dir.display()))?;

    Ok(resolved)
}

/// Hands every relation to `sink` in persistence order. Stops at the first
/// failure; relations already written stay on disk.
pub fn write_all(normalized: &NormalizedMatch, sink: &mut dyn TableSink) -> Result<()> {
    for relation in normalized.relations() {
        let written = sink.write_relation(relation)?;
        info!(
            match_id = %normalized.key.match_id,
            relation = relation.name,
            rows = relation.len(),
            columns = written.columns,
            path = %written.path.display(),
            "relation written"
        );
    }

    Ok(())
}
