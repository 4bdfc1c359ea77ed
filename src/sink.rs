use csv::Writer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ExportError;
use crate::relation::{Relation, render_cell};

/// Where a relation landed and how many columns its file carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenRelation {
    pub path: PathBuf,
    pub columns: usize,
}

/// Destination for materialized relations.
pub trait TableSink {
    /// Persists one relation.
    fn write_relation(&mut self, relation: &Relation) -> Result<WrittenRelation, ExportError>;
}

/// Writes each relation as `<relation>.csv` under one directory.
pub struct CsvSink {
    out_dir: PathBuf,
}

impl CsvSink {
    pub fn new(out_dir: &Path) -> Result<Self, ExportError> {
        fs::create_dir_all(out_dir).map_err(|source| ExportError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            out_dir: out_dir.to_path_buf(),
        })
    }

    fn write_file(&self, relation: &Relation, path: &Path) -> Result<usize, csv::Error> {
        let columns = relation.columns();
        let mut writer = Writer::from_path(path)?;

        if !columns.is_empty() {
            writer.write_record(&columns)?;
        }

        for row in relation.rows() {
            writer.write_record(columns.iter().map(|column| render_cell(row.get(column))))?;
        }

        writer.flush()?;
        Ok(columns.len())
    }
}

impl TableSink for CsvSink {
    fn write_relation(&mut self, relation: &Relation) -> Result<WrittenRelation, ExportError> {
        let path = self.out_dir.join(format!("{}.csv", relation.name));

        let columns = self
            .write_file(relation, &path)
            .map_err(|err| ExportError::Write {
                relation: relation.name.to_string(),
                path: path.clone(),
                source: Box::new(err),
            })?;

        debug!(relation = relation.name, rows = relation.len(), path = %path.display(), "wrote csv");
        Ok(WrittenRelation { path, columns })
    }
}
