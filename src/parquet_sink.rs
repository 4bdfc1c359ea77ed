use polars::prelude::ParquetWriter;
use polars::prelude::*;
use serde_json::Value;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ExportError;
use crate::relation::{Relation, render_cell};
use crate::sink::{TableSink, WrittenRelation};

/// Writes each relation as `<relation>.parquet` under one directory.
pub struct ParquetSink {
    out_dir: PathBuf,
}

impl ParquetSink {
    pub fn new(out_dir: &Path) -> Result<Self, ExportError> {
        fs::create_dir_all(out_dir).map_err(|source| ExportError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            out_dir: out_dir.to_path_buf(),
        })
    }
}

impl TableSink for ParquetSink {
    fn write_relation(&mut self, relation: &Relation) -> Result<WrittenRelation, ExportError> {
        let path = self.out_dir.join(format!("{}.parquet", relation.name));
        let mut df = build_dataframe(relation).map_err(|err| write_error(relation, &path, err))?;
        let mut file = File::create(&path).map_err(|err| write_error(relation, &path, err))?;
        ParquetWriter::new(&mut file)
            .finish(&mut df)
            .map_err(|err| write_error(relation, &path, err))?;

        debug!(relation = relation.name, rows = relation.len(), path = %path.display(), "wrote parquet");
        Ok(WrittenRelation {
            path,
            columns: df.width(),
        })
    }
}

fn write_error(
    relation: &Relation,
    path: &Path,
    err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> ExportError {
    ExportError::Write {
        relation: relation.name.to_string(),
        path: path.to_path_buf(),
        source: err.into(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    UInt,
    Float,
    Bool,
    Text,
}

fn infer_kind(cells: &[Option<&Value>]) -> ColumnKind {
    let present: Vec<&Value> = cells
        .iter()
        .flatten()
        .copied()
        .filter(|v| !v.is_null())
        .collect();

    if present.is_empty() {
        ColumnKind::Text
    } else if present.iter().all(|v| v.is_i64()) {
        ColumnKind::Int
    } else if present.iter().all(|v| v.is_u64()) {
        ColumnKind::UInt
    } else if present.iter().all(|v| v.is_number()) && present.iter().any(|v| v.is_f64()) {
        ColumnKind::Float
    } else if present.iter().all(|v| v.is_boolean()) {
        ColumnKind::Bool
    } else {
        ColumnKind::Text
    }
}

fn build_dataframe(relation: &Relation) -> Result<DataFrame, PolarsError> {
    let mut columns: Vec<Series> = Vec::new();

    for name in relation.columns() {
        let cells: Vec<Option<&Value>> = relation.rows().iter().map(|row| row.get(&name)).collect();

        let series = match infer_kind(&cells) {
            ColumnKind::Int => {
                let values: Vec<Option<i64>> =
                    cells.iter().map(|c| c.and_then(|v| v.as_i64())).collect();
                Series::new(&name, values)
            }
            ColumnKind::UInt => {
                let values: Vec<Option<u64>> =
                    cells.iter().map(|c| c.and_then(|v| v.as_u64())).collect();
                Series::new(&name, values)
            }
            ColumnKind::Float => {
                let values: Vec<Option<f64>> =
                    cells.iter().map(|c| c.and_then(|v| v.as_f64())).collect();
                Series::new(&name, values)
            }
            ColumnKind::Bool => {
                let values: Vec<Option<bool>> =
                    cells.iter().map(|c| c.and_then(|v| v.as_bool())).collect();
                Series::new(&name, values)
            }
            ColumnKind::Text => {
                let values: Vec<Option<String>> = cells
                    .iter()
                    .map(|c| c.filter(|v| !v.is_null()).map(|v| render_cell(Some(v))))
                    .collect();
                Series::new(&name, values)
            }
        };

        columns.push(series);
    }

    DataFrame::new(columns)
}
