use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::error::ExportError;

/// One loosely-typed output row. Keys keep insertion order.
pub type Row = Map<String, Value>;

/// A named, fully materialized output table.
///
/// Rows are not required to share a column set. `columns` is the union of
/// the declared columns and every row's keys, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub name: &'static str,
    declared: Vec<String>,
    rows: Vec<Row>,
}

impl Relation {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            declared: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Declares the columns of `T` up front so an empty relation still
    /// carries its header.
    pub fn for_record<T: Serialize + Default>(name: &'static str) -> Self {
        let declared = match serde_json::to_value(T::default()) {
            Ok(Value::Object(map)) => map.into_iter().map(|(k, _)| k).collect(),
            _ => Vec::new(),
        };

        Self {
            name,
            declared,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Serializes a typed record into a row of this relation without
    /// appending it.
    pub fn record_row<T: Serialize>(&self, record: &T) -> Result<Row, ExportError> {
        match serde_json::to_value(record) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(ExportError::RowShape { relation: self.name }),
        }
    }

    /// Serializes a typed record and appends it as a row.
    pub fn push_record<T: Serialize>(&mut self, record: &T) -> Result<(), ExportError> {
        let row = self.record_row(record)?;
        self.rows.push(row);
        Ok(())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        let keys = self
            .declared
            .iter()
            .map(String::as_str)
            .chain(self.rows.iter().flat_map(|row| row.keys().map(String::as_str)));

        for key in keys {
            if seen.insert(key) {
                columns.push(key.to_string());
            }
        }

        columns
    }
}

/// Text form of a cell: null is empty, strings are verbatim, everything else
/// is compact JSON.
pub fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
