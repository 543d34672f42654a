use serde::Serialize;

use crate::input::WideCountTable;
use crate::model::{CoreError, ParsedAttributes};

/// Attribute-annotated rows with named count columns, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedTable {
    pub row_ids: Vec<String>,
    pub attributes: Vec<ParsedAttributes>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl AnnotatedTable {
    /// One row per sample column of `table`, one column per feature.
    pub fn from_samples(table: &WideCountTable, attributes: Vec<ParsedAttributes>) -> Self {
        debug_assert_eq!(attributes.len(), table.n_samples());
        let values = (0..table.n_samples())
            .map(|s| table.counts.iter().map(|row| row[s]).collect())
            .collect();
        Self {
            row_ids: table.sample_columns.clone(),
            attributes,
            columns: table.feature_ids.clone(),
            values,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.row_ids.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRecord {
    pub row_id: String,
    pub library: Option<String>,
    pub sample: Option<String>,
    pub tissue: Option<String>,
    pub is_control: bool,
    pub target: String,
    pub counts: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LongCountTable {
    pub records: Vec<LongRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowFilter {
    pub exclude_controls: bool,
    pub drop_unclassified: bool,
}

impl RowFilter {
    fn keeps(&self, record: &LongRecord) -> bool {
        if self.exclude_controls && record.is_control {
            return false;
        }
        if self.drop_unclassified && record.sample.is_none() {
            return false;
        }
        true
    }
}

impl LongCountTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn block(&self, target: &str) -> impl Iterator<Item = &LongRecord> {
        self.records.iter().filter(move |r| r.target == target)
    }

    pub fn apply_filter(&mut self, filter: RowFilter) {
        let before = self.records.len();
        self.records.retain(|r| filter.keeps(r));
        if self.records.len() != before {
            tracing::info!(
                dropped = before - self.records.len(),
                kept = self.records.len(),
                "filtered long table rows"
            );
        }
    }
}

/// Target-major pivot: block `t` holds every row with column `t` as `counts`.
/// Every target is checked before any record is built.
pub fn reshape(table: &AnnotatedTable, targets: &[String]) -> Result<LongCountTable, CoreError> {
    let mut target_idx = Vec::with_capacity(targets.len());
    for target in targets {
        let idx = table
            .column_index(target)
            .ok_or_else(|| CoreError::MissingColumn {
                column: target.clone(),
            })?;
        target_idx.push(idx);
    }

    let mut records = Vec::with_capacity(table.n_rows() * targets.len());
    for (target, &col) in targets.iter().zip(&target_idx) {
        for (row, attrs) in table.attributes.iter().enumerate() {
            records.push(LongRecord {
                row_id: table.row_ids[row].clone(),
                library: attrs.library.clone(),
                sample: attrs.sample.clone(),
                tissue: attrs.tissue.clone(),
                is_control: attrs.is_control,
                target: target.clone(),
                counts: table.values[row][col],
            });
        }
    }

    Ok(LongCountTable { records })
}

pub fn run_stage3(
    table: &WideCountTable,
    attributes: Vec<ParsedAttributes>,
    targets: &[String],
    filter: RowFilter,
) -> Result<LongCountTable, CoreError> {
    let annotated = AnnotatedTable::from_samples(table, attributes);
    let mut long = reshape(&annotated, targets)?;
    tracing::info!(
        rows = annotated.n_rows(),
        targets = targets.len(),
        records = long.len(),
        "reshaped to long format"
    );
    long.apply_filter(filter);
    Ok(long)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_reshape.rs"]
mod tests;
