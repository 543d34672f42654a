use std::path::Path;

use csv::ReaderBuilder;

use crate::input::InputError;
use crate::input::reader::open_maybe_gz;

pub const DEFAULT_METADATA_COLUMNS: &[&str] = &["Chr", "Start", "End", "Length", "Strand"];

#[derive(Debug, Clone)]
pub struct TableLayout {
    pub delimiter: u8,
    pub metadata_columns: Vec<String>,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            metadata_columns: DEFAULT_METADATA_COLUMNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Feature-by-sample count matrix. `metadata` and `counts` are row-major and
/// aligned with `feature_ids`.
#[derive(Debug, Clone, PartialEq)]
pub struct WideCountTable {
    pub index_name: String,
    pub feature_ids: Vec<String>,
    pub metadata_columns: Vec<String>,
    pub metadata: Vec<Vec<String>>,
    pub sample_columns: Vec<String>,
    pub counts: Vec<Vec<f64>>,
}

impl WideCountTable {
    pub fn n_features(&self) -> usize {
        self.feature_ids.len()
    }

    pub fn n_samples(&self) -> usize {
        self.sample_columns.len()
    }

    /// Same table with sample columns permuted. `order[i]` is the source index
    /// of output column `i`.
    pub fn with_sample_order(&self, order: &[usize]) -> WideCountTable {
        let sample_columns = order
            .iter()
            .map(|&idx| self.sample_columns[idx].clone())
            .collect();
        let counts = self
            .counts
            .iter()
            .map(|row| order.iter().map(|&idx| row[idx]).collect())
            .collect();
        WideCountTable {
            index_name: self.index_name.clone(),
            feature_ids: self.feature_ids.clone(),
            metadata_columns: self.metadata_columns.clone(),
            metadata: self.metadata.clone(),
            sample_columns,
            counts,
        }
    }
}

pub fn load_count_table(path: &Path, layout: &TableLayout) -> Result<WideCountTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .comment(Some(b'#'))
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        return Err(InputError::Parse(format!(
            "{} has fewer than 2 columns",
            path.display()
        )));
    }

    let index_name = headers[0].trim().to_string();
    let mut metadata_idx = Vec::new();
    let mut sample_idx = Vec::new();
    for (idx, name) in headers.iter().enumerate().skip(1) {
        let name = name.trim();
        if layout.metadata_columns.iter().any(|m| m == name) {
            metadata_idx.push(idx);
        } else {
            sample_idx.push(idx);
        }
    }
    for wanted in &layout.metadata_columns {
        if !headers.iter().skip(1).any(|h| h.trim() == wanted) {
            tracing::warn!(
                column = %wanted,
                file = %path.display(),
                "metadata column not found; skipping"
            );
        }
    }
    if sample_idx.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "{} has no sample columns",
            path.display()
        )));
    }

    let metadata_columns = metadata_idx
        .iter()
        .map(|&i| headers[i].trim().to_string())
        .collect();
    let sample_columns = sample_idx
        .iter()
        .map(|&i| headers[i].trim().to_string())
        .collect();

    let mut feature_ids = Vec::new();
    let mut metadata = Vec::new();
    let mut counts = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line_no = record.position().map(|p| p.line()).unwrap_or(0);
        let id = record.get(0).unwrap_or("").trim();
        if id.is_empty() {
            tracing::warn!(line = line_no, "row has an empty feature id; skipping");
            continue;
        }

        let meta_row = metadata_idx
            .iter()
            .map(|&i| record.get(i).unwrap_or("").trim().to_string())
            .collect();

        let mut count_row = Vec::with_capacity(sample_idx.len());
        for &i in &sample_idx {
            let raw = record.get(i).unwrap_or("").trim();
            let value = raw.parse::<f64>().map_err(|_| {
                InputError::Parse(format!(
                    "non-numeric count '{}' at line {}, column {}",
                    raw,
                    line_no,
                    &headers[i]
                ))
            })?;
            count_row.push(value);
        }

        feature_ids.push(id.to_string());
        metadata.push(meta_row);
        counts.push(count_row);
    }

    tracing::info!(
        file = %path.display(),
        features = feature_ids.len(),
        samples = sample_idx.len(),
        "loaded count table"
    );

    Ok(WideCountTable {
        index_name,
        feature_ids,
        metadata_columns,
        metadata,
        sample_columns,
        counts,
    })
}
