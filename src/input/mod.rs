use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;
pub mod table;

pub use table::{DEFAULT_METADATA_COLUMNS, TableLayout, WideCountTable, load_count_table};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Fails on the first path that does not exist, before any file is read.
pub fn check_inputs(paths: &[PathBuf]) -> Result<(), InputError> {
    for path in paths {
        if !path.exists() {
            return Err(InputError::MissingInput(format!(
                "file {} was not found",
                path.display()
            )));
        }
    }
    Ok(())
}

/// File name without a trailing `.gz`, e.g. `counts.tsv.gz` -> `counts.tsv`.
pub fn plain_file_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "counts.tsv".to_string());
    match name.strip_suffix(".gz") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => name,
    }
}

/// File name with `.gz` and the last extension removed.
pub fn file_stem(path: &Path) -> String {
    let name = plain_file_name(path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
