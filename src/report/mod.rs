use std::fs;
use std::path::Path;

use crate::input::InputError;

pub mod grouped;
pub mod long;

pub use grouped::write_grouped_table;
pub use long::{LongFormat, write_long_table};

pub fn ensure_output_dir(dir: &Path) -> Result<(), InputError> {
    if !dir.exists() {
        tracing::info!(dir = %dir.display(), "output dir not found; creating it");
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Counts are written without a trailing `.0` for whole numbers.
pub fn format_count(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
