use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::input::InputError;
use crate::pipeline::stage3_reshape::LongCountTable;
use crate::report::format_count;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LongFormat {
    Tsv,
    Json,
}

impl LongFormat {
    pub fn extension(self) -> &'static str {
        match self {
            LongFormat::Tsv => "long.tsv",
            LongFormat::Json => "long.json",
        }
    }
}

pub const LONG_HEADER: [&str; 7] = [
    "row_id",
    "library",
    "sample",
    "tissue",
    "is_control",
    "target",
    "counts",
];

pub fn write_long_table(
    table: &LongCountTable,
    path: &Path,
    format: LongFormat,
) -> Result<(), InputError> {
    let mut file = BufWriter::new(File::create(path)?);
    match format {
        LongFormat::Tsv => {
            let mut w = WriterBuilder::new().delimiter(b'\t').from_writer(file);
            w.write_record(LONG_HEADER)?;
            for r in &table.records {
                w.write_record([
                    r.row_id.as_str(),
                    r.library.as_deref().unwrap_or(""),
                    r.sample.as_deref().unwrap_or(""),
                    r.tissue.as_deref().unwrap_or(""),
                    if r.is_control { "true" } else { "false" },
                    r.target.as_str(),
                    format_count(r.counts).as_str(),
                ])?;
            }
            w.flush()?;
        }
        LongFormat::Json => {
            serde_json::to_writer_pretty(&mut file, &table.records)?;
            file.write_all(b"\n")?;
            file.flush()?;
        }
    }

    tracing::info!(
        file = %path.display(),
        records = table.len(),
        "wrote long table"
    );
    Ok(())
}
