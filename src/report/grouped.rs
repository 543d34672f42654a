use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::WriterBuilder;

use crate::input::{InputError, WideCountTable};
use crate::report::format_count;

pub fn write_grouped_table(
    table: &WideCountTable,
    path: &Path,
    delimiter: u8,
) -> Result<(), InputError> {
    let file = BufWriter::new(File::create(path)?);
    let mut w = WriterBuilder::new().delimiter(delimiter).from_writer(file);

    let mut header = Vec::with_capacity(1 + table.metadata_columns.len() + table.n_samples());
    header.push(table.index_name.as_str());
    header.extend(table.metadata_columns.iter().map(String::as_str));
    header.extend(table.sample_columns.iter().map(String::as_str));
    w.write_record(&header)?;

    for (row, id) in table.feature_ids.iter().enumerate() {
        let mut record = Vec::with_capacity(header.len());
        record.push(id.clone());
        record.extend(table.metadata[row].iter().cloned());
        record.extend(table.counts[row].iter().map(|&v| format_count(v)));
        w.write_record(&record)?;
    }
    w.flush()?;

    tracing::info!(file = %path.display(), "wrote grouped table");
    Ok(())
}
