use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_countgroup_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

const FEATURE_COUNTS: &str = "# Program:featureCounts v2.0.1\n\
Geneid\tChr\tStart\tEnd\tStrand\tLength\tlib1_WT_Cortex\tlib1_NTC\n\
g1\tchr1\t1\t100\t+\t100\t5\t0\n\
g2\tchr2\t10\t50\t-\t41\t7\t1\n";

#[test]
fn test_load_feature_counts_table() {
    let dir = make_temp_dir();
    let path = dir.join("counts.tsv");
    write_file(&path, FEATURE_COUNTS);

    let table = load_count_table(&path, &TableLayout::default()).unwrap();
    assert_eq!(table.index_name, "Geneid");
    assert_eq!(table.metadata_columns, vec!["Chr", "Start", "End", "Strand", "Length"]);
    assert_eq!(table.sample_columns, vec!["lib1_WT_Cortex", "lib1_NTC"]);
    assert_eq!(table.feature_ids, vec!["g1", "g2"]);
    assert_eq!(table.metadata[1], vec!["chr2", "10", "50", "-", "41"]);
    assert_eq!(table.counts, vec![vec![5.0, 0.0], vec![7.0, 1.0]]);
}

#[test]
fn test_load_gz_table() {
    let dir = make_temp_dir();
    let path = dir.join("counts.tsv.gz");
    write_gz(&path, FEATURE_COUNTS);

    let table = load_count_table(&path, &TableLayout::default()).unwrap();
    assert_eq!(table.n_features(), 2);
    assert_eq!(table.n_samples(), 2);
}

#[test]
fn test_missing_metadata_columns_are_tolerated() {
    let dir = make_temp_dir();
    let path = dir.join("small.csv");
    write_file(&path, "Geneid,Length,WT_Cortex\ng1,10,3\n");

    let layout = TableLayout {
        delimiter: b',',
        ..TableLayout::default()
    };
    let table = load_count_table(&path, &layout).unwrap();
    assert_eq!(table.metadata_columns, vec!["Length"]);
    assert_eq!(table.sample_columns, vec!["WT_Cortex"]);
}

#[test]
fn test_non_numeric_count_is_parse_error() {
    let dir = make_temp_dir();
    let path = dir.join("bad.tsv");
    write_file(&path, "Geneid\tChr\tWT_Cortex\ng1\tchr1\tmany\n");

    let err = load_count_table(&path, &TableLayout::default()).unwrap_err();
    assert!(matches!(err, InputError::Parse(msg) if msg.contains("many")));
}

#[test]
fn test_table_without_samples_rejected() {
    let dir = make_temp_dir();
    let path = dir.join("meta_only.tsv");
    write_file(&path, "Geneid\tChr\tLength\ng1\tchr1\t10\n");

    let err = load_count_table(&path, &TableLayout::default()).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_check_inputs_reports_missing_file() {
    let dir = make_temp_dir();
    let present = dir.join("present.tsv");
    write_file(&present, FEATURE_COUNTS);
    let absent = dir.join("absent.tsv");

    assert!(check_inputs(&[present.clone()]).is_ok());
    let err = check_inputs(&[present, absent]).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(msg) if msg.contains("absent.tsv")));
}

#[test]
fn test_output_names() {
    assert_eq!(plain_file_name(Path::new("/x/counts.tsv.gz")), "counts.tsv");
    assert_eq!(plain_file_name(Path::new("counts.tsv")), "counts.tsv");
    assert_eq!(file_stem(Path::new("/x/run1.counts.tsv.gz")), "run1.counts");
    assert_eq!(file_stem(Path::new("table")), "table");
}

#[test]
fn test_with_sample_order() {
    let dir = make_temp_dir();
    let path = dir.join("order.tsv");
    write_file(&path, FEATURE_COUNTS);
    let table = load_count_table(&path, &TableLayout::default()).unwrap();
    let swapped = table.with_sample_order(&[1, 0]);
    assert_eq!(swapped.sample_columns, vec!["lib1_NTC", "lib1_WT_Cortex"]);
    assert_eq!(swapped.counts[1], vec![1.0, 7.0]);
}
