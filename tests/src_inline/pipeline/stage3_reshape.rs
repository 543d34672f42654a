use super::*;

fn attrs(library: &str, sample: &str, tissue: &str, is_control: bool) -> ParsedAttributes {
    ParsedAttributes {
        library: Some(library.to_string()),
        sample: Some(sample.to_string()),
        tissue: Some(tissue.to_string()),
        is_control,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn annotated() -> AnnotatedTable {
    AnnotatedTable {
        row_ids: strings(&["lib1_WT_Cortex", "lib1_YAC_Liver", "lib1_NTC"]),
        attributes: vec![
            attrs("lib1", "WT", "CORTEX", false),
            attrs("lib1", "YAC", "LIVER", false),
            attrs("lib1", "NTC", "control", true),
        ],
        columns: strings(&["PA1", "PA2", "other"]),
        values: vec![
            vec![10.0, 20.0, 0.0],
            vec![11.0, 21.0, 0.0],
            vec![0.0, 1.0, 0.0],
        ],
    }
}

#[test]
fn test_reshape_cardinality_and_order() {
    let table = annotated();
    let long = reshape(&table, &strings(&["PA1", "PA2"])).unwrap();
    assert_eq!(long.len(), table.n_rows() * 2);

    let targets: Vec<&str> = long.records.iter().map(|r| r.target.as_str()).collect();
    assert_eq!(targets, vec!["PA1", "PA1", "PA1", "PA2", "PA2", "PA2"]);
    let rows: Vec<&str> = long.records.iter().map(|r| r.row_id.as_str()).collect();
    assert_eq!(&rows[..3], &rows[3..]);
    assert_eq!(rows[0], "lib1_WT_Cortex");
}

#[test]
fn test_reshape_block_counts_match_source_column() {
    let table = annotated();
    let long = reshape(&table, &strings(&["PA2", "PA1"])).unwrap();
    let pa1: Vec<f64> = long.block("PA1").map(|r| r.counts).collect();
    let pa2: Vec<f64> = long.block("PA2").map(|r| r.counts).collect();
    assert_eq!(pa1, vec![10.0, 11.0, 0.0]);
    assert_eq!(pa2, vec![20.0, 21.0, 1.0]);
    assert_eq!(long.records[0].target, "PA2");
}

#[test]
fn test_reshape_carries_attributes() {
    let long = reshape(&annotated(), &strings(&["PA1"])).unwrap();
    let ctrl = &long.records[2];
    assert_eq!(ctrl.library.as_deref(), Some("lib1"));
    assert_eq!(ctrl.sample.as_deref(), Some("NTC"));
    assert_eq!(ctrl.tissue.as_deref(), Some("control"));
    assert!(ctrl.is_control);
}

#[test]
fn test_reshape_blocks_are_independent() {
    let mut long = reshape(&annotated(), &strings(&["PA1", "PA2"])).unwrap();
    long.records[0].counts = 999.0;
    long.records[0].sample = Some("changed".to_string());
    let pa2: Vec<&LongRecord> = long.block("PA2").collect();
    assert_eq!(pa2[0].counts, 20.0);
    assert_eq!(pa2[0].sample.as_deref(), Some("WT"));
}

#[test]
fn test_reshape_missing_target_fails_first() {
    let err = reshape(&annotated(), &strings(&["PA1", "absent"])).unwrap_err();
    assert!(matches!(err, CoreError::MissingColumn { column } if column == "absent"));
}

#[test]
fn test_reshape_no_targets_is_empty() {
    let long = reshape(&annotated(), &[]).unwrap();
    assert!(long.is_empty());
}

#[test]
fn test_filter_controls_and_unclassified() {
    let mut table = annotated();
    table.attributes[1] = ParsedAttributes::unclassified();
    let mut long = reshape(&table, &strings(&["PA1", "PA2"])).unwrap();
    long.apply_filter(RowFilter {
        exclude_controls: true,
        drop_unclassified: true,
    });
    assert_eq!(long.len(), 2);
    assert!(long.records.iter().all(|r| r.row_id == "lib1_WT_Cortex"));
    assert_eq!(long.records[0].target, "PA1");
    assert_eq!(long.records[1].target, "PA2");
}

#[test]
fn test_from_samples_transposes() {
    let wide = WideCountTable {
        index_name: "Geneid".to_string(),
        feature_ids: strings(&["PA1", "PA2"]),
        metadata_columns: Vec::new(),
        metadata: vec![Vec::new(), Vec::new()],
        sample_columns: strings(&["WT_Cortex", "YAC_Liver", "KI_Cortex"]),
        counts: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
    };
    let attributes = vec![ParsedAttributes::unclassified(); 3];
    let table = AnnotatedTable::from_samples(&wide, attributes);
    assert_eq!(table.row_ids, wide.sample_columns);
    assert_eq!(table.columns, wide.feature_ids);
    assert_eq!(table.values, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);

    let long = run_stage3(
        &wide,
        vec![ParsedAttributes::unclassified(); 3],
        &strings(&["PA2"]),
        RowFilter::default(),
    )
    .unwrap();
    let counts: Vec<f64> = long.records.iter().map(|r| r.counts).collect();
    assert_eq!(counts, vec![4.0, 5.0, 6.0]);
}
