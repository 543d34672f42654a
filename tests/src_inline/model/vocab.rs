use super::*;

#[test]
fn test_weight_table_follows_input_order() {
    let vocab = Vocabulary::new(["WT", "YAC", "KI"]).unwrap();
    let weights = vocab.weight_table().unwrap();
    assert_eq!(weights.len(), 3);
    assert_eq!(weights.get("WT"), Some(1));
    assert_eq!(weights.get("YAC"), Some(2));
    assert_eq!(weights.get("KI"), Some(3));
    let mut ranks: Vec<u32> = weights.iter().map(|(_, w)| w).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn test_weight_table_large_vocabulary_is_contiguous() {
    let terms: Vec<String> = (0..25).map(|i| format!("T{i:02}")).collect();
    let vocab = Vocabulary::new(&terms).unwrap();
    let weights = vocab.weight_table().unwrap();
    for (i, term) in terms.iter().enumerate() {
        assert_eq!(weights.get(term), Some(i as u32 + 1));
        assert_eq!(vocab.rank_of(term), Some(i as u32 + 1));
    }
}

#[test]
fn test_empty_vocabulary_cannot_be_weighted() {
    let vocab = Vocabulary::empty();
    assert!(matches!(
        vocab.weight_table(),
        Err(CoreError::Configuration(_))
    ));
}

#[test]
fn test_duplicate_and_blank_terms_rejected() {
    assert!(matches!(
        Vocabulary::new(["WT", "wt"]),
        Err(CoreError::Configuration(_))
    ));
    assert!(matches!(
        Vocabulary::new(["WT", "  "]),
        Err(CoreError::Configuration(_))
    ));
}

#[test]
fn test_rank_of_unknown_term() {
    let vocab = Vocabulary::new(["WT"]).unwrap();
    assert_eq!(vocab.rank_of("KI"), None);
}
