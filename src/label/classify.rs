use crate::model::{CoreError, Vocabulary, WeightTable};

pub fn weight_table(vocabulary: &Vocabulary) -> Result<WeightTable, CoreError> {
    vocabulary.weight_table()
}

/// Returns the first vocabulary term found in `label`. Vocabularies with
/// overlapping terms must be given most-specific first.
pub fn classify<'v>(label: &str, vocabulary: &'v Vocabulary) -> Option<&'v str> {
    vocabulary.priority_match(label)
}

#[cfg(test)]
#[path = "../../tests/src_inline/label/classify.rs"]
mod tests;
