use std::collections::{BTreeMap, BTreeSet};

use crate::model::CoreError;

/// Ordered reference terms. Position drives both first-match priority and rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    upper: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vocabulary::default();
        let mut seen = BTreeSet::new();
        for term in terms {
            let term = term.as_ref().trim();
            if term.is_empty() {
                return Err(CoreError::Configuration(
                    "vocabulary contains a blank term".to_string(),
                ));
            }
            let upper = term.to_uppercase();
            if !seen.insert(upper.clone()) {
                return Err(CoreError::Configuration(format!(
                    "vocabulary term '{term}' is listed more than once"
                )));
            }
            out.terms.push(term.to_string());
            out.upper.push(upper);
        }
        Ok(out)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// First term (in vocabulary order) contained in `label`, ignoring case.
    pub fn priority_match(&self, label: &str) -> Option<&str> {
        let label = label.to_uppercase();
        self.upper
            .iter()
            .position(|term| label.contains(term.as_str()))
            .map(|idx| self.terms[idx].as_str())
    }

    /// 1-based rank of `term`, or `None` when it is not part of the vocabulary.
    pub fn rank_of(&self, term: &str) -> Option<u32> {
        self.terms
            .iter()
            .position(|t| t == term)
            .map(|idx| idx as u32 + 1)
    }

    pub fn weight_table(&self) -> Result<WeightTable, CoreError> {
        if self.terms.is_empty() {
            return Err(CoreError::Configuration(
                "cannot weight an empty vocabulary".to_string(),
            ));
        }
        let weights = self
            .terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx as u32 + 1))
            .collect();
        Ok(WeightTable { weights })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    weights: BTreeMap<String, u32>,
}

impl WeightTable {
    pub fn get(&self, term: &str) -> Option<u32> {
        self.weights.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/vocab.rs"]
mod tests;
