use crate::input::WideCountTable;
use crate::label::classify;
use crate::model::{CoreError, SortKey, Vocabulary, WeightTable};

pub const CONTROL_RANK: u32 = 999;
pub const UNCLASSIFIED_RANK: u32 = 0;

#[derive(Debug, Clone)]
pub struct ColumnRanker {
    sample: Vocabulary,
    tissue: Vocabulary,
    control: Vocabulary,
    sample_weights: WeightTable,
    tissue_weights: WeightTable,
    multiplier: u32,
}

impl ColumnRanker {
    pub fn new(
        sample: Vocabulary,
        tissue: Vocabulary,
        control: Vocabulary,
    ) -> Result<Self, CoreError> {
        let sample_weights = sample.weight_table()?;
        let tissue_weights = tissue.weight_table()?;
        let multiplier = tissue_multiplier(tissue.len());
        Ok(Self {
            sample,
            tissue,
            control,
            sample_weights,
            tissue_weights,
            multiplier,
        })
    }

    pub fn sort_key(&self, column_label: &str) -> SortKey {
        if classify(column_label, &self.control).is_some() {
            return SortKey::Control;
        }
        let sample = classify(column_label, &self.sample).and_then(|t| self.sample_weights.get(t));
        let tissue = classify(column_label, &self.tissue).and_then(|t| self.tissue_weights.get(t));
        match (sample, tissue) {
            (Some(sample), Some(tissue)) => SortKey::Ranked { sample, tissue },
            _ => {
                tracing::debug!(column = column_label, "column not classified; ranked first");
                SortKey::Unclassified
            }
        }
    }

    /// Fused integer form of [`ColumnRanker::sort_key`].
    pub fn rank(&self, column_label: &str) -> u32 {
        match self.sort_key(column_label) {
            SortKey::Unclassified => UNCLASSIFIED_RANK,
            SortKey::Ranked { sample, tissue } => sample * self.multiplier + tissue,
            SortKey::Control => self.control_rank(),
        }
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn control_rank(&self) -> u32 {
        let above_ranked = (self.sample.len() as u32 + 1) * self.multiplier;
        CONTROL_RANK.max(above_ranked)
    }

    /// Stable ascending order of `labels` by sort key, as source indices.
    pub fn column_order(&self, labels: &[String]) -> Vec<usize> {
        let keys: Vec<SortKey> = labels.iter().map(|l| self.sort_key(l)).collect();
        let mut order: Vec<usize> = (0..labels.len()).collect();
        order.sort_by_key(|&idx| keys[idx]);
        order
    }
}

/// Smallest power of ten (at least 10) strictly above the tissue count.
fn tissue_multiplier(n_tissues: usize) -> u32 {
    let mut m = 10u32;
    while (m as usize) <= n_tissues {
        m *= 10;
    }
    m
}

pub fn rank(
    column_label: &str,
    sample: &Vocabulary,
    tissue: &Vocabulary,
    control: &Vocabulary,
) -> Result<u32, CoreError> {
    let ranker = ColumnRanker::new(sample.clone(), tissue.clone(), control.clone())?;
    Ok(ranker.rank(column_label))
}

pub fn run_stage2(table: &WideCountTable, ranker: &ColumnRanker) -> WideCountTable {
    let order = ranker.column_order(&table.sample_columns);
    let n_controls = order
        .iter()
        .filter(|&&idx| ranker.sort_key(&table.sample_columns[idx]) == SortKey::Control)
        .count();
    tracing::info!(
        samples = order.len(),
        controls = n_controls,
        "reordered sample columns"
    );
    table.with_sample_order(&order)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_rank.rs"]
mod tests;
