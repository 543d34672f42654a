use crate::label::LabelParser;
use crate::model::{CoreError, ParsedAttributes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLabelPolicy {
    /// Keep the label as unclassified and carry on.
    Skip,
    Abort,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub attributes: Vec<ParsedAttributes>,
    pub n_controls: usize,
    pub n_unclassified: usize,
    pub malformed: Vec<String>,
}

pub fn run_stage1(
    labels: &[String],
    parser: &LabelParser,
    policy: MalformedLabelPolicy,
) -> Result<Stage1Output, CoreError> {
    let mut attributes = Vec::with_capacity(labels.len());
    let mut malformed = Vec::new();

    for label in labels {
        match parser.parse(label) {
            Ok(attrs) => attributes.push(attrs),
            Err(err @ CoreError::Parse { .. }) => {
                if policy == MalformedLabelPolicy::Abort {
                    return Err(err);
                }
                tracing::warn!(%label, "label does not match any pattern; left unclassified");
                malformed.push(label.clone());
                attributes.push(ParsedAttributes::unclassified());
            }
            Err(err) => return Err(err),
        }
    }

    let n_controls = attributes.iter().filter(|a| a.is_control).count();
    let n_unclassified = attributes
        .iter()
        .filter(|a| !a.is_control && !a.is_classified())
        .count();

    tracing::info!(
        labels = labels.len(),
        controls = n_controls,
        unclassified = n_unclassified,
        malformed = malformed.len(),
        "annotated sample labels"
    );

    Ok(Stage1Output {
        attributes,
        n_controls,
        n_unclassified,
        malformed,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_annotate.rs"]
mod tests;
