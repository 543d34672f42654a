use regex::Regex;

use crate::label::classify;
use crate::model::attrs::CONTROL_TISSUE;
use crate::model::{CoreError, FieldLayout, ParsedAttributes, Vocabulary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    LibrarySampleTissue,
    SampleTissue,
    LibraryControl,
    WholeLabelControl,
}

#[derive(Debug, Clone)]
struct LabelPattern {
    kind: PatternKind,
    regex: Option<Regex>,
}

impl LabelPattern {
    fn new(kind: PatternKind) -> Result<Self, CoreError> {
        let regex = match kind {
            PatternKind::LibrarySampleTissue => Some(Regex::new(r"^(.*)_(.*)_(.*)$")?),
            PatternKind::SampleTissue | PatternKind::LibraryControl => {
                Some(Regex::new(r"^(.*)_(.*)$")?)
            }
            PatternKind::WholeLabelControl => None,
        };
        Ok(Self { kind, regex })
    }

    fn attempt(&self, label: &str, vocabs: &ParserVocabs) -> Option<ParsedAttributes> {
        let Some(regex) = &self.regex else {
            // Single-field controls carry no library and no delimiter.
            let sample = classify(label, &vocabs.control)?;
            return Some(control_record(None, Some(sample)));
        };
        let caps = regex.captures(label)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("");

        match self.kind {
            PatternKind::LibrarySampleTissue => Some(experimental_record(
                Some(group(1)),
                group(2),
                group(3),
                vocabs,
            )),
            PatternKind::SampleTissue => {
                Some(experimental_record(None, group(1), group(2), vocabs))
            }
            PatternKind::LibraryControl => Some(control_record(
                Some(group(1)),
                classify(group(2), &vocabs.control),
            )),
            PatternKind::WholeLabelControl => None,
        }
    }
}

fn experimental_record(
    library: Option<&str>,
    sample: &str,
    tissue: &str,
    vocabs: &ParserVocabs,
) -> ParsedAttributes {
    let Some(sample) = classify(sample, &vocabs.sample) else {
        return ParsedAttributes::unclassified();
    };
    let tissue = if vocabs.tissue.is_empty() || classify(tissue, &vocabs.tissue).is_some() {
        Some(tissue.to_uppercase())
    } else {
        None
    };
    ParsedAttributes {
        library: library.map(str::to_string),
        sample: Some(sample.to_string()),
        tissue,
        is_control: false,
    }
}

fn control_record(library: Option<&str>, sample: Option<&str>) -> ParsedAttributes {
    ParsedAttributes {
        library: library.map(str::to_string),
        sample: sample.map(str::to_string),
        tissue: Some(CONTROL_TISSUE.to_string()),
        is_control: true,
    }
}

#[derive(Debug, Clone)]
struct ParserVocabs {
    sample: Vocabulary,
    tissue: Vocabulary,
    control: Vocabulary,
}

/// Decodes compound sample labels. Patterns are tried in order and the first
/// one that splits the label decides the record.
#[derive(Debug, Clone)]
pub struct LabelParser {
    layout: FieldLayout,
    patterns: Vec<LabelPattern>,
    vocabs: ParserVocabs,
}

impl LabelParser {
    pub fn new(
        sample: Vocabulary,
        tissue: Vocabulary,
        control: Vocabulary,
        layout: FieldLayout,
    ) -> Result<Self, CoreError> {
        if sample.is_empty() {
            return Err(CoreError::Configuration(
                "at least one sample type is required to parse labels".to_string(),
            ));
        }
        let kinds: &[PatternKind] = match layout {
            FieldLayout::LibrarySampleTissue => &[
                PatternKind::LibrarySampleTissue,
                PatternKind::LibraryControl,
            ],
            FieldLayout::SampleTissue => {
                &[PatternKind::SampleTissue, PatternKind::WholeLabelControl]
            }
        };
        let patterns = kinds
            .iter()
            .map(|&kind| LabelPattern::new(kind))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            layout,
            patterns,
            vocabs: ParserVocabs {
                sample,
                tissue,
                control,
            },
        })
    }

    pub fn layout(&self) -> FieldLayout {
        self.layout
    }

    pub fn parse(&self, label: &str) -> Result<ParsedAttributes, CoreError> {
        for pattern in &self.patterns {
            if let Some(attrs) = pattern.attempt(label, &self.vocabs) {
                tracing::debug!(label, kind = ?pattern.kind, ?attrs, "label parsed");
                return Ok(attrs);
            }
        }
        Err(CoreError::Parse {
            label: label.to_string(),
        })
    }
}

pub fn parse_label(
    label: &str,
    sample: &Vocabulary,
    tissue: &Vocabulary,
    control: &Vocabulary,
    field_count: u8,
) -> Result<ParsedAttributes, CoreError> {
    let layout = FieldLayout::from_field_count(field_count)?;
    LabelParser::new(sample.clone(), tissue.clone(), control.clone(), layout)?.parse(label)
}

#[cfg(test)]
#[path = "../../tests/src_inline/label/parser.rs"]
mod tests;
