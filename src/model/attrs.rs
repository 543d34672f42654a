use crate::model::CoreError;

pub const CONTROL_TISSUE: &str = "control";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAttributes {
    pub library: Option<String>,
    pub sample: Option<String>,
    pub tissue: Option<String>,
    pub is_control: bool,
}

impl ParsedAttributes {
    pub fn unclassified() -> Self {
        Self::default()
    }

    pub fn is_classified(&self) -> bool {
        self.sample.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    /// `<library>_<sample>_<tissue>`
    LibrarySampleTissue,
    /// `<sample>_<tissue>`
    SampleTissue,
}

impl FieldLayout {
    pub fn from_field_count(n: u8) -> Result<Self, CoreError> {
        match n {
            3 => Ok(FieldLayout::LibrarySampleTissue),
            2 => Ok(FieldLayout::SampleTissue),
            other => Err(CoreError::Configuration(format!(
                "unsupported field count {other} (use 2 or 3)"
            ))),
        }
    }

    pub fn field_count(self) -> u8 {
        match self {
            FieldLayout::LibrarySampleTissue => 3,
            FieldLayout::SampleTissue => 2,
        }
    }
}

/// Column ordering key. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Unclassified,
    Ranked { sample: u32, tissue: u32 },
    Control,
}
