use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("parse error: label '{label}' has no delimiter-separated segments")]
    Parse { label: String },
    #[error("missing column: '{column}' is not present in the table")]
    MissingColumn { column: String },
    #[error("invalid label pattern: {0}")]
    Pattern(#[from] regex::Error),
}
