use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cli::{GroupArgs, ReshapeArgs, ShapeArgs};
use crate::input::{InputError, TableLayout};
use crate::model::{CoreError, FieldLayout, Vocabulary};
use crate::pipeline::stage1_annotate::MalformedLabelPolicy;
use crate::pipeline::stage3_reshape::RowFilter;
use crate::report::LongFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid separator '{0}': must be a single byte")]
    Separator(String),
    #[error("missing value: {0}")]
    Missing(&'static str),
}

/// Lists read from `--params`. Non-empty command-line lists win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParamsFile {
    pub samples: Vec<String>,
    pub tissues: Vec<String>,
    pub controls: Vec<String>,
    pub targets: Vec<String>,
    pub metadata_columns: Vec<String>,
}

pub fn load_params(path: &Path) -> Result<ParamsFile, InputError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn prefer(cli: Vec<String>, file: &[String]) -> Vec<String> {
    if cli.is_empty() {
        file.to_vec()
    } else {
        cli
    }
}

pub fn parse_separator(raw: &str) -> Result<u8, ConfigError> {
    let sep = match raw {
        "\\t" | "tab" => "\t",
        other => other,
    };
    match sep.as_bytes() {
        [b] => Ok(*b),
        _ => Err(ConfigError::Separator(raw.to_string())),
    }
}

fn resolve_shape(shape: &ShapeArgs) -> Result<(ParamsFile, TableLayout), ConfigError> {
    let params = match &shape.params {
        Some(path) => load_params(path)?,
        None => ParamsFile::default(),
    };
    let mut layout = TableLayout {
        delimiter: parse_separator(&shape.input_sep)?,
        ..TableLayout::default()
    };
    let metadata = prefer(shape.metadata.clone(), &params.metadata_columns);
    if !metadata.is_empty() {
        layout.metadata_columns = metadata;
    }
    Ok((params, layout))
}

#[derive(Debug, Clone)]
pub struct GroupConfig {
    pub paths: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub delimiter: u8,
    pub input: TableLayout,
    pub sample: Vocabulary,
    pub tissue: Vocabulary,
    pub control: Vocabulary,
}

impl GroupConfig {
    pub fn from_args(args: GroupArgs) -> Result<Self, ConfigError> {
        let (params, input) = resolve_shape(&args.shape)?;
        Ok(Self {
            paths: args.paths,
            out_dir: args.output,
            delimiter: parse_separator(&args.sep)?,
            input,
            sample: Vocabulary::new(prefer(args.sample, &params.samples))?,
            tissue: Vocabulary::new(prefer(args.tissue, &params.tissues))?,
            control: Vocabulary::new(prefer(args.control, &params.controls))?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReshapeConfig {
    pub files: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub input: TableLayout,
    pub layout: FieldLayout,
    pub sample: Vocabulary,
    pub tissue: Vocabulary,
    pub control: Vocabulary,
    pub targets: Vec<String>,
    pub format: LongFormat,
    pub filter: RowFilter,
    pub malformed: MalformedLabelPolicy,
}

impl ReshapeConfig {
    pub fn from_args(args: ReshapeArgs) -> Result<Self, ConfigError> {
        let (params, input) = resolve_shape(&args.shape)?;
        let targets = prefer(args.target, &params.targets);
        if targets.is_empty() {
            return Err(ConfigError::Missing("at least one --target is required"));
        }
        Ok(Self {
            files: args.files,
            out_dir: args.outdir,
            input,
            layout: FieldLayout::from_field_count(args.pattern)?,
            sample: Vocabulary::new(prefer(args.sample, &params.samples))?,
            tissue: Vocabulary::new(prefer(args.tissue, &params.tissues))?,
            control: Vocabulary::new(prefer(args.control, &params.controls))?,
            targets,
            format: args.format,
            filter: RowFilter {
                exclude_controls: args.exclude_controls,
                drop_unclassified: args.drop_unclassified,
            },
            malformed: if args.strict_labels {
                MalformedLabelPolicy::Abort
            } else {
                MalformedLabelPolicy::Skip
            },
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config/tests.rs"]
mod tests;
