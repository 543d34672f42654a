use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::LongFormat;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubArgs,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Log per-label decisions (RUST_LOG overrides)"
    )]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum SubArgs {
    /// Reorder sample columns of count tables by sample type and tissue.
    #[command(name = "group")]
    Group {
        #[command(flatten)]
        args: GroupArgs,
    },
    /// Reshape count tables into long (sample, target) records.
    #[command(name = "reshape")]
    Reshape {
        #[command(flatten)]
        args: ReshapeArgs,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct ShapeArgs {
    #[arg(
        long = "metadata",
        value_name = "COLUMNS",
        value_delimiter = ',',
        num_args = 1..,
        help = "Fixed descriptor columns [default: Chr,Start,End,Length,Strand]"
    )]
    pub metadata: Vec<String>,

    #[arg(
        long = "input-sep",
        value_name = "SEP",
        default_value = "\t",
        help = "Separator used in the input files"
    )]
    pub input_sep: String,

    #[arg(
        long = "params",
        value_name = "PATH",
        help = "JSON file with samples/tissues/controls/targets lists"
    )]
    pub params: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GroupArgs {
    #[arg(required = true, value_name = "PATHS", num_args = 1.., help = "Count tables to group")]
    pub paths: Vec<PathBuf>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = "results",
        help = "Path to the output dir"
    )]
    pub output: PathBuf,

    #[arg(
        short = 's',
        long = "sep",
        value_name = "SEP",
        default_value = "\t",
        help = "Separator used in the output file"
    )]
    pub sep: String,

    #[arg(short = 'm', long = "mouse", alias = "sample", value_name = "TYPE", help = "Sample types, in output order")]
    pub sample: Vec<String>,

    #[arg(short = 't', long = "tissue", value_name = "TISSUE", help = "Tissue types, in output order")]
    pub tissue: Vec<String>,

    #[arg(short = 'c', long = "control", value_name = "CONTROL", help = "Control markers; always grouped last")]
    pub control: Vec<String>,

    #[command(flatten)]
    pub shape: ShapeArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ReshapeArgs {
    #[arg(required = true, value_name = "FILES", num_args = 1.., help = "Count tables to reshape")]
    pub files: Vec<PathBuf>,

    #[arg(short = 's', long = "sample", value_name = "TYPE", help = "Sample type names")]
    pub sample: Vec<String>,

    #[arg(short = 't', long = "target", value_name = "FEATURE", help = "Feature ids used as targets, exactly as in the table")]
    pub target: Vec<String>,

    #[arg(short = 'c', long = "control", value_name = "CONTROL", help = "Control sample names")]
    pub control: Vec<String>,

    #[arg(short = 'T', long = "tissue", value_name = "TISSUE", help = "Accepted tissue names [default: any]")]
    pub tissue: Vec<String>,

    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "GROUPS",
        default_value_t = 3,
        help = "Label fields: 3 = lib_sample_tissue, 2 = sample_tissue"
    )]
    pub pattern: u8,

    #[arg(
        short = 'o',
        long = "outdir",
        value_name = "DIR",
        default_value = "results",
        help = "Path to the output dir"
    )]
    pub outdir: PathBuf,

    #[arg(long = "format", value_enum, default_value_t = LongFormat::Tsv, help = "Long table format")]
    pub format: LongFormat,

    #[arg(long = "exclude-controls", help = "Drop control rows from the output")]
    pub exclude_controls: bool,

    #[arg(long = "drop-unclassified", help = "Drop rows whose sample type is unknown")]
    pub drop_unclassified: bool,

    #[arg(long = "strict-labels", help = "Abort on labels that match no pattern")]
    pub strict_labels: bool,

    #[command(flatten)]
    pub shape: ShapeArgs,
}
