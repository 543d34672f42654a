use std::path::Path;

use clap::Parser;

use kira_countgroup::cli::{Args, SubArgs};
use kira_countgroup::config::{GroupConfig, ReshapeConfig};
use kira_countgroup::input::{check_inputs, file_stem, load_count_table, plain_file_name};
use kira_countgroup::label::LabelParser;
use kira_countgroup::logging;
use kira_countgroup::pipeline::stage1_annotate::run_stage1;
use kira_countgroup::pipeline::stage2_rank::{ColumnRanker, run_stage2};
use kira_countgroup::pipeline::stage3_reshape::run_stage3;
use kira_countgroup::report::{ensure_output_dir, write_grouped_table, write_long_table};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);
    if let Err(err) = run(args) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let start = std::time::Instant::now();
    match args.command {
        SubArgs::Group { args } => {
            let config = GroupConfig::from_args(args).map_err(|e| e.to_string())?;
            run_group(&config)?;
        }
        SubArgs::Reshape { args } => {
            let config = ReshapeConfig::from_args(args).map_err(|e| e.to_string())?;
            run_reshape(&config)?;
        }
    }
    tracing::info!("done in {:.3?}", start.elapsed());
    Ok(())
}

fn run_group(config: &GroupConfig) -> Result<(), String> {
    check_inputs(&config.paths).map_err(|e| e.to_string())?;
    let ranker = ColumnRanker::new(
        config.sample.clone(),
        config.tissue.clone(),
        config.control.clone(),
    )
    .map_err(|e| e.to_string())?;
    tracing::info!(
        files = config.paths.len(),
        multiplier = ranker.multiplier(),
        "grouping files"
    );
    ensure_output_dir(&config.out_dir).map_err(|e| e.to_string())?;

    for path in &config.paths {
        let table = load_count_table(path, &config.input).map_err(|e| e.to_string())?;
        let grouped = run_stage2(&table, &ranker);
        let out_path = config.out_dir.join(plain_file_name(path));
        write_grouped_table(&grouped, &out_path, config.delimiter).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn run_reshape(config: &ReshapeConfig) -> Result<(), String> {
    check_inputs(&config.files).map_err(|e| e.to_string())?;
    let parser = LabelParser::new(
        config.sample.clone(),
        config.tissue.clone(),
        config.control.clone(),
        config.layout,
    )
    .map_err(|e| e.to_string())?;
    tracing::info!(
        files = config.files.len(),
        fields = config.layout.field_count(),
        targets = config.targets.len(),
        "reshaping files"
    );
    ensure_output_dir(&config.out_dir).map_err(|e| e.to_string())?;

    for path in &config.files {
        reshape_file(path, config, &parser)?;
    }
    Ok(())
}

fn reshape_file(path: &Path, config: &ReshapeConfig, parser: &LabelParser) -> Result<(), String> {
    let table = load_count_table(path, &config.input).map_err(|e| e.to_string())?;
    let stage1 =
        run_stage1(&table.sample_columns, parser, config.malformed).map_err(|e| e.to_string())?;
    let long = run_stage3(&table, stage1.attributes, &config.targets, config.filter)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let out_path = config
        .out_dir
        .join(format!("{}.{}", file_stem(path), config.format.extension()));
    write_long_table(&long, &out_path, config.format).map_err(|e| e.to_string())
}
