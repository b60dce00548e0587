use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use colmatch_cli::workflow::{compare, load_store, preview_rows, resolve_format, write_export};
use colmatch_model::{FuzzyThreshold, MatchOptions};
use colmatch_report::ExportFormat;

use crate::cli::{MatchArgs, OutputFormatArg, ShowArgs, SourceArgs};
use crate::summary::{print_match_details, print_match_summary, print_rows, print_sheets};

pub fn run_sheets(args: &SourceArgs) -> Result<()> {
    let store = load_store(&args.sources)?;
    let datasets = store.datasets();
    let refs: Vec<_> = datasets.iter().map(Arc::as_ref).collect();
    print_sheets(&refs);
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let store = load_store(&args.source.sources)?;
    let dataset = store
        .get(&args.sheet)
        .with_context(|| format!("show sheet {}", args.sheet))?;
    let rows = preview_rows(&dataset, args.limit);
    print_rows(&dataset, &rows);
    Ok(())
}

pub fn run_match(args: &MatchArgs) -> Result<()> {
    let threshold =
        FuzzyThreshold::new(i64::from(args.threshold)).context("invalid --threshold")?;
    let options = MatchOptions::default()
        .with_fuzzy(args.fuzzy)
        .with_threshold(threshold);

    let store = load_store(&args.source.sources)?;
    let export = compare(&store, &args.left, &args.right, options)?;

    print_match_summary(&export);
    if args.details {
        print_match_details(&export.groups);
    }
    if let Some(output) = &args.output {
        let format = resolve_format(args.format.map(export_format), output);
        write_export(&export, output, format)?;
        println!("Output: {}", output.display());
    }
    info!(matches = export.summary.total_matches(), "match command done");
    Ok(())
}

fn export_format(arg: OutputFormatArg) -> ExportFormat {
    match arg {
        OutputFormatArg::Json => ExportFormat::Json,
        OutputFormatArg::Csv => ExportFormat::Csv,
    }
}
