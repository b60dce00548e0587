//! Load, compare and export steps shared by the commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use colmatch_ingest::{DatasetStore, load_sources};
use colmatch_map::MatchEngine;
use colmatch_model::{Dataset, MatchGroup, MatchOptions, RowNumber};
use colmatch_report::{ExportFormat, MatchExport, write_to_path};

use crate::logging::redact_value;

/// Loads every source into a fresh store.
pub fn load_store(sources: &[PathBuf]) -> Result<DatasetStore> {
    let datasets = load_sources(sources).context("load sources")?;
    Ok(DatasetStore::from_datasets(datasets))
}

/// Matches dataset `left` against dataset `right` and packages the result.
pub fn compare(
    store: &DatasetStore,
    left: &str,
    right: &str,
    options: MatchOptions,
) -> Result<MatchExport> {
    let span = info_span!("compare", dataset1 = %left, dataset2 = %right);
    let _guard = span.enter();
    let start = Instant::now();

    let (dataset_a, dataset_b) = store
        .pair(left, right)
        .with_context(|| format!("look up datasets {left} and {right}"))?;
    let run = MatchEngine::new(options).run(&dataset_a, &dataset_b);
    let summary = run.summary();
    let groups = run.into_groups();
    log_records(&groups);

    info!(
        groups = summary.groups,
        matches = summary.total_matches(),
        duration_ms = start.elapsed().as_millis(),
        "comparison finished"
    );
    Ok(MatchExport::new(
        dataset_a.name.clone(),
        dataset_b.name.clone(),
        options,
        summary,
        groups,
    ))
}

fn log_records(groups: &[MatchGroup]) {
    for group in groups {
        for record in &group.matches {
            trace!(
                header1 = %group.header1,
                header2 = %group.header2,
                row1 = record.row_a.get(),
                row2 = record.row_b.get(),
                value1 = redact_value(&record.value_a),
                value2 = redact_value(&record.value_b),
                kind = record.kind().as_str(),
                "match record"
            );
        }
    }
}

/// Picks the export format: explicit choice, then the output extension, then JSON.
pub fn resolve_format(explicit: Option<ExportFormat>, output: &Path) -> ExportFormat {
    explicit
        .or_else(|| ExportFormat::from_path(output))
        .unwrap_or(ExportFormat::Json)
}

/// Writes `export` to `output`.
pub fn write_export(export: &MatchExport, output: &Path, format: ExportFormat) -> Result<()> {
    write_to_path(output, format, export)
        .with_context(|| format!("write export to {}", output.display()))?;
    info!(path = %output.display(), ?format, "export written");
    Ok(())
}

/// The first `limit` data rows of `dataset` with their source row numbers.
pub fn preview_rows(dataset: &Dataset, limit: usize) -> Vec<(RowNumber, &[String])> {
    dataset
        .rows
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, row)| (RowNumber::from_index(index), row.as_slice()))
        .collect()
}
