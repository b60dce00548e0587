//! The export document: run metadata, summary and groups.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use colmatch_model::{DatasetName, MatchGroup, MatchOptions, MatchSummary};

/// Metadata describing how an export was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMeta {
    pub tool_version: String,
    pub generated_at: String,
    pub dataset1: DatasetName,
    pub dataset2: DatasetName,
    pub options: MatchOptions,
}

/// Complete result of one comparison, ready to be written out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchExport {
    pub meta: ExportMeta,
    pub summary: MatchSummary,
    pub groups: Vec<MatchGroup>,
}

impl MatchExport {
    pub fn new(
        dataset1: DatasetName,
        dataset2: DatasetName,
        options: MatchOptions,
        summary: MatchSummary,
        groups: Vec<MatchGroup>,
    ) -> Self {
        Self {
            meta: ExportMeta {
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                dataset1,
                dataset2,
                options,
            },
            summary,
            groups,
        }
    }
}
