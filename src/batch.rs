use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::models::ParsedResume;
use crate::parser;

/// One file in a batch request: where it lives on disk, the name it was
/// uploaded under, and its declared media type.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub original_name: String,
    pub media_type: String,
}

impl BatchEntry {
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        original_name: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            original_name: original_name.into(),
            media_type: media_type.into(),
        }
    }
}

/// Closed per-file result: exactly one of `data`/`error` is populated,
/// tagged by `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkParseOutcome {
    pub success: bool,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ParsedResume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BulkParseOutcome {
    #[must_use]
    pub fn parsed(file_name: String, data: ParsedResume) -> Self {
        Self {
            success: true,
            file_name,
            data: Some(data),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(file_name: String, error: String) -> Self {
        Self {
            success: false,
            file_name,
            data: None,
            error: Some(error),
        }
    }
}

/// Parse every file in the batch independently.
///
/// A failure on one file is captured in its outcome and never aborts the
/// rest. Files are processed in parallel; the indexed collect keeps the
/// output position equal to the input position.
#[must_use]
pub fn parse_batch(entries: &[BatchEntry]) -> Vec<BulkParseOutcome> {
    info!(files = entries.len(), "parsing batch");
    entries
        .par_iter()
        .map(|entry| match parser::parse_document(&entry.path, &entry.media_type) {
            Ok(data) => BulkParseOutcome::parsed(entry.original_name.clone(), data),
            Err(e) => {
                warn!(file = %entry.original_name, error = %e, "batch item failed");
                BulkParseOutcome::failed(entry.original_name.clone(), e.to_string())
            }
        })
        .collect()
}
