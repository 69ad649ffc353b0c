//! Categorized event logs, one compressed file per non-empty category.

use std::collections::BTreeMap;
use std::path::Path;

use super::compress::{ensure_dir, write_gzip_lines};
use super::{ArtifactOutcome, ExportError};
use crate::capture::{LogCategory, LogEntry};

pub const ARTIFACT: &str = "StoC";

pub fn events_file_name(category: LogCategory) -> String {
    format!("{}_events.txt.gz", category.file_stem())
}

/// Split entries by category, preserving arrival order within each, and
/// render them without category markers. Categories with no entries are
/// absent from the result.
pub fn partition(entries: &[LogEntry]) -> BTreeMap<LogCategory, Vec<String>> {
    let mut buckets: BTreeMap<LogCategory, Vec<String>> = BTreeMap::new();
    for entry in entries {
        buckets
            .entry(entry.category())
            .or_default()
            .push(entry.export_line());
    }
    buckets
}

pub fn write_event_logs(dir: &Path, entries: &[LogEntry]) -> ArtifactOutcome {
    if entries.is_empty() {
        return ArtifactOutcome::failed(ARTIFACT, ExportError::NothingToExport { artifact: ARTIFACT });
    }
    if let Err(e) = ensure_dir(dir) {
        return ArtifactOutcome::failed(ARTIFACT, e);
    }

    let mut outcome = ArtifactOutcome::new(ARTIFACT);
    for (category, lines) in partition(entries) {
        let path = dir.join(events_file_name(category));
        let result = write_gzip_lines(&path, &lines);
        outcome.record(path, result);
    }
    outcome
}
