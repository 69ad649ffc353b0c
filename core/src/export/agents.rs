//! Per-entity snapshot series, one compressed file per entity id.

use std::collections::BTreeMap;
use std::path::Path;

use super::compress::{ensure_dir, write_gzip_lines};
use super::{ArtifactOutcome, ExportError};
use crate::EntityId;
use crate::sampling::WorldStateSnapshot;

pub const ARTIFACT: &str = "Agents";

pub fn agent_file_name(entity_id: EntityId) -> String {
    format!("{entity_id}.txt.gz")
}

pub fn write_agent_series(dir: &Path, series: &BTreeMap<EntityId, Vec<WorldStateSnapshot>>) -> ArtifactOutcome {
    if series.values().all(Vec::is_empty) {
        return ArtifactOutcome::failed(ARTIFACT, ExportError::NothingToExport { artifact: ARTIFACT });
    }
    if let Err(e) = ensure_dir(dir) {
        return ArtifactOutcome::failed(ARTIFACT, e);
    }

    let mut outcome = ArtifactOutcome::new(ARTIFACT);
    for (entity_id, snapshots) in series.iter().filter(|(_, s)| !s.is_empty()) {
        let lines: Vec<String> = snapshots.iter().map(WorldStateSnapshot::export_line).collect();
        let path = dir.join(agent_file_name(*entity_id));
        let result = write_gzip_lines(&path, &lines);
        outcome.record(path, result);
    }
    outcome
}
