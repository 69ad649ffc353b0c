//! Export codec
//!
//! Writes one session's accumulated state as a file tree:
//!
//! ```text
//! <captures>/<name>/infos.json
//! <captures>/<name>/StoC/<category>_events.txt.gz
//! <captures>/<name>/Agents/<entity-id>.txt.gz
//! ```
//!
//! The three artifacts are written independently. A filesystem error is
//! recorded against the artifact it hit and never stops the others.

pub mod agents;
mod compress;
mod error;
pub mod events;
pub mod manifest;
mod report;
pub mod text;


pub use compress::gzip;
pub use error::ExportError;
pub use manifest::Manifest;
pub use report::{ArtifactOutcome, ArtifactStatus, ExportReport};

use std::path::{Component, Path, PathBuf};

use crate::capture::CaptureLog;
use crate::sampling::SnapshotStore;
use crate::session::MatchInfo;
use crate::stats::MatchStatistics;

pub const STOC_DIR: &str = "StoC";
pub const AGENTS_DIR: &str = "Agents";

/// Everything an export reads. Only copies are taken from each source.
pub struct ExportInputs<'a> {
    pub match_info: &'a MatchInfo,
    pub stats: &'a MatchStatistics,
    pub log: &'a CaptureLog,
    pub snapshots: &'a SnapshotStore,
}

#[derive(Debug, Clone)]
pub struct ExportCodec {
    captures_root: PathBuf,
}

impl ExportCodec {
    pub fn new(captures_root: impl Into<PathBuf>) -> Self {
        Self {
            captures_root: captures_root.into(),
        }
    }

    pub fn session_dir(&self, name: &str) -> PathBuf {
        self.captures_root.join(name)
    }

    pub fn export(&self, name: &str, inputs: &ExportInputs<'_>) -> ExportReport {
        let session_dir = self.session_dir(name);
        if !is_folder_name(name) {
            tracing::warn!(name, "export skipped: invalid export name");
            let invalid = || ExportError::InvalidName {
                name: name.to_string(),
            };
            return ExportReport {
                session_dir,
                infos: ArtifactOutcome::failed(manifest::ARTIFACT, invalid()),
                events: ArtifactOutcome::failed(events::ARTIFACT, invalid()),
                agents: ArtifactOutcome::failed(agents::ARTIFACT, invalid()),
            };
        }

        let infos = manifest::write_manifest(&session_dir, inputs.match_info, inputs.stats);
        let events = events::write_event_logs(&session_dir.join(STOC_DIR), &inputs.log.entries());
        let agents = agents::write_agent_series(&session_dir.join(AGENTS_DIR), &inputs.snapshots.snapshot_series());

        let report = ExportReport {
            session_dir,
            infos,
            events,
            agents,
        };

        for artifact in report.artifacts() {
            for error in &artifact.errors {
                if !matches!(error, ExportError::NothingToExport { .. }) {
                    tracing::warn!(artifact = artifact.artifact, error = %error, "export artifact failed");
                }
            }
        }
        tracing::info!(
            path = %report.session_dir.display(),
            files = report.files_written(),
            summary = %report.summary(),
            "export finished"
        );
        report
    }
}

/// Exactly one normal path component, so the session folder always sits
/// directly under the captures root.
fn is_folder_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
