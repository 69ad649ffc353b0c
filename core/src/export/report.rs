use std::fmt;
use std::path::PathBuf;

use super::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// Every file written
    Ok,
    /// Some files written, some failed
    Partial,
    Failed,
    /// Nothing to write
    Empty,
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArtifactStatus::Ok => "OK",
            ArtifactStatus::Partial => "PARTIAL",
            ArtifactStatus::Failed => "FAIL",
            ArtifactStatus::Empty => "EMPTY",
        })
    }
}

/// Result of one sub-export (manifest, event logs or agent series).
#[derive(Debug)]
pub struct ArtifactOutcome {
    pub artifact: &'static str,
    pub written: Vec<PathBuf>,
    pub errors: Vec<ExportError>,
}

impl ArtifactOutcome {
    pub fn new(artifact: &'static str) -> Self {
        Self {
            artifact,
            written: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn failed(artifact: &'static str, error: ExportError) -> Self {
        Self {
            artifact,
            written: Vec::new(),
            errors: vec![error],
        }
    }

    pub fn record(&mut self, path: PathBuf, result: Result<(), ExportError>) {
        match result {
            Ok(()) => self.written.push(path),
            Err(e) => self.errors.push(e),
        }
    }

    pub fn status(&self) -> ArtifactStatus {
        let nothing_to_do = self
            .errors
            .iter()
            .all(|e| matches!(e, ExportError::NothingToExport { .. }));
        match (self.written.is_empty(), self.errors.is_empty()) {
            (false, true) => ArtifactStatus::Ok,
            (false, false) => ArtifactStatus::Partial,
            (true, _) if nothing_to_do => ArtifactStatus::Empty,
            (true, _) => ArtifactStatus::Failed,
        }
    }

    pub fn succeeded(&self) -> bool {
        !self.written.is_empty()
    }
}

/// Outcome of a full export, one entry per artifact.
#[derive(Debug)]
pub struct ExportReport {
    pub session_dir: PathBuf,
    pub infos: ArtifactOutcome,
    pub events: ArtifactOutcome,
    pub agents: ArtifactOutcome,
}

impl ExportReport {
    pub fn artifacts(&self) -> [&ArtifactOutcome; 3] {
        [&self.infos, &self.events, &self.agents]
    }

    pub fn any_succeeded(&self) -> bool {
        self.artifacts().iter().any(|a| a.succeeded())
    }

    /// `Infos: OK, StoC: EMPTY, Agents: OK`
    pub fn summary(&self) -> String {
        self.artifacts()
            .iter()
            .map(|a| format!("{}: {}", a.artifact, a.status()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn files_written(&self) -> usize {
        self.artifacts().iter().map(|a| a.written.len()).sum()
    }
}
