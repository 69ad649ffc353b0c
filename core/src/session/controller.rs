use std::sync::Arc;

use chrono::Local;
use observer_types::{LiveFeedToggles, ObserverConfig};
use tokio::sync::mpsc::UnboundedReceiver;

use super::{MatchInfo, default_export_name};
use crate::capture::{CaptureLog, LiveFeed, LiveLine, LogEntry, LogRecord};
use crate::export::{ExportCodec, ExportInputs, ExportReport};
use crate::packets::{EventDispatcher, ObservedEvent, RawNotification};
use crate::provider::{GameStateProvider, SkillCatalog, StatusNotifier};
use crate::sampling::{SamplingLoop, SnapshotStore, TickReport};
use crate::stats::MatchStatistics;
use crate::timing::format_instance_time;
use crate::tracker::{ActionTracker, TrackerSinks};

/// What an instance load did to the session.
#[derive(Debug)]
pub enum SessionTransition {
    Entered { map_id: u32 },
    /// Observer mode ended. Carries the export report when auto-export ran.
    Exited { report: Option<ExportReport> },
    MapChanged { from: u32, to: u32 },
    Unchanged,
}

/// Top-level state machine: NotObserving ⇄ Observing, with a self-transition
/// when the observed map changes.
pub struct MatchSessionController {
    config: ObserverConfig,
    provider: Arc<dyn GameStateProvider>,
    notifier: Arc<dyn StatusNotifier>,

    stats: Arc<MatchStatistics>,
    log: Arc<CaptureLog>,
    snapshots: Arc<SnapshotStore>,
    sampler: SamplingLoop,

    dispatcher: EventDispatcher,
    tracker: ActionTracker,
    feed: LiveFeed,

    match_info: MatchInfo,
    observing: bool,
    /// Whether notifications reach the dispatcher
    attached: bool,
    export_name: String,
    codec: ExportCodec,
    /// When false, entering a session does not spawn the sampling thread and
    /// the caller drives [`sample_once`](Self::sample_once) itself
    background_sampling: bool,
}

impl MatchSessionController {
    pub fn new(
        config: ObserverConfig,
        provider: Arc<dyn GameStateProvider>,
        catalog: Arc<dyn SkillCatalog>,
        notifier: Arc<dyn StatusNotifier>,
    ) -> Self {
        let stats = Arc::new(MatchStatistics::new(catalog));
        let snapshots = Arc::new(SnapshotStore::new());
        let sampler = SamplingLoop::new(
            Arc::clone(&provider),
            Arc::clone(&stats),
            Arc::clone(&snapshots),
            config.sampling.clone(),
        );

        Self {
            feed: LiveFeed::new(config.live_feed.clone()),
            codec: ExportCodec::new(&config.export.captures_directory),
            config,
            provider,
            notifier,
            stats,
            log: Arc::new(CaptureLog::new()),
            snapshots,
            sampler,
            dispatcher: EventDispatcher::new(),
            tracker: ActionTracker::new(),
            match_info: MatchInfo::default(),
            observing: false,
            attached: false,
            export_name: String::new(),
            background_sampling: true,
        }
    }

    pub fn set_background_sampling(&mut self, enabled: bool) {
        self.background_sampling = enabled;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn is_sampling(&self) -> bool {
        self.sampler.is_running()
    }

    pub fn match_info(&self) -> &MatchInfo {
        &self.match_info
    }

    pub fn stats(&self) -> &Arc<MatchStatistics> {
        &self.stats
    }

    pub fn log(&self) -> &Arc<CaptureLog> {
        &self.log
    }

    pub fn snapshots(&self) -> &Arc<SnapshotStore> {
        &self.snapshots
    }

    pub fn tracker(&self) -> &ActionTracker {
        &self.tracker
    }

    pub fn export_name(&self) -> &str {
        &self.export_name
    }

    pub fn set_export_name(&mut self, name: impl Into<String>) {
        self.export_name = name.into();
    }

    pub fn subscribe_live(&mut self) -> UnboundedReceiver<LiveLine> {
        self.feed.subscribe()
    }

    pub fn set_live_toggles(&mut self, toggles: LiveFeedToggles) {
        self.config.live_feed = toggles.clone();
        self.feed.set_toggles(toggles);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// React to an instance load reported by the client.
    pub fn on_instance_load(&mut self, map_id: u32, is_observer: bool) -> SessionTransition {
        match (self.observing, is_observer) {
            (false, true) => {
                self.enter(map_id);
                SessionTransition::Entered { map_id }
            }
            (true, false) => SessionTransition::Exited {
                report: self.exit(),
            },
            (true, true) if map_id != self.match_info.map_id => {
                let from = self.match_info.map_id;
                self.change_map(map_id);
                SessionTransition::MapChanged { from, to: map_id }
            }
            _ => SessionTransition::Unchanged,
        }
    }

    fn reset_session_state(&mut self, map_id: u32) {
        self.stats.reset();
        self.log.clear();
        self.snapshots.clear();
        self.tracker.clear();
        self.match_info = MatchInfo::new(map_id);
        if let Some(now) = self.provider.instance_time_ms() {
            self.match_info.mark_observed_from(now);
        }
    }

    fn enter(&mut self, map_id: u32) {
        self.reset_session_state(map_id);
        if self.export_name.is_empty() {
            self.regenerate_export_name();
        }

        self.attached = true;
        self.observing = true;
        if self.background_sampling {
            self.sampler.start();
        }

        tracing::info!(map_id, export_name = %self.export_name, "observer session started");
        self.notifier
            .notify(&format!("Observer mode entered (map {map_id}), capturing"));
    }

    fn exit(&mut self) -> Option<ExportReport> {
        self.attached = false;
        self.tracker.clear();
        self.sampler.stop();
        self.observing = false;

        tracing::info!(
            map_id = self.match_info.map_id,
            entries = self.log.len(),
            samples = self.snapshots.total_samples(),
            "observer session ended"
        );
        self.notifier.notify("Observer mode ended");

        let mut report = None;
        if self.config.export.auto_export_on_match_end && self.export_name.trim().is_empty() {
            tracing::warn!("auto-export skipped: export name is empty");
            self.notifier.notify("Auto-export skipped: no export name set");
        } else if self.config.export.auto_export_on_match_end {
            let exported = self.export();
            self.notifier.notify(&format!(
                "Auto-export to {}: {}",
                exported.session_dir.display(),
                exported.summary()
            ));
            report = Some(exported);
        }
        if self.config.export.auto_regenerate_name {
            self.regenerate_export_name();
        }
        report
    }

    /// The observed map changed without leaving observer mode. Statistics
    /// and logs start over; sampling keeps running.
    fn change_map(&mut self, map_id: u32) {
        let from = self.match_info.map_id;
        self.reset_session_state(map_id);
        tracing::info!(from, to = map_id, "observed map changed");
        self.notifier
            .notify(&format!("Map changed ({from} -> {map_id}), statistics reset"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────────

    /// Feed one client notification through dispatch and tracking. Returns
    /// the log entry it produced, if any.
    pub fn handle_notification(&mut self, raw: &RawNotification) -> Option<LogEntry> {
        if !self.attached {
            return None;
        }
        let now = self.provider.instance_time_ms().unwrap_or(0);
        self.match_info.mark_observed_from(now);

        let Some(event) = self.dispatcher.classify(raw) else {
            return self.record_unrecognized(raw, now);
        };

        if let ObservedEvent::Milestone(milestone) = event
            && milestone.kind.is_victory()
            && self.match_info.record_end(now, milestone.team_id)
        {
            tracing::info!(winner = milestone.team_id, end_ms = now, "match ended");
            self.notifier.notify(&format!(
                "Match ended at {}: team {} wins",
                format_instance_time(now),
                milestone.team_id
            ));
        }

        let mut sinks = TrackerSinks {
            stats: &self.stats,
            log: &self.log,
            feed: &mut self.feed,
        };
        Some(self.tracker.handle(event, now, &mut sinks))
    }

    fn record_unrecognized(&mut self, raw: &RawNotification, now: u32) -> Option<LogEntry> {
        if !self.config.record_unrecognized {
            return None;
        }
        let (actor, recipient) = raw.participants();
        let entry = LogEntry::new(
            now,
            LogRecord::Unrecognized {
                value_id: raw.value_id(),
                actor,
                recipient,
            },
        );
        self.log.push(entry);
        self.feed.mirror(&entry);
        Some(entry)
    }

    /// Run one sampling tick on the calling thread.
    pub fn sample_once(&self) -> TickReport {
        self.sampler.sample_once()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────

    pub fn export(&self) -> ExportReport {
        self.export_as(&self.export_name)
    }

    pub fn export_as(&self, name: &str) -> ExportReport {
        let inputs = ExportInputs {
            match_info: &self.match_info,
            stats: &self.stats,
            log: &self.log,
            snapshots: &self.snapshots,
        };
        let report = self.codec.export(name, &inputs);
        for artifact in report.artifacts() {
            self.notifier
                .notify(&format!("{} export: {}", artifact.artifact, artifact.status()));
        }
        if !report.any_succeeded() {
            self.notifier.notify("Export failed: nothing was written");
        }
        report
    }

    pub fn regenerate_export_name(&mut self) {
        self.export_name = default_export_name(self.match_info.map_id, Local::now().naive_local());
        self.notifier
            .notify(&format!("Export name set to {}", self.export_name));
    }

    /// Drop captured log entries and snapshots, keeping the roster.
    pub fn clear_logs(&mut self) {
        self.log.clear();
        self.snapshots.clear();
        self.tracker.clear();
        self.notifier.notify("Logs cleared");
    }
}

impl Drop for MatchSessionController {
    fn drop(&mut self) {
        self.sampler.stop();
    }
}
