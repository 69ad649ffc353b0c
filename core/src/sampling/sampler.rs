use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use observer_types::SamplingSettings;

use super::{RecordOutcome, SnapshotStore, WorldStateSnapshot};
use crate::provider::GameStateProvider;
use crate::stats::{Counter, MatchStatistics};

/// What one tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// `None` when no instance was loaded and the tick was skipped
    pub instance_time_ms: Option<u32>,
    pub roster: usize,
    pub guilds_resolved: usize,
    pub sampled: usize,
    pub stored: usize,
    pub deaths: usize,
}

struct SamplerShared {
    provider: Arc<dyn GameStateProvider>,
    stats: Arc<MatchStatistics>,
    store: Arc<SnapshotStore>,
    settings: SamplingSettings,
    running: AtomicBool,
}

impl SamplerShared {
    fn tick(&self) -> TickReport {
        let Some(now) = self.provider.instance_time_ms() else {
            return TickReport::default();
        };
        let mut report = TickReport {
            instance_time_ms: Some(now),
            ..Default::default()
        };

        // 1. Roster and guilds
        for identity in self.provider.party_members() {
            let guild_id = identity.guild_id;
            self.stats.upsert_identity(identity);
            report.roster += 1;

            if guild_id != 0
                && !self.stats.has_guild(guild_id)
                && let Some(guild) = self.provider.guild(guild_id)
                && self.stats.insert_guild(guild)
            {
                tracing::debug!(guild_id, "guild resolved");
                report.guilds_resolved += 1;
            }
        }

        // 2. Snapshots
        let threshold_squared = self.settings.threshold_squared();
        for agent in self.provider.entities() {
            let live = self.provider.live_status(agent.entity_id).unwrap_or_default();
            let snapshot = WorldStateSnapshot::capture(now, &agent, live);
            report.sampled += 1;

            if let RecordOutcome::Stored { died } = self.store.record(snapshot, threshold_squared) {
                report.stored += 1;
                if died {
                    self.stats.increment(agent.entity_id, Counter::Deaths);
                    report.deaths += 1;
                    tracing::debug!(entity_id = agent.entity_id, instance_time_ms = now, "entity died");
                }
            }
        }

        report
    }
}

/// Background sampler. One per controller; started on session entry and
/// stopped on exit.
pub struct SamplingLoop {
    shared: Arc<SamplerShared>,
    handle: Option<JoinHandle<()>>,
}

impl SamplingLoop {
    pub fn new(
        provider: Arc<dyn GameStateProvider>,
        stats: Arc<MatchStatistics>,
        store: Arc<SnapshotStore>,
        settings: SamplingSettings,
    ) -> Self {
        Self {
            shared: Arc::new(SamplerShared {
                provider,
                stats,
                store,
                settings,
                running: AtomicBool::new(false),
            }),
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some() && self.shared.running.load(Ordering::Acquire)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.shared.settings.interval_ms.max(1))
    }

    /// Spawn the sampling thread. Returns false when it was already running
    /// or could not be spawned.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        // a previous thread may still be winding down
        self.join();

        self.shared.running.store(true, Ordering::Release);
        let shared = Arc::clone(&self.shared);
        let interval = self.interval();

        let spawned = thread::Builder::new()
            .name("observer-sampler".to_string())
            .spawn(move || {
                tracing::debug!(interval_ms = interval.as_millis() as u64, "sampling started");
                loop {
                    shared.tick();
                    thread::sleep(interval);
                    if !shared.running.load(Ordering::Acquire) {
                        break;
                    }
                }
                tracing::debug!("sampling stopped");
            });

        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                true
            }
            Err(e) => {
                self.shared.running.store(false, Ordering::Release);
                tracing::warn!(error = %e, "failed to spawn sampling thread");
                false
            }
        }
    }

    /// Signal the thread, wait for it, and drop the last-stored cache so a
    /// later session does not compare against stale state.
    pub fn stop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        self.join();
        self.shared.store.clear_last();
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("sampling thread panicked");
        }
    }

    /// Run one tick on the calling thread.
    pub fn sample_once(&self) -> TickReport {
        self.shared.tick()
    }
}

impl Drop for SamplingLoop {
    fn drop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        self.join();
    }
}
