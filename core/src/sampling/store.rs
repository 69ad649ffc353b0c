use std::collections::BTreeMap;
use std::sync::Mutex;

use hashbrown::HashMap;

use super::WorldStateSnapshot;
use crate::EntityId;
use crate::sync::lock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Appended. `died` marks an alive-to-dead transition since the last
    /// stored snapshot.
    Stored { died: bool },
    /// Within the displacement threshold with all status fields unchanged
    Skipped,
}

#[derive(Debug, Default)]
struct StoreInner {
    series: BTreeMap<EntityId, Vec<WorldStateSnapshot>>,
    last: HashMap<EntityId, WorldStateSnapshot>,
}

/// Per-entity snapshot series plus the "last stored" comparison cache, both
/// behind a single lock.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    inner: Mutex<StoreInner>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, snapshot: WorldStateSnapshot, threshold_squared: f32) -> RecordOutcome {
        let mut inner = lock(&self.inner);
        let died = match inner.last.get(&snapshot.entity_id) {
            Some(last) if !snapshot.differs_from(last, threshold_squared) => {
                return RecordOutcome::Skipped;
            }
            Some(last) => !last.status.live.is_dead && snapshot.status.live.is_dead,
            None => false,
        };

        inner.last.insert(snapshot.entity_id, snapshot);
        inner.series.entry(snapshot.entity_id).or_default().push(snapshot);
        RecordOutcome::Stored { died }
    }

    /// Forget the comparison cache only; stored series are kept.
    pub fn clear_last(&self) {
        lock(&self.inner).last.clear();
    }

    pub fn clear(&self) {
        let mut inner = lock(&self.inner);
        inner.series.clear();
        inner.last.clear();
    }

    pub fn series(&self, entity_id: EntityId) -> Vec<WorldStateSnapshot> {
        lock(&self.inner)
            .series
            .get(&entity_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Copy of every series, ordered by entity id.
    pub fn snapshot_series(&self) -> BTreeMap<EntityId, Vec<WorldStateSnapshot>> {
        lock(&self.inner).series.clone()
    }

    pub fn total_samples(&self) -> usize {
        lock(&self.inner).series.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.inner).series.is_empty()
    }
}
