use crate::TeamId;
use crate::timing::format_instance_time;

/// Scalar facts about the observed match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchInfo {
    pub map_id: u32,
    /// Instance time when observation of this map began
    pub observed_from_ms: Option<u32>,
    pub end_time_ms: Option<u32>,
    pub winner_team: Option<TeamId>,
}

impl MatchInfo {
    pub const fn new(map_id: u32) -> Self {
        Self {
            map_id,
            observed_from_ms: None,
            end_time_ms: None,
            winner_team: None,
        }
    }

    /// Keeps the earliest value.
    pub fn mark_observed_from(&mut self, instance_time_ms: u32) {
        if self.observed_from_ms.is_none() {
            self.observed_from_ms = Some(instance_time_ms);
        }
    }

    /// Record the match end. Only the first victory counts; a flawless
    /// announcement that follows the plain one is ignored.
    pub fn record_end(&mut self, instance_time_ms: u32, winner: TeamId) -> bool {
        if self.end_time_ms.is_some() {
            return false;
        }
        self.end_time_ms = Some(instance_time_ms);
        self.winner_team = Some(winner);
        true
    }

    pub const fn is_finished(&self) -> bool {
        self.end_time_ms.is_some()
    }

    pub fn end_time_formatted(&self) -> Option<String> {
        self.end_time_ms.map(format_instance_time)
    }

    /// Match length as reported by the instance clock.
    pub const fn duration_raw_ms(&self) -> Option<u32> {
        self.end_time_ms
    }

    /// Match length measured from when observation began.
    pub fn duration_adjusted_ms(&self) -> Option<u32> {
        self.end_time_ms
            .map(|end| end.saturating_sub(self.observed_from_ms.unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_measure_from_observation_start() {
        let mut info = MatchInfo::new(5);
        info.mark_observed_from(10_000);
        info.mark_observed_from(20_000);
        assert!(info.record_end(70_000, 2));
        assert_eq!(info.duration_raw_ms(), Some(70_000));
        assert_eq!(info.duration_adjusted_ms(), Some(60_000));
        assert_eq!(info.end_time_formatted().as_deref(), Some("01:10.000"));
    }

    #[test]
    fn first_victory_wins() {
        let mut info = MatchInfo::new(5);
        assert!(info.record_end(1_000, 1));
        assert!(!info.record_end(1_200, 2));
        assert_eq!(info.winner_team, Some(1));
        assert_eq!(info.end_time_ms, Some(1_000));
    }

    #[test]
    fn unfinished_match_has_no_durations() {
        let info = MatchInfo::new(5);
        assert!(!info.is_finished());
        assert_eq!(info.duration_adjusted_ms(), None);
        assert_eq!(info.end_time_formatted(), None);
    }
}
