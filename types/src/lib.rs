//! Shared configuration types for the match observer
//!
//! This crate contains the serializable settings shared between the
//! observer core (persistence, session policy) and front ends such as the CLI.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Export Policy
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPolicy {
    /// Export accumulated logs automatically when observer mode ends
    #[serde(default = "default_true")]
    pub auto_export_on_match_end: bool,
    /// Generate a fresh export name after each match ends
    #[serde(default = "default_true")]
    pub auto_regenerate_name: bool,
    /// Root directory that receives one folder per exported session
    #[serde(default = "default_captures_directory")]
    pub captures_directory: String,
}

fn default_true() -> bool {
    true
}

fn default_captures_directory() -> String {
    "captures".to_string()
}

impl Default for ExportPolicy {
    fn default() -> Self {
        Self {
            auto_export_on_match_end: true,
            auto_regenerate_name: true,
            captures_directory: default_captures_directory(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sampling
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_SAMPLING_INTERVAL_MS: u64 = 200;
pub const DEFAULT_POSITION_THRESHOLD: f32 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingSettings {
    /// Milliseconds between world-state samples
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Minimum displacement (world units) that forces a new sample
    #[serde(default = "default_position_threshold")]
    pub position_threshold: f32,
}

fn default_interval_ms() -> u64 {
    DEFAULT_SAMPLING_INTERVAL_MS
}

fn default_position_threshold() -> f32 {
    DEFAULT_POSITION_THRESHOLD
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_SAMPLING_INTERVAL_MS,
            position_threshold: DEFAULT_POSITION_THRESHOLD,
        }
    }
}

impl SamplingSettings {
    /// Squared displacement threshold, compared against squared distances
    pub fn threshold_squared(&self) -> f32 {
        self.position_threshold * self.position_threshold
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Live Feed
// ─────────────────────────────────────────────────────────────────────────────

/// Per-category toggles for mirroring log records to the live display channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveFeedToggles {
    /// Master switch - when false nothing is mirrored
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub skill: bool,
    #[serde(default = "default_true")]
    pub attack_skill: bool,
    #[serde(default = "default_true")]
    pub basic_attack: bool,
    #[serde(default = "default_true")]
    pub combat: bool,
    #[serde(default)]
    pub agent_movement: bool,
    #[serde(default = "default_true")]
    pub match_milestone: bool,
    #[serde(default)]
    pub unrecognized: bool,
}

impl Default for LiveFeedToggles {
    fn default() -> Self {
        Self {
            enabled: true,
            skill: true,
            attack_skill: true,
            basic_attack: true,
            combat: true,
            agent_movement: false,
            match_milestone: true,
            unrecognized: false,
        }
    }
}

impl LiveFeedToggles {
    /// Everything off, used by headless replays
    pub fn silent() -> Self {
        Self {
            enabled: false,
            skill: false,
            attack_skill: false,
            basic_attack: false,
            combat: false,
            agent_movement: false,
            match_milestone: false,
            unrecognized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Observer Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ObserverConfig {
    #[serde(default)]
    pub export: ExportPolicy,
    #[serde(default)]
    pub sampling: SamplingSettings,
    #[serde(default)]
    pub live_feed: LiveFeedToggles,
    /// Keep notifications with unknown value ids as `unrecognized` log entries
    #[serde(default)]
    pub record_unrecognized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_squared() {
        let settings = SamplingSettings {
            interval_ms: 100,
            position_threshold: 4.0,
        };
        assert_eq!(settings.threshold_squared(), 16.0);
    }

    #[test]
    fn defaults_enable_auto_export() {
        let config = ObserverConfig::default();
        assert!(config.export.auto_export_on_match_end);
        assert!(config.export.auto_regenerate_name);
        assert_eq!(config.export.captures_directory, "captures");
        assert_eq!(config.sampling.interval_ms, DEFAULT_SAMPLING_INTERVAL_MS);
        assert!(!config.record_unrecognized);
    }
}
