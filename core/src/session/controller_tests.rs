//! Session lifecycle tests

use std::sync::Arc;

use observer_types::ObserverConfig;
use tempfile::TempDir;

use crate::capture::{LogCategory, LogRecord};
use crate::packets::value_id::{self, jumbo_party, jumbo_type};
use crate::packets::RawNotification;
use crate::provider::{AgentPosition, MemoryProvider, RecordingNotifier, StaticSkillCatalog};
use crate::stats::{EntityIdentity, Guild};

use super::{MatchSessionController, SessionTransition};

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

struct Session {
    controller: MatchSessionController,
    provider: Arc<MemoryProvider>,
    notifier: Arc<RecordingNotifier>,
    _captures: TempDir,
}

fn session_with(configure: impl FnOnce(&mut ObserverConfig)) -> Session {
    let captures = TempDir::new().unwrap();
    let mut config = ObserverConfig::default();
    config.export.captures_directory = captures.path().to_string_lossy().into_owned();
    config.sampling.interval_ms = 5;
    configure(&mut config);

    let provider = Arc::new(MemoryProvider::new());
    provider.set_instance_time(Some(1_000));
    provider.set_party(vec![
        EntityIdentity {
            entity_id: 100,
            team_id: 1,
            max_hp: 480,
            guild_id: 4,
            ..Default::default()
        },
        EntityIdentity {
            entity_id: 200,
            team_id: 2,
            max_hp: 600,
            ..Default::default()
        },
    ]);
    provider.insert_guild(Guild {
        guild_id: 4,
        ..Default::default()
    });
    provider.set_agent(
        AgentPosition {
            entity_id: 100,
            x: 10.0,
            y: 10.0,
            ..Default::default()
        },
        None,
    );

    let notifier = Arc::new(RecordingNotifier::default());
    let controller = MatchSessionController::new(
        config,
        provider.clone(),
        Arc::new(StaticSkillCatalog::default()),
        notifier.clone(),
    );
    Session {
        controller,
        provider,
        notifier,
        _captures: captures,
    }
}

fn session() -> Session {
    session_with(|config| config.export.auto_export_on_match_end = false)
}

fn skill_activated(actor: u32, target: u32, skill: u32) -> RawNotification {
    RawNotification::GenericValueTarget {
        value_id: value_id::SKILL_ACTIVATED,
        caster_id: target,
        target_id: actor,
        value: skill,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Transitions
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn notifications_are_ignored_until_observing() {
    let mut s = session();
    assert!(s.controller.handle_notification(&skill_activated(100, 200, 50)).is_none());
    assert!(s.controller.log().is_empty());
}

#[test]
fn entering_starts_sampling_and_attaches() {
    let mut s = session();
    let transition = s.controller.on_instance_load(5, true);
    assert!(matches!(transition, SessionTransition::Entered { map_id: 5 }));
    assert!(s.controller.is_observing());
    assert!(s.controller.is_sampling());
    assert!(!s.controller.export_name().is_empty());

    // populate the roster deterministically
    s.controller.sample_once();
    assert!(s.controller.handle_notification(&skill_activated(100, 200, 50)).is_some());
    assert_eq!(s.controller.stats().entity(100).unwrap().used_skills, vec![50]);
    assert_eq!(s.controller.match_info().observed_from_ms, Some(1_000));
}

#[test]
fn repeated_observer_load_on_same_map_is_unchanged() {
    let mut s = session();
    s.controller.on_instance_load(5, true);
    assert!(matches!(s.controller.on_instance_load(5, true), SessionTransition::Unchanged));
    assert!(matches!(s.controller.on_instance_load(9, false), SessionTransition::Exited { .. }));
    assert!(matches!(s.controller.on_instance_load(9, false), SessionTransition::Unchanged));
}

#[test]
fn map_change_resets_stats_but_keeps_sampling() {
    let mut s = session();
    s.controller.on_instance_load(5, true);
    s.controller.sample_once();
    s.controller.handle_notification(&skill_activated(100, 200, 50));
    s.controller.stats().add_team_damage(1, 40);
    assert!(s.controller.stats().entity_count() > 0);
    assert!(s.controller.stats().has_guild(4));

    // no instance clock: background ticks return before touching the roster
    s.provider.set_instance_time(None);
    // let a tick already past the clock check finish
    std::thread::sleep(std::time::Duration::from_millis(20));
    let transition = s.controller.on_instance_load(7, true);
    assert!(matches!(transition, SessionTransition::MapChanged { from: 5, to: 7 }));

    assert!(s.controller.stats().snapshot_entities().is_empty());
    assert!(s.controller.stats().snapshot_guilds().is_empty());
    assert!(s.controller.stats().snapshot_team_damage().is_empty());
    assert!(s.controller.snapshots().is_empty());
    assert_eq!(s.controller.stats().team_damage(1), 0);
    assert!(s.controller.log().is_empty());
    assert!(s.controller.tracker().pending(100).is_none());
    assert!(s.controller.is_sampling());
    assert_eq!(s.controller.match_info().map_id, 7);
}

#[test]
fn exit_keeps_state_for_export() {
    let mut s = session();
    s.controller.on_instance_load(5, true);
    s.controller.sample_once();
    s.controller.handle_notification(&skill_activated(100, 200, 50));

    let transition = s.controller.on_instance_load(1, false);
    let SessionTransition::Exited { report } = transition else {
        panic!("expected exit");
    };
    assert!(report.is_none());
    assert!(!s.controller.is_sampling());
    assert!(!s.controller.is_observing());

    assert_eq!(s.controller.log().len(), 1);
    assert!(s.controller.stats().entity(100).is_some());

    // detached: further notifications are dropped
    assert!(s.controller.handle_notification(&skill_activated(100, 200, 51)).is_none());
    assert_eq!(s.controller.log().len(), 1);
}

#[test]
fn exit_auto_exports_and_regenerates_name() {
    let mut s = session_with(|_| {});
    s.controller.on_instance_load(5, true);
    s.controller.set_export_name("custom");
    s.controller.sample_once();
    s.controller.handle_notification(&skill_activated(100, 200, 50));

    let SessionTransition::Exited { report: Some(report) } = s.controller.on_instance_load(1, false) else {
        panic!("expected auto-export");
    };
    assert!(report.any_succeeded());
    assert!(report.session_dir.ends_with("custom"));
    assert!(report.session_dir.join("infos.json").is_file());
    assert!(report.session_dir.join("StoC").join("skill_events.txt.gz").is_file());
    assert_ne!(s.controller.export_name(), "custom");

    let messages = s.notifier.messages();
    assert!(messages.iter().any(|m| m.starts_with("Auto-export to")));
}

#[test]
fn empty_export_name_never_writes_into_captures_root() {
    let mut s = session_with(|_| {});
    s.controller.on_instance_load(5, true);
    s.controller.sample_once();
    s.controller.handle_notification(&skill_activated(100, 200, 50));
    s.controller.set_export_name("");

    let SessionTransition::Exited { report } = s.controller.on_instance_load(1, false) else {
        panic!("expected exit");
    };
    assert!(report.is_none());
    assert!(
        s.notifier
            .messages()
            .iter()
            .any(|m| m == "Auto-export skipped: no export name set")
    );

    let manual = s.controller.export_as("");
    assert!(!manual.any_succeeded());
    let root = s._captures.path();
    assert!(!root.join("infos.json").exists());
    assert!(!root.join("StoC").exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// Events
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn victory_records_match_end() {
    let mut s = session();
    s.controller.on_instance_load(5, true);
    s.provider.set_instance_time(Some(61_000));

    let entry = s
        .controller
        .handle_notification(&RawNotification::JumboMessage {
            message_type: jumbo_type::VICTORY,
            value: jumbo_party::PARTY_ONE,
        })
        .unwrap();
    assert_eq!(entry.category(), LogCategory::MatchMilestone);

    let info = s.controller.match_info();
    assert_eq!(info.end_time_ms, Some(61_000));
    assert_eq!(info.winner_team, Some(1));
    assert_eq!(info.duration_adjusted_ms(), Some(60_000));
    assert!(s.notifier.messages().iter().any(|m| m.contains("team 1 wins")));
}

#[test]
fn unknown_values_recorded_only_when_enabled() {
    let raw = RawNotification::GenericValue {
        value_id: 777,
        agent_id: 100,
        value: 3,
    };

    let mut quiet = session();
    quiet.controller.on_instance_load(5, true);
    assert!(quiet.controller.handle_notification(&raw).is_none());
    assert!(quiet.controller.log().is_empty());

    let mut recording = session_with(|config| {
        config.export.auto_export_on_match_end = false;
        config.record_unrecognized = true;
    });
    recording.controller.on_instance_load(5, true);
    let entry = recording.controller.handle_notification(&raw).unwrap();
    assert_eq!(
        entry.record,
        LogRecord::Unrecognized {
            value_id: Some(777),
            actor: 100,
            recipient: 0,
        }
    );
}

#[test]
fn live_feed_receives_tracked_lines() {
    let mut s = session();
    let mut rx = s.controller.subscribe_live();
    s.controller.on_instance_load(5, true);
    s.controller.handle_notification(&skill_activated(100, 200, 50));

    let line = rx.try_recv().unwrap();
    assert_eq!(line.text, "[00:01.000] [SKL] Skill Activated: ID 50 by 100 on 200");
}

#[test]
fn clear_logs_keeps_roster() {
    let mut s = session();
    s.controller.on_instance_load(5, true);
    s.controller.sample_once();
    s.controller.handle_notification(&skill_activated(100, 200, 50));

    s.controller.clear_logs();
    assert!(s.controller.log().is_empty());
    assert!(s.controller.stats().entity(100).is_some());
    assert!(s.notifier.messages().iter().any(|m| m == "Logs cleared"));
}

#[test]
fn manual_sampling_mode_never_spawns_thread() {
    let mut s = session();
    s.controller.set_background_sampling(false);
    s.controller.on_instance_load(5, true);
    assert!(!s.controller.is_sampling());

    let report = s.controller.sample_once();
    assert_eq!(report.roster, 2);
    assert_eq!(report.stored, 1);
    assert_eq!(s.controller.stats().snapshot_guilds().len(), 1);
}
