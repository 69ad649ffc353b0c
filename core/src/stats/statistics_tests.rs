//! Tests for the match-wide aggregator

use std::sync::Arc;
use std::thread;

use super::*;
use crate::provider::{SkillInfo, StaticSkillCatalog};

fn catalog() -> Arc<StaticSkillCatalog> {
    let catalog: StaticSkillCatalog = [
        (50, SkillInfo::new(1, 3, false)),
        (51, SkillInfo::new(1, 1, false)),
        (60, SkillInfo::new(3, 2, false)),
        (70, SkillInfo::new(1, 9, true)),
    ]
    .into_iter()
    .collect();
    Arc::new(catalog)
}

fn stats() -> MatchStatistics {
    MatchStatistics::new(catalog())
}

fn identity(entity_id: u32, team_id: u32) -> EntityIdentity {
    EntityIdentity {
        entity_id,
        team_id,
        role: EntityRole::Player,
        primary: 1,
        secondary: 3,
        level: 20,
        player_number: entity_id,
        encoded_name: EncodedText::from("Someone"),
        max_hp: 480,
        ..Default::default()
    }
}

#[test]
fn counters_for_unknown_entities_are_ignored() {
    let stats = stats();
    assert!(!stats.increment(100, Counter::SkillsStarted));
    assert!(!stats.add_damage(100, 40));
    assert!(!stats.add_skill_used(100, 50));
    assert_eq!(stats.entity_count(), 0);
}

#[test]
fn identity_refresh_keeps_counters_and_skills() {
    let stats = stats();
    stats.upsert_identity(identity(100, 1));
    stats.increment(100, Counter::SkillsStarted);
    stats.increment(100, Counter::Deaths);
    stats.add_damage(100, 250);
    stats.add_skill_used(100, 60);
    stats.add_skill_used(100, 50);
    let before = stats.entity(100).unwrap();

    let mut refreshed = identity(100, 2);
    refreshed.level = 15;
    refreshed.encoded_name = EncodedText::from("Renamed");
    stats.upsert_identity(refreshed.clone());

    let after = stats.entity(100).unwrap();
    assert_eq!(after.identity, refreshed);
    assert_eq!(after.counters, before.counters);
    assert_eq!(after.used_skills, before.used_skills);
}

#[test]
fn skill_usage_has_no_duplicates_and_sorted() {
    let stats = stats();
    stats.upsert_identity(identity(100, 1));
    for skill in [60, 50, 51, 60, 50, 0, 51] {
        stats.add_skill_used(100, skill);
    }
    let record = stats.entity(100).unwrap();
    // primary (1) by type: 51 (1), 50 (3); then secondary (3): 60
    assert_eq!(record.used_skills, vec![51, 50, 60]);
    assert_eq!(record.build_template, build_template::encode(1, 3, &[51, 50, 60]));
}

#[test]
fn elite_moves_to_front() {
    let stats = stats();
    stats.upsert_identity(identity(100, 1));
    for skill in [60, 50, 70] {
        stats.add_skill_used(100, skill);
    }
    assert_eq!(stats.entity(100).unwrap().used_skills, vec![70, 50, 60]);
}

#[test]
fn damage_totals_never_go_negative() {
    let stats = stats();
    stats.upsert_identity(identity(100, 1));
    stats.add_damage(100, -30);
    assert_eq!(stats.entity(100).unwrap().counters.damage, 0);

    stats.add_team_damage(1, -80);
    assert_eq!(stats.team_damage(1), 0);
    stats.add_team_damage(1, 120);
    stats.add_team_damage(1, -20);
    assert_eq!(stats.team_damage(1), 100);
    assert_eq!(stats.snapshot_team_damage().get(&1), Some(&100));
}

#[test]
fn first_guild_resolution_wins() {
    let stats = stats();
    let guild = Guild {
        guild_id: 7,
        name: EncodedText::from("Knights"),
        rating: 1200,
        ..Default::default()
    };
    assert!(stats.insert_guild(guild.clone()));
    assert!(!stats.insert_guild(Guild {
        rating: 1,
        ..guild.clone()
    }));
    assert!(stats.has_guild(7));
    assert_eq!(stats.snapshot_guilds().get(&7), Some(&guild));
}

#[test]
fn snapshots_are_detached_copies() {
    let stats = stats();
    stats.upsert_identity(identity(100, 1));
    let snapshot = stats.snapshot_entities();
    stats.increment(100, Counter::CritsDealt);
    assert_eq!(snapshot[&100].counters.crits_dealt, 0);
    assert_eq!(stats.entity(100).unwrap().counters.crits_dealt, 1);
}

#[test]
fn reset_empties_every_partition() {
    let stats = stats();
    stats.upsert_identity(identity(100, 1));
    stats.insert_guild(Guild {
        guild_id: 3,
        ..Default::default()
    });
    stats.add_team_damage(2, 40);

    stats.reset();

    assert!(stats.snapshot_entities().is_empty());
    assert!(stats.snapshot_guilds().is_empty());
    assert!(stats.snapshot_team_damage().is_empty());
}

#[test]
fn concurrent_writers_do_not_lose_updates() {
    let stats = Arc::new(stats());
    stats.upsert_identity(identity(100, 1));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let stats = Arc::clone(&stats);
            thread::spawn(move || {
                for _ in 0..250 {
                    stats.increment(100, Counter::AttacksStarted);
                    stats.upsert_identity(identity(100, 1));
                    stats.add_team_damage(1, 1);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(stats.entity(100).unwrap().counters.attacks_started, 1000);
    assert_eq!(stats.team_damage(1), 1000);
}

#[test]
fn opposing_team_only_for_two_sides() {
    assert_eq!(opposing_team(1), Some(2));
    assert_eq!(opposing_team(2), Some(1));
    assert_eq!(opposing_team(0), None);
    assert_eq!(opposing_team(3), None);
}
