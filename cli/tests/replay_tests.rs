use std::fs;
use std::path::Path;

use observer_cli::commands::{self, CommandError, ReplayOptions};
use tempfile::TempDir;

const SCRIPT: &str = r#"{
    "map_id": 172,
    "skills": {
        "50": { "profession": 1, "skill_type": 3 },
        "60": { "profession": 1, "skill_type": 4, "is_elite": true }
    },
    "party": [
        { "entity_id": 100, "team_id": 1, "role": "player", "primary": 1, "secondary": 2,
          "player_number": 1, "encoded_name": "Alpha", "max_hp": 480 },
        { "entity_id": 200, "team_id": 2, "role": "player", "primary": 3, "secondary": 4,
          "player_number": 1, "encoded_name": "Bravo", "max_hp": 480 }
    ],
    "frames": [
        {
            "time_ms": 1000,
            "agents": [
                { "position": { "entity_id": 100, "x": 0.0, "y": 0.0 } },
                { "position": { "entity_id": 200, "x": 500.0, "y": 0.0 } }
            ],
            "notifications": [
                { "shape": "generic_value", "value_id": 60, "agent_id": 100, "value": 50 }
            ]
        },
        {
            "time_ms": 2000,
            "agents": [ { "position": { "entity_id": 100, "x": 100.0, "y": 0.0 } } ],
            "notifications": [
                { "shape": "generic_value", "value_id": 58, "agent_id": 100, "value": 0 },
                { "shape": "jumbo_message", "message_type": 16, "value": 6579558 }
            ]
        }
    ]
}"#;

fn write_script(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("match.json");
    fs::write(&path, SCRIPT).unwrap();
    path
}

fn options(dir: &TempDir, script: std::path::PathBuf) -> ReplayOptions {
    ReplayOptions {
        script,
        name: Some("replayed".to_string()),
        out: Some(dir.path().join("captures")),
        config: Some(dir.path().join("config.toml")),
        live: false,
    }
}

#[test]
fn replay_exports_manifest_events_and_agents() {
    let dir = TempDir::new().unwrap();
    let script = write_script(dir.path());

    let reports = commands::replay(&options(&dir, script)).unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].any_succeeded());

    let session_dir = dir.path().join("captures").join("replayed");
    assert_eq!(reports[0].session_dir, session_dir);

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(session_dir.join("infos.json")).unwrap()).unwrap();
    assert_eq!(manifest["map_id"], 172);
    assert_eq!(manifest["winner_party_id"], 1);
    assert_eq!(manifest["match_end_time_ms"], 2000);

    let alpha = &manifest["parties"]["1"]["PLAYER"][0];
    assert_eq!(alpha["name"], "Alpha");
    assert_eq!(alpha["stats"]["skills_started"], 1);
    assert_eq!(alpha["stats"]["skills_finished"], 1);
    assert_eq!(alpha["used_skills"], serde_json::json!([50]));

    assert!(session_dir.join("StoC").is_dir());
    assert!(session_dir.join("Agents").is_dir());
}

#[test]
fn instance_exit_mid_script_exports_that_segment() {
    let dir = TempDir::new().unwrap();
    let mut script: serde_json::Value = serde_json::from_str(SCRIPT).unwrap();
    script["frames"][1]["instance_load"] = serde_json::json!({ "map_id": 0, "is_observer": false });
    let path = dir.path().join("exit.json");
    fs::write(&path, script.to_string()).unwrap();

    let reports = commands::replay(&options(&dir, path)).unwrap();
    assert_eq!(reports.len(), 1);
    assert!(dir.path().join("captures").join("replayed").join("infos.json").is_file());
}

#[test]
fn missing_script_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = commands::replay(&options(&dir, dir.path().join("nope.json"))).unwrap_err();
    assert!(matches!(err, CommandError::Script(_)));
}
