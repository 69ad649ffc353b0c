use std::path::{Path, PathBuf};
use std::sync::Arc;

use observer_core::{
    ConfigError, ExportReport, LiveLine, MatchSessionController, ObserverConfig, ObserverConfigExt,
    SessionTransition, TracingNotifier,
};
use observer_types::LiveFeedToggles;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::script::{Script, ScriptError};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to render configuration")]
    Render(#[source] serde_json::Error),

    #[error("replay of {script} exported nothing")]
    NothingExported { script: PathBuf },
}

pub struct ReplayOptions {
    pub script: PathBuf,
    pub name: Option<String>,
    pub out: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Print mirrored live-feed lines as frames are replayed
    pub live: bool,
}

fn load_config(path: Option<&Path>) -> Result<ObserverConfig, ConfigError> {
    match path {
        Some(path) => ObserverConfig::load_from(path),
        None => Ok(ObserverConfig::load()),
    }
}

/// Replay a recorded match through a fresh session and export every
/// observed segment.
pub fn replay(options: &ReplayOptions) -> Result<Vec<ExportReport>, CommandError> {
    let script = Script::load(&options.script)?;
    let mut config = load_config(options.config.as_deref())?;

    if let Some(out) = &options.out {
        config.export.captures_directory = out.display().to_string();
    }
    // exports are driven here so the export name can be picked before exit
    config.export.auto_export_on_match_end = false;
    if !options.live {
        config.live_feed = LiveFeedToggles::silent();
    }

    let provider = Arc::new(script.provider());
    let mut session = MatchSessionController::new(
        config,
        provider.clone(),
        Arc::new(script.catalog()),
        Arc::new(TracingNotifier),
    );
    session.set_background_sampling(false);
    if let Some(name) = &options.name {
        session.set_export_name(name.clone());
    }
    let mut live = session.subscribe_live();

    provider.set_instance_time(script.frames.first().map(|frame| frame.time_ms));
    session.on_instance_load(script.map_id, true);

    let mut reports = Vec::new();
    for frame in &script.frames {
        frame.apply(&provider);

        if let Some(load) = frame.instance_load {
            let name = session.export_name().to_string();
            let transition = session.on_instance_load(load.map_id, load.is_observer);
            if let SessionTransition::Exited { .. } = transition {
                reports.push(export_segment(&session, &name));
            }
        }

        // roster poll first so this frame's notifications find their entities
        if session.is_observing() {
            let tick = session.sample_once();
            tracing::debug!(
                time_ms = frame.time_ms,
                stored = tick.stored,
                deaths = tick.deaths,
                "replayed frame"
            );
        }

        for notification in &frame.notifications {
            session.handle_notification(notification);
        }
        drain_live(&mut live);
    }

    if session.is_observing() {
        let name = session.export_name().to_string();
        session.on_instance_load(script.map_id, false);
        reports.push(export_segment(&session, &name));
    }
    drain_live(&mut live);

    if !reports.iter().any(ExportReport::any_succeeded) {
        return Err(CommandError::NothingExported {
            script: options.script.clone(),
        });
    }
    Ok(reports)
}

fn export_segment(session: &MatchSessionController, name: &str) -> ExportReport {
    let report = session.export_as(name);
    let info = session.match_info();

    println!("Exported {} -> {}", name, report.session_dir.display());
    println!("  {}", report.summary());
    println!(
        "  map {}  ended {}  winner {}",
        info.map_id,
        info.end_time_formatted().as_deref().unwrap_or("-"),
        info.winner_team
            .map_or_else(|| "-".to_string(), |team| team.to_string())
    );
    let counts: Vec<String> = session
        .log()
        .count_by_category()
        .into_iter()
        .map(|(category, count)| format!("{} {count}", category.file_stem()))
        .collect();
    if !counts.is_empty() {
        println!("  events: {}", counts.join(", "));
    }
    print_roster(session);
    report
}

fn print_roster(session: &MatchSessionController) {
    for (id, record) in session.stats().snapshot_entities() {
        let identity = &record.identity;
        println!(
            "  [{:>5}] team {} {:<6} {:<20} dmg {:>7} deaths {:>3} {}",
            id,
            identity.team_id,
            identity.professions_label(),
            identity.encoded_name.to_display_string(),
            record.counters.damage,
            record.counters.deaths,
            record.build_template,
        );
    }
}

fn drain_live(live: &mut UnboundedReceiver<LiveLine>) {
    while let Ok(line) = live.try_recv() {
        println!("{}", line.text);
    }
}

/// Print the effective configuration, optionally writing defaults first.
pub fn show_config(path: Option<&Path>, write_default: bool) -> Result<(), CommandError> {
    if write_default {
        let defaults = ObserverConfig::default();
        match path {
            Some(path) => defaults.save_to(path)?,
            None => defaults.save()?,
        }
    }

    let location = match path {
        Some(path) => path.to_path_buf(),
        None => ObserverConfig::config_path()?,
    };
    let config = load_config(path)?;
    let rendered = serde_json::to_string_pretty(&config).map_err(CommandError::Render)?;

    println!("Config file: {}", location.display());
    println!("{rendered}");
    Ok(())
}
