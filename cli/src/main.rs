use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use observer_cli::commands::{self, ReplayOptions};
use observer_cli::logging;

#[derive(Parser)]
#[command(version, about = "Match observer: replay captured matches and export their telemetry")]
struct Cli {
    /// Use this config file instead of the per-user one
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded match script and export its logs
    Replay {
        #[arg(short, long)]
        script: PathBuf,
        /// Export folder name (defaults to a timestamped name)
        #[arg(short, long)]
        name: Option<String>,
        /// Captures root directory, overriding the configured one
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Print live-feed lines while replaying
        #[arg(long)]
        live: bool,
    },
    /// Show the effective configuration
    Config {
        #[arg(long)]
        write_default: bool,
    },
}

fn main() -> ExitCode {
    let _log_guard = logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Replay {
            script,
            name,
            out,
            live,
        } => commands::replay(&ReplayOptions {
            script,
            name,
            out,
            config: cli.config,
            live,
        })
        .map(|reports| {
            let files: usize = reports.iter().map(|r| r.files_written()).sum();
            println!("{} session(s) exported, {files} file(s) written", reports.len());
        }),
        Commands::Config { write_default } => {
            commands::show_config(cli.config.as_deref(), write_default)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
