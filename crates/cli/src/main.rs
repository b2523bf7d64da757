//! Administrative front-end for custom statistics.
//!
//! Each invocation loads the registry, runs one command as the selected
//! caller, and saves if anything changed.
//! Run with: `topper [--as <player>] [--op] <command>`

mod commands;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use runtime::{Caller, Runtime, RuntimeConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::{Browse, PlayersCommand, StatsCommand};

/// Custom statistics administration
#[derive(Parser)]
#[command(name = "topper")]
#[command(about = "Manage custom statistics and browse leaderboards", long_about = None)]
#[command(version)]
struct Cli {
    /// Act as this player instead of the console
    #[arg(long = "as", value_name = "PLAYER", global = true)]
    as_player: Option<String>,

    /// Give the acting player operator privileges
    #[arg(long, global = true)]
    op: bool,

    /// Data directory (overrides TOPPER_DATA_DIR)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create, list, inspect, and modify custom statistics
    #[command(subcommand)]
    Stats(StatsCommand),

    /// Read and change player scores
    #[command(subcommand)]
    Players(PlayersCommand),

    /// Page through the creative or statistics screens
    Browse(Browse),
}

impl Cli {
    fn caller(&self) -> Caller {
        match (&self.as_player, self.op) {
            (Some(name), true) => Caller::operator(name.clone()),
            (Some(name), false) => Caller::player(name.clone()),
            (None, _) => Caller::console(),
        }
    }
}

fn main() -> Result<ExitCode> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging()?;

    let cli = Cli::parse();
    let caller = cli.caller();

    let mut config = RuntimeConfig::from_env();
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }

    let mut runtime = Runtime::builder()
        .config(config)
        .build()
        .context("Failed to start the statistics runtime")?;

    let succeeded = match cli.command {
        Command::Stats(cmd) => cmd.execute(&mut runtime, &caller),
        Command::Players(cmd) => cmd.execute(&mut runtime, &caller),
        Command::Browse(cmd) => cmd.execute(&runtime, &caller)?,
    };

    if runtime
        .save_if_dirty()
        .context("Failed to save custom statistics")?
    {
        tracing::debug!(
            "Registry saved to {}",
            runtime.config().registry_path().display()
        );
    }

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Log to a file under `TOPPER_LOG_DIR` when set, otherwise to stderr.
///
/// Stderr only shows warnings by default so command output stays readable.
fn setup_logging() -> Result<()> {
    match std::env::var_os("TOPPER_LOG_DIR") {
        Some(dir) => {
            let log_dir = Path::new(&dir);
            std::fs::create_dir_all(log_dir)?;

            let file_appender = tracing_appender::rolling::never(log_dir, "topper.log");
            let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);

            let env_filter = tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into());

            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking_file)
                        .with_ansi(false),
                )
                .init();

            // Leak the guard to keep file writer alive
            std::mem::forget(_guard);

            tracing::info!("Log file: {}/topper.log", log_dir.display());
        }
        None => {
            let env_filter = tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into());

            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
