//! Noughts - console noughts and crosses.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{CONFIG_ENV, Cli, Command, ConfigFile, Session, Settings, analyze_position, locate};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let file = match locate(cli.config, std::env::var_os(CONFIG_ENV)) {
        Some(path) => ConfigFile::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => ConfigFile::default(),
    };
    let settings = Settings::from_file(file);

    match cli.command {
        Command::Play {
            mode,
            computer,
            no_replay,
        } => run_play(settings.with_overrides(mode, computer, no_replay)),
        Command::Analyze { moves } => {
            analyze_position(&moves, settings.symbols(), &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run the interactive console session
#[instrument(skip(settings))]
fn run_play(settings: Settings) -> Result<()> {
    info!(?settings, "Starting console session");
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Session::new(settings, stdin, stdout).run()
}
