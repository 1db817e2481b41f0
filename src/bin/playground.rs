//! Terminal playground for the hig-tui components.
//!
//! Keys: `F2` toggles the side nav, `Tab` / `Shift+Tab` move focus,
//! `Enter` / `Space` pick an account or project, `Ctrl+C` quits.
//!
//! Environment:
//!   HIG_LOG                   # log filter (default: info)
//!   HIG_LOG_FILE              # log file (default: hig-playground.log)
//!   HIG_PLAYGROUND_FPS        # render rate (default: 30)
//!   HIG_PLAYGROUND_THEME      # light | dark
//!   HIG_PLAYGROUND_SIDE_NAV   # open | closed

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use hig_tui::playground::{App, AppConfig, PlaygroundError};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) -> Result<(), PlaygroundError> {
    let file = File::create(&config.log_file)?;
    let filter = EnvFilter::try_from_env("HIG_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    // Best effort: a subscriber installed by someone else stays in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .compact()
        .try_init();
    Ok(())
}

async fn run() -> Result<(), PlaygroundError> {
    let config = AppConfig::from_env()?;
    init_tracing(&config)?;
    tracing::info!(fps = config.fps, theme = %config.theme.name, "starting playground");
    App::new(config)?.run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hig-playground: {err}");
            ExitCode::FAILURE
        }
    }
}
