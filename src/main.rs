//! Stevedore - a terminal admin console for container platforms
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;

/// Stevedore - a terminal admin console for container platforms
#[derive(Parser, Debug)]
#[command(name = "stevedore")]
#[command(about = "A terminal admin console for container platforms", long_about = None)]
struct Args {
    /// Base URL of the container platform API (overrides config and env)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // File logging; the terminal is owned by the TUI.
    if let Err(e) = stevedore_core::logging::init() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let settings = stevedore_app::config::load_settings(
        args.config.as_deref(),
        args.api_url.as_deref(),
    );
    tracing::info!("Loaded settings: api={}", settings.api.base_url);

    stevedore_tui::run(settings).await?;

    Ok(())
}
