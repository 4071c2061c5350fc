//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use kiosk_core::config::Config;
use kiosk_core::theme::ThemeMode;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "kiosk")]
#[command(version = "0.1")]
#[command(author = "Northlight <hello@northlight.example>")]
#[command(about = "Northlight site kiosk for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start in this theme instead of the configured one (light, dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Skip the smooth-scroll animation and jump straight to anchors
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        theme,
        reduced_motion,
    } = cli;

    // default to running the kiosk itself
    let Some(command) = command else {
        let mut config = Config::load().context("load config")?;
        if let Some(mode) = theme.as_deref() {
            config.theme = parse_theme_mode(mode)?;
        }
        if reduced_motion {
            config.reduced_motion = true;
        }

        let _log_guard = logging::init().context("init logging")?;
        tracing::info!(theme = config.theme.display_name(), "kiosk starting");

        let result = kiosk_tui::run_kiosk(config);
        tracing::info!("kiosk exited");
        return result;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

fn parse_theme_mode(s: &str) -> Result<ThemeMode> {
    match s.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => anyhow::bail!("Invalid theme '{}'. Valid options: light, dark", s),
    }
}
