//! Full-screen TUI for the Northlight site kiosk.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{navbar, page};
use kiosk_core::config::Config;
use kiosk_core::site;
pub use runtime::TuiRuntime;

/// Runs the kiosk until the viewer quits.
pub fn run_kiosk(config: Config) -> Result<()> {
    // The kiosk needs a terminal to render into
    if !stderr().is_terminal() {
        anyhow::bail!("The kiosk requires a terminal.");
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "{}", site::BRAND)?;
    writeln!(err, "Theme: {}", config.theme.display_name())?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
