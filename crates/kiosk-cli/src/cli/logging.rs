//! File logging gated on the `KIOSK_LOG` environment variable.

use anyhow::{Context, Result};
use kiosk_core::config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs a file subscriber when `KIOSK_LOG` is set.
///
/// Log lines go to `$KIOSK_HOME/logs/` through a non-blocking writer so
/// nothing is ever printed to the terminal the TUI owns. The returned
/// guard must stay alive until exit; dropping it early loses buffered
/// lines. Without `KIOSK_LOG` no subscriber is installed at all.
pub fn init() -> Result<Option<WorkerGuard>> {
    let Ok(filter) = std::env::var("KIOSK_LOG") else {
        return Ok(None);
    };

    let logs_dir = config::paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create logs dir {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "kiosk.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
