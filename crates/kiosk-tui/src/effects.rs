//! Side effects produced by the reducer, executed by the runtime.
//!
//! The reducer never performs I/O or spawns tasks itself; it returns
//! `UiEffect`s describing what should happen. This keeps state transitions
//! synchronous and directly testable.

use kiosk_core::theme::ThemeMode;
use tokio_util::sync::CancellationToken;

use crate::common::TaskKind;

#[derive(Debug)]
pub enum UiEffect {
    /// Exit the event loop.
    Quit,

    /// Spawn the short timer that moves focus into a freshly opened overlay
    /// panel once its entry transition has had time to start rendering.
    ScheduleFocusMove,

    /// Cancel an in-flight task. Emitted by the reducer (e.g. when the
    /// overlay closes before the focus-move timer fires); the runtime just
    /// calls cancel() on the provided token.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },

    /// Write the given theme mode to the config file.
    PersistTheme { mode: ThemeMode },
}
