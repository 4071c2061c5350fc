//! Event types for the TUI.
//!
//! Every input to the reducer is a `UiEvent`. Synchronous sources (terminal
//! input, the frame clock) and async task results share the same enum; async
//! results arrive through the runtime's inbox channel.

use crossterm::event::Event as CrosstermEvent;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Frame clock tick; drives scroll animation and render cadence.
    Tick,
    /// Emitted at the top of every loop iteration with the terminal size.
    Frame { width: u16, height: u16 },
    /// Raw terminal input (keys, mouse, resize).
    Terminal(CrosstermEvent),
    /// The theme store notified its subscribers; wakes a render.
    ThemeChanged,
    /// The deferred focus move scheduled at overlay open is due.
    FocusDelayElapsed,
    /// A spawned task reported startup (registers its id and cancel handle).
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// A spawned task finished; the inner event is dispatched only if the
    /// task is still the active one for its kind.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
