//! State mutations expressed as data.
//!
//! Overlay handlers receive `&TuiState` (read-only) and describe their
//! writes as `StateMutation`s; the reducer applies them in order. This keeps
//! a handler's writes inspectable and gives overlay teardown a single
//! application point.

use kiosk_core::site::Route;

use crate::features::page::ScrollLock;
use crate::state::FocusId;

/// A deferred write against `TuiState`, applied by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMutation {
    Focus(FocusMutation),
    Page(PageMutation),
    Theme(ThemeMutation),
}

/// Writes to the page focus cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMutation {
    /// Return focus to the element that held it before the overlay opened.
    /// Silently does nothing if that element is no longer present.
    Restore { target: FocusId },
}

/// Writes to the page slice (route, scroll).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMutation {
    /// Switch to another page, scrolled to the top.
    SetRoute { route: Route },
    /// Request a smooth scroll to the named section anchor on the current
    /// page. Does nothing if no section carries that anchor.
    ScrollToAnchor { anchor: &'static str },
    /// Stop page scrolling from reacting to viewer input.
    LockScroll,
    /// Restore the scroll lock to exactly the value recorded before locking.
    RestoreScrollLock { prior: ScrollLock },
}

/// Writes to the theme store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMutation {
    /// Flip light/dark.
    Toggle,
}
