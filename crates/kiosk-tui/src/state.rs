//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//! - `AppState` - combined state (`TuiState` + overlay)
//! - `TuiState` - non-overlay UI state (theme, focus, page, viewport)
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── config: Config          (persisted preferences)
//! │   ├── theme: Arc<ThemeStore>  (shared light/dark store)
//! │   ├── focus: FocusId          (page focus cursor)
//! │   ├── page: PageState         (route, scroll, layout)
//! │   ├── viewport: Viewport      (terminal size + layout class)
//! │   ├── task_seq: TaskSeq       (async task id generator)
//! │   └── tasks: Tasks            (task lifecycle state)
//! └── overlay: Option<Overlay>    (modal menu panel)
//! ```
//!
//! ## Split State Architecture
//!
//! State is split between `TuiState` (non-overlay) and `Option<Overlay>`:
//! overlay handlers can take `&mut self` and `&TuiState` simultaneously
//! without borrow conflicts.

use std::sync::Arc;

use kiosk_core::config::Config;
use kiosk_core::theme::ThemeStore;

use crate::common::{TaskSeq, Tasks};
use crate::features::navbar;
use crate::features::page::PageState;
use crate::overlays::Overlay;

/// Terminal columns at and above which the bar shows its inline navigation
/// entries. Below it the entries collapse behind the menu button and the
/// overlay panel becomes reachable.
pub const WIDE_BREAKPOINT_COLS: u16 = 96;

// ============================================================================
// AppState (Combined State)
// ============================================================================

/// Combined application state for the TUI.
///
/// Combines `TuiState` with `Option<Overlay>` to enable the split state
/// architecture where overlay handlers access both without borrow conflicts.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Creates a new `AppState` showing the home page, menu closed.
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }

    /// True while the overlay menu panel is up.
    pub fn is_menu_open(&self) -> bool {
        self.overlay.is_some()
    }
}

// ============================================================================
// TuiState
// ============================================================================

/// Non-overlay UI state.
pub struct TuiState {
    /// Persisted preferences (startup theme, reduced motion).
    pub config: Config,
    /// Shared light/dark store; render reads it every frame.
    pub theme: Arc<ThemeStore>,
    /// Page focus cursor (the "active element").
    pub focus: FocusId,
    /// Route, scroll and layout state for the content area.
    pub page: PageState,
    /// Terminal size, updated from frame and resize events.
    pub viewport: Viewport,
    /// Async task id generator.
    pub task_seq: TaskSeq,
    /// Task lifecycle state.
    pub tasks: Tasks,
    /// Set by the Quit effect; the runtime exits its loop on observing it.
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(config: Config) -> Self {
        let theme = Arc::new(ThemeStore::new(config.theme));
        Self {
            config,
            theme,
            focus: FocusId::Brand,
            page: PageState::default(),
            viewport: Viewport::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            should_quit: false,
        }
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Current terminal dimensions plus the derived layout class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True below the breakpoint: inline nav entries are collapsed behind
    /// the menu button.
    pub fn is_narrow(self) -> bool {
        self.width < WIDE_BREAKPOINT_COLS
    }

    /// Rows available to page content under the bar.
    pub fn content_rows(self) -> u16 {
        self.height.saturating_sub(navbar::BAR_HEIGHT)
    }
}

// ============================================================================
// FocusId
// ============================================================================

/// Identifies a focusable element on the page.
///
/// Which ids are present depends on the current route and layout class;
/// `navbar::page_focusables` computes the live set in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusId {
    /// Brand mark in the bar; activates the home page.
    Brand,
    /// Inline bar entry (wide layouts only). Index into `site::NAV_ENTRIES`.
    NavItem(usize),
    /// Light/dark toggle in the bar.
    ThemeToggle,
    /// Menu button (narrow layouts only); opens the overlay panel.
    MenuButton,
    /// Trailing link of a page section. Index into the route's sections.
    SectionLink(usize),
}
