//! Page content feature slice.
//!
//! Owns the route, the scroll position and lock, and the per-width section
//! layout. Anchor navigation animates the scroll offset toward the target
//! section; the bar restyles once the page is meaningfully scrolled.
//!
//! ## Module Structure
//!
//! - `state.rs`: `PageState` (route, scroll, layout) and row building
//! - `update.rs`: scroll input, glide animation, anchor/route navigation
//! - `render.rs`: content area rendering

mod render;
mod state;
mod update;

pub use render::render_page;
pub use state::{
    Glide, PageLayout, PageState, SCROLLED_THRESHOLD_ROWS, ScrollLock, ScrollState,
};
pub(crate) use state::PAGE_MARGIN;
pub use update::{
    handle_mouse, page_by, reflow, scroll_by, scroll_to_anchor, scroll_to_bottom, scroll_to_top,
    set_route, tick_glide,
};
