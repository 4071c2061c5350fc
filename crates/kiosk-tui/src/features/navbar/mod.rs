//! Navigation bar feature slice.
//!
//! Owns the page focus model (which ids are reachable for the current route
//! and layout class) and the bar's key handling: focus cycling, activation,
//! the theme shortcut, and opening the overlay menu on narrow viewports.
//!
//! ## Module Structure
//!
//! - `update.rs`: focus set computation, key handling, activation
//! - `render.rs`: bar rendering (wide and narrow variants)

mod render;
mod update;

pub use render::render_bar;
pub use update::{clamp_focus, handle_key, page_focusables};
pub(crate) use update::navigation_mutation;

/// Rows the bar occupies at the top of the screen (content plus rule).
pub const BAR_HEIGHT: u16 = 2;
