//! Feature slices for the TUI (state/update/render per slice).

pub mod navbar;
pub mod page;
