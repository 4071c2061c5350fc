//! Page update handlers: scroll input, glide animation, navigation.

use crossterm::event::{MouseEvent, MouseEventKind};
use kiosk_core::site::{self, Route};

use super::state::{Glide, PageLayout, PageState, ScrollLock};
use crate::state::Viewport;

/// Rows moved per mouse wheel tick.
const MOUSE_SCROLL_ROWS: u16 = 2;

/// Largest valid scroll offset for the current layout and viewport.
fn max_offset(page: &PageState, viewport: Viewport) -> u16 {
    page.layout.rows.saturating_sub(viewport.content_rows())
}

/// Recomputes the layout after a viewport or route change and clamps the
/// scroll position into the new page.
pub fn reflow(page: &mut PageState, viewport: Viewport) {
    page.layout = PageLayout::compute(page.route, viewport.width);
    let max = max_offset(page, viewport);
    page.scroll.offset = page.scroll.offset.min(max);
    if let Some(glide) = &mut page.scroll.glide {
        glide.target = glide.target.min(max);
    }
}

/// Switches pages, scrolled to the top.
pub fn set_route(page: &mut PageState, viewport: Viewport, route: Route) {
    page.route = route;
    page.scroll.offset = 0;
    page.scroll.glide = None;
    reflow(page, viewport);
}

/// Scrolls by `delta` rows in response to viewer input. Ignored while the
/// scroll lock is held; interrupts any glide in progress.
pub fn scroll_by(page: &mut PageState, viewport: Viewport, delta: i32) {
    if page.scroll.lock == ScrollLock::Locked {
        return;
    }
    page.scroll.glide = None;
    let max = i64::from(max_offset(page, viewport));
    let next = (i64::from(page.scroll.offset) + i64::from(delta)).clamp(0, max);
    page.scroll.offset = next as u16;
}

/// Scrolls by a viewport's worth of rows. `forward` is toward the bottom.
pub fn page_by(page: &mut PageState, viewport: Viewport, forward: bool) {
    let rows = i32::from(viewport.content_rows().max(1));
    scroll_by(page, viewport, if forward { rows } else { -rows });
}

pub fn scroll_to_top(page: &mut PageState, viewport: Viewport) {
    scroll_by(page, viewport, i32::MIN);
}

pub fn scroll_to_bottom(page: &mut PageState, viewport: Viewport) {
    scroll_by(page, viewport, i32::MAX);
}

/// Advances a smooth scroll one frame. Each tick covers a quarter of the
/// remaining distance, so the approach slows near the target.
pub fn tick_glide(page: &mut PageState) {
    let Some(glide) = page.scroll.glide else {
        return;
    };
    let current = page.scroll.offset;
    if current == glide.target {
        page.scroll.glide = None;
        return;
    }
    let step = current.abs_diff(glide.target).div_ceil(4);
    page.scroll.offset = if glide.target > current {
        current + step
    } else {
        current - step
    };
    if page.scroll.offset == glide.target {
        page.scroll.glide = None;
    }
}

/// Requests a scroll to the named anchor on the current page.
///
/// Absent anchors are a silent no-op. With reduced motion the offset jumps
/// straight to the target; otherwise a glide is started.
pub fn scroll_to_anchor(
    page: &mut PageState,
    viewport: Viewport,
    anchor: &str,
    reduced_motion: bool,
) {
    let Some(index) = site::section_index_by_anchor(page.route, anchor) else {
        return;
    };
    let Some(top) = page.layout.tops.get(index).copied() else {
        return;
    };
    let target = top.min(max_offset(page, viewport));
    if reduced_motion {
        page.scroll.offset = target;
        page.scroll.glide = None;
    } else if target == page.scroll.offset {
        page.scroll.glide = None;
    } else {
        page.scroll.glide = Some(Glide { target });
    }
}

/// Mouse wheel scrolling over the content area.
pub fn handle_mouse(page: &mut PageState, viewport: Viewport, mouse: &MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => scroll_by(page, viewport, -i32::from(MOUSE_SCROLL_ROWS)),
        MouseEventKind::ScrollDown => scroll_by(page, viewport, i32::from(MOUSE_SCROLL_ROWS)),
        _ => {}
    }
}
