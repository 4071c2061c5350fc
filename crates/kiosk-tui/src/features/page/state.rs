//! Page state: route, scroll, and the laid-out rows of the current page.

use kiosk_core::site::{self, Route};

use crate::common::text::wrap_text;

/// Columns of padding on each side of the content area.
pub(crate) const PAGE_MARGIN: u16 = 2;

/// Rows of scroll past which the bar switches to its scrolled styling.
pub const SCROLLED_THRESHOLD_ROWS: u16 = 3;

/// Whether page scrolling responds to viewer input.
///
/// Locking is a plain value so a recorded prior state (even an already
/// locked one) can be put back verbatim when an overlay closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollLock {
    #[default]
    Unlocked,
    Locked,
}

/// An in-flight smooth scroll toward a target row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glide {
    pub target: u16,
}

/// Vertical scroll state for the content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Rows scrolled past the top of the page.
    pub offset: u16,
    /// Gate for viewer scroll input. Programmatic navigation scrolls are
    /// not gated; they settle after the lock is released.
    pub lock: ScrollLock,
    /// Smooth-scroll animation, advanced once per tick.
    pub glide: Option<Glide>,
}

/// Per-width layout of the current route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Row index of each section's title, in section order.
    pub tops: Vec<u16>,
    /// Total page rows.
    pub rows: u16,
}

impl PageLayout {
    /// Lays out `route` at `width` terminal columns.
    pub fn compute(route: Route, width: u16) -> Self {
        let (rows, tops) = build_rows(route, width);
        Self {
            tops,
            rows: rows.len() as u16,
        }
    }
}

/// Route, scroll and layout for the content area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub route: Route,
    pub scroll: ScrollState,
    /// Recomputed whenever the viewport or route changes.
    pub layout: PageLayout,
}

impl PageState {
    /// True once the page is meaningfully scrolled; the bar restyles on it.
    pub fn is_scrolled(&self) -> bool {
        self.scroll.offset > SCROLLED_THRESHOLD_ROWS
    }
}

// ============================================================================
// Row building
// ============================================================================

/// One laid-out text row of a page. Styling is applied at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageRow {
    pub kind: RowKind,
    pub text: String,
}

impl PageRow {
    fn blank() -> Self {
        Self {
            kind: RowKind::Blank,
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowKind {
    Blank,
    Title,
    Body,
    MemberName,
    MemberRole,
    /// Trailing link of a section; `section` indexes the route's sections
    /// and matches the link's focus id.
    Link {
        section: usize,
    },
}

/// Builds the text rows for `route` at `width`, returning the rows plus the
/// row index of each section title.
///
/// Layout and render both come through here so anchor targets always agree
/// with what is on screen.
pub(crate) fn build_rows(route: Route, width: u16) -> (Vec<PageRow>, Vec<u16>) {
    let text_width = usize::from(width.saturating_sub(PAGE_MARGIN * 2).max(10));
    let sections = site::sections(route);
    let mut rows = Vec::new();
    let mut tops = Vec::with_capacity(sections.len());

    for (index, section) in sections.iter().enumerate() {
        rows.push(PageRow::blank());
        tops.push(rows.len() as u16);
        rows.push(PageRow {
            kind: RowKind::Title,
            text: section.title.to_string(),
        });
        rows.push(PageRow::blank());
        for (i, paragraph) in section.body.iter().enumerate() {
            if i > 0 {
                rows.push(PageRow::blank());
            }
            for line in wrap_text(paragraph, text_width) {
                rows.push(PageRow {
                    kind: RowKind::Body,
                    text: line,
                });
            }
        }
        // The crew grid renders under the section that anchors it.
        if route == Route::Team && section.anchor == Some("crew") {
            for member in site::TEAM {
                rows.push(PageRow::blank());
                rows.push(PageRow {
                    kind: RowKind::MemberName,
                    text: member.name.to_string(),
                });
                rows.push(PageRow {
                    kind: RowKind::MemberRole,
                    text: member.role.to_string(),
                });
                for line in wrap_text(member.blurb, text_width) {
                    rows.push(PageRow {
                        kind: RowKind::Body,
                        text: line,
                    });
                }
            }
        }
        if let Some(link) = section.link {
            rows.push(PageRow::blank());
            rows.push(PageRow {
                kind: RowKind::Link { section: index },
                text: format!("→ {}", link.label),
            });
        }
    }
    rows.push(PageRow::blank());

    (rows, tops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_one_top_per_section() {
        for route in Route::all() {
            let layout = PageLayout::compute(*route, 80);
            assert_eq!(layout.tops.len(), site::sections(*route).len());
        }
    }

    #[test]
    fn section_tops_point_at_title_rows() {
        let (rows, tops) = build_rows(Route::Home, 80);
        for (index, top) in tops.iter().enumerate() {
            let row = &rows[*top as usize];
            assert_eq!(row.kind, RowKind::Title, "section {index}");
            assert_eq!(row.text, site::sections(Route::Home)[index].title);
        }
    }

    #[test]
    fn narrower_width_never_shrinks_the_page() {
        let wide = PageLayout::compute(Route::About, 120);
        let narrow = PageLayout::compute(Route::About, 48);
        assert!(narrow.rows >= wide.rows);
    }

    #[test]
    fn team_route_lists_every_member() {
        let (rows, _) = build_rows(Route::Team, 80);
        for member in site::TEAM {
            assert!(
                rows.iter()
                    .any(|row| row.kind == RowKind::MemberName && row.text == member.name),
                "missing {}",
                member.name
            );
        }
    }

    #[test]
    fn is_scrolled_trips_past_the_threshold() {
        let mut page = PageState::default();
        page.scroll.offset = SCROLLED_THRESHOLD_ROWS;
        assert!(!page.is_scrolled());
        page.scroll.offset = SCROLLED_THRESHOLD_ROWS + 1;
        assert!(page.is_scrolled());
    }
}
