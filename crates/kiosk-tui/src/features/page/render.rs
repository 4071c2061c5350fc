//! Content area rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{PAGE_MARGIN, PageRow, RowKind, build_rows};
use crate::render::Palette;
use crate::state::{FocusId, TuiState};

/// Renders the current page into `area`, honoring the scroll offset.
pub fn render_page(frame: &mut Frame, area: Rect, state: &TuiState, palette: &Palette) {
    if area.width <= PAGE_MARGIN * 2 || area.height == 0 {
        return;
    }
    let inner = Rect::new(
        area.x + PAGE_MARGIN,
        area.y,
        area.width - PAGE_MARGIN * 2,
        area.height,
    );

    let (rows, _) = build_rows(state.page.route, state.viewport.width);
    let lines: Vec<Line<'static>> = rows
        .into_iter()
        .skip(usize::from(state.page.scroll.offset))
        .take(usize::from(inner.height))
        .map(|row| style_row(row, state, palette))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn style_row(row: PageRow, state: &TuiState, palette: &Palette) -> Line<'static> {
    match row.kind {
        RowKind::Blank => Line::default(),
        RowKind::Title => Line::from(Span::styled(
            row.text,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        RowKind::Body => Line::from(Span::styled(row.text, Style::default().fg(palette.fg))),
        RowKind::MemberName => Line::from(Span::styled(
            row.text,
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        RowKind::MemberRole => {
            Line::from(Span::styled(row.text, Style::default().fg(palette.muted)))
        }
        RowKind::Link { section } => {
            let mut style = Style::default().fg(palette.accent);
            if state.focus == FocusId::SectionLink(section) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(row.text, style))
        }
    }
}
