//! Bar rendering: brand, navigation entries, theme control, scroll rule.

use kiosk_core::site;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::features::page::PAGE_MARGIN;
use crate::render::Palette;
use crate::state::{FocusId, TuiState};

/// Renders the bar into `area`, content row on top and the rule below.
pub fn render_bar(frame: &mut Frame, area: Rect, state: &TuiState, palette: &Palette) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let content = Rect {
        x: area.x + PAGE_MARGIN,
        y: area.y,
        width: area.width.saturating_sub(PAGE_MARGIN * 2),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(bar_line(state, palette, content.width)),
        content,
    );

    if area.height > 1 {
        let rule_style = if state.page.is_scrolled() {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.muted)
        };
        let rule = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "─".repeat(area.width as usize),
                rule_style,
            ))),
            rule,
        );
    }
}

fn bar_line(state: &TuiState, palette: &Palette, width: u16) -> Line<'static> {
    let focused = |id: FocusId| {
        if state.focus == id {
            Modifier::REVERSED
        } else {
            Modifier::empty()
        }
    };

    let mut spans = vec![Span::styled(
        site::BRAND,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | focused(FocusId::Brand)),
    )];

    if state.viewport.is_narrow() {
        spans.push(Span::raw("  "));
        spans.push(theme_span(state, palette));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "☰ Menu",
            Style::default()
                .fg(palette.fg)
                .add_modifier(focused(FocusId::MenuButton)),
        ));
    } else {
        for (index, entry) in site::NAV_ENTRIES.iter().enumerate() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                entry.label,
                Style::default()
                    .fg(palette.fg)
                    .add_modifier(focused(FocusId::NavItem(index))),
            ));
        }
        spans.push(Span::raw("  "));
        spans.push(theme_span(state, palette));
    }

    let title = state.page.route.title();
    let used: usize = spans.iter().map(|span| span.content.width()).sum();
    let spacing = (width as usize).saturating_sub(used + title.width());
    if spacing > 0 {
        spans.push(Span::raw(" ".repeat(spacing)));
        spans.push(Span::styled(title, Style::default().fg(palette.muted)));
    }

    Line::from(spans)
}

fn theme_span(state: &TuiState, palette: &Palette) -> Span<'static> {
    let modifier = if state.focus == FocusId::ThemeToggle {
        Modifier::REVERSED
    } else {
        Modifier::empty()
    };
    Span::styled(
        format!("◐ {}", state.theme.mode().display_name()),
        Style::default().fg(palette.fg).add_modifier(modifier),
    )
}
