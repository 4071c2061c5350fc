//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use kiosk_core::theme::ThemeMode;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::features::{navbar, page};
use crate::state::AppState;

/// Theme-resolved colors shared by every render function.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
}

/// Resolves the palette for a theme mode.
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            muted: Color::DarkGray,
        },
        ThemeMode::Dark => Palette {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            muted: Color::Gray,
        },
    }
}

/// Renders the entire TUI to the frame.
///
/// This is a pure render function - it only reads state and draws to frame.
/// No mutations, no side effects.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let palette = palette(state.theme.mode());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let bar = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: navbar::BAR_HEIGHT.min(area.height),
    };
    navbar::render_bar(frame, bar, state, &palette);

    let content = Rect {
        x: area.x,
        y: area.y + bar.height,
        width: area.width,
        height: area.height.saturating_sub(bar.height),
    };
    page::render_page(frame, content, state, &palette);

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area, state, &palette);
    }
}
