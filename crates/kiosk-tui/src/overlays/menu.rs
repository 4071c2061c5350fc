use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kiosk_core::site;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use crate::effects::UiEffect;
use crate::features::navbar;
use crate::features::page::ScrollLock;
use crate::mutations::{FocusMutation, PageMutation, StateMutation, ThemeMutation};
use crate::render::Palette;
use crate::state::{FocusId, TuiState};

const OVERLAY_WIDTH: u16 = 36;

/// Focus positions inside the menu panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFocus {
    /// The panel itself, when no control holds focus.
    Panel,
    /// The close control at the top of the panel.
    Close,
    /// A navigation entry by index.
    Item(usize),
    /// The theme toggle row.
    ThemeToggle,
}

#[derive(Debug, Clone)]
pub struct MenuOverlay {
    /// Element focused when the menu opened, to hand focus back on close.
    last_focused: FocusId,
    /// Scroll lock in force when the menu opened, restored verbatim on close.
    prior_scroll_lock: ScrollLock,
    pub focus: MenuFocus,
}

impl MenuOverlay {
    /// Captures the current focus and scroll lock, then locks scrolling and
    /// schedules the deferred focus move into the panel.
    pub fn open(tui: &TuiState) -> (Self, Vec<UiEffect>, Vec<StateMutation>) {
        let state = Self {
            last_focused: tui.focus,
            prior_scroll_lock: tui.page.scroll.lock,
            focus: MenuFocus::Panel,
        };
        (
            state,
            vec![UiEffect::ScheduleFocusMove],
            vec![StateMutation::Page(PageMutation::LockScroll)],
        )
    }

    /// Mutations that undo the menu's capture: unlock scrolling first, then
    /// hand focus back to the element that held it.
    pub fn into_teardown(self) -> Vec<StateMutation> {
        vec![
            StateMutation::Page(PageMutation::RestoreScrollLock {
                prior: self.prior_scroll_lock,
            }),
            StateMutation::Focus(FocusMutation::Restore {
                target: self.last_focused,
            }),
        ]
    }

    /// Lands the deferred focus move on the close control, or parks it on the
    /// panel when the menu has nothing focusable.
    pub fn on_focus_delay(&mut self) {
        let focusables = self.focusables();
        self.focus = if focusables.contains(&MenuFocus::Close) {
            MenuFocus::Close
        } else {
            MenuFocus::Panel
        };
    }

    /// Focusable controls in panel order, rebuilt on every call so the cycle
    /// always reflects the current entries.
    fn focusables(&self) -> Vec<MenuFocus> {
        let mut ids = vec![MenuFocus::Close];
        ids.extend((0..site::NAV_ENTRIES.len()).map(MenuFocus::Item));
        ids.push(MenuFocus::ThemeToggle);
        ids
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState, palette: &Palette) {
        render_menu(frame, self, area, tui, palette);
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Tab => {
                self.focus = cycle(&self.focusables(), self.focus, false);
                OverlayUpdate::stay()
            }
            KeyCode::BackTab => {
                self.focus = cycle(&self.focusables(), self.focus, true);
                OverlayUpdate::stay()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                OverlayUpdate::stay()
            }
            KeyCode::Enter => self.activate(tui),
            _ => OverlayUpdate::stay(),
        }
    }

    fn move_selection(&mut self, delta: i32) {
        let focusables = self.focusables();
        if focusables.is_empty() {
            self.focus = MenuFocus::Panel;
            return;
        }

        let next = match focusables.iter().position(|f| *f == self.focus) {
            Some(position) => {
                let max_index = focusables.len() as i32 - 1;
                (position as i32 + delta).clamp(0, max_index) as usize
            }
            None => 0,
        };
        self.focus = focusables[next];
    }

    fn activate(&self, tui: &TuiState) -> OverlayUpdate {
        match self.focus {
            MenuFocus::Panel => OverlayUpdate::stay(),
            MenuFocus::Close => OverlayUpdate::close(),
            MenuFocus::Item(index) => match site::NAV_ENTRIES.get(index) {
                Some(entry) => OverlayUpdate::close()
                    .with_mutations(vec![navbar::navigation_mutation(entry.target)]),
                None => OverlayUpdate::stay(),
            },
            MenuFocus::ThemeToggle => OverlayUpdate::stay()
                .with_mutations(vec![StateMutation::Theme(ThemeMutation::Toggle)])
                .with_ui_effects(vec![UiEffect::PersistTheme {
                    mode: tui.theme.mode().flipped(),
                }]),
        }
    }
}

/// Advances focus through `focusables` with wraparound. A focus that is not
/// in the list lands on the nearest end; an empty list parks focus on the
/// panel itself.
fn cycle(focusables: &[MenuFocus], current: MenuFocus, backward: bool) -> MenuFocus {
    if focusables.is_empty() {
        return MenuFocus::Panel;
    }

    let len = focusables.len();
    match focusables.iter().position(|f| *f == current) {
        Some(position) => {
            let next = if backward {
                (position + len - 1) % len
            } else {
                (position + 1) % len
            };
            focusables[next]
        }
        None if backward => focusables[len - 1],
        None => focusables[0],
    }
}

fn render_menu(
    frame: &mut Frame,
    state: &MenuOverlay,
    area: Rect,
    tui: &TuiState,
    palette: &Palette,
) {
    use super::render_utils::{
        InputHint, calculate_overlay_area, render_hints, render_overlay_container, render_separator,
    };

    let body_rows = site::NAV_ENTRIES.len() as u16 + 4;
    let overlay_area = calculate_overlay_area(area, OVERLAY_WIDTH, body_rows + 4);

    render_overlay_container(frame, overlay_area, "Menu", palette);

    let inner = Rect::new(
        overlay_area.x + 2,
        overlay_area.y + 1,
        overlay_area.width.saturating_sub(4),
        overlay_area.height.saturating_sub(2),
    );

    let row = |label: String, focus: MenuFocus, color: Color| {
        let style = if state.focus == focus {
            Style::default().fg(color).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(color)
        };
        Line::from(Span::styled(label, style))
    };

    let mut lines = vec![
        row("✕ Close".to_string(), MenuFocus::Close, palette.muted),
        Line::default(),
    ];
    for (index, entry) in site::NAV_ENTRIES.iter().enumerate() {
        lines.push(row(
            entry.label.to_string(),
            MenuFocus::Item(index),
            palette.fg,
        ));
    }
    lines.push(Line::default());
    lines.push(row(
        format!("◐ {}", tui.theme.mode().display_name()),
        MenuFocus::ThemeToggle,
        palette.fg,
    ));

    let body = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines), body);

    render_separator(frame, inner, inner.height.saturating_sub(2), palette);

    render_hints(
        frame,
        inner,
        &[
            InputHint::new("Tab", "next"),
            InputHint::new("↑↓", "move"),
            InputHint::new("Enter", "select"),
            InputHint::new("Esc", "close"),
        ],
        palette,
    );
}

#[cfg(test)]
mod tests {
    use kiosk_core::config::Config;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn order() -> [MenuFocus; 3] {
        [MenuFocus::Close, MenuFocus::Item(0), MenuFocus::ThemeToggle]
    }

    #[test]
    fn cycle_wraps_forward_from_the_last_control() {
        assert_eq!(
            cycle(&order(), MenuFocus::ThemeToggle, false),
            MenuFocus::Close
        );
    }

    #[test]
    fn cycle_wraps_backward_from_the_first_control() {
        assert_eq!(
            cycle(&order(), MenuFocus::Close, true),
            MenuFocus::ThemeToggle
        );
    }

    #[test]
    fn cycle_from_the_panel_enters_the_list_at_either_end() {
        assert_eq!(cycle(&order(), MenuFocus::Panel, false), MenuFocus::Close);
        assert_eq!(
            cycle(&order(), MenuFocus::Panel, true),
            MenuFocus::ThemeToggle
        );
    }

    #[test]
    fn cycle_with_nothing_focusable_parks_on_the_panel() {
        assert_eq!(cycle(&[], MenuFocus::Close, false), MenuFocus::Panel);
    }

    #[test]
    fn open_captures_focus_locks_scroll_and_schedules_the_move() {
        let mut tui = TuiState::new(Config::default());
        tui.focus = FocusId::MenuButton;

        let (menu, effects, mutations) = MenuOverlay::open(&tui);
        assert_eq!(menu.focus, MenuFocus::Panel);
        assert!(matches!(effects.as_slice(), [UiEffect::ScheduleFocusMove]));
        assert_eq!(
            mutations,
            vec![StateMutation::Page(PageMutation::LockScroll)]
        );
    }

    #[test]
    fn teardown_unlocks_before_handing_focus_back() {
        let mut tui = TuiState::new(Config::default());
        tui.focus = FocusId::ThemeToggle;
        tui.page.scroll.lock = ScrollLock::Locked;

        let (menu, _, _) = MenuOverlay::open(&tui);
        assert_eq!(
            menu.into_teardown(),
            vec![
                StateMutation::Page(PageMutation::RestoreScrollLock {
                    prior: ScrollLock::Locked,
                }),
                StateMutation::Focus(FocusMutation::Restore {
                    target: FocusId::ThemeToggle,
                }),
            ]
        );
    }

    #[test]
    fn deferred_move_lands_on_the_close_control() {
        let tui = TuiState::new(Config::default());
        let (mut menu, _, _) = MenuOverlay::open(&tui);

        menu.on_focus_delay();
        assert_eq!(menu.focus, MenuFocus::Close);
    }

    #[test]
    fn escape_requests_close_without_navigating() {
        let tui = TuiState::new(Config::default());
        let (mut menu, _, _) = MenuOverlay::open(&tui);

        let update = menu.handle_key(&tui, KeyEvent::from(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.mutations.is_empty());
        assert!(update.effects.is_empty());
    }

    #[test]
    fn selecting_an_entry_closes_and_navigates() {
        let tui = TuiState::new(Config::default());
        let (mut menu, _, _) = MenuOverlay::open(&tui);
        menu.focus = MenuFocus::Item(0);

        let update = menu.handle_key(&tui, KeyEvent::from(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert_eq!(
            update.mutations,
            vec![StateMutation::Page(PageMutation::ScrollToAnchor {
                anchor: "about",
            })]
        );
    }

    #[test]
    fn theme_toggle_row_stays_open_and_persists() {
        let tui = TuiState::new(Config::default());
        let (mut menu, _, _) = MenuOverlay::open(&tui);
        menu.focus = MenuFocus::ThemeToggle;

        let update = menu.handle_key(&tui, KeyEvent::from(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert_eq!(
            update.mutations,
            vec![StateMutation::Theme(ThemeMutation::Toggle)]
        );
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::PersistTheme { .. }]
        ));
    }

    #[test]
    fn arrow_movement_saturates_at_the_ends() {
        let tui = TuiState::new(Config::default());
        let (mut menu, _, _) = MenuOverlay::open(&tui);
        menu.focus = MenuFocus::Close;

        menu.handle_key(&tui, KeyEvent::from(KeyCode::Up));
        assert_eq!(menu.focus, MenuFocus::Close);

        menu.handle_key(&tui, KeyEvent::from(KeyCode::Down));
        assert_eq!(menu.focus, MenuFocus::Item(0));
    }
}
