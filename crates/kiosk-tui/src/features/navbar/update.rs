//! Bar update handlers: focus movement, activation, shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kiosk_core::site::{self, NavTarget, Route};

use crate::effects::UiEffect;
use crate::features::page;
use crate::mutations::{PageMutation, StateMutation, ThemeMutation};
use crate::overlays::OverlayRequest;
use crate::state::{FocusId, TuiState, Viewport};

/// Focusable page elements for `route` at the current layout class, in
/// document order.
///
/// Wide layouts expose the inline nav entries; narrow layouts collapse
/// them behind the menu button.
pub fn page_focusables(route: Route, viewport: Viewport) -> Vec<FocusId> {
    let mut ids = vec![FocusId::Brand];
    if viewport.is_narrow() {
        ids.push(FocusId::ThemeToggle);
        ids.push(FocusId::MenuButton);
    } else {
        ids.extend((0..site::NAV_ENTRIES.len()).map(FocusId::NavItem));
        ids.push(FocusId::ThemeToggle);
    }
    ids.extend(
        site::sections(route)
            .iter()
            .enumerate()
            .filter(|(_, section)| section.link.is_some())
            .map(|(index, _)| FocusId::SectionLink(index)),
    );
    ids
}

/// Forces focus onto a live element after a layout or route change.
pub fn clamp_focus(tui: &mut TuiState) {
    let focusables = page_focusables(tui.page.route, tui.viewport);
    if !focusables.contains(&tui.focus) {
        tui.focus = FocusId::Brand;
    }
}

/// Handles a key press with no overlay active.
pub fn handle_key(
    tui: &mut TuiState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            (vec![UiEffect::Quit], vec![], None)
        }
        KeyCode::Char('q') => (vec![UiEffect::Quit], vec![], None),
        KeyCode::Tab => {
            move_focus(tui, false);
            (vec![], vec![], None)
        }
        KeyCode::BackTab => {
            move_focus(tui, true);
            (vec![], vec![], None)
        }
        KeyCode::Char('t') => theme_toggle(tui),
        KeyCode::Char('m') if tui.viewport.is_narrow() => {
            (vec![], vec![], Some(OverlayRequest::Menu))
        }
        KeyCode::Enter => activate(tui),
        KeyCode::Up | KeyCode::Char('k') => {
            page::scroll_by(&mut tui.page, tui.viewport, -1);
            (vec![], vec![], None)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            page::scroll_by(&mut tui.page, tui.viewport, 1);
            (vec![], vec![], None)
        }
        KeyCode::PageUp => {
            page::page_by(&mut tui.page, tui.viewport, false);
            (vec![], vec![], None)
        }
        KeyCode::PageDown => {
            page::page_by(&mut tui.page, tui.viewport, true);
            (vec![], vec![], None)
        }
        KeyCode::Home => {
            page::scroll_to_top(&mut tui.page, tui.viewport);
            (vec![], vec![], None)
        }
        KeyCode::End => {
            page::scroll_to_bottom(&mut tui.page, tui.viewport);
            (vec![], vec![], None)
        }
        _ => (vec![], vec![], None),
    }
}

fn move_focus(tui: &mut TuiState, backward: bool) {
    let focusables = page_focusables(tui.page.route, tui.viewport);
    let Some(position) = focusables.iter().position(|id| *id == tui.focus) else {
        tui.focus = FocusId::Brand;
        return;
    };
    let len = focusables.len();
    let next = if backward {
        (position + len - 1) % len
    } else {
        (position + 1) % len
    };
    tui.focus = focusables[next];
}

fn theme_toggle(tui: &TuiState) -> (Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>) {
    let mode = tui.theme.mode().flipped();
    (
        vec![UiEffect::PersistTheme { mode }],
        vec![StateMutation::Theme(ThemeMutation::Toggle)],
        None,
    )
}

fn activate(tui: &TuiState) -> (Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>) {
    match tui.focus {
        FocusId::Brand => (
            vec![],
            vec![StateMutation::Page(PageMutation::SetRoute {
                route: Route::Home,
            })],
            None,
        ),
        FocusId::NavItem(index) => {
            let Some(entry) = site::NAV_ENTRIES.get(index) else {
                return (vec![], vec![], None);
            };
            (vec![], vec![navigation_mutation(entry.target)], None)
        }
        FocusId::ThemeToggle => theme_toggle(tui),
        FocusId::MenuButton => (vec![], vec![], Some(OverlayRequest::Menu)),
        FocusId::SectionLink(index) => {
            let Some(link) = site::sections(tui.page.route)
                .get(index)
                .and_then(|section| section.link)
            else {
                return (vec![], vec![], None);
            };
            (
                vec![],
                vec![StateMutation::Page(PageMutation::SetRoute {
                    route: link.route,
                })],
                None,
            )
        }
    }
}

/// Mutation for activating a navigation target, shared by the bar's inline
/// entries and the overlay menu's items.
pub(crate) fn navigation_mutation(target: NavTarget) -> StateMutation {
    match target {
        NavTarget::Anchor(anchor) => StateMutation::Page(PageMutation::ScrollToAnchor { anchor }),
        NavTarget::Route(route) => StateMutation::Page(PageMutation::SetRoute { route }),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use kiosk_core::config::Config;

    use super::*;

    fn state_at(width: u16) -> TuiState {
        let mut tui = TuiState::new(Config::default());
        tui.viewport = Viewport::new(width, 30);
        page::reflow(&mut tui.page, tui.viewport);
        tui
    }

    #[test]
    fn wide_layout_exposes_inline_entries() {
        let ids = page_focusables(Route::Home, Viewport::new(120, 30));
        assert!(ids.contains(&FocusId::NavItem(0)));
        assert!(!ids.contains(&FocusId::MenuButton));
    }

    #[test]
    fn narrow_layout_collapses_entries_behind_the_menu_button() {
        let ids = page_focusables(Route::Home, Viewport::new(60, 30));
        assert!(ids.contains(&FocusId::MenuButton));
        assert!(!ids.iter().any(|id| matches!(id, FocusId::NavItem(_))));
    }

    #[test]
    fn tab_cycles_through_every_focusable_and_wraps() {
        let mut tui = state_at(120);
        let focusables = page_focusables(tui.page.route, tui.viewport);
        let mut seen = Vec::new();
        for _ in 0..focusables.len() {
            seen.push(tui.focus);
            handle_key(&mut tui, KeyEvent::from(KeyCode::Tab));
        }
        assert_eq!(seen, focusables);
        assert_eq!(tui.focus, focusables[0]);
    }

    #[test]
    fn back_tab_from_the_first_wraps_to_the_last() {
        let mut tui = state_at(120);
        let focusables = page_focusables(tui.page.route, tui.viewport);
        handle_key(&mut tui, KeyEvent::from(KeyCode::BackTab));
        assert_eq!(tui.focus, *focusables.last().unwrap());
    }

    #[test]
    fn clamp_restores_a_detached_focus_to_the_brand() {
        let mut tui = state_at(60);
        tui.focus = FocusId::MenuButton;
        tui.viewport = Viewport::new(120, 30);
        clamp_focus(&mut tui);
        assert_eq!(tui.focus, FocusId::Brand);
    }

    #[test]
    fn menu_button_requests_the_overlay() {
        let mut tui = state_at(60);
        tui.focus = FocusId::MenuButton;
        let (_, _, request) = handle_key(&mut tui, KeyEvent::from(KeyCode::Enter));
        assert_eq!(request, Some(OverlayRequest::Menu));
    }

    #[test]
    fn menu_shortcut_only_works_on_narrow_layouts() {
        let mut narrow = state_at(60);
        let (_, _, request) = handle_key(&mut narrow, KeyEvent::from(KeyCode::Char('m')));
        assert_eq!(request, Some(OverlayRequest::Menu));

        let mut wide = state_at(120);
        let (_, _, request) = handle_key(&mut wide, KeyEvent::from(KeyCode::Char('m')));
        assert_eq!(request, None);
    }

    #[test]
    fn theme_shortcut_toggles_and_persists() {
        let mut tui = state_at(120);
        let before = tui.theme.mode();
        let (effects, mutations, _) = handle_key(&mut tui, KeyEvent::from(KeyCode::Char('t')));
        assert_eq!(
            mutations,
            vec![StateMutation::Theme(ThemeMutation::Toggle)]
        );
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::PersistTheme { mode }] if *mode == before.flipped()
        ));
    }

    #[test]
    fn activating_an_inline_entry_targets_its_anchor() {
        let mut tui = state_at(120);
        tui.focus = FocusId::NavItem(0);
        let (_, mutations, _) = handle_key(&mut tui, KeyEvent::from(KeyCode::Enter));
        assert_eq!(
            mutations,
            vec![StateMutation::Page(PageMutation::ScrollToAnchor {
                anchor: "about"
            })]
        );
    }
}
