//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::Event;

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{navbar, page};
use crate::mutations::{FocusMutation, PageMutation, StateMutation, ThemeMutation};
use crate::overlays::{self, MenuOverlay, Overlay};
use crate::state::{AppState, TuiState, Viewport};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            page::tick_glide(&mut app.tui.page);
            vec![]
        }
        UiEvent::Frame { width, height } => handle_viewport_change(app, width, height),
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ThemeChanged => vec![],
        UiEvent::FocusDelayElapsed => {
            if let Some(Overlay::Menu(menu)) = app.overlay.as_mut() {
                menu.on_focus_delay();
            }
            vec![]
        }
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = {
                let state = app.tui.tasks.state_mut(kind);
                state.finish_if_active(completed.id)
            };
            if !ok {
                vec![]
            } else {
                update(app, *completed.result)
            }
        }
    }
}

// ============================================================================
// Mutations
// ============================================================================

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Focus(mutation) => apply_focus_mutation(tui, mutation),
            StateMutation::Page(mutation) => apply_page_mutation(tui, mutation),
            StateMutation::Theme(mutation) => apply_theme_mutation(tui, mutation),
        }
    }
}

fn apply_focus_mutation(tui: &mut TuiState, mutation: FocusMutation) {
    match mutation {
        FocusMutation::Restore { target } => {
            // The element may have left the page since focus was captured
            // (layout change, route change). Restore only if it is still
            // there; otherwise leave focus where it is.
            if navbar::page_focusables(tui.page.route, tui.viewport).contains(&target) {
                tui.focus = target;
            }
        }
    }
}

fn apply_page_mutation(tui: &mut TuiState, mutation: PageMutation) {
    match mutation {
        PageMutation::SetRoute { route } => {
            page::set_route(&mut tui.page, tui.viewport, route);
            navbar::clamp_focus(tui);
        }
        PageMutation::ScrollToAnchor { anchor } => {
            page::scroll_to_anchor(
                &mut tui.page,
                tui.viewport,
                anchor,
                tui.config.reduced_motion,
            );
        }
        PageMutation::LockScroll => {
            tui.page.scroll.lock = page::ScrollLock::Locked;
        }
        PageMutation::RestoreScrollLock { prior } => {
            tui.page.scroll.lock = prior;
        }
    }
}

fn apply_theme_mutation(tui: &mut TuiState, mutation: ThemeMutation) {
    match mutation {
        ThemeMutation::Toggle => {
            tui.config.theme = tui.theme.toggle();
        }
    }
}

// ============================================================================
// Overlay Transitions
// ============================================================================

fn apply_overlay_update(app: &mut AppState, update: overlays::OverlayUpdate) -> Vec<UiEffect> {
    let mut effects = update.effects;
    match update.transition {
        overlays::OverlayTransition::Stay => {}
        overlays::OverlayTransition::Close => {
            // Every close path funnels through here so the teardown is the
            // same no matter what triggered it. Closing with no overlay up
            // is a no-op.
            if let Some(Overlay::Menu(menu)) = app.overlay.take() {
                effects.push(UiEffect::CancelTask {
                    kind: TaskKind::FocusMove,
                    token: app.tui.tasks.focus_move.cancel.clone(),
                });
                app.tui.tasks.focus_move.clear();
                apply_mutations(&mut app.tui, menu.into_teardown());
            }
        }
    }
    effects
}

fn open_overlay_request(app: &mut AppState, request: overlays::OverlayRequest) -> Vec<UiEffect> {
    match request {
        overlays::OverlayRequest::Menu => {
            if app.overlay.is_some() {
                return vec![];
            }
            let (state, effects, mutations) = MenuOverlay::open(&app.tui);
            app.overlay = Some(Overlay::Menu(state));
            apply_mutations(&mut app.tui, mutations);
            effects
        }
    }
}

// ============================================================================
// Viewport Handler
// ============================================================================

/// Applies a terminal size change: reflows the page, clamps focus to a live
/// element, and force-closes the menu when the layout crosses from narrow
/// to wide.
///
/// Both the per-loop `Frame` event and buffered `Resize` events land here;
/// the equality check keeps the duplicate deliveries idempotent and makes
/// the crossing test run against the pre-change width.
fn handle_viewport_change(app: &mut AppState, width: u16, height: u16) -> Vec<UiEffect> {
    if (width, height) == (app.tui.viewport.width, app.tui.viewport.height) {
        return vec![];
    }

    let was_narrow = app.tui.viewport.is_narrow();
    app.tui.viewport = Viewport::new(width, height);
    page::reflow(&mut app.tui.page, app.tui.viewport);
    navbar::clamp_focus(&mut app.tui);

    if was_narrow && !app.tui.viewport.is_narrow() && app.overlay.is_some() {
        return apply_overlay_update(app, overlays::OverlayUpdate::close());
    }
    vec![]
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            if app.overlay.is_none() {
                page::handle_mouse(&mut app.tui.page, app.tui.viewport, &mouse);
            }
            vec![]
        }
        Event::Resize(width, height) => handle_viewport_change(app, width, height),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: crossterm::event::KeyEvent) -> Vec<UiEffect> {
    // Try to dispatch to the active overlay
    if let Some(mut update) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        apply_mutations(&mut app.tui, std::mem::take(&mut update.mutations));
        return apply_overlay_update(app, update);
    }

    // No overlay active - delegate to the bar
    let (effects, mutations, overlay_request) = navbar::handle_key(&mut app.tui, key);
    apply_mutations(&mut app.tui, mutations);
    if let Some(request) = overlay_request
        && app.overlay.is_none()
    {
        let mut overlay_effects = open_overlay_request(app, request);
        overlay_effects.extend(effects);
        return overlay_effects;
    }

    effects
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
    use kiosk_core::config::Config;
    use kiosk_core::theme::ThemeMode;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};
    use crate::features::page::ScrollLock;
    use crate::overlays::MenuFocus;
    use crate::state::FocusId;

    fn app_sized(width: u16, height: u16) -> AppState {
        let mut app = AppState::new(Config::default());
        update(&mut app, UiEvent::Frame { width, height });
        app
    }

    fn narrow_app() -> AppState {
        app_sized(60, 24)
    }

    fn key(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(app, UiEvent::Terminal(Event::Key(KeyEvent::from(code))))
    }

    fn open_menu(app: &mut AppState) -> Vec<UiEffect> {
        key(app, KeyCode::Char('m'))
    }

    fn menu_focus(app: &AppState) -> MenuFocus {
        match &app.overlay {
            Some(Overlay::Menu(menu)) => menu.focus,
            None => panic!("menu is not open"),
        }
    }

    #[test]
    fn opening_the_menu_locks_scroll_and_schedules_the_focus_move() {
        let mut app = narrow_app();

        let effects = open_menu(&mut app);
        assert!(app.is_menu_open());
        assert_eq!(app.tui.page.scroll.lock, ScrollLock::Locked);
        assert!(matches!(effects.as_slice(), [UiEffect::ScheduleFocusMove]));
    }

    #[test]
    fn a_second_open_request_is_silently_dropped() {
        let mut app = narrow_app();
        app.tui.focus = FocusId::MenuButton;
        open_menu(&mut app);

        // A second request must not re-capture focus or lock state.
        let effects = open_overlay_request(&mut app, overlays::OverlayRequest::Menu);
        assert!(effects.is_empty());
        assert!(app.is_menu_open());

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.tui.focus, FocusId::MenuButton);
    }

    #[test]
    fn escape_closes_and_restores_what_the_open_captured() {
        let mut app = narrow_app();
        app.tui.focus = FocusId::ThemeToggle;
        open_menu(&mut app);

        let effects = key(&mut app, KeyCode::Esc);
        assert!(!app.is_menu_open());
        assert_eq!(app.tui.page.scroll.lock, ScrollLock::Unlocked);
        assert_eq!(app.tui.focus, FocusId::ThemeToggle);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CancelTask {
                kind: TaskKind::FocusMove,
                ..
            }]
        ));
    }

    #[test]
    fn an_already_locked_scroll_is_restored_verbatim() {
        let mut app = narrow_app();
        app.tui.page.scroll.lock = ScrollLock::Locked;

        open_menu(&mut app);
        key(&mut app, KeyCode::Esc);
        assert!(!app.is_menu_open());
        assert_eq!(app.tui.page.scroll.lock, ScrollLock::Locked);
    }

    #[test]
    fn closing_an_already_closed_menu_changes_nothing() {
        let mut app = narrow_app();
        open_menu(&mut app);
        key(&mut app, KeyCode::Esc);

        let effects = key(&mut app, KeyCode::Esc);
        assert!(effects.is_empty());
        assert!(!app.is_menu_open());

        let effects = apply_overlay_update(&mut app, overlays::OverlayUpdate::close());
        assert!(effects.is_empty());
    }

    #[test]
    fn focus_restore_is_skipped_when_the_element_is_gone() {
        let mut app = app_sized(120, 30);
        app.tui.focus = FocusId::Brand;

        apply_mutations(
            &mut app.tui,
            vec![StateMutation::Focus(FocusMutation::Restore {
                target: FocusId::MenuButton,
            })],
        );
        assert_eq!(app.tui.focus, FocusId::Brand);
    }

    #[test]
    fn widening_past_the_breakpoint_force_closes_the_menu() {
        let mut app = narrow_app();
        app.tui.focus = FocusId::MenuButton;
        open_menu(&mut app);

        let effects = update(&mut app, UiEvent::Frame { width: 120, height: 30 });
        assert!(!app.is_menu_open());
        assert_eq!(app.tui.page.scroll.lock, ScrollLock::Unlocked);
        // The captured menu button does not exist on the wide layout, so the
        // restore is skipped and the clamp decides.
        assert_eq!(app.tui.focus, FocusId::Brand);
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, UiEffect::CancelTask { .. }))
        );
    }

    #[test]
    fn resizing_on_the_same_side_leaves_the_menu_alone() {
        let mut app = narrow_app();
        open_menu(&mut app);

        update(&mut app, UiEvent::Frame { width: 70, height: 24 });
        assert!(app.is_menu_open());
        assert_eq!(app.tui.page.scroll.lock, ScrollLock::Locked);
    }

    #[test]
    fn a_repeated_frame_with_the_same_size_is_a_no_op() {
        let mut app = narrow_app();
        open_menu(&mut app);

        let effects = update(&mut app, UiEvent::Frame { width: 60, height: 24 });
        assert!(effects.is_empty());
        assert!(app.is_menu_open());
    }

    #[test]
    fn theme_toggle_alternates_and_persists() {
        let mut app = narrow_app();
        assert_eq!(app.tui.theme.mode(), ThemeMode::Light);

        let effects = key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.tui.theme.mode(), ThemeMode::Dark);
        assert_eq!(app.tui.config.theme, ThemeMode::Dark);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::PersistTheme {
                mode: ThemeMode::Dark
            }]
        ));

        key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.tui.theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn selecting_a_menu_entry_closes_then_glides_to_the_anchor() {
        let mut app = narrow_app();
        open_menu(&mut app);

        // Panel -> close control -> first entry.
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Tab);
        assert_eq!(menu_focus(&app), MenuFocus::Item(0));

        key(&mut app, KeyCode::Enter);
        assert!(!app.is_menu_open());
        assert_eq!(app.tui.page.scroll.lock, ScrollLock::Unlocked);
        assert!(app.tui.page.scroll.glide.is_some());
    }

    #[test]
    fn navigating_to_a_missing_anchor_still_closes_without_scrolling() {
        let mut app = narrow_app();
        open_menu(&mut app);

        // Second entry targets an anchor no page defines.
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Tab);
        assert_eq!(menu_focus(&app), MenuFocus::Item(1));

        key(&mut app, KeyCode::Enter);
        assert!(!app.is_menu_open());
        assert_eq!(app.tui.page.scroll.offset, 0);
        assert!(app.tui.page.scroll.glide.is_none());
    }

    #[test]
    fn the_deferred_focus_move_lands_inside_the_open_menu() {
        let mut app = narrow_app();
        open_menu(&mut app);

        update(&mut app, UiEvent::FocusDelayElapsed);
        assert_eq!(menu_focus(&app), MenuFocus::Close);
    }

    #[test]
    fn a_focus_delay_firing_after_close_does_nothing() {
        let mut app = narrow_app();
        app.tui.focus = FocusId::Brand;
        open_menu(&mut app);
        key(&mut app, KeyCode::Esc);

        update(&mut app, UiEvent::FocusDelayElapsed);
        assert!(!app.is_menu_open());
        assert_eq!(app.tui.focus, FocusId::Brand);
    }

    #[test]
    fn a_live_focus_timer_completion_moves_focus_into_the_menu() {
        let mut app = narrow_app();
        open_menu(&mut app);
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::FocusMove,
                started: TaskStarted {
                    id: TaskId(1),
                    cancel: None,
                },
            },
        );

        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::FocusMove,
                completed: TaskCompleted {
                    id: TaskId(1),
                    result: Box::new(UiEvent::FocusDelayElapsed),
                },
            },
        );
        assert!(effects.is_empty());
        assert_eq!(menu_focus(&app), MenuFocus::Close);
        assert!(!app.tui.tasks.focus_move.is_running());
    }

    #[test]
    fn a_canceled_focus_timer_completion_is_dropped() {
        let mut app = narrow_app();
        open_menu(&mut app);
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::FocusMove,
                started: TaskStarted {
                    id: TaskId(1),
                    cancel: None,
                },
            },
        );
        key(&mut app, KeyCode::Esc);

        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::FocusMove,
                completed: TaskCompleted {
                    id: TaskId(1),
                    result: Box::new(UiEvent::FocusDelayElapsed),
                },
            },
        );
        assert!(effects.is_empty());
        assert!(!app.is_menu_open());
    }

    #[test]
    fn tab_inside_the_menu_never_leaks_to_the_page() {
        let mut app = narrow_app();
        app.tui.focus = FocusId::Brand;
        open_menu(&mut app);

        for _ in 0..10 {
            key(&mut app, KeyCode::Tab);
        }
        assert!(app.is_menu_open());
        assert_eq!(app.tui.focus, FocusId::Brand);
    }

    #[test]
    fn mouse_scrolling_is_ignored_while_the_menu_is_open() {
        let mut app = narrow_app();
        open_menu(&mut app);

        let mouse = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        update(&mut app, UiEvent::Terminal(Event::Mouse(mouse)));
        assert_eq!(app.tui.page.scroll.offset, 0);
    }

    #[test]
    fn activating_an_inline_entry_glides_to_its_section() {
        let mut app = app_sized(120, 30);
        app.tui.focus = FocusId::NavItem(0);

        key(&mut app, KeyCode::Enter);
        assert!(app.tui.page.scroll.glide.is_some());
    }

    #[test]
    fn ticks_advance_an_active_glide() {
        let mut app = app_sized(120, 30);
        app.tui.focus = FocusId::NavItem(0);
        key(&mut app, KeyCode::Enter);

        let before = app.tui.page.scroll.offset;
        update(&mut app, UiEvent::Tick);
        assert!(app.tui.page.scroll.offset > before);
    }

    #[test]
    fn quit_shortcut_returns_the_quit_effect() {
        let mut app = narrow_app();
        let effects = key(&mut app, KeyCode::Char('q'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }
}
