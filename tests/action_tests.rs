//! Action and state tests using EffectStore and TestHarness
//!
//! - Dispatch actions against a real store and check the resulting state
//! - Drive the component with key strings and assert the emitted actions

use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};
use weather_dashboard::{
    action::Action,
    components::{Component, DashboardView, DashboardViewProps},
    data::Dashboard,
    reducer::reducer,
    state::AppState,
};

#[test]
fn test_reducer_scroll_down_and_up() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    assert_eq!(store.state().scroll, 0);

    let result = store.dispatch(Action::ScrollDown);
    assert!(result.changed, "State should change");
    assert!(result.effects.is_empty());
    assert_eq!(store.state().scroll, 1);

    store.dispatch(Action::ScrollUp);
    assert_eq!(store.state().scroll, 0);

    // Already at the top
    let result = store.dispatch(Action::ScrollUp);
    assert!(!result.changed);
}

#[test]
fn test_reducer_scroll_bottom_matches_max() {
    let state = AppState::default().with_viewport(80, 20);
    let expected = state.max_scroll();
    let mut store = EffectStore::new(state, reducer);

    store.dispatch(Action::ScrollBottom);
    assert_eq!(store.state().scroll, expected);

    let result = store.dispatch(Action::ScrollDown);
    assert!(!result.changed, "Scroll must stop at the bottom");

    store.dispatch(Action::ScrollTop);
    assert_eq!(store.state().scroll, 0);
}

#[test]
fn test_reducer_strip_follows_width() {
    let mut store = EffectStore::new(AppState::default().with_viewport(20, 24), reducer);
    let max = store.state().max_strip_offset();
    assert!(max > 0);

    for _ in 0..20 {
        store.dispatch(Action::StripNext);
    }
    assert_eq!(store.state().strip_offset, max);

    store.dispatch(Action::StripPrev);
    assert_eq!(store.state().strip_offset, max - 1);
}

#[test]
fn test_reducer_resize_reclamps() {
    let mut store = EffectStore::new(AppState::default().with_viewport(20, 10), reducer);
    store.dispatch(Action::ScrollBottom);
    store.dispatch(Action::StripNext);
    store.dispatch(Action::StripNext);

    let result = store.dispatch(Action::UiResize(200, 100));
    assert!(result.changed);
    assert_eq!(store.state().scroll, 0);
    assert_eq!(store.state().strip_offset, 0);
}

#[test]
fn test_reducer_quit_is_noop() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::Quit);
    assert!(!result.changed);
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = DashboardView;

    let actions = harness.send_keys::<NumericComponentId, _, _>("j k l h q", |state, event| {
        let props = DashboardViewProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(5);
    assert_eq!(
        actions,
        vec![
            Action::ScrollDown,
            Action::ScrollUp,
            Action::StripNext,
            Action::StripPrev,
            Action::Quit,
        ]
    );
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = DashboardView;

    let actions = harness.send_keys::<NumericComponentId, _, _>("j k q", |state, event| {
        let props = DashboardViewProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_component_ignores_unbound_keys() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = DashboardView;

    let actions = harness.send_keys::<NumericComponentId, _, _>("x r 5", |state, event| {
        let props = DashboardViewProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    let resize = Action::UiResize(80, 24);
    let scroll = Action::ScrollDown;
    let strip = Action::StripNext;
    let quit = Action::Quit;

    assert_eq!(resize.category(), Some("ui"));
    assert_eq!(scroll.category(), Some("scroll"));
    assert_eq!(strip.category(), Some("strip"));
    assert_eq!(quit.category(), None);

    assert!(resize.is_ui());
    assert!(scroll.is_scroll());
    assert!(strip.is_strip());
    assert!(!quit.is_scroll());

    for action in [
        Action::ScrollDown,
        Action::ScrollUp,
        Action::ScrollTop,
        Action::ScrollBottom,
    ] {
        assert_eq!(action.category(), Some("scroll"), "{:?}", action);
    }
    assert_eq!(Action::StripPrev.category(), Some("strip"));
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![Action::ScrollDown, Action::UiResize(100, 40)];

    assert_emitted!(actions, Action::ScrollDown);
    assert_emitted!(actions, Action::UiResize(_, _));
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::StripNext);
}

#[test]
fn test_custom_dashboard() {
    let mut dashboard = Dashboard::sample();
    dashboard.current.place = "Lisbon".into();

    let state = AppState::new(dashboard);
    assert_eq!(state.dashboard.current.place, "Lisbon");
    assert_eq!(state.screen().heading, "Lisbon");
    assert_eq!(state.scroll, 0);
    assert_eq!(state.strip_offset, 0);
}
