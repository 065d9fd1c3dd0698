//! Reducer - pure function: (state, action) -> DispatchResult
//!
//! Only the view is ever touched here; the dataset is read-only.

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Viewport};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Scroll actions =====
        Action::ScrollDown => {
            let target = state.scroll.saturating_add(1).min(state.max_scroll());
            set_scroll(state, target)
        }

        Action::ScrollUp => {
            let target = state.scroll.saturating_sub(1);
            set_scroll(state, target)
        }

        Action::ScrollTop => set_scroll(state, 0),

        Action::ScrollBottom => {
            let target = state.max_scroll();
            set_scroll(state, target)
        }

        // ===== Strip actions =====
        Action::StripNext => {
            let target = (state.strip_offset + 1).min(state.max_strip_offset());
            set_strip_offset(state, target)
        }

        Action::StripPrev => {
            let target = state.strip_offset.saturating_sub(1);
            set_strip_offset(state, target)
        }

        // ===== UI actions =====
        Action::UiResize(width, height) => {
            state.viewport = Viewport { width, height };
            state.scroll = state.scroll.min(state.max_scroll());
            state.strip_offset = state.strip_offset.min(state.max_strip_offset());
            tracing::debug!(
                width,
                height,
                scroll = state.scroll,
                strip_offset = state.strip_offset,
                "viewport resized"
            );
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn set_scroll(state: &mut AppState, target: u16) -> DispatchResult<Effect> {
    if target == state.scroll {
        return DispatchResult::unchanged();
    }
    state.scroll = target;
    DispatchResult::changed()
}

fn set_strip_offset(state: &mut AppState, target: usize) -> DispatchResult<Effect> {
    if target == state.strip_offset {
        return DispatchResult::unchanged();
    }
    state.strip_offset = target;
    DispatchResult::changed()
}
