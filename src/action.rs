//! Actions - everything that can change the view

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Scroll category =====
    // `Scroll` reads as a verb to category inference, so name it explicitly
    /// Reveal one more row below
    #[action(category = "scroll")]
    ScrollDown,

    /// Reveal one more row above
    #[action(category = "scroll")]
    ScrollUp,

    /// Jump to the heading
    #[action(category = "scroll")]
    ScrollTop,

    /// Jump to the last rows of the content
    #[action(category = "scroll")]
    ScrollBottom,

    // ===== Strip category =====
    /// Bring the next forecast card into view
    StripNext,

    /// Bring the previous forecast card into view
    StripPrev,

    // ===== UI category =====
    /// Terminal resized to (width, height)
    UiResize(u16, u16),

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
