//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::data::Dashboard;
use crate::layout;
use crate::screen::Screen;

/// Terminal size the dashboard is laid out for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Dataset (fixed at startup) ---
    /// Weather records the screen is built from
    #[debug(section = "Dataset", label = "Dashboard", debug_fmt)]
    pub dashboard: Dashboard,

    // --- View ---
    #[debug(section = "View", label = "Viewport", debug_fmt)]
    pub viewport: Viewport,

    /// First content row shown at the top of the body
    #[debug(section = "View", label = "Scroll")]
    pub scroll: u16,

    /// Index of the first forecast card shown in the strip
    #[debug(section = "View", label = "Strip offset")]
    pub strip_offset: usize,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            viewport: Viewport::default(),
            scroll: 0,
            strip_offset: 0,
        }
    }

    pub fn with_viewport(mut self, width: u16, height: u16) -> Self {
        self.viewport = Viewport { width, height };
        self
    }

    /// Visual tree for the current dataset
    pub fn screen(&self) -> Screen {
        Screen::build(&self.dashboard.current, &self.dashboard.forecast)
    }

    pub fn max_scroll(&self) -> u16 {
        layout::max_scroll(self.viewport.height)
    }

    pub fn max_strip_offset(&self) -> usize {
        layout::max_strip_offset(self.dashboard.forecast.len(), self.viewport.width)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Dashboard::sample())
    }
}
