pub mod current_card;
pub mod dashboard_view;
pub mod forecast_strip;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use dashboard_view::{DashboardView, DashboardViewProps, draw_screen};

/// Fixed dashboard palette
pub mod palette {
    use ratatui::style::Color;

    /// Current-conditions card background
    pub const ACCENT: Color = Color::Rgb(0x3F, 0x7C, 0xF5);
    /// Rules inside the accent card
    pub const DIVIDER: Color = Color::Rgb(0x61, 0xA2, 0xF7);
    /// Text on the accent background
    pub const ON_ACCENT: Color = Color::White;
    pub const CARD_BORDER: Color = Color::Gray;
    pub const MUTED: Color = Color::DarkGray;
}
