//! Fixed screen geometry shared by the renderer and the reducer
//!
//! The dashboard is laid out at a fixed height and drawn off-screen; the
//! terminal shows a vertical window into it. Scroll bounds are derived from
//! these numbers so the reducer never needs to look at a rendered frame.

use crate::sprites::SPRITE_HEIGHT;

/// Rows taken by the status bar under the dashboard
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Blank + place name + blank
pub const HEADING_HEIGHT: u16 = 3;

/// Horizontal margin around the current-conditions card
pub const CARD_MARGIN_X: u16 = 2;

/// Rows of the large temperature readout
pub const TEMPERATURE_HEIGHT: u16 = 4;

/// Rows of one metrics table row (blank, title, value)
pub const METRIC_ROW_HEIGHT: u16 = 3;

/// Divider + row + divider + row
pub const METRICS_HEIGHT: u16 = 2 * (1 + METRIC_ROW_HEIGHT);

/// Padding, sprite, label, date, padding, temperature, padding, metrics
pub const CURRENT_CARD_INNER_HEIGHT: u16 =
    1 + SPRITE_HEIGHT + 1 + 1 + 1 + TEMPERATURE_HEIGHT + 1 + METRICS_HEIGHT;

/// Inner rows plus the rounded border
pub const CURRENT_CARD_HEIGHT: u16 = CURRENT_CARD_INNER_HEIGHT + 2;

/// Blank + "Today / Next 7 Days" + blank
pub const SECTION_HEIGHT: u16 = 3;

pub const FORECAST_CARD_WIDTH: u16 = 7;
/// Border, weekday, blank, icon, blank, high, border
pub const FORECAST_CARD_HEIGHT: u16 = 7;
pub const FORECAST_SPACER_WIDTH: u16 = 2;

/// Columns left free on both sides of the strip for the scroll markers
pub const STRIP_PADDING_X: u16 = 2;

/// Cards + bottom padding
pub const STRIP_HEIGHT: u16 = FORECAST_CARD_HEIGHT + 1;

/// Total height of the dashboard content
pub const CONTENT_HEIGHT: u16 = HEADING_HEIGHT + CURRENT_CARD_HEIGHT + SECTION_HEIGHT + STRIP_HEIGHT;

/// Rows available to the dashboard in a terminal of the given height
pub fn body_height(viewport_height: u16) -> u16 {
    viewport_height.saturating_sub(STATUS_BAR_HEIGHT)
}

/// Largest vertical offset that still fills the body
pub fn max_scroll(viewport_height: u16) -> u16 {
    CONTENT_HEIGHT.saturating_sub(body_height(viewport_height))
}

/// Number of whole forecast cards that fit in a strip of the given width
pub fn visible_cards(width: u16) -> usize {
    let usable = width.saturating_sub(2 * STRIP_PADDING_X);
    if usable < FORECAST_CARD_WIDTH {
        return 0;
    }
    ((usable + FORECAST_SPACER_WIDTH) / (FORECAST_CARD_WIDTH + FORECAST_SPACER_WIDTH)) as usize
}

/// Largest strip offset that still shows the last card
pub fn max_strip_offset(cards: usize, width: u16) -> usize {
    cards.saturating_sub(visible_cards(width).max(1))
}
