//! Condition sprites with multi-color layer support
//!
//! Each weather condition icon is drawn from one or more layers of ASCII art. Layers are
//! composited back-to-front with spaces treated as transparent, so a cloud and
//! its rain can carry different colors.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::icons::Icon;

/// Rows every sprite occupies
pub const SPRITE_HEIGHT: u16 = 5;
/// Columns every sprite occupies
pub const SPRITE_WIDTH: u16 = 13;

// ============================================================================
// Sprite data
// ============================================================================

mod sprite_data {
    pub const SUN: &[&str] = &[
        "    \\   /    ",
        "     .-.     ",
        "  - (   ) -  ",
        "     `-'     ",
        "    /   \\    ",
    ];

    // Back cloud (darker, smaller)
    pub const CLOUD_BACK: &[&str] = &[
        "         .-. ",
        "     .-(   ).",
        "             ",
    ];

    // Front cloud (lighter, larger)
    pub const CLOUD_FRONT: &[&str] = &[
        "             ",
        "     .--.    ",
        "  .-(    ).  ",
        " (___.__)__) ",
        "             ",
    ];

    // Cloud used above precipitation layers
    pub const CLOUD_TOP: &[&str] = &[
        "     .--.    ",
        "  .-(    ).  ",
        " (___.__)__) ",
    ];

    pub const RAIN: &[&str] = &[
        "             ",
        "             ",
        "             ",
        "  ' ' ' ' '  ",
        " ' ' ' ' '   ",
    ];

    pub const SNOW: &[&str] = &[
        "             ",
        "             ",
        "             ",
        "  * * * * *  ",
        " * * * * *   ",
    ];

    pub const LIGHTNING: &[&str] = &[
        "             ",
        "             ",
        "             ",
        "      /_     ",
        "       /     ",
    ];

    pub const FOG: &[&str] = &[
        "             ",
        "             ",
        " _ - _ - _ - ",
        "  _ - _ - _  ",
        " _ - _ - _ - ",
    ];
}

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    lines: &'static [&'static str],
    color: Color,
}

/// Composite multiple layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let max_lines = layers.iter().map(|l| l.lines.len()).max().unwrap_or(0);
    let max_width = layers
        .iter()
        .flat_map(|layer| layer.lines.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);

    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);

        for col_idx in 0..max_width {
            // Last layer is the foreground
            let mut found_char = ' ';
            let mut found_color = Color::Reset;

            for layer in layers.iter().rev() {
                let ch = layer
                    .lines
                    .get(line_idx)
                    .and_then(|line| line.chars().nth(col_idx));
                if let Some(ch) = ch.filter(|ch| *ch != ' ') {
                    found_char = ch;
                    found_color = layer.color;
                    break;
                }
            }

            spans.push(Span::styled(
                found_char.to_string(),
                Style::default().fg(found_color),
            ));
        }

        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

// ============================================================================
// Public API
// ============================================================================

/// Whether a full sprite fits in the given area
pub fn fits(width: u16, height: u16) -> bool {
    width >= SPRITE_WIDTH && height >= SPRITE_HEIGHT
}

/// Sprite when the icon has one and it fits, otherwise the icon's single glyph
pub fn icon_art(icon: Icon, width: u16, height: u16) -> Text<'static> {
    match get_sprite(icon) {
        Some(sprite) if fits(width, height) => sprite,
        _ => Text::from(Line::from(icon.glyph())),
    }
}

/// Get the layered sprite for a condition icon
///
/// Metric icons (wind, thermostat, ...) only exist as glyphs.
pub fn get_sprite(icon: Icon) -> Option<Text<'static>> {
    use sprite_data::*;

    let precipitation = |lines: &'static [&'static str], color: Color| {
        vec![
            SpriteLayer {
                lines: CLOUD_TOP,
                color: Color::Rgb(200, 200, 210),
            },
            SpriteLayer { lines, color },
        ]
    };

    let layers = match icon {
        Icon::Sunny => vec![SpriteLayer {
            lines: SUN,
            color: Color::Yellow,
        }],
        Icon::Cloudy => vec![
            SpriteLayer {
                lines: CLOUD_BACK,
                color: Color::Rgb(170, 180, 200),
            },
            SpriteLayer {
                lines: CLOUD_FRONT,
                color: Color::Rgb(240, 240, 250),
            },
        ],
        Icon::Rainy => precipitation(RAIN, Color::Rgb(150, 200, 255)),
        Icon::Snowy => precipitation(SNOW, Color::White),
        Icon::Stormy => precipitation(LIGHTNING, Color::Yellow),
        Icon::Foggy => precipitation(FOG, Color::Rgb(180, 180, 190)),
        Icon::Wind | Icon::Thermostat | Icon::Sun | Icon::Pressure => return None,
    };

    Some(composite_layers(&layers))
}
