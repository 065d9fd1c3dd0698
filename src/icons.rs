//! Symbolic icon names and their terminal glyphs
//!
//! The serialized name (`cloudy`, `thermostat`, ...) is the asset name.
//! Glyphs are single-width so card layouts stay aligned on every terminal.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
    Foggy,
    Wind,
    Thermostat,
    /// UV index
    Sun,
    Pressure,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Sunny => "\u{2600}",      // ☀
            Icon::Cloudy => "\u{2601}",     // ☁
            Icon::Rainy => "\u{2602}",      // ☂
            Icon::Snowy => "\u{2744}",      // ❄
            Icon::Stormy => "\u{03df}",     // ϟ
            Icon::Foggy => "\u{2261}",      // ≡
            Icon::Wind => "\u{224b}",       // ≋
            Icon::Thermostat => "\u{2668}", // ♨
            Icon::Sun => "\u{263c}",        // ☼
            Icon::Pressure => "\u{25d4}",   // ◔
        }
    }
}
