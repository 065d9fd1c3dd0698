//! Visual tree of the dashboard screen
//!
//! `Screen::build` projects the dataset into everything the screen shows,
//! already formatted. It is pure: the same records always give an equal tree.
//! Drawing the tree into a terminal buffer is the job of `components`.

use crate::data::{Weather, WeatherForecast};
use crate::format;
use crate::icons::Icon;

/// Whole screen, top to bottom
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub heading: String,
    pub current: CurrentCard,
    pub section: SectionHeader,
    pub strip: Vec<StripItem>,
}

/// Current-conditions card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentCard {
    pub icon: Icon,
    pub label: &'static str,
    pub date: String,
    pub temperature: String,
    pub metrics: MetricsTable,
}

/// 2×2 grid of secondary readings, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsTable {
    pub rows: [[Metric; 2]; 2],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metric {
    pub icon: Icon,
    pub title: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionHeader {
    pub title: &'static str,
    pub link: &'static str,
}

/// One slot in the forecast strip
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StripItem {
    Card(ForecastCard),
    Spacer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForecastCard {
    pub weekday: String,
    pub icon: Icon,
    pub high: String,
    pub is_today: bool,
}

impl Screen {
    pub fn build(weather: &Weather, forecast: &[WeatherForecast]) -> Self {
        Self {
            heading: weather.place.clone(),
            current: CurrentCard::build(weather),
            section: SectionHeader {
                title: "Today",
                link: "Next 7 Days",
            },
            strip: build_strip(forecast),
        }
    }

    /// Forecast cards in display order, without spacers
    pub fn cards(&self) -> impl Iterator<Item = &ForecastCard> {
        self.strip.iter().filter_map(|item| match item {
            StripItem::Card(card) => Some(card),
            StripItem::Spacer => None,
        })
    }
}

impl CurrentCard {
    fn build(weather: &Weather) -> Self {
        Self {
            icon: weather.condition.icon(),
            label: weather.condition.label(),
            date: format::card_date(weather.date),
            temperature: format::degrees(weather.temperature),
            metrics: MetricsTable::build(weather),
        }
    }
}

impl MetricsTable {
    fn build(weather: &Weather) -> Self {
        Self {
            rows: [
                [
                    Metric {
                        icon: Icon::Wind,
                        title: "WIND",
                        value: format::wind_speed(weather.wind_speed),
                    },
                    Metric {
                        icon: Icon::Thermostat,
                        title: "FEELS LIKE",
                        value: format::degrees(weather.feels_like_temperature),
                    },
                ],
                [
                    Metric {
                        icon: Icon::Sun,
                        title: "INDEX UV",
                        value: weather.index_uv.to_string(),
                    },
                    Metric {
                        icon: Icon::Pressure,
                        title: "PRESSURE",
                        value: format::pressure(weather.pressure),
                    },
                ],
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.rows.iter().flatten()
    }
}

fn build_strip(forecast: &[WeatherForecast]) -> Vec<StripItem> {
    let mut strip = Vec::with_capacity(forecast.len() * 2);
    for (index, day) in forecast.iter().enumerate() {
        if index > 0 {
            strip.push(StripItem::Spacer);
        }
        strip.push(StripItem::Card(ForecastCard {
            weekday: format::weekday(day.date),
            icon: Icon::Sunny,
            high: day.highest_temperature.to_string(),
            is_today: index == 0,
        }));
    }
    strip
}
