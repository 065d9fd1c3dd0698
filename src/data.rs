//! Dashboard dataset - the fixed weather records the screen is built from
//!
//! The dataset is constructed once at startup (built-in sample or a JSON file
//! given on the command line) and never changes afterwards.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::icons::Icon;

/// Named weather state, used only to pick an icon and a label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sunny,
    #[default]
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
    Foggy,
}

impl Condition {
    /// Display label: the condition name in upper case
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "SUNNY",
            Condition::Cloudy => "CLOUDY",
            Condition::Rainy => "RAINY",
            Condition::Snowy => "SNOWY",
            Condition::Stormy => "STORMY",
            Condition::Foggy => "FOGGY",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Condition::Sunny => Icon::Sunny,
            Condition::Cloudy => Icon::Cloudy,
            Condition::Rainy => Icon::Rainy,
            Condition::Snowy => Icon::Snowy,
            Condition::Stormy => Icon::Stormy,
            Condition::Foggy => Icon::Foggy,
        }
    }
}

/// Current conditions at one place
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Weather {
    pub place: String,
    pub condition: Condition,
    pub date: NaiveDate,
    pub temperature: i32,
    pub feels_like_temperature: i32,
    /// km/h
    pub wind_speed: u32,
    pub index_uv: u32,
    /// Millibars
    pub pressure: i32,
}

/// Summary of a single forecast day
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub highest_temperature: i32,
}

/// The complete dataset behind one screen.
///
/// `forecast` is in chronological order; the first entry is "today".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Dashboard {
    pub current: Weather,
    pub forecast: Vec<WeatherForecast>,
}

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("place name must not be empty")]
    EmptyPlace,
    #[error("forecast day {index} is not after the previous day")]
    ForecastOutOfOrder { index: usize },
}

/// Observation date of the built-in sample
const SAMPLE_DATE: (i32, u32, u32) = (2021, 3, 18);

/// Highest temperatures for the sample week, starting on the observation date
const SAMPLE_HIGHS: [i32; 7] = [22, 24, 23, 19, 18, 20, 21];

impl Dashboard {
    pub fn new(current: Weather, forecast: Vec<WeatherForecast>) -> Self {
        Self { current, forecast }
    }

    /// Built-in sample dataset
    pub fn sample() -> Self {
        let (year, month, day) = SAMPLE_DATE;
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date");

        let forecast = date
            .iter_days()
            .zip(SAMPLE_HIGHS)
            .map(|(date, highest_temperature)| WeatherForecast {
                date,
                highest_temperature,
            })
            .collect();

        Self::new(
            Weather {
                place: "Berlin".into(),
                condition: Condition::Cloudy,
                date,
                temperature: 21,
                feels_like_temperature: 19,
                wind_speed: 12,
                index_uv: 3,
                pressure: 1012,
            },
            forecast,
        )
    }

    /// Parse and validate a JSON dataset
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let dashboard: Dashboard = serde_json::from_str(json)?;
        dashboard.validate()?;
        Ok(dashboard)
    }

    /// Read a JSON dataset from disk
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject datasets the screen cannot present faithfully
    pub fn validate(&self) -> Result<(), DataError> {
        if self.current.place.trim().is_empty() {
            return Err(DataError::EmptyPlace);
        }

        for (index, pair) in self.forecast.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(DataError::ForecastOutOfOrder { index: index + 1 });
            }
        }

        Ok(())
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::sample()
    }
}
