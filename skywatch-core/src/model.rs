use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::registry::City;

/// Current-conditions fields the dashboard asks for by default.
pub const DEFAULT_CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "wind_speed_10m",
];

/// Hourly series the dashboard asks for by default.
pub const DEFAULT_HOURLY_FIELDS: &[&str] = &["temperature_2m", "wind_speed_10m"];

/// One forecast request, derived from a selected city.
///
/// Immutable once constructed; the field lists serialize as comma-joined
/// query parameter values on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub current_fields: Vec<String>,
    pub hourly_fields: Vec<String>,
    pub timezone: String,
}

impl ForecastQuery {
    /// Query for a city with the dashboard's default field sets.
    pub fn for_city(city: &City, timezone: impl Into<String>) -> Self {
        Self {
            latitude: city.latitude,
            longitude: city.longitude,
            current_fields: DEFAULT_CURRENT_FIELDS.iter().map(|s| s.to_string()).collect(),
            hourly_fields: DEFAULT_HOURLY_FIELDS.iter().map(|s| s.to_string()).collect(),
            timezone: timezone.into(),
        }
    }

    /// Value of the `current` query parameter.
    pub fn current_param(&self) -> String {
        self.current_fields.join(",")
    }

    /// Value of the `hourly` query parameter.
    pub fn hourly_param(&self) -> String {
        self.hourly_fields.join(",")
    }
}

/// Current conditions block: `time` and `interval` come with every response,
/// the requested fields arrive as flat numeric siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentBlock {
    pub time: String,
    pub interval: u32,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

/// Hourly block: one `time` axis plus one equally long series per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    #[serde(flatten)]
    pub series: BTreeMap<String, Vec<f64>>,
}

/// Forecast response, deserialized 1:1 from the Open-Meteo JSON shape.
///
/// Field names are fixed by the upstream provider and never renamed; the
/// client performs no derivation (no unit conversion and the like).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub generationtime_ms: f64,
    #[serde(default)]
    pub utc_offset_seconds: i64,
    pub timezone: String,
    #[serde(default)]
    pub timezone_abbreviation: String,
    #[serde(default)]
    pub elevation: f64,
    pub current: CurrentBlock,
    pub current_units: BTreeMap<String, String>,
    pub hourly: HourlyBlock,
    pub hourly_units: BTreeMap<String, String>,
}

impl ForecastResponse {
    /// Check the shape invariants the rest of the dashboard relies on:
    /// every hourly series is exactly as long as the time axis, and every
    /// reported field has a unit entry.
    pub fn validate(&self) -> Result<(), FetchError> {
        let expected = self.hourly.time.len();
        for (field, series) in &self.hourly.series {
            if series.len() != expected {
                return Err(FetchError::Shape(format!(
                    "hourly.{field} has {} values but hourly.time has {expected}",
                    series.len(),
                )));
            }
            if !self.hourly_units.contains_key(field) {
                return Err(FetchError::Shape(format!("no unit for hourly field {field}")));
            }
        }
        for field in self.current.values.keys() {
            if !self.current_units.contains_key(field) {
                return Err(FetchError::Shape(format!("no unit for current field {field}")));
            }
        }
        Ok(())
    }

    /// Unit string for a current field, empty when the provider omitted it.
    pub fn current_unit(&self, field: &str) -> &str {
        self.current_units.get(field).map(String::as_str).unwrap_or("")
    }
}
