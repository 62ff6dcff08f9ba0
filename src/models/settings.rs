use crate::constants::{MAX_DISTANCE_DECIMALS, TIME_FORMAT};
use crate::time::is_valid_time_format;
use serde::{Deserialize, Deserializer, Serialize};

fn deserialize_time_format<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let format = String::deserialize(deserializer)?;
    if is_valid_time_format(&format) {
        Ok(format)
    } else {
        Err(serde::de::Error::custom(format!("invalid time format '{format}'")))
    }
}

fn deserialize_speed_tolerance<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let tolerance = f64::deserialize(deserializer)?;
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(serde::de::Error::custom(format!(
            "speed tolerance {tolerance} must be a finite value of at least zero"
        )))
    }
}

fn deserialize_distance_decimals<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    usize::deserialize(deserializer).map(|decimals| decimals.min(MAX_DISTANCE_DECIMALS))
}

/// Options controlling crossing analysis and report formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Speeds closer than this are treated as parallel. `0.0` means exact equality.
    #[serde(deserialize_with = "deserialize_speed_tolerance")]
    pub speed_tolerance: f64,
    /// `chrono` format string for times in the report
    #[serde(deserialize_with = "deserialize_time_format")]
    pub time_format: String,
    /// Decimal places for crossing distances, at most `MAX_DISTANCE_DECIMALS`
    #[serde(deserialize_with = "deserialize_distance_decimals")]
    pub distance_decimals: usize,
    /// List each stop's arrival time under its train
    pub show_stop_times: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            speed_tolerance: 0.0,
            time_format: TIME_FORMAT.to_string(),
            distance_decimals: 2,
            show_stop_times: false,
        }
    }
}

impl SimulationSettings {
    /// Decimal places actually used when rendering distances
    #[must_use]
    pub fn effective_distance_decimals(&self) -> usize {
        self.distance_decimals.min(MAX_DISTANCE_DECIMALS)
    }

    /// Parse settings from JSON, filling missing fields with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
