//! Turning user-entered text into validated `Train` values.
//!
//! The simulation core never parses text; everything it receives comes
//! through here (or is built directly by the caller).

pub mod csv;
pub mod json;

pub use self::csv::{import_csv, CsvImportConfig};
pub use json::import_json;

use crate::constants::{STOP_DISTANCE_SEPARATOR, STOP_SEPARATOR};
use crate::error::{ImportError, SimulationError};
use crate::models::{Stop, Train};
use crate::time::parse_time_hm;
use serde::Deserialize;

/// Raw text fields for one train, as typed into a form or a CSV row
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrainInput {
    pub name: String,
    pub speed: String,
    /// `name:distance` pairs separated by commas
    pub stops: String,
    /// `HH:MM`
    pub departure: String,
    #[serde(default)]
    pub priority: bool,
}

impl TrainInput {
    /// Validate every field and build a `Train`
    ///
    /// # Errors
    ///
    /// Returns an error for the first field that is empty or malformed.
    pub fn validate(&self) -> Result<Train, ImportError> {
        let name = self.name.trim();
        let train = name.to_string();

        for (field, value) in [
            ("name", name),
            ("speed", self.speed.trim()),
            ("stops", self.stops.trim()),
            ("departure", self.departure.trim()),
        ] {
            if value.is_empty() {
                return Err(ImportError::MissingField {
                    train: train.clone(),
                    field,
                });
            }
        }

        let speed = parse_speed(&train, &self.speed)?;
        let stops = parse_stop_list(&train, &self.stops)?;
        let departure = parse_time_hm(&self.departure).map_err(|_| ImportError::InvalidDeparture {
            train: train.clone(),
            value: self.departure.trim().to_string(),
        })?;

        Ok(Train {
            name: train,
            speed,
            stops,
            priority: self.priority,
            departure,
        })
    }
}

/// Parse a speed that must be a finite number above zero
///
/// # Errors
///
/// Returns `InvalidSpeed` if the text is not a number or not above zero.
pub fn parse_speed(train: &str, text: &str) -> Result<f64, ImportError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(speed) if speed.is_finite() && speed > 0.0 => Ok(speed),
        _ => Err(ImportError::InvalidSpeed {
            train: train.to_string(),
            value: text.to_string(),
        }),
    }
}

/// Parse a stop list such as `A:5, B:3`
///
/// # Errors
///
/// Returns `InvalidStopFormat` if an entry does not contain exactly one `:`,
/// or `InvalidDistance` if a distance is not a non-negative number.
pub fn parse_stop_list(train: &str, text: &str) -> Result<Vec<Stop>, ImportError> {
    text.split(STOP_SEPARATOR)
        .map(|entry| parse_stop(train, entry))
        .collect()
}

fn parse_stop(train: &str, entry: &str) -> Result<Stop, ImportError> {
    let entry = entry.trim();
    let parts: Vec<&str> = entry.split(STOP_DISTANCE_SEPARATOR).collect();
    let [name, distance] = parts.as_slice() else {
        return Err(ImportError::InvalidStopFormat {
            train: train.to_string(),
            value: entry.to_string(),
        });
    };

    let distance_text = distance.trim();
    match distance_text.parse::<f64>() {
        Ok(distance) if distance.is_finite() && distance >= 0.0 => Ok(Stop::new(*name, distance)),
        _ => Err(ImportError::InvalidDistance {
            train: train.to_string(),
            value: distance_text.to_string(),
        }),
    }
}

/// Trains whose speed would be rejected by the simulation core
#[must_use]
pub fn invalid_trains(trains: &[Train]) -> Vec<SimulationError> {
    trains
        .iter()
        .filter(|train| !train.has_valid_speed())
        .map(|train| SimulationError::InvalidTrain {
            name: train.name.clone(),
            speed: train.speed,
        })
        .collect()
}
