//! Core types for crossing detection.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Point where two trajectories meet
///
/// `time` keeps chrono's full `HH:MM:SS.fff` form when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub time: NaiveTime,
    pub distance: f64, // Distance from the origin, same unit as stop distances
}

/// A crossing between two trains of a collection.
///
/// `train1_idx < train2_idx` always holds; the first train is the one
/// listed first in the collection, not necessarily the earlier departure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossingFact {
    pub train1_idx: usize,
    pub train2_idx: usize,
    pub train1_name: String,
    pub train2_name: String,
    #[serde(flatten)]
    pub crossing: Crossing,
}

impl CrossingFact {
    /// Format a human-readable message describing the crossing
    ///
    /// # Errors
    ///
    /// Returns an error if `time_format` cannot render a time of day.
    pub fn format_message(&self, time_format: &str, distance_decimals: usize) -> Result<String, fmt::Error> {
        let mut message = String::new();
        write!(
            message,
            "Trains {} and {} cross at {} at km {:.*}",
            self.train1_name,
            self.train2_name,
            self.crossing.time.format(time_format),
            distance_decimals,
            self.crossing.distance
        )?;
        Ok(message)
    }
}
