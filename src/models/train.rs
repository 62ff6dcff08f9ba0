use crate::constants::DEFAULT_DEPARTURE_TIME;
use crate::time::hm_format;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use super::Stop;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub name: String,
    /// Constant speed in distance units per hour
    pub speed: f64,
    #[serde(default)]
    pub stops: Vec<Stop>,
    /// Reserved for conflict resolution; carried through unused
    #[serde(default)]
    pub priority: bool,
    #[serde(with = "hm_format")]
    pub departure: NaiveTime,
}

impl Train {
    /// Create a train with no stops, no priority and the default departure time
    #[must_use]
    pub fn new(name: impl Into<String>, speed: f64) -> Self {
        Self {
            name: name.into(),
            speed,
            stops: Vec::new(),
            priority: false,
            departure: DEFAULT_DEPARTURE_TIME,
        }
    }

    #[must_use]
    pub fn with_departure(mut self, departure: NaiveTime) -> Self {
        self.departure = departure;
        self
    }

    #[must_use]
    pub fn with_stops(mut self, stops: Vec<Stop>) -> Self {
        self.stops = stops;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    /// Speed must be finite and strictly positive before any division by it
    #[must_use]
    pub fn has_valid_speed(&self) -> bool {
        self.speed.is_finite() && self.speed > 0.0
    }

    /// Sum of every stop's distance (not the distance of the last stop)
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.stops.iter().map(|stop| stop.distance).sum()
    }
}
