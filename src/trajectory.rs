//! Trajectory model: travel time, arrival time and per-stop timetable of a train.
//!
//! A train runs at constant speed from its departure, so its position is a
//! ray `speed * (t - departure)` starting at distance 0.

use crate::error::SimulationError;
use crate::models::Train;
use crate::time::{add_hours_wrapping, fraction_to_duration, hm_format, time_to_fraction};
use chrono::{Duration, NaiveTime};
use serde::Serialize;

fn checked_speed(train: &Train) -> Result<f64, SimulationError> {
    if train.has_valid_speed() {
        Ok(train.speed)
    } else {
        Err(SimulationError::InvalidTrain {
            name: train.name.clone(),
            speed: train.speed,
        })
    }
}

/// Time needed to cover the train's total distance at its speed
///
/// # Errors
///
/// Returns `InvalidTrain` if the speed is not a finite value above zero.
pub fn compute_travel_time(train: &Train) -> Result<Duration, SimulationError> {
    let speed = checked_speed(train)?;
    Ok(fraction_to_duration(train.total_distance() / speed))
}

/// Departure plus travel time, wrapping around midnight
///
/// # Errors
///
/// Returns `InvalidTrain` if the speed is not a finite value above zero.
pub fn compute_arrival(train: &Train) -> Result<NaiveTime, SimulationError> {
    let speed = checked_speed(train)?;
    Ok(add_hours_wrapping(
        train.departure,
        train.total_distance() / speed,
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopTime {
    pub name: String,
    /// Running sum of stop distances up to and including this stop
    pub cumulative_distance: f64,
    #[serde(with = "hm_format")]
    pub time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub train_name: String,
    pub departure: NaiveTime,
    pub speed: f64,
    pub stop_times: Vec<StopTime>,
}

impl Trajectory {
    /// Build the trajectory and timetable of a train
    ///
    /// # Errors
    ///
    /// Returns `InvalidTrain` if the speed is not a finite value above zero.
    pub fn from_train(train: &Train) -> Result<Self, SimulationError> {
        let speed = checked_speed(train)?;

        let mut cumulative_distance = 0.0;
        let stop_times = train
            .stops
            .iter()
            .map(|stop| {
                cumulative_distance += stop.distance;
                StopTime {
                    name: stop.name.clone(),
                    cumulative_distance,
                    time: add_hours_wrapping(train.departure, cumulative_distance / speed),
                }
            })
            .collect();

        Ok(Self {
            train_name: train.name.clone(),
            departure: train.departure,
            speed,
            stop_times,
        })
    }

    /// Time of day the last stop is reached (departure if there are no stops)
    #[must_use]
    pub fn arrival(&self) -> NaiveTime {
        self.stop_times
            .last()
            .map_or(self.departure, |stop| stop.time)
    }

    /// Position along the line at `time`, not clipped to the last stop.
    ///
    /// Returns `None` before departure.
    #[must_use]
    pub fn position_at(&self, time: NaiveTime) -> Option<f64> {
        if time < self.departure {
            return None;
        }
        let elapsed = time_to_fraction(time) - time_to_fraction(self.departure);
        Some(self.speed * elapsed)
    }
}
