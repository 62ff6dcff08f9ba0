//! Report assembly: arrival facts and crossing facts rendered as text.

use crate::conflict::{analyze_all_pairs_with_tolerance, CrossingFact};
use crate::logging::dev_log;
use crate::models::{SimulationSettings, Train};
use crate::time::hm_format;
use crate::trajectory::{StopTime, Trajectory};
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt::{self, Write};

/// Departure and arrival of one train, or why it could not be computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrivalFact {
    pub train_name: String,
    #[serde(with = "hm_format")]
    pub departure: NaiveTime,
    #[serde(serialize_with = "serialize_arrival")]
    pub arrival: Option<NaiveTime>,
    pub stop_times: Vec<StopTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[allow(clippy::ref_option)]
fn serialize_arrival<S>(arrival: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match arrival {
        Some(time) => hm_format::serialize(time, serializer),
        None => serializer.serialize_none(),
    }
}

impl ArrivalFact {
    fn from_train(train: &Train) -> Self {
        match Trajectory::from_train(train) {
            Ok(trajectory) => Self {
                train_name: train.name.clone(),
                departure: train.departure,
                arrival: Some(trajectory.arrival()),
                stop_times: trajectory.stop_times,
                error: None,
            },
            Err(e) => Self {
                train_name: train.name.clone(),
                departure: train.departure,
                arrival: None,
                stop_times: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub arrivals: Vec<ArrivalFact>,
    pub crossings: Vec<CrossingFact>,
}

impl SimulationReport {
    /// Compute arrivals in collection order and crossings in pair order.
    ///
    /// An invalid train gets an error entry; the remaining trains and pairs
    /// are still analyzed.
    #[must_use]
    pub fn build(trains: &[Train], settings: &SimulationSettings) -> Self {
        let arrivals: Vec<_> = trains.iter().map(ArrivalFact::from_train).collect();

        let mut pairs = analyze_all_pairs_with_tolerance(trains, settings.speed_tolerance);
        let crossings: Vec<_> = pairs.by_ref().collect();

        dev_log!(
            "Simulated {} trains: {} pairs checked, {} crossings",
            trains.len(),
            pairs.pairs_evaluated(),
            crossings.len()
        );

        Self {
            arrivals,
            crossings,
        }
    }

    /// Render the report as the text block shown to the user
    ///
    /// # Errors
    ///
    /// Returns an error if `settings.time_format` cannot render a time of day.
    pub fn format(&self, settings: &SimulationSettings) -> Result<String, fmt::Error> {
        if self.arrivals.is_empty() {
            return Ok("No trains to simulate.\n".to_string());
        }

        let time_format = settings.time_format.as_str();
        let decimals = settings.effective_distance_decimals();
        let mut out = String::from("Departure and arrival times:\n");

        for fact in &self.arrivals {
            match (&fact.arrival, &fact.error) {
                (Some(arrival), _) => {
                    writeln!(
                        out,
                        "Train {}: departs at {}, arrives at {}",
                        fact.train_name,
                        fact.departure.format(time_format),
                        arrival.format(time_format)
                    )?;
                }
                (None, error) => {
                    writeln!(
                        out,
                        "Train {}: {}",
                        fact.train_name,
                        error.as_deref().unwrap_or("arrival unavailable")
                    )?;
                }
            }

            if settings.show_stop_times {
                for stop in &fact.stop_times {
                    writeln!(
                        out,
                        "  {} (km {:.*}) at {}",
                        stop.name,
                        decimals,
                        stop.cumulative_distance,
                        stop.time.format(time_format)
                    )?;
                }
            }
        }

        out.push_str("\nCrossing points:\n");
        if self.crossings.is_empty() {
            out.push_str("No crossings found between trains.\n");
        }
        for fact in &self.crossings {
            writeln!(out, "{}", fact.format_message(time_format, decimals)?)?;
        }

        Ok(out)
    }
}

/// Build and render a report in one step
///
/// # Errors
///
/// Returns an error if `settings.time_format` cannot render a time of day.
pub fn simulate(trains: &[Train], settings: &SimulationSettings) -> Result<String, fmt::Error> {
    SimulationReport::build(trains, settings).format(settings)
}
