#![allow(unknown_lints)]

pub mod models;
pub mod constants;
pub mod error;
pub mod logging;
pub mod time;
pub mod trajectory;
pub mod conflict;
pub mod report;
pub mod import;

pub use conflict::{analyze_all_pairs, find_crossing, Crossing, CrossingFact};
pub use error::{ImportError, SimulationError};
pub use models::{SimulationSettings, Stop, Train};
pub use report::{simulate, SimulationReport};
pub use trajectory::{compute_arrival, compute_travel_time, Trajectory};
