//! Error types for the simulation core and the train importers.

/// Errors raised by the trajectory computations.
///
/// "No crossing" is not an error; it is an absent result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid train {name}: speed {speed} must be greater than zero")]
    InvalidTrain { name: String, speed: f64 },
}

/// Errors raised while turning raw input into `Train` values.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Train {train}: field '{field}' must not be empty")]
    MissingField { train: String, field: &'static str },

    #[error("Train {train}: invalid speed '{value}'")]
    InvalidSpeed { train: String, value: String },

    #[error("Train {train}: stop '{value}' must be written as name:distance")]
    InvalidStopFormat { train: String, value: String },

    #[error("Train {train}: invalid distance '{value}'")]
    InvalidDistance { train: String, value: String },

    #[error("Train {train}: invalid departure time '{value}' (expected HH:MM)")]
    InvalidDeparture { train: String, value: String },

    #[error("Row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<ImportError>,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
