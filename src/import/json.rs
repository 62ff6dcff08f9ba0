use crate::error::ImportError;
use crate::logging::dev_log;
use crate::models::Train;
use std::io::Read;

/// Read trains from a JSON array.
///
/// Departures use `"HH:MM"`. Speeds are not checked here; an invalid speed
/// surfaces as a `SimulationError` on that train's report line.
///
/// # Errors
///
/// Returns an error if the input is unreadable or not an array of trains.
pub fn import_json<R: Read>(reader: R) -> Result<Vec<Train>, ImportError> {
    let trains: Vec<Train> = serde_json::from_reader(reader)?;
    dev_log!("Imported {} trains from JSON", trains.len());
    Ok(trains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::import::invalid_trains;

    const JSON: &str = r#"[
        {"name": "R1", "speed": 50, "stops": [{"name": "X", "distance": 100}], "departure": "08:00"},
        {"name": "R2", "speed": 0, "departure": "09:00", "priority": true}
    ]"#;

    #[test]
    fn test_import_json() {
        let trains = import_json(JSON.as_bytes()).expect("valid json");
        assert_eq!(trains.len(), 2);
        assert_eq!(trains[0].total_distance(), 100.0);
        assert!(trains[1].stops.is_empty());
        assert!(trains[1].priority);
    }

    #[test]
    fn test_invalid_trains() {
        let trains = import_json(JSON.as_bytes()).expect("valid json");
        let invalid = invalid_trains(&trains);
        assert_eq!(
            invalid,
            vec![SimulationError::InvalidTrain {
                name: "R2".to_string(),
                speed: 0.0
            }]
        );
    }

    #[test]
    fn test_import_json_malformed() {
        assert!(matches!(
            import_json(r#"{"name": "R1"}"#.as_bytes()),
            Err(ImportError::Json(_))
        ));
    }
}
