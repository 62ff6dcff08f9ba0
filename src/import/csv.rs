use super::TrainInput;
use crate::error::ImportError;
use crate::logging::dev_log;
use crate::models::Train;
use std::io::Read;

/// Expected header: `name,speed,stops,departure,priority`
#[derive(Debug, Clone, Copy)]
pub struct CsvImportConfig {
    /// Skip invalid rows with a warning instead of failing on the first one
    pub lenient: bool,
    pub delimiter: u8,
}

impl Default for CsvImportConfig {
    fn default() -> Self {
        Self {
            lenient: false,
            delimiter: b',',
        }
    }
}

/// Read trains from CSV, validating each row like form input
///
/// # Errors
///
/// Returns an error if the CSV is unreadable, or (in strict mode) if any row
/// fails validation. Row numbers count data rows from 1.
pub fn import_csv<R: Read>(reader: R, config: CsvImportConfig) -> Result<Vec<Train>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut trains = Vec::new();
    for (idx, record) in reader.deserialize::<TrainInput>().enumerate() {
        let row = idx + 1;
        let result = record
            .map_err(ImportError::from)
            .and_then(|input| input.validate());

        match result {
            Ok(train) => trains.push(train),
            Err(e) if config.lenient => {
                log::warn!("Skipping row {row}: {e}");
            }
            Err(e) => {
                return Err(ImportError::Row {
                    row,
                    source: Box::new(e),
                })
            }
        }
    }

    dev_log!("Imported {} trains from CSV", trains.len());
    Ok(trains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stop;

    const CSV: &str = "\
name,speed,stops,departure,priority
R1,50,\"A:40, B:60\",08:00,false
R2,100,B:100,09:00,true
";

    #[test]
    fn test_import_csv() {
        let trains = import_csv(CSV.as_bytes(), CsvImportConfig::default()).expect("valid csv");

        assert_eq!(trains.len(), 2);
        assert_eq!(trains[0].name, "R1");
        assert_eq!(trains[0].stops, vec![Stop::new("A", 40.0), Stop::new("B", 60.0)]);
        assert!(!trains[0].priority);
        assert_eq!(trains[1].speed, 100.0);
        assert!(trains[1].priority);
    }

    #[test]
    fn test_import_csv_priority_optional() {
        let csv = "name,speed,stops,departure\nR1,50,A:10,08:00\n";
        let trains = import_csv(csv.as_bytes(), CsvImportConfig::default()).expect("valid csv");
        assert_eq!(trains.len(), 1);
        assert!(!trains[0].priority);
    }

    #[test]
    fn test_import_csv_strict_reports_row() {
        let csv = "name,speed,stops,departure,priority\nR1,50,A:10,08:00,false\nR2,-5,A:10,09:00,false\n";
        let err = import_csv(csv.as_bytes(), CsvImportConfig::default()).expect_err("should fail");

        assert!(matches!(err, ImportError::Row { row: 2, .. }));
        assert_eq!(err.to_string(), "Row 2: Train R2: invalid speed '-5'");
    }

    #[test]
    fn test_import_csv_lenient_skips_bad_rows() {
        let csv = "name,speed,stops,departure,priority\nR1,50,A:10,08:00,false\nR2,50,A10,09:00,false\nR3,70,A:10,25:00,false\nR4,70,A:10,10:00,false\n";
        let config = CsvImportConfig {
            lenient: true,
            ..CsvImportConfig::default()
        };
        let trains = import_csv(csv.as_bytes(), config).expect("lenient import");

        let names: Vec<_> = trains.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["R1", "R4"]);
    }

    #[test]
    fn test_import_csv_semicolon_delimiter() {
        let csv = "name;speed;stops;departure;priority\nR1;50;A:10, B:5;08:00;true\n";
        let config = CsvImportConfig {
            delimiter: b';',
            ..CsvImportConfig::default()
        };
        let trains = import_csv(csv.as_bytes(), config).expect("valid csv");
        assert_eq!(trains[0].total_distance(), 15.0);
    }
}
