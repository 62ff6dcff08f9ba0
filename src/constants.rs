use chrono::NaiveTime;

/// Format used for departure input and report output (`HH:MM`)
pub const TIME_FORMAT: &str = "%H:%M";

/// Midnight, the origin of all fractional-hour calculations
pub const MIDNIGHT: NaiveTime = NaiveTime::MIN;

/// Default departure time for trains built without one (08:00)
pub const DEFAULT_DEPARTURE_TIME: NaiveTime = match NaiveTime::from_hms_opt(8, 0, 0) {
    Some(time) => time,
    None => panic!("Invalid default departure time"),
};

/// Separator between stops in a stop list (`A:5, B:3`)
pub const STOP_SEPARATOR: char = ',';

/// Separator between a stop name and its distance
pub const STOP_DISTANCE_SEPARATOR: char = ':';

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;
pub const HOURS_PER_DAY: f64 = 24.0;

/// Upper bound for `distance_decimals` in the report
pub const MAX_DISTANCE_DECIMALS: usize = 10;
