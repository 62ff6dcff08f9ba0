use chrono::format::{Item, StrftimeItems};
use chrono::{Duration, NaiveTime};
use std::fmt::Write;
use crate::constants::{HOURS_PER_DAY, MIDNIGHT, MILLIS_PER_HOUR, TIME_FORMAT};

/// Convert a time of day to a fraction of hours since midnight
#[must_use]
pub fn time_to_fraction(time: NaiveTime) -> f64 {
    duration_to_fraction(time.signed_duration_since(MIDNIGHT))
}

/// Convert a duration to fractional hours (millisecond precision)
#[must_use]
pub fn duration_to_fraction(duration: Duration) -> f64 {
    // Millisecond counts for a day fit comfortably in f64's 53-bit mantissa
    #[allow(clippy::cast_precision_loss)]
    let millis = duration.num_milliseconds() as f64;
    millis / MILLIS_PER_HOUR
}

/// Convert fractional hours to a duration, rounded to the millisecond.
///
/// Values beyond the representable range saturate at `Duration::MAX`.
#[must_use]
pub fn fraction_to_duration(hours: f64) -> Duration {
    let millis = (hours * MILLIS_PER_HOUR).round();
    // `as` saturates out-of-range floats
    #[allow(clippy::cast_possible_truncation)]
    let millis = millis as i64;
    Duration::try_milliseconds(millis).unwrap_or(Duration::MAX)
}

/// Advance a time of day by fractional hours, wrapping around midnight.
///
/// Whole days are dropped before conversion so very long offsets keep
/// their sub-day precision.
#[must_use]
pub fn add_hours_wrapping(time: NaiveTime, hours: f64) -> NaiveTime {
    time + fraction_to_duration(hours.rem_euclid(HOURS_PER_DAY))
}

/// Parse a time string in HH:MM format
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a valid time in HH:MM format.
pub fn parse_time_hm(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
}

/// Format a time of day as HH:MM
#[must_use]
pub fn format_time_hm(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Check that a `chrono` format string can render a time of day.
///
/// Date specifiers such as `%Y` parse fine but fail when applied to a
/// `NaiveTime`, so the format is tried on midnight.
#[must_use]
pub fn is_valid_time_format(format: &str) -> bool {
    let items = StrftimeItems::new(format);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut rendered = String::new();
    write!(rendered, "{}", MIDNIGHT.format_with_items(items)).is_ok()
}

/// Serde adapter for `NaiveTime` fields written as `"HH:MM"`
pub mod hm_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_time_hm(*time))
    }

    /// # Errors
    ///
    /// Returns an error if the value is not a valid `HH:MM` string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_time_hm(&s)
            .map_err(|e| serde::de::Error::custom(format!("invalid time '{s}': {e}")))
    }
}
