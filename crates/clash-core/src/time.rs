//! Wall-clock arithmetic on `HH:MM` strings.
//!
//! Times are minutes since midnight. There is no midnight rollover: adding a
//! duration that runs past 23:59 yields hours of 24 or more, and a negative
//! delta can yield negative hours. Both are formatted as-is.

use thiserror::Error;

const MINUTES_PER_HOUR: i64 = 60;
const MAX_HOUR: u32 = 23;
const MAX_MINUTE: u32 = 59;

/// Time parsing errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The string is not two colon-separated numeric fields in range.
    #[error("invalid time format: {value:?}, expected HH:MM")]
    InvalidTimeFormat { value: String },
}

/// Parse an `HH:MM` string into minutes since midnight.
///
/// Fields need not be zero-padded (`"9:5"` is 09:05), but each must be all
/// digits, the hour must be in `0..=23` and the minute in `0..=59`.
pub fn to_minutes(time: &str) -> Result<u32, TimeError> {
    let invalid = || TimeError::InvalidTimeFormat {
        value: time.to_string(),
    };

    let (hour, minute) = time.split_once(':').ok_or_else(invalid)?;
    let hour = parse_field(hour, MAX_HOUR).ok_or_else(invalid)?;
    let minute = parse_field(minute, MAX_MINUTE).ok_or_else(invalid)?;

    Ok(hour * 60 + minute)
}

fn parse_field(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().filter(|value| *value <= max)
}

/// Add `delta` minutes to an `HH:MM` string.
///
/// The result is not wrapped at midnight: `add_minutes("23:30", 60)` is
/// `"24:30"`.
pub fn add_minutes(time: &str, delta: i64) -> Result<String, TimeError> {
    let total = i64::from(to_minutes(time)?) + delta;
    Ok(format_minutes(total))
}

/// Format minutes since midnight as `HH:MM`.
///
/// Hours are floored so the minute field is always in `0..=59`; values
/// outside a single day keep their out-of-range hour (`1470` is `"24:30"`,
/// `-30` is `"-1:30"`).
pub fn format_minutes(total: i64) -> String {
    let hours = total.div_euclid(MINUTES_PER_HOUR);
    let minutes = total.rem_euclid(MINUTES_PER_HOUR);
    format!("{hours:02}:{minutes:02}")
}
