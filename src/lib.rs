pub mod error;
pub mod time;
pub mod weekday;

pub use error::{Error, LookupError, ParseError};
pub use time::{ClockTime, Duration, Meridiem, ShiftedTime};
pub use weekday::Weekday;

/// Adds a duration to a 12-hour clock time and returns the formatted
/// result, e.g. `"1:30 AM, Tuesday (next day)"`.
///
/// `start` is `"H:MM AM|PM"`, `duration` is `"H:MM"`, and `current_day`
/// is an optional case-insensitive weekday name. When no weekday is
/// given the day name is left out of the output.
pub fn add_time(start: &str, duration: &str, current_day: Option<&str>) -> Result<String, Error> {
    let start: ClockTime = start.parse()?;
    let duration: Duration = duration.parse()?;
    let weekday = current_day
        .map(|day| day.parse::<Weekday>())
        .transpose()?;

    Ok(start.add(duration, weekday).to_string())
}
