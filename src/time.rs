use crate::error::ParseError;
use crate::weekday::Weekday;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub hours: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftedTime {
    pub display_hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
    pub days_passed: u64,
    pub weekday: Option<Weekday>,
}

fn number(raw: &str) -> Result<u32, ParseError> {
    raw.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}

impl FromStr for ClockTime {
    type Err = ParseError;

    /// Parses `"H:MM AM"` / `"H:MM PM"` with hour 1-12.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (raw_hour, rest) = text
            .split_once(':')
            .ok_or_else(|| ParseError::MissingSeparator(text.to_string()))?;
        let (raw_minute, raw_meridiem) = rest
            .split_once(' ')
            .ok_or_else(|| ParseError::MissingMeridiem(text.to_string()))?;

        let hour = number(raw_hour)?;
        let minute = number(raw_minute)?;
        if !(1..=12).contains(&hour) {
            return Err(ParseError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ParseError::MinuteOutOfRange(minute));
        }

        // 12 PM is already hour 12 in 24-hour form; 12 AM wraps to 0.
        let hour = match raw_meridiem.trim() {
            "PM" if hour != 12 => hour + 12,
            "PM" => hour,
            "AM" if hour == 12 => 0,
            "AM" => hour,
            other => return Err(ParseError::InvalidMeridiem(other.to_string())),
        };

        Ok(ClockTime { hour, minute })
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    /// Parses `"H:MM"` with no meridiem and unbounded hours.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (raw_hours, raw_minutes) = text
            .split_once(':')
            .ok_or_else(|| ParseError::MissingSeparator(text.to_string()))?;

        let hours = number(raw_hours)?;
        let minutes = number(raw_minutes)?;
        if minutes > 59 {
            return Err(ParseError::MinuteOutOfRange(minutes));
        }

        Ok(Duration { hours, minutes })
    }
}

impl ClockTime {
    /// Adds a duration, counting midnight crossings, and advances the
    /// weekday by that count when one is supplied.
    pub fn add(self, duration: Duration, weekday: Option<Weekday>) -> ShiftedTime {
        // Total minutes in u64: a duration may carry up to u32::MAX hours
        let total = u64::from(self.hour) * 60
            + u64::from(self.minute)
            + u64::from(duration.hours) * 60
            + u64::from(duration.minutes);

        let days_passed = total / 1440;
        let hour = ((total % 1440) / 60) as u32;
        let minute = (total % 60) as u32;

        let meridiem = if hour < 12 { Meridiem::Am } else { Meridiem::Pm };
        let display_hour = match hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };

        ShiftedTime {
            display_hour,
            minute,
            meridiem,
            days_passed,
            weekday: weekday.map(|day| day.advance(days_passed)),
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

impl fmt::Display for ShiftedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.display_hour, self.minute, self.meridiem)?;
        if let Some(day) = self.weekday {
            write!(f, ", {}", day)?;
        }
        match self.days_passed {
            0 => Ok(()),
            1 => write!(f, " (next day)"),
            n => write!(f, " ({} days later)", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(text: &str) -> ClockTime {
        text.parse().unwrap()
    }

    fn duration(text: &str) -> Duration {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_morning() {
        assert_eq!(clock("3:05 AM"), ClockTime { hour: 3, minute: 5 });
    }

    #[test]
    fn test_parse_afternoon() {
        assert_eq!(clock("3:05 PM"), ClockTime { hour: 15, minute: 5 });
    }

    #[test]
    fn test_parse_noon_and_midnight() {
        assert_eq!(clock("12:00 PM"), ClockTime { hour: 12, minute: 0 });
        assert_eq!(clock("12:00 AM"), ClockTime { hour: 0, minute: 0 });
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            "300 AM".parse::<ClockTime>(),
            Err(ParseError::MissingSeparator("300 AM".to_string()))
        );
        assert_eq!(
            "3:00".parse::<ClockTime>(),
            Err(ParseError::MissingMeridiem("3:00".to_string()))
        );
        assert_eq!(
            "3:xx AM".parse::<ClockTime>(),
            Err(ParseError::InvalidNumber("xx".to_string()))
        );
        assert_eq!(
            "13:99 XM".parse::<ClockTime>(),
            Err(ParseError::HourOutOfRange(13))
        );
        assert_eq!(
            "3:99 XM".parse::<ClockTime>(),
            Err(ParseError::MinuteOutOfRange(99))
        );
        assert_eq!(
            "3:30 XM".parse::<ClockTime>(),
            Err(ParseError::InvalidMeridiem("XM".to_string()))
        );
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(duration("0:00"), Duration { hours: 0, minutes: 0 });
        assert_eq!(duration("50:30"), Duration { hours: 50, minutes: 30 });
    }

    #[test]
    fn test_parse_duration_rejects_malformed() {
        assert_eq!(
            "205".parse::<Duration>(),
            Err(ParseError::MissingSeparator("205".to_string()))
        );
        assert_eq!(
            "2:75".parse::<Duration>(),
            Err(ParseError::MinuteOutOfRange(75))
        );
    }

    #[test]
    fn test_add_zero_is_identity() {
        let shifted = clock("3:21 PM").add(duration("0:00"), None);
        assert_eq!(shifted.to_string(), "3:21 PM");
        assert_eq!(shifted.days_passed, 0);
    }

    #[test]
    fn test_minute_overflow_carries_hour() {
        let shifted = clock("11:45 AM").add(duration("0:30"), None);
        assert_eq!(shifted.to_string(), "12:15 PM");
    }

    #[test]
    fn test_rollover_past_midnight() {
        let shifted = clock("11:30 PM").add(duration("2:00"), None);
        assert_eq!(shifted.to_string(), "1:30 AM (next day)");
        assert_eq!(shifted.days_passed, 1);
    }

    #[test]
    fn test_max_hour_duration_stays_exact() {
        let shifted = clock("11:00 PM").add(duration("4294967295:00"), None);
        assert_eq!(shifted.days_passed, 178_956_971);
        assert_eq!(shifted.to_string(), "2:00 PM (178956971 days later)");
    }

    #[test]
    fn test_multi_day_rollover_with_weekday() {
        let shifted = clock("8:00 AM").add(duration("50:00"), Some(Weekday::Monday));
        assert_eq!(shifted.to_string(), "10:00 AM, Wednesday (2 days later)");
        assert_eq!(shifted.days_passed, 2);
    }

    #[test]
    fn test_midnight_displays_as_twelve() {
        let shifted = clock("12:00 AM").add(duration("0:00"), None);
        assert_eq!(shifted.to_string(), "12:00 AM");
    }

    #[test]
    fn test_weekday_kept_without_rollover() {
        let shifted = clock("10:10 AM").add(duration("1:00"), Some(Weekday::Friday));
        assert_eq!(shifted.to_string(), "11:10 AM, Friday");
    }

    #[test]
    fn test_single_digit_minute_padded() {
        let shifted = clock("2:59 PM").add(duration("0:02"), None);
        assert_eq!(shifted.to_string(), "3:01 PM");
    }
}
