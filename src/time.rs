use clap::ValueEnum;
use std::fmt;

pub const MINUTES_PER_DAY: u64 = 24 * 60;

/// Wall-clock time of day, in minutes since midnight.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Time(pub u64);

impl Time {
    pub fn from_hm(hours: u64, minutes: u64) -> Option<Time> {
        (hours < 24 && minutes < 60).then_some(Time(hours * 60 + minutes))
    }

    /// Minutes from `self` until `later`, rolling over midnight when `later`
    /// reads earlier on the clock. Equal times are zero minutes apart.
    pub fn until(self, later: Time) -> u64 {
        if later >= self {
            later.0 - self.0
        } else {
            later.0 + MINUTES_PER_DAY - self.0
        }
    }
}

/// Accepted layout of the departure and arrival strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimePattern {
    /// One or two hour digits: `9:05`, `09:05`, `23:40`
    #[default]
    #[value(name = "H:mm")]
    Flexible,
    /// Exactly two hour digits: `09:05`
    #[value(name = "HH:mm")]
    Padded,
}

impl TimePattern {
    pub fn parse(self, text: &str) -> Option<Time> {
        let (hours, minutes) = text.split_once(':')?;
        let hours_len_ok = match self {
            TimePattern::Flexible => (1..=2).contains(&hours.len()),
            TimePattern::Padded => hours.len() == 2,
        };
        if !hours_len_ok || minutes.len() != 2 {
            return None;
        }
        if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Time::from_hm(hours.parse().ok()?, minutes.parse().ok()?)
    }
}

impl fmt::Display for TimePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePattern::Flexible => write!(f, "H:mm"),
            TimePattern::Padded => write!(f, "HH:mm"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightDuration {
    Valid(u64),
    /// Departure or arrival did not match the configured pattern.
    Invalid,
}

impl FlightDuration {
    pub fn minutes(self) -> Option<u64> {
        match self {
            FlightDuration::Valid(minutes) => Some(minutes),
            FlightDuration::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, FlightDuration::Valid(_))
    }
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightDuration::Valid(minutes) => write!(
                f,
                "{} hours {} minutes ({} minutes)",
                minutes / 60,
                minutes % 60,
                minutes
            ),
            FlightDuration::Invalid => write!(f, "unknown"),
        }
    }
}

/// Elapsed minutes between two clock readings, assuming the arrival is on
/// the same day or the day after.
pub fn flight_duration(departure: &str, arrival: &str, pattern: TimePattern) -> FlightDuration {
    match (pattern.parse(departure), pattern.parse(arrival)) {
        (Some(dep), Some(arr)) => FlightDuration::Valid(dep.until(arr)),
        _ => FlightDuration::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::FlightDuration::{Invalid, Valid};
    use super::*;

    fn duration(dep: &str, arr: &str) -> FlightDuration {
        flight_duration(dep, arr, TimePattern::Flexible)
    }

    #[test]
    fn test_same_day() {
        assert_eq!(Valid(90), duration("10:00", "11:30"));
    }

    #[test]
    fn test_midnight_rollover() {
        assert_eq!(Valid(45), duration("23:30", "0:15"));
        assert_eq!(Valid(1439), duration("0:01", "0:00"));
    }

    #[test]
    fn test_equal_times_do_not_wrap() {
        assert_eq!(Valid(0), duration("9:00", "9:00"));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(Invalid, duration("bad", "10:00"));
        assert_eq!(Invalid, duration("10:00", ""));
        assert_eq!(Invalid, duration("24:00", "10:00"));
        assert_eq!(Invalid, duration("10:60", "11:00"));
        assert_eq!(Invalid, duration("10:5", "11:00"));
        assert_eq!(Invalid, duration("10:00:00", "11:00"));
        assert_eq!(Invalid, duration(" 9:00", "11:00"));
        assert_eq!(Invalid, duration("+9:00", "11:00"));
        assert_eq!(Invalid, duration("123:00", "11:00"));
    }

    #[test]
    fn test_padded_pattern() {
        assert_eq!(Some(Time(545)), TimePattern::Padded.parse("09:05"));
        assert_eq!(None, TimePattern::Padded.parse("9:05"));
        assert_eq!(Some(Time(545)), TimePattern::Flexible.parse("9:05"));
        assert_eq!(Some(Time(545)), TimePattern::Flexible.parse("09:05"));
    }

    #[test]
    fn test_display() {
        assert_eq!("6 hours 5 minutes (365 minutes)", Valid(365).to_string());
        assert_eq!("0 hours 0 minutes (0 minutes)", Valid(0).to_string());
        assert_eq!("unknown", Invalid.to_string());
    }
}
