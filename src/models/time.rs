//! Wall-clock time and weekday primitives.
//!
//! The calendar works in whole minutes since midnight. Slots never cross
//! midnight, so a `u16` covers the full range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A time of day in minutes since midnight.
///
/// Parses from and displays as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Minutes since midnight (0..=1439).
    pub minutes: u16,
}

impl TimeOfDay {
    /// Creates a time from hour and minute components.
    pub fn from_hm(hour: u16, minute: u16) -> Self {
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Hour component (0..=23).
    #[inline]
    pub fn hour(&self) -> u16 {
        self.minutes / 60
    }

    /// Minute component (0..=59).
    #[inline]
    pub fn minute(&self) -> u16 {
        self.minutes % 60
    }

    /// Returns this time advanced by `minutes`.
    #[inline]
    pub fn plus_minutes(&self, minutes: u16) -> Self {
        Self {
            minutes: self.minutes + minutes,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ParseError::Time(s.to_string()))?;
        let hour: u16 = h.parse().map_err(|_| ParseError::Time(s.to_string()))?;
        let minute: u16 = m.parse().map_err(|_| ParseError::Time(s.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(ParseError::Time(s.to_string()));
        }
        Ok(Self::from_hm(hour, minute))
    }
}

/// A working weekday. Sunday is never scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All six schedulable weekdays in calendar order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Full English name.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Three-letter abbreviation.
    pub fn short(&self) -> &'static str {
        &self.label()[..3]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    /// Accepts both full names (`Monday`) and short forms (`Mon`),
    /// matching upstream data feeds that use `Mon-Tue-Wed` availability strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .find(|d| d.label().eq_ignore_ascii_case(s) || d.short().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParseError::Weekday(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_components() {
        let t = TimeOfDay::from_hm(9, 30);
        assert_eq!(t.minutes, 570);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.to_string(), "09:30");
    }

    #[test]
    fn test_time_parse() {
        let t: TimeOfDay = "13:05".parse().unwrap();
        assert_eq!(t, TimeOfDay::from_hm(13, 5));

        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("12:61".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_arithmetic() {
        let t = TimeOfDay::from_hm(11, 0).plus_minutes(15);
        assert_eq!(t.to_string(), "11:15");
        assert!(t > TimeOfDay::from_hm(11, 0));
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Tue".parse::<Weekday>().unwrap(), Weekday::Tuesday);
        assert_eq!("sat".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert!("Sunday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(Weekday::Wednesday.label(), "Wednesday");
        assert_eq!(Weekday::Wednesday.short(), "Wed");
        assert_eq!(Weekday::ALL.len(), 6);
    }
}
