//! Faculty member model.

use serde::{Deserialize, Serialize};

use super::Weekday;

/// A teaching staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyMember {
    /// Unique faculty identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Unique short code used on timetable grids (e.g. "RKP").
    pub short_code: String,
    /// Weekdays this member can teach on.
    pub available_days: Vec<Weekday>,
    /// Weekly assigned-hour cap.
    pub max_hours_per_week: u32,
    /// Cap on back-to-back teaching hours within a day.
    /// `None` falls back to the policy default.
    pub max_consecutive_hours: Option<u32>,
}

impl FacultyMember {
    /// Creates a new faculty member, available all six weekdays by default.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        short_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_code: short_code.into(),
            available_days: Weekday::ALL.to_vec(),
            max_hours_per_week: 24,
            max_consecutive_hours: None,
        }
    }

    /// Restricts availability to the given weekdays.
    pub fn with_available_days(mut self, days: Vec<Weekday>) -> Self {
        self.available_days = days;
        self
    }

    /// Sets the weekly hour cap.
    pub fn with_max_hours(mut self, hours: u32) -> Self {
        self.max_hours_per_week = hours;
        self
    }

    /// Sets a personal consecutive-hours cap.
    pub fn with_max_consecutive(mut self, hours: u32) -> Self {
        self.max_consecutive_hours = Some(hours);
        self
    }

    /// Whether this member can teach on the given day.
    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }
}
