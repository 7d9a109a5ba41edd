//! Time slot model.
//!
//! Slots are the bookable units the calendar produces: one per (day,
//! position) within a configuration's shift windows. Break slots carry a
//! slot number like any other but are never eligible for assignment.

use serde::{Deserialize, Serialize};

use super::{TimeOfDay, Weekday};

/// One bookable (or break) time unit in a configuration's calendar.
///
/// Slot numbers are sequential within a day and unique there, even when
/// several shifts contribute slots to the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot identifier, unique within the configuration (`"Monday-4"`).
    pub id: String,
    /// Owning configuration.
    pub config_id: String,
    /// Weekday this slot falls on.
    pub day: Weekday,
    /// Sequential position within the day, starting at 1.
    pub slot_number: u32,
    /// Slot start.
    pub start_time: TimeOfDay,
    /// Slot end.
    pub end_time: TimeOfDay,
    /// Whether this is a break (short break or lunch).
    pub is_break: bool,
}

impl TimeSlot {
    /// Creates a teaching slot.
    pub fn new(
        config_id: impl Into<String>,
        day: Weekday,
        slot_number: u32,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Self {
            id: format!("{}-{}", day.label(), slot_number),
            config_id: config_id.into(),
            day,
            slot_number,
            start_time,
            end_time,
            is_break: false,
        }
    }

    /// Marks this slot as a break.
    pub fn as_break(mut self) -> Self {
        self.is_break = true;
        self
    }

    /// Slot duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes - self.start_time.minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_format() {
        let s = TimeSlot::new(
            "cfg1",
            Weekday::Monday,
            4,
            TimeOfDay::from_hm(11, 15),
            TimeOfDay::from_hm(12, 15),
        );
        assert_eq!(s.id, "Monday-4");
        assert!(!s.is_break);
        assert_eq!(s.duration_minutes(), 60);
    }

    #[test]
    fn test_break_slot() {
        let s = TimeSlot::new(
            "cfg1",
            Weekday::Friday,
            3,
            TimeOfDay::from_hm(11, 0),
            TimeOfDay::from_hm(11, 15),
        )
        .as_break();
        assert!(s.is_break);
        assert_eq!(s.duration_minutes(), 15);
    }
}
