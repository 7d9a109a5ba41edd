//! Academic configuration model.
//!
//! A configuration identifies one scheduling run: the academic year and
//! term, the working-day pattern, and the shift windows that the calendar
//! expands into concrete time slots. Exactly one configuration is active
//! at a time; enforcing that is the persistence layer's job, not ours.

use serde::{Deserialize, Serialize};

use super::{TimeOfDay, Weekday};

/// Working-day pattern for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkingDays {
    /// Monday through Friday.
    MonFri,
    /// Monday through Saturday.
    MonSat,
}

impl WorkingDays {
    /// The ordered weekdays covered by this pattern.
    pub fn days(&self) -> &'static [Weekday] {
        match self {
            WorkingDays::MonFri => &Weekday::ALL[..5],
            WorkingDays::MonSat => &Weekday::ALL[..6],
        }
    }
}

/// Whether the institution runs one teaching window per day or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftMode {
    /// One shift per day; gets both a short break and a lunch break.
    Single,
    /// Multiple named shifts per day; each gets only the short break.
    Multi,
}

/// A named teaching window within a day (e.g. "Morning" 08:00-13:00).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Shift name.
    pub name: String,
    /// Window start.
    pub start: TimeOfDay,
    /// Window end.
    pub end: TimeOfDay,
}

impl Shift {
    /// Creates a new shift.
    pub fn new(name: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }
}

/// An academic scheduling configuration.
///
/// Immutable once slots have been generated for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicConfiguration {
    /// Unique configuration identifier.
    pub id: String,
    /// Academic year, `YYYY-YYYY` with consecutive years (e.g. "2025-2026").
    pub academic_year: String,
    /// Term within the year: "Jan-June" or "July-Dec".
    pub term: String,
    /// Semester number (1..=8). Odd semesters run July-Dec, even Jan-June.
    pub semester: u8,
    /// Working-day pattern.
    pub working_days: WorkingDays,
    /// Single- or multi-shift operation.
    pub shift_mode: ShiftMode,
    /// Shift windows. Exactly one for `Single`, one or more for `Multi`.
    pub shifts: Vec<Shift>,
}

impl AcademicConfiguration {
    /// Creates a single-shift configuration.
    pub fn single_shift(
        id: impl Into<String>,
        working_days: WorkingDays,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            id: id.into(),
            academic_year: String::new(),
            term: String::new(),
            semester: 1,
            working_days,
            shift_mode: ShiftMode::Single,
            shifts: vec![Shift::new("Day", start, end)],
        }
    }

    /// Creates a multi-shift configuration.
    pub fn multi_shift(
        id: impl Into<String>,
        working_days: WorkingDays,
        shifts: Vec<Shift>,
    ) -> Self {
        Self {
            id: id.into(),
            academic_year: String::new(),
            term: String::new(),
            semester: 1,
            working_days,
            shift_mode: ShiftMode::Multi,
            shifts,
        }
    }

    /// Sets the academic year.
    pub fn with_academic_year(mut self, year: impl Into<String>) -> Self {
        self.academic_year = year.into();
        self
    }

    /// Sets the term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Sets the semester.
    pub fn with_semester(mut self, semester: u8) -> Self {
        self.semester = semester;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_days() {
        assert_eq!(WorkingDays::MonFri.days().len(), 5);
        assert_eq!(WorkingDays::MonSat.days().len(), 6);
        assert_eq!(WorkingDays::MonSat.days()[5], Weekday::Saturday);
    }

    #[test]
    fn test_single_shift_builder() {
        let cfg = AcademicConfiguration::single_shift(
            "cfg1",
            WorkingDays::MonFri,
            TimeOfDay::from_hm(9, 0),
            TimeOfDay::from_hm(17, 0),
        )
        .with_academic_year("2025-2026")
        .with_term("July-Dec")
        .with_semester(3);

        assert_eq!(cfg.shift_mode, ShiftMode::Single);
        assert_eq!(cfg.shifts.len(), 1);
        assert_eq!(cfg.semester, 3);
        assert_eq!(cfg.shifts[0].name, "Day");
    }

    #[test]
    fn test_multi_shift_builder() {
        let cfg = AcademicConfiguration::multi_shift(
            "cfg2",
            WorkingDays::MonSat,
            vec![
                Shift::new("Morning", TimeOfDay::from_hm(8, 0), TimeOfDay::from_hm(13, 0)),
                Shift::new("Evening", TimeOfDay::from_hm(14, 0), TimeOfDay::from_hm(19, 0)),
            ],
        );

        assert_eq!(cfg.shift_mode, ShiftMode::Multi);
        assert_eq!(cfg.shifts.len(), 2);
    }
}
