//! Subject model.

use serde::{Deserialize, Serialize};

/// An academic subject with weekly teaching-hour requirements.
///
/// Lecture hours are placed one slot at a time; lab hours are placed in
/// contiguous two-slot blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Full subject name.
    pub name: String,
    /// Unique short code (e.g. "CS301").
    pub code: String,
    /// Semester this subject belongs to (1..=8).
    pub semester: u8,
    /// Required lecture hours per week.
    pub lecture_hours: u32,
    /// Required lab hours per week. Scheduled as 2-slot blocks.
    pub lab_hours: u32,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: impl Into<String>, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            semester: 1,
            lecture_hours: 0,
            lab_hours: 0,
        }
    }

    /// Sets the semester.
    pub fn with_semester(mut self, semester: u8) -> Self {
        self.semester = semester;
        self
    }

    /// Sets required lecture hours.
    pub fn with_lecture_hours(mut self, hours: u32) -> Self {
        self.lecture_hours = hours;
        self
    }

    /// Sets required lab hours.
    pub fn with_lab_hours(mut self, hours: u32) -> Self {
        self.lab_hours = hours;
        self
    }

    /// Total weekly hours (lecture + lab).
    #[inline]
    pub fn total_hours(&self) -> u32 {
        self.lecture_hours + self.lab_hours
    }

    /// Number of 2-slot lab blocks needed, rounding odd hours up.
    pub fn lab_blocks_needed(&self) -> u32 {
        self.lab_hours.div_ceil(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let s = Subject::new("s1", "Data Structures", "CS301")
            .with_semester(3)
            .with_lecture_hours(3)
            .with_lab_hours(2);

        assert_eq!(s.code, "CS301");
        assert_eq!(s.total_hours(), 5);
        assert_eq!(s.lab_blocks_needed(), 1);
    }

    #[test]
    fn test_lab_blocks_round_up() {
        let s = Subject::new("s1", "x", "X").with_lab_hours(3);
        assert_eq!(s.lab_blocks_needed(), 2);

        let none = Subject::new("s2", "y", "Y");
        assert_eq!(none.lab_blocks_needed(), 0);
    }
}
