//! Timetabling domain models.
//!
//! Core data types for academic timetable generation: the configuration
//! that drives calendar expansion, the records the engine consumes
//! (subjects, faculty, rooms), and the schedule it produces.

mod config;
mod faculty;
mod room;
mod schedule;
mod slot;
mod subject;
mod time;

pub use config::{AcademicConfiguration, Shift, ShiftMode, WorkingDays};
pub use faculty::FacultyMember;
pub use room::{Room, RoomType};
pub use schedule::{
    Conflict, ConflictKind, RoomWarning, RunSummary, Schedule, ScheduleAssignment, SlotType,
    SubjectOutcome, SubjectStatus,
};
pub use slot::TimeSlot;
pub use subject::Subject;
pub use time::{TimeOfDay, Weekday};
