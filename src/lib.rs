//! Academic timetable generation.
//!
//! Expands an institution's shift configuration into a weekly grid of time
//! slots, then fills the grid with a greedy, non-backtracking assignment
//! pass over subjects and faculty. Assignments that cannot be placed are
//! reported per subject rather than failing the run.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `AcademicConfiguration`, `TimeSlot`,
//!   `Subject`, `FacultyMember`, `Room`, `Schedule`, `RunSummary`
//! - **`calendar`**: Shift expansion into slots with break injection
//! - **`engine`**: Availability checks, room allocation, and the scheduler
//! - **`conflict`**: Post-run double-booking detection
//! - **`scoring`**: Quality metrics for a generated schedule
//! - **`validation`**: Input integrity checks (duplicate IDs, empty
//!   availability, malformed configurations)
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use timetable_engine::calendar::CalendarBuilder;
//! use timetable_engine::engine::{ScheduleRequest, TimetableScheduler};
//! use timetable_engine::models::{
//!     AcademicConfiguration, FacultyMember, Subject, TimeOfDay, WorkingDays,
//! };
//!
//! let config = AcademicConfiguration::single_shift(
//!     "cfg1",
//!     WorkingDays::MonFri,
//!     TimeOfDay::from_hm(9, 0),
//!     TimeOfDay::from_hm(17, 0),
//! );
//!
//! let mut calendar = CalendarBuilder::new();
//! calendar.register(config);
//! let slots = calendar.generate("cfg1").unwrap().to_vec();
//!
//! let subjects = vec![Subject::new("s1", "Data Structures", "CS301").with_lecture_hours(3)];
//! let faculty = vec![FacultyMember::new("f1", "R. K. Patel", "RKP")];
//!
//! let request = ScheduleRequest::new(subjects, faculty, slots);
//! let mut rng = SmallRng::seed_from_u64(42);
//! let outcome = TimetableScheduler::new().schedule(&request, &mut rng).unwrap();
//!
//! assert_eq!(outcome.summary.fully_scheduled, 1);
//! ```

pub mod calendar;
pub mod conflict;
pub mod engine;
pub mod error;
pub mod models;
pub mod scoring;
pub mod validation;
