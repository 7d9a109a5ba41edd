//! Greedy timetable assignment engine.
//!
//! # Algorithm
//!
//! 1. Sort subjects descending by (total hours, lab hours): heavy and
//!    lab-heavy subjects face the tightest constraints and go first.
//! 2. Per subject, place lecture hours one slot at a time, preferring
//!    weekdays the subject does not use yet and picking among candidate
//!    slots at random; then place lab hours as contiguous 2-slot blocks.
//! 3. Faculty are tried in input order against the availability checks;
//!    the first member who passes gets the slot. Committed slots are
//!    never revisited (greedy, no backtracking).
//!
//! Lectures are placed before labs for each subject. That can consume a
//! day's only viable lab pair and is a known source of avoidable
//! shortfalls; it is kept because reordering changes results the rest of
//! the pipeline is calibrated against.
//!
//! Infeasibility never raises: the engine returns a best-effort schedule
//! with the shortfall quantified per subject. The only pre-placement
//! error is a run with no subjects or no faculty at all.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::availability::{check_availability, check_block_availability};
use super::rooms::{allocate_room, RoomPolicy};
use super::state::{SchedulerState, SlotIndex};
use crate::conflict::detect_conflicts;
use crate::error::{EngineError, Result};
use crate::models::{
    FacultyMember, Room, RoomWarning, RunSummary, Schedule, SlotType, Subject, SubjectOutcome,
    SubjectStatus, TimeSlot, Weekday,
};

/// Tunable knobs for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingPolicy {
    /// Room selection capacity floors.
    pub room_policy: RoomPolicy,
    /// Consecutive-hours cap for faculty without a personal one.
    pub default_max_consecutive_hours: u32,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            room_policy: RoomPolicy::default(),
            default_max_consecutive_hours: 3,
        }
    }
}

/// Input container for one generation run.
///
/// The caller (the ingestion/persistence layer) hands over clean, typed
/// records; the engine does no I/O.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Subjects of the target semester.
    pub subjects: Vec<Subject>,
    /// All teaching staff, in the order the data source returns them.
    pub faculty: Vec<FacultyMember>,
    /// The configuration's full slot calendar (breaks included).
    pub slots: Vec<TimeSlot>,
    /// All registered rooms.
    pub rooms: Vec<Room>,
}

impl ScheduleRequest {
    /// Creates a request without rooms.
    pub fn new(subjects: Vec<Subject>, faculty: Vec<FacultyMember>, slots: Vec<TimeSlot>) -> Self {
        Self {
            subjects,
            faculty,
            slots,
            rooms: Vec::new(),
        }
    }

    /// Sets the room inventory.
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }
}

/// Result of a generation run: the schedule plus its accounting.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Best-effort weekly schedule.
    pub schedule: Schedule,
    /// Per-subject and aggregate accounting.
    pub summary: RunSummary,
}

/// The greedy timetable scheduler.
///
/// Stateless between runs; all per-run state lives in a private
/// [`SchedulerState`], so independent runs can proceed concurrently on
/// separate instances or even the same one.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use timetable_engine::calendar::CalendarBuilder;
/// use timetable_engine::engine::{ScheduleRequest, TimetableScheduler};
/// use timetable_engine::models::{
///     AcademicConfiguration, FacultyMember, Subject, TimeOfDay, WorkingDays,
/// };
///
/// let mut builder = CalendarBuilder::new();
/// builder.register(AcademicConfiguration::single_shift(
///     "cfg1",
///     WorkingDays::MonFri,
///     TimeOfDay::from_hm(9, 0),
///     TimeOfDay::from_hm(17, 0),
/// ));
/// let slots = builder.generate("cfg1").unwrap().to_vec();
///
/// let request = ScheduleRequest::new(
///     vec![Subject::new("s1", "Data Structures", "CS301").with_lecture_hours(3)],
///     vec![FacultyMember::new("f1", "A. Rao", "AR")],
///     slots,
/// );
/// let mut rng = SmallRng::seed_from_u64(7);
/// let outcome = TimetableScheduler::new()
///     .schedule(&request, &mut rng)
///     .unwrap();
/// assert_eq!(outcome.summary.fully_scheduled, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableScheduler {
    policy: SchedulingPolicy,
}

impl TimetableScheduler {
    /// Creates a scheduler with default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheduling policy.
    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs one generation pass over the request.
    ///
    /// The injected `rng` is the only source of randomness; seeding it
    /// makes the run reproducible.
    ///
    /// # Errors
    /// [`EngineError::InsufficientInputData`] when the request has no
    /// subjects or no faculty. Everything else is reported in the summary.
    pub fn schedule<R: Rng>(
        &self,
        request: &ScheduleRequest,
        rng: &mut R,
    ) -> Result<ScheduleOutcome> {
        if request.subjects.is_empty() || request.faculty.is_empty() {
            return Err(EngineError::InsufficientInputData(
                request.subjects.len(),
                request.faculty.len(),
            ));
        }

        let index = SlotIndex::new(&request.slots);
        let mut state = SchedulerState::new(request.faculty.iter().map(|f| f.id.as_str()));
        let mut warnings = Vec::new();

        // Heaviest subjects first; among equals, lab-heavy first since
        // labs need contiguous pairs.
        let mut subjects: Vec<&Subject> = request.subjects.iter().collect();
        subjects.sort_by_key(|s| (std::cmp::Reverse(s.total_hours()), std::cmp::Reverse(s.lab_hours)));

        let mut summary = RunSummary {
            total_subjects: subjects.len(),
            ..RunSummary::default()
        };

        for subject in subjects {
            let lectures = self.schedule_lectures(
                subject,
                &request.faculty,
                &request.rooms,
                &index,
                &mut state,
                &mut warnings,
                rng,
            );
            let lab_blocks = self.schedule_labs(
                subject,
                &request.faculty,
                &request.rooms,
                &index,
                &mut state,
                &mut warnings,
            );
            let lab_hours = lab_blocks * 2;

            debug!(
                subject = %subject.code,
                lectures,
                lab_hours,
                "placed subject hours"
            );

            let full = lectures == subject.lecture_hours
                && lab_blocks >= subject.lab_blocks_needed();
            let status = if full {
                SubjectStatus::Full
            } else if lectures > 0 || lab_hours > 0 {
                SubjectStatus::Partial
            } else {
                SubjectStatus::Failed
            };
            match status {
                SubjectStatus::Full => summary.fully_scheduled += 1,
                SubjectStatus::Partial => summary.partially_scheduled += 1,
                SubjectStatus::Failed => summary.failed += 1,
            }

            summary.details.push(SubjectOutcome {
                subject_id: subject.id.clone(),
                code: subject.code.clone(),
                lectures_required: subject.lecture_hours,
                lectures_scheduled: lectures,
                lab_hours_required: subject.lab_hours,
                lab_hours_scheduled: lab_hours,
                status,
            });
        }

        // Defense in depth: the checks above should make this empty.
        summary.conflicts = detect_conflicts(&state.schedule, &request.slots);
        summary.warnings = warnings;

        Ok(ScheduleOutcome {
            schedule: state.schedule,
            summary,
        })
    }

    /// Places a subject's lecture hours one random eligible slot at a time.
    ///
    /// Each attempt prefers slots on weekdays the subject does not use
    /// yet; once every day carries the subject, any free slot qualifies.
    /// The attempt budget of twice the calendar size bounds the retry
    /// loop even when faculty checks keep failing.
    #[allow(clippy::too_many_arguments)]
    fn schedule_lectures<R: Rng>(
        &self,
        subject: &Subject,
        faculty: &[FacultyMember],
        rooms: &[Room],
        index: &SlotIndex<'_>,
        state: &mut SchedulerState,
        warnings: &mut Vec<RoomWarning>,
        rng: &mut R,
    ) -> u32 {
        let required = subject.lecture_hours;
        if required == 0 {
            return 0;
        }

        let max_attempts = index.available.len() * 2;
        let mut scheduled: u32 = 0;
        let mut attempts: usize = 0;
        let mut days_used: HashSet<Weekday> = HashSet::new();

        while scheduled < required && attempts < max_attempts {
            attempts += 1;

            let mut pool: Vec<&TimeSlot> = index
                .available
                .iter()
                .filter(|s| !days_used.contains(&s.day) && state.is_slot_free(&s.id))
                .copied()
                .collect();
            if pool.is_empty() {
                pool = index
                    .available
                    .iter()
                    .filter(|s| state.is_slot_free(&s.id))
                    .copied()
                    .collect();
            }
            let Some(&slot) = pool.choose(rng) else {
                break; // no free slot left anywhere
            };

            for member in faculty {
                if check_availability(
                    member,
                    slot,
                    state,
                    self.policy.default_max_consecutive_hours,
                )
                .is_err()
                {
                    continue;
                }

                let room = self.pick_room(rooms, slot, SlotType::Lecture, subject, state, warnings);
                state.assign(slot, &subject.id, &member.id, SlotType::Lecture, room);
                days_used.insert(slot.day);
                scheduled += 1;
                break;
            }
        }

        scheduled
    }

    /// Places a subject's lab hours as contiguous 2-slot blocks.
    ///
    /// Scans each weekday's slots in number order looking for a free pair
    /// with touching times (a pair never spans a break or a shift gap),
    /// then requires one faculty member to clear the block as a whole
    /// (both slots, and the weekly and consecutive caps with both hours
    /// counted) before committing it atomically.
    fn schedule_labs(
        &self,
        subject: &Subject,
        faculty: &[FacultyMember],
        rooms: &[Room],
        index: &SlotIndex<'_>,
        state: &mut SchedulerState,
        warnings: &mut Vec<RoomWarning>,
    ) -> u32 {
        let blocks_needed = subject.lab_blocks_needed();
        if blocks_needed == 0 {
            return 0;
        }

        let mut blocks: u32 = 0;

        'days: for day in Weekday::ALL {
            for slot in index.day_slots(day) {
                if blocks >= blocks_needed {
                    break 'days;
                }

                let Some(next) = index.get(day, slot.slot_number + 1) else {
                    continue;
                };
                // Pairs must be back to back in wall-clock time too.
                if next.start_time != slot.end_time {
                    continue;
                }
                if !state.is_slot_free(&slot.id) || !state.is_slot_free(&next.id) {
                    continue;
                }

                for member in faculty {
                    if check_block_availability(
                        member,
                        [slot, next],
                        state,
                        self.policy.default_max_consecutive_hours,
                    )
                    .is_err()
                    {
                        continue;
                    }

                    for s in [slot, next] {
                        let room =
                            self.pick_room(rooms, s, SlotType::Lab, subject, state, warnings);
                        state.assign(s, &subject.id, &member.id, SlotType::Lab, room);
                    }
                    blocks += 1;
                    break;
                }
            }
        }

        blocks
    }

    /// Allocates a room for an assignment, recording a warning on a miss.
    fn pick_room(
        &self,
        rooms: &[Room],
        slot: &TimeSlot,
        slot_type: SlotType,
        subject: &Subject,
        state: &SchedulerState,
        warnings: &mut Vec<RoomWarning>,
    ) -> Option<String> {
        match allocate_room(rooms, slot, slot_type, &self.policy.room_policy, state) {
            Some(room) => Some(room.id.clone()),
            None => {
                warn!(slot = %slot.id, subject = %subject.code, "no room available");
                warnings.push(RoomWarning {
                    slot_id: slot.id.clone(),
                    subject_id: subject.id.clone(),
                    slot_type,
                    detail: format!("no free {:?} room at {} {}", slot_type, slot.day, slot.start_time),
                });
                None
            }
        }
    }
}
