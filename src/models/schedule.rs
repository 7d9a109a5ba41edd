//! Schedule (solution) model.
//!
//! A schedule maps time slots to (subject, faculty, room) assignments.
//! It is the mutable output of a generation run, together with the
//! per-subject outcomes, soft warnings, and any residual conflicts.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{TimeOfDay, Weekday};

/// Whether a slot holds a lecture or one half of a lab block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotType {
    Lecture,
    Lab,
}

/// One slot's assignment: subject, faculty, and (optionally) a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAssignment {
    /// Assigned slot.
    pub slot_id: String,
    /// Subject taught in this slot.
    pub subject_id: String,
    /// Faculty member teaching this slot.
    pub faculty_id: String,
    /// Lecture or lab.
    pub slot_type: SlotType,
    /// Allocated room, if one was free. `None` is a soft failure.
    pub room_id: Option<String>,
}

impl ScheduleAssignment {
    /// Creates an assignment without a room.
    pub fn new(
        slot_id: impl Into<String>,
        subject_id: impl Into<String>,
        faculty_id: impl Into<String>,
        slot_type: SlotType,
    ) -> Self {
        Self {
            slot_id: slot_id.into(),
            subject_id: subject_id.into(),
            faculty_id: faculty_id.into(),
            slot_type,
            room_id: None,
        }
    }

    /// Sets the allocated room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }
}

/// A completed (possibly partial) weekly schedule.
///
/// Keyed by slot id, so a slot can hold at most one assignment by
/// construction. `BTreeMap` keeps iteration order stable for reporting
/// and serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Slot id → assignment.
    pub assignments: BTreeMap<String, ScheduleAssignment>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an assignment, replacing any previous one for the slot.
    pub fn insert(&mut self, assignment: ScheduleAssignment) {
        self.assignments
            .insert(assignment.slot_id.clone(), assignment);
    }

    /// Whether the slot has no assignment yet.
    pub fn is_slot_free(&self, slot_id: &str) -> bool {
        !self.assignments.contains_key(slot_id)
    }

    /// The assignment for a slot, if any.
    pub fn assignment_for_slot(&self, slot_id: &str) -> Option<&ScheduleAssignment> {
        self.assignments.get(slot_id)
    }

    /// All assignments for a faculty member.
    pub fn assignments_for_faculty(&self, faculty_id: &str) -> Vec<&ScheduleAssignment> {
        self.assignments
            .values()
            .filter(|a| a.faculty_id == faculty_id)
            .collect()
    }

    /// All assignments for a subject.
    pub fn assignments_for_subject(&self, subject_id: &str) -> Vec<&ScheduleAssignment> {
        self.assignments
            .values()
            .filter(|a| a.subject_id == subject_id)
            .collect()
    }

    /// Assigned hours per faculty member.
    pub fn faculty_hours(&self) -> HashMap<String, u32> {
        let mut hours: HashMap<String, u32> = HashMap::new();
        for a in self.assignments.values() {
            *hours.entry(a.faculty_id.clone()).or_insert(0) += 1;
        }
        hours
    }

    /// Number of assigned slots.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of assignments that received a room.
    pub fn rooms_assigned_count(&self) -> usize {
        self.assignments
            .values()
            .filter(|a| a.room_id.is_some())
            .count()
    }
}

/// Classification of detected schedule conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// A faculty member holds two slots at the same day and start time.
    FacultyDoubleBooking,
    /// A room holds two slots at the same day and start time.
    RoomDoubleBooking,
}

/// A detected double booking.
///
/// Derived from the finished schedule, never authoritative state. The
/// placement logic is supposed to make these unreachable; finding one
/// means an engine invariant broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// What kind of collision this is.
    pub kind: ConflictKind,
    /// Colliding faculty or room id, depending on `kind`.
    pub entity_id: String,
    /// Day of the collision.
    pub day: Weekday,
    /// Start time of the collision.
    pub time: TimeOfDay,
    /// The two colliding slot ids.
    pub slot_ids: [String; 2],
}

/// A soft warning: an assignment went through without a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomWarning {
    /// Slot that went unroomed.
    pub slot_id: String,
    /// Subject scheduled in that slot.
    pub subject_id: String,
    /// Lecture or lab.
    pub slot_type: SlotType,
    /// Human-readable detail.
    pub detail: String,
}

/// Scheduling status of a single subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectStatus {
    /// All required hours placed.
    Full,
    /// Some hours placed, some short.
    Partial,
    /// Nothing placed.
    Failed,
}

/// Per-subject placement outcome: hours requested vs. hours placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectOutcome {
    /// Subject identifier.
    pub subject_id: String,
    /// Subject short code.
    pub code: String,
    /// Lecture hours required.
    pub lectures_required: u32,
    /// Lecture hours actually placed.
    pub lectures_scheduled: u32,
    /// Lab hours required.
    pub lab_hours_required: u32,
    /// Lab hours actually placed (2 per block).
    pub lab_hours_scheduled: u32,
    /// Overall status.
    pub status: SubjectStatus,
}

impl SubjectOutcome {
    /// Hours the engine could not place for this subject.
    ///
    /// Both terms saturate: placing more than required (possible for
    /// labs, where odd requirements round up to full blocks) counts as
    /// zero shortfall, never as negative.
    pub fn shortfall(&self) -> u32 {
        self.lectures_required.saturating_sub(self.lectures_scheduled)
            + self
                .lab_hours_required
                .saturating_sub(self.lab_hours_scheduled)
    }
}

/// Aggregate result of one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Subjects the run attempted to schedule.
    pub total_subjects: usize,
    /// Subjects with every required hour placed.
    pub fully_scheduled: usize,
    /// Subjects with some but not all hours placed.
    pub partially_scheduled: usize,
    /// Subjects with nothing placed.
    pub failed: usize,
    /// Per-subject detail, in scheduling order.
    pub details: Vec<SubjectOutcome>,
    /// Residual conflicts found by the post-hoc scan.
    pub conflicts: Vec<Conflict>,
    /// Room-allocation warnings.
    pub warnings: Vec<RoomWarning>,
}
