//! In-progress scheduler state.
//!
//! One generation run owns exactly one [`SchedulerState`]. It carries the
//! growing schedule plus the indexes that turn the hot checks (is this
//! faculty booked here, which slot has this number) into O(1) lookups.
//! Concurrent runs over different configurations each build their own
//! instance; nothing here is shared or global.

use std::collections::{HashMap, HashSet};

use crate::models::{
    Schedule, ScheduleAssignment, SlotType, TimeOfDay, TimeSlot, Weekday,
};

/// Mutable state accumulated while assigning slots.
#[derive(Debug, Default)]
pub struct SchedulerState {
    /// The schedule built so far.
    pub schedule: Schedule,
    /// Assigned hours per faculty member.
    pub faculty_load: HashMap<String, u32>,
    /// (faculty, day, start) → occupying slot id.
    faculty_bookings: HashMap<(String, Weekday, TimeOfDay), String>,
    /// (faculty, day) → slot numbers held, for the consecutive-run check.
    faculty_day_slots: HashMap<(String, Weekday), Vec<u32>>,
    /// (day, start) → room ids already occupied at that time.
    room_occupancy: HashMap<(Weekday, TimeOfDay), HashSet<String>>,
}

impl SchedulerState {
    /// Creates empty state with zeroed load counters for the given faculty ids.
    pub fn new<'a>(faculty_ids: impl Iterator<Item = &'a str>) -> Self {
        let mut state = Self::default();
        for id in faculty_ids {
            state.faculty_load.insert(id.to_string(), 0);
        }
        state
    }

    /// Current load for a faculty member.
    pub fn load(&self, faculty_id: &str) -> u32 {
        self.faculty_load.get(faculty_id).copied().unwrap_or(0)
    }

    /// Whether the faculty member already teaches at this day and start time.
    pub fn is_faculty_booked(&self, faculty_id: &str, day: Weekday, start: TimeOfDay) -> bool {
        self.faculty_bookings
            .contains_key(&(faculty_id.to_string(), day, start))
    }

    /// Slot numbers the faculty member holds on a day.
    pub fn faculty_slot_numbers(&self, faculty_id: &str, day: Weekday) -> &[u32] {
        self.faculty_day_slots
            .get(&(faculty_id.to_string(), day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a room is occupied at this day and start time.
    pub fn is_room_occupied(&self, room_id: &str, day: Weekday, start: TimeOfDay) -> bool {
        self.room_occupancy
            .get(&(day, start))
            .is_some_and(|rooms| rooms.contains(room_id))
    }

    /// Commits an assignment: records it in the schedule and updates the
    /// load counter and booking indexes.
    pub fn assign(
        &mut self,
        slot: &TimeSlot,
        subject_id: &str,
        faculty_id: &str,
        slot_type: SlotType,
        room_id: Option<String>,
    ) {
        let mut assignment =
            ScheduleAssignment::new(&slot.id, subject_id, faculty_id, slot_type);
        if let Some(room_id) = room_id {
            self.room_occupancy
                .entry((slot.day, slot.start_time))
                .or_default()
                .insert(room_id.clone());
            assignment = assignment.with_room(room_id);
        }
        self.schedule.insert(assignment);

        *self.faculty_load.entry(faculty_id.to_string()).or_insert(0) += 1;
        self.faculty_bookings.insert(
            (faculty_id.to_string(), slot.day, slot.start_time),
            slot.id.clone(),
        );
        self.faculty_day_slots
            .entry((faculty_id.to_string(), slot.day))
            .or_default()
            .push(slot.slot_number);
    }

    /// Whether a slot is still unassigned.
    pub fn is_slot_free(&self, slot_id: &str) -> bool {
        self.schedule.is_slot_free(slot_id)
    }
}

/// Read-only slot indexes built once per run.
#[derive(Debug)]
pub struct SlotIndex<'a> {
    /// All assignable (non-break) slots in (day, number) order.
    pub available: Vec<&'a TimeSlot>,
    by_day_number: HashMap<(Weekday, u32), &'a TimeSlot>,
}

impl<'a> SlotIndex<'a> {
    /// Indexes the non-break slots of a calendar.
    pub fn new(slots: &'a [TimeSlot]) -> Self {
        let available: Vec<&TimeSlot> = slots.iter().filter(|s| !s.is_break).collect();
        let by_day_number = available
            .iter()
            .map(|s| ((s.day, s.slot_number), *s))
            .collect();
        Self {
            available,
            by_day_number,
        }
    }

    /// Looks up an assignable slot by day and slot number.
    pub fn get(&self, day: Weekday, slot_number: u32) -> Option<&'a TimeSlot> {
        self.by_day_number.get(&(day, slot_number)).copied()
    }

    /// Assignable slots of one day, in slot-number order.
    pub fn day_slots(&self, day: Weekday) -> Vec<&'a TimeSlot> {
        self.available
            .iter()
            .filter(|s| s.day == day)
            .copied()
            .collect()
    }
}
