//! Room allocation.
//!
//! Picks a free, capacity-appropriate room for an assignment. Failure to
//! find one is soft: the assignment proceeds without a room and the run
//! records a warning.

use serde::{Deserialize, Serialize};

use super::state::SchedulerState;
use crate::models::{Room, RoomType, SlotType, TimeSlot};

/// Capacity floors for room selection.
///
/// Policy constants, not subject-specific: lab rooms must seat a lab
/// batch, lecture rooms a full class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPolicy {
    /// Minimum capacity for lab sessions.
    pub min_lab_capacity: u32,
    /// Minimum capacity for lectures.
    pub min_lecture_capacity: u32,
}

impl Default for RoomPolicy {
    fn default() -> Self {
        Self {
            min_lab_capacity: 30,
            min_lecture_capacity: 50,
        }
    }
}

impl RoomPolicy {
    /// The room type and capacity floor required for a slot type.
    pub fn requirement(&self, slot_type: SlotType) -> (RoomType, u32) {
        match slot_type {
            SlotType::Lab => (RoomType::Lab, self.min_lab_capacity),
            SlotType::Lecture => (RoomType::Classroom, self.min_lecture_capacity),
        }
    }
}

/// Picks a room for a slot, or `None` if no suitable room is free.
///
/// Candidates are filtered to the required type with capacity at or above
/// the policy floor, then to rooms not already occupied at the slot's day
/// and start time. Among the survivors the smallest adequate room wins,
/// keeping large rooms free for large classes.
pub fn allocate_room<'a>(
    rooms: &'a [Room],
    slot: &TimeSlot,
    slot_type: SlotType,
    policy: &RoomPolicy,
    state: &SchedulerState,
) -> Option<&'a Room> {
    let (required_type, min_capacity) = policy.requirement(slot_type);

    rooms
        .iter()
        .filter(|r| r.room_type == required_type && r.capacity >= min_capacity)
        .filter(|r| !state.is_room_occupied(&r.id, slot.day, slot.start_time))
        .min_by_key(|r| r.capacity - min_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeOfDay, Weekday};

    fn slot(day: Weekday, number: u32, hour: u16) -> TimeSlot {
        TimeSlot::new(
            "cfg",
            day,
            number,
            TimeOfDay::from_hm(hour, 0),
            TimeOfDay::from_hm(hour + 1, 0),
        )
    }

    fn rooms() -> Vec<Room> {
        vec![
            Room::classroom("r1", "NB101", 60),
            Room::classroom("r2", "NB102", 80),
            Room::classroom("r3", "NB001", 40), // below lecture floor
            Room::lab("l1", "LAB1", 30),
            Room::lab("l2", "LAB2", 45),
        ]
    }

    #[test]
    fn test_lecture_gets_tightest_classroom() {
        let rooms = rooms();
        let state = SchedulerState::new(["f1"].into_iter());
        let picked = allocate_room(
            &rooms,
            &slot(Weekday::Monday, 1, 9),
            SlotType::Lecture,
            &RoomPolicy::default(),
            &state,
        )
        .unwrap();
        // 60 is closest to the floor of 50; 40 is filtered out.
        assert_eq!(picked.id, "r1");
    }

    #[test]
    fn test_lab_requires_lab_room() {
        let rooms = rooms();
        let state = SchedulerState::new(["f1"].into_iter());
        let picked = allocate_room(
            &rooms,
            &slot(Weekday::Monday, 1, 9),
            SlotType::Lab,
            &RoomPolicy::default(),
            &state,
        )
        .unwrap();
        assert_eq!(picked.id, "l1");
        assert_eq!(picked.room_type, RoomType::Lab);
    }

    #[test]
    fn test_occupied_room_skipped() {
        let rooms = rooms();
        let mut state = SchedulerState::new(["f1"].into_iter());
        let s = slot(Weekday::Monday, 1, 9);
        state.assign(&s, "s1", "f1", SlotType::Lecture, Some("r1".into()));

        // Same time, different slot: r1 is taken, r2 is next-tightest.
        let other = slot(Weekday::Monday, 7, 9);
        let picked = allocate_room(
            &rooms,
            &other,
            SlotType::Lecture,
            &RoomPolicy::default(),
            &state,
        )
        .unwrap();
        assert_eq!(picked.id, "r2");

        // Same room is free at a different hour.
        let later = slot(Weekday::Monday, 2, 10);
        let picked = allocate_room(
            &rooms,
            &later,
            SlotType::Lecture,
            &RoomPolicy::default(),
            &state,
        )
        .unwrap();
        assert_eq!(picked.id, "r1");
    }

    #[test]
    fn test_no_candidate_is_soft() {
        let rooms = vec![Room::classroom("r1", "NB101", 60)];
        let state = SchedulerState::new(["f1"].into_iter());
        let picked = allocate_room(
            &rooms,
            &slot(Weekday::Monday, 1, 9),
            SlotType::Lab,
            &RoomPolicy::default(),
            &state,
        );
        assert!(picked.is_none());
    }

    #[test]
    fn test_custom_policy_floor() {
        let rooms = rooms();
        let state = SchedulerState::new(["f1"].into_iter());
        let policy = RoomPolicy {
            min_lab_capacity: 40,
            min_lecture_capacity: 30,
        };
        let picked = allocate_room(
            &rooms,
            &slot(Weekday::Monday, 1, 9),
            SlotType::Lab,
            &policy,
            &state,
        )
        .unwrap();
        assert_eq!(picked.id, "l2");
    }
}
