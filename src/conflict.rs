//! Post-hoc conflict detection.
//!
//! Rescans a finished schedule independently of the placement logic.
//! Assignments are grouped per faculty (and per room) by (day, start
//! time); any group with more than one slot is a double booking. The
//! engine's own checks are supposed to make this list empty, so a
//! non-empty result points at an engine bug, not bad input.

use std::collections::HashMap;

use crate::models::{Conflict, ConflictKind, Schedule, TimeOfDay, TimeSlot, Weekday};

/// Scans a schedule for faculty and room double bookings.
pub fn detect_conflicts(schedule: &Schedule, slots: &[TimeSlot]) -> Vec<Conflict> {
    let slot_times: HashMap<&str, (Weekday, TimeOfDay)> = slots
        .iter()
        .map(|s| (s.id.as_str(), (s.day, s.start_time)))
        .collect();

    let mut conflicts = Vec::new();

    // entity id → (day, start) → first slot seen there.
    let mut faculty_seen: HashMap<(String, Weekday, TimeOfDay), String> = HashMap::new();
    let mut room_seen: HashMap<(String, Weekday, TimeOfDay), String> = HashMap::new();

    for assignment in schedule.assignments.values() {
        let Some(&(day, time)) = slot_times.get(assignment.slot_id.as_str()) else {
            continue;
        };

        let faculty_key = (assignment.faculty_id.clone(), day, time);
        if let Some(first) = faculty_seen.get(&faculty_key) {
            conflicts.push(Conflict {
                kind: ConflictKind::FacultyDoubleBooking,
                entity_id: assignment.faculty_id.clone(),
                day,
                time,
                slot_ids: [first.clone(), assignment.slot_id.clone()],
            });
        } else {
            faculty_seen.insert(faculty_key, assignment.slot_id.clone());
        }

        if let Some(room_id) = &assignment.room_id {
            let room_key = (room_id.clone(), day, time);
            if let Some(first) = room_seen.get(&room_key) {
                conflicts.push(Conflict {
                    kind: ConflictKind::RoomDoubleBooking,
                    entity_id: room_id.clone(),
                    day,
                    time,
                    slot_ids: [first.clone(), assignment.slot_id.clone()],
                });
            } else {
                room_seen.insert(room_key, assignment.slot_id.clone());
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScheduleAssignment, SlotType};

    fn slot(id_number: u32, day: Weekday, hour: u16) -> TimeSlot {
        TimeSlot::new(
            "cfg",
            day,
            id_number,
            TimeOfDay::from_hm(hour, 0),
            TimeOfDay::from_hm(hour + 1, 0),
        )
    }

    #[test]
    fn test_clean_schedule_has_no_conflicts() {
        let slots = vec![
            slot(1, Weekday::Monday, 9),
            slot(2, Weekday::Monday, 10),
        ];
        let mut schedule = Schedule::new();
        schedule.insert(ScheduleAssignment::new("Monday-1", "s1", "f1", SlotType::Lecture));
        schedule.insert(ScheduleAssignment::new("Monday-2", "s2", "f1", SlotType::Lecture));

        assert!(detect_conflicts(&schedule, &slots).is_empty());
    }

    #[test]
    fn test_planted_faculty_double_booking() {
        // Two distinct slots at the same (day, start) held by one faculty
        // member; only corrupted state can produce this.
        let slots = vec![slot(1, Weekday::Monday, 9), slot(7, Weekday::Monday, 9)];

        let mut schedule = Schedule::new();
        schedule.insert(ScheduleAssignment::new("Monday-1", "s1", "f1", SlotType::Lecture));
        schedule.insert(ScheduleAssignment::new("Monday-7", "s2", "f1", SlotType::Lecture));

        let conflicts = detect_conflicts(&schedule, &slots);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::FacultyDoubleBooking);
        assert_eq!(conflicts[0].entity_id, "f1");
        assert_eq!(conflicts[0].day, Weekday::Monday);
        assert_eq!(conflicts[0].time, TimeOfDay::from_hm(9, 0));
    }

    #[test]
    fn test_planted_room_double_booking() {
        let slots = vec![slot(1, Weekday::Tuesday, 11), slot(7, Weekday::Tuesday, 11)];

        let mut schedule = Schedule::new();
        schedule.insert(
            ScheduleAssignment::new("Tuesday-1", "s1", "f1", SlotType::Lab).with_room("r1"),
        );
        schedule.insert(
            ScheduleAssignment::new("Tuesday-7", "s2", "f2", SlotType::Lab).with_room("r1"),
        );

        let conflicts = detect_conflicts(&schedule, &slots);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::RoomDoubleBooking);
        assert_eq!(conflicts[0].entity_id, "r1");
    }

    #[test]
    fn test_same_time_different_faculty_ok() {
        let slots = vec![slot(1, Weekday::Monday, 9), slot(7, Weekday::Monday, 9)];

        let mut schedule = Schedule::new();
        schedule.insert(ScheduleAssignment::new("Monday-1", "s1", "f1", SlotType::Lecture));
        schedule.insert(ScheduleAssignment::new("Monday-7", "s2", "f2", SlotType::Lecture));

        assert!(detect_conflicts(&schedule, &slots).is_empty());
    }
}
