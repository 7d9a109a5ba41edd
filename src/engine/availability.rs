//! Faculty availability checks.
//!
//! Pure queries over the run's [`SchedulerState`]; nothing here mutates.
//! Checks run in a fixed order and the first failure wins, so the caller
//! always gets the most fundamental reason a placement is impossible.

use serde::{Deserialize, Serialize};

use super::state::SchedulerState;
use crate::models::{FacultyMember, TimeSlot};

/// Why a faculty member cannot take a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unavailability {
    /// The slot's weekday is outside the member's availability set.
    DayNotAvailable,
    /// The member already teaches at this day and start time.
    AlreadyBooked,
    /// Weekly assigned-hour cap reached.
    WeeklyLimitReached,
    /// Taking the slot would exceed the back-to-back hours cap.
    ConsecutiveLimitExceeded,
}

/// Checks whether a faculty member can take a slot given current state.
///
/// Check order: availability day, double booking, weekly cap, consecutive
/// run length. `max_consecutive_default` applies to members without a
/// personal cap.
pub fn check_availability(
    faculty: &FacultyMember,
    slot: &TimeSlot,
    state: &SchedulerState,
    max_consecutive_default: u32,
) -> Result<(), Unavailability> {
    if !faculty.is_available_on(slot.day) {
        return Err(Unavailability::DayNotAvailable);
    }

    if state.is_faculty_booked(&faculty.id, slot.day, slot.start_time) {
        return Err(Unavailability::AlreadyBooked);
    }

    if state.load(&faculty.id) >= faculty.max_hours_per_week {
        return Err(Unavailability::WeeklyLimitReached);
    }

    let cap = faculty.max_consecutive_hours.unwrap_or(max_consecutive_default);
    let run = longest_run_with(
        state.faculty_slot_numbers(&faculty.id, slot.day),
        slot.slot_number,
    );
    if run > cap {
        return Err(Unavailability::ConsecutiveLimitExceeded);
    }

    Ok(())
}

/// Checks whether a faculty member can take a contiguous 2-slot block.
///
/// Per-slot checks against the current state are not enough for a block:
/// with one hour of weekly capacity left, each slot alone passes the cap
/// check, and a pair bridging a one-slot gap can pass the run check slot
/// by slot yet form an over-long run once committed together. So after
/// the per-slot checks, the block is re-checked as a whole: both hours
/// must fit under the weekly cap, and the run formed by the existing
/// slots plus both new ones must stay within the consecutive cap.
pub fn check_block_availability(
    faculty: &FacultyMember,
    block: [&TimeSlot; 2],
    state: &SchedulerState,
    max_consecutive_default: u32,
) -> Result<(), Unavailability> {
    for slot in block {
        check_availability(faculty, slot, state, max_consecutive_default)?;
    }

    if state.load(&faculty.id) + block.len() as u32 > faculty.max_hours_per_week {
        return Err(Unavailability::WeeklyLimitReached);
    }

    let cap = faculty.max_consecutive_hours.unwrap_or(max_consecutive_default);
    let mut numbers: Vec<u32> = state
        .faculty_slot_numbers(&faculty.id, block[0].day)
        .to_vec();
    numbers.extend(block.iter().map(|s| s.slot_number));
    if longest_run(numbers) > cap {
        return Err(Unavailability::ConsecutiveLimitExceeded);
    }

    Ok(())
}

/// Length of the longest run of contiguous slot numbers once `candidate`
/// joins the existing set.
fn longest_run_with(existing: &[u32], candidate: u32) -> u32 {
    let mut numbers: Vec<u32> = existing.to_vec();
    numbers.push(candidate);
    longest_run(numbers)
}

/// Longest run of contiguous values in an arbitrary set of slot numbers.
fn longest_run(mut numbers: Vec<u32>) -> u32 {
    numbers.sort_unstable();
    numbers.dedup();

    let mut longest: u32 = 1;
    let mut current: u32 = 1;
    for pair in numbers.windows(2) {
        if pair[1] == pair[0] + 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SlotType, TimeOfDay, Weekday};

    fn slot(day: Weekday, number: u32, hour: u16) -> TimeSlot {
        TimeSlot::new(
            "cfg",
            day,
            number,
            TimeOfDay::from_hm(hour, 0),
            TimeOfDay::from_hm(hour + 1, 0),
        )
    }

    fn faculty() -> FacultyMember {
        FacultyMember::new("f1", "A. Rao", "AR")
            .with_available_days(vec![Weekday::Monday, Weekday::Tuesday])
            .with_max_hours(4)
    }

    #[test]
    fn test_day_not_available() {
        let state = SchedulerState::new(["f1"].into_iter());
        let err = check_availability(&faculty(), &slot(Weekday::Friday, 1, 9), &state, 3);
        assert_eq!(err, Err(Unavailability::DayNotAvailable));
    }

    #[test]
    fn test_double_booking_rejected() {
        let mut state = SchedulerState::new(["f1"].into_iter());
        let taken = slot(Weekday::Monday, 1, 9);
        state.assign(&taken, "s1", "f1", SlotType::Lecture, None);

        // Same day and start time, different slot id.
        let clashing = TimeSlot::new(
            "cfg",
            Weekday::Monday,
            7,
            TimeOfDay::from_hm(9, 0),
            TimeOfDay::from_hm(10, 0),
        );
        let err = check_availability(&faculty(), &clashing, &state, 3);
        assert_eq!(err, Err(Unavailability::AlreadyBooked));
    }

    #[test]
    fn test_weekly_limit() {
        let mut state = SchedulerState::new(["f1"].into_iter());
        let f = faculty(); // cap 4
        for (n, hour) in [(1u32, 9u16), (2, 10), (4, 12), (6, 14)] {
            state.assign(&slot(Weekday::Monday, n, hour), "s1", "f1", SlotType::Lecture, None);
        }
        let err = check_availability(&f, &slot(Weekday::Tuesday, 1, 9), &state, 8);
        assert_eq!(err, Err(Unavailability::WeeklyLimitReached));
    }

    #[test]
    fn test_consecutive_limit() {
        let mut state = SchedulerState::new(["f1"].into_iter());
        let f = faculty().with_max_hours(10).with_max_consecutive(2);
        state.assign(&slot(Weekday::Monday, 1, 9), "s1", "f1", SlotType::Lecture, None);
        state.assign(&slot(Weekday::Monday, 2, 10), "s1", "f1", SlotType::Lecture, None);

        // Slot 3 would make a run of 3 > cap 2.
        let err = check_availability(&f, &slot(Weekday::Monday, 3, 11), &state, 3);
        assert_eq!(err, Err(Unavailability::ConsecutiveLimitExceeded));

        // Slot 5 leaves a gap and is fine.
        assert!(check_availability(&f, &slot(Weekday::Monday, 5, 13), &state, 3).is_ok());

        // The run is per-day; the same numbers on Tuesday don't count.
        assert!(check_availability(&f, &slot(Weekday::Tuesday, 3, 11), &state, 3).is_ok());
    }

    #[test]
    fn test_default_consecutive_cap_applies() {
        let mut state = SchedulerState::new(["f1"].into_iter());
        let f = faculty().with_max_hours(10); // no personal cap
        for (n, hour) in [(1u32, 9u16), (2, 10)] {
            state.assign(&slot(Weekday::Monday, n, hour), "s1", "f1", SlotType::Lecture, None);
        }
        // Default cap 2 blocks the third back-to-back hour.
        let err = check_availability(&f, &slot(Weekday::Monday, 3, 11), &state, 2);
        assert_eq!(err, Err(Unavailability::ConsecutiveLimitExceeded));
        // A looser default admits it.
        assert!(check_availability(&f, &slot(Weekday::Monday, 3, 11), &state, 3).is_ok());
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run_with(&[], 4), 1);
        assert_eq!(longest_run_with(&[1, 2], 3), 3);
        assert_eq!(longest_run_with(&[1, 2, 5, 6], 7), 3);
        assert_eq!(longest_run_with(&[1, 3], 2), 3);
    }

    #[test]
    fn test_available_slot_passes() {
        let state = SchedulerState::new(["f1"].into_iter());
        assert!(check_availability(&faculty(), &slot(Weekday::Monday, 1, 9), &state, 3).is_ok());
    }

    #[test]
    fn test_block_rejected_with_one_hour_left() {
        // One hour of weekly capacity left: each slot alone passes the
        // cap check, the block as a whole must not.
        let mut state = SchedulerState::new(["f1"].into_iter());
        let f = faculty().with_max_hours(3);
        for (n, hour) in [(1u32, 9u16), (4, 12)] {
            state.assign(&slot(Weekday::Monday, n, hour), "s1", "f1", SlotType::Lecture, None);
        }

        let a = slot(Weekday::Tuesday, 1, 9);
        let b = slot(Weekday::Tuesday, 2, 10);
        assert!(check_availability(&f, &a, &state, 3).is_ok());
        assert_eq!(
            check_block_availability(&f, [&a, &b], &state, 3),
            Err(Unavailability::WeeklyLimitReached)
        );

        // With two hours left the same block fits.
        let roomy = faculty().with_max_hours(4);
        assert!(check_block_availability(&roomy, [&a, &b], &state, 3).is_ok());
    }

    #[test]
    fn test_block_bridging_gap_exceeds_run_cap() {
        // Existing slot 2, cap 2: slots 3 and 4 each pass alone (runs of
        // 2 and 1), but together they form the run 2-3-4 of length 3.
        let mut state = SchedulerState::new(["f1"].into_iter());
        let f = faculty().with_max_hours(10).with_max_consecutive(2);
        state.assign(&slot(Weekday::Monday, 2, 10), "s1", "f1", SlotType::Lecture, None);

        let a = slot(Weekday::Monday, 3, 11);
        let b = slot(Weekday::Monday, 4, 12);
        assert!(check_availability(&f, &a, &state, 3).is_ok());
        assert!(check_availability(&f, &b, &state, 3).is_ok());
        assert_eq!(
            check_block_availability(&f, [&a, &b], &state, 3),
            Err(Unavailability::ConsecutiveLimitExceeded)
        );

        // The same pair on an empty day is a run of 2 and fine.
        let c = slot(Weekday::Tuesday, 3, 11);
        let d = slot(Weekday::Tuesday, 4, 12);
        assert!(check_block_availability(&f, [&c, &d], &state, 3).is_ok());
    }
}
