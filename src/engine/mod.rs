//! The constraint-based assignment engine.
//!
//! One synchronous pipeline per generation run: the assigner walks the
//! subjects in priority order, consulting the availability checks and
//! the room allocator against a single per-run state instance.

mod assigner;
mod availability;
mod rooms;
mod state;

pub use assigner::{ScheduleOutcome, ScheduleRequest, SchedulingPolicy, TimetableScheduler};
pub use availability::{check_availability, check_block_availability, Unavailability};
pub use rooms::{allocate_room, RoomPolicy};
pub use state::{SchedulerState, SlotIndex};
