//! Schedule quality metrics.
//!
//! Three independent [0, 1] measures over a finished schedule, combined
//! into one weighted score. Advisory only: nothing here feeds back into
//! the assigner.
//!
//! | Metric | Definition | Weight |
//! |--------|-----------|--------|
//! | Load balance | `1 - stddev(hours) / mean(hours)`, clamped at 0 | 0.4 |
//! | Room utilization | roomed assignments / available slots | 0.3 |
//! | Density | assignments / available slots | 0.3 |

use serde::{Deserialize, Serialize};

use crate::models::{FacultyMember, Schedule};

const LOAD_BALANCE_WEIGHT: f64 = 0.4;
const ROOM_UTILIZATION_WEIGHT: f64 = 0.3;
const DENSITY_WEIGHT: f64 = 0.3;

/// Descriptive quality metrics for a completed schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// How evenly teaching hours spread across faculty (1 = perfectly even).
    pub load_balance: f64,
    /// Fraction of available slots whose assignment got a room.
    pub room_utilization: f64,
    /// Fraction of available slots that received an assignment.
    pub density: f64,
    /// Weighted combination of the three metrics.
    pub overall_score: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule.
    ///
    /// `faculty` supplies the population for load balance (zero-load
    /// members count); `available_slots` is the number of non-break
    /// slots in the calendar.
    pub fn calculate(
        schedule: &Schedule,
        faculty: &[FacultyMember],
        available_slots: usize,
    ) -> Self {
        let load_balance = load_balance(schedule, faculty);

        let (room_utilization, density) = if available_slots == 0 {
            (0.0, 0.0)
        } else {
            (
                schedule.rooms_assigned_count() as f64 / available_slots as f64,
                schedule.assignment_count() as f64 / available_slots as f64,
            )
        };

        let overall_score = LOAD_BALANCE_WEIGHT * load_balance
            + ROOM_UTILIZATION_WEIGHT * room_utilization
            + DENSITY_WEIGHT * density;

        Self {
            load_balance,
            room_utilization,
            density,
            overall_score,
        }
    }
}

/// `1 - stddev/mean` over per-faculty hours, clamped to [0, 1].
///
/// A zero mean (nobody teaches) is treated as 0, not perfection.
fn load_balance(schedule: &Schedule, faculty: &[FacultyMember]) -> f64 {
    if faculty.is_empty() {
        return 0.0;
    }

    let hours = schedule.faculty_hours();
    let loads: Vec<f64> = faculty
        .iter()
        .map(|f| hours.get(&f.id).copied().unwrap_or(0) as f64)
        .collect();

    let mean = loads.iter().sum::<f64>() / loads.len() as f64;
    if mean == 0.0 {
        return 0.0;
    }

    let variance = loads.iter().map(|h| (h - mean).powi(2)).sum::<f64>() / loads.len() as f64;
    (1.0 - variance.sqrt() / mean).max(0.0)
}
