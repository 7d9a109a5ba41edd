//! Calendar generation: expands a configuration into concrete time slots.
//!
//! # Algorithm
//!
//! For each shift and each working day, consecutive 60-minute slots are
//! emitted from the shift start until the shift end; a slot whose end
//! would overrun the shift is dropped. Breaks are injected by position
//! within the shift, not by clock time: the 3rd slot becomes a 15-minute
//! break, and in single-shift mode the 5th becomes a 45-minute lunch.
//!
//! Slot numbers continue across shifts within a day, so `(day, number)`
//! uniquely identifies a slot in the calendar.
//!
//! Regeneration discards any previously generated slots, so generating
//! twice for the same configuration yields an identical slot set.

use std::collections::HashMap;

use crate::error::{EngineError, Result};
use crate::models::{AcademicConfiguration, ShiftMode, TimeSlot, Weekday};

const SLOT_MINUTES: u16 = 60;
const SHORT_BREAK_MINUTES: u16 = 15;
const LUNCH_BREAK_MINUTES: u16 = 45;

/// Position within a shift that becomes the short break.
const SHORT_BREAK_POSITION: u32 = 3;
/// Position within a shift that becomes lunch (single-shift mode only).
const LUNCH_BREAK_POSITION: u32 = 5;

/// Builds and stores the slot calendars of registered configurations.
#[derive(Debug, Clone, Default)]
pub struct CalendarBuilder {
    configs: HashMap<String, AcademicConfiguration>,
    slots: HashMap<String, Vec<TimeSlot>>,
}

impl CalendarBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a configuration for slot generation.
    pub fn register(&mut self, config: AcademicConfiguration) {
        self.configs.insert(config.id.clone(), config);
    }

    /// Generates (or regenerates) the slot set for a configuration.
    ///
    /// Idempotent: previously generated slots for the configuration are
    /// discarded first.
    ///
    /// # Errors
    /// [`EngineError::ConfigurationNotFound`] if the id is unregistered.
    pub fn generate(&mut self, config_id: &str) -> Result<&[TimeSlot]> {
        let config = self
            .configs
            .get(config_id)
            .ok_or_else(|| EngineError::ConfigurationNotFound(config_id.to_string()))?;

        let slots = expand_config(config);
        tracing::debug!(
            config_id,
            slot_count = slots.len(),
            "generated calendar slots"
        );
        self.slots.insert(config_id.to_string(), slots);
        Ok(&self.slots[config_id])
    }

    /// All slots for a configuration, in (day, slot number) order.
    pub fn slots(&self, config_id: &str) -> Option<&[TimeSlot]> {
        self.slots.get(config_id).map(Vec::as_slice)
    }

    /// Only the slots eligible for assignment (non-break).
    pub fn available_slots(&self, config_id: &str) -> Vec<&TimeSlot> {
        self.slots
            .get(config_id)
            .map(|slots| slots.iter().filter(|s| !s.is_break).collect())
            .unwrap_or_default()
    }
}

/// Expands a configuration into its full ordered slot set.
fn expand_config(config: &AcademicConfiguration) -> Vec<TimeSlot> {
    let days = config.working_days.days();
    let mut slots = Vec::new();

    for &day in days {
        let mut day_slot_number: u32 = 0;
        for shift in &config.shifts {
            emit_shift_slots(config, day, shift.start, shift.end, &mut day_slot_number, &mut slots);
        }
    }

    // Ordered by day, then slot number, matching how the engine scans.
    slots.sort_by_key(|s| (s.day, s.slot_number));
    slots
}

/// Emits the slots of one shift on one day, continuing `day_slot_number`.
fn emit_shift_slots(
    config: &AcademicConfiguration,
    day: Weekday,
    shift_start: crate::models::TimeOfDay,
    shift_end: crate::models::TimeOfDay,
    day_slot_number: &mut u32,
    out: &mut Vec<TimeSlot>,
) {
    let mut current = shift_start;
    let mut shift_position: u32 = 0;

    while current < shift_end {
        shift_position += 1;
        *day_slot_number += 1;

        let lunch = config.shift_mode == ShiftMode::Single && shift_position == LUNCH_BREAK_POSITION;
        let (duration, is_break) = if shift_position == SHORT_BREAK_POSITION {
            (SHORT_BREAK_MINUTES, true)
        } else if lunch {
            (LUNCH_BREAK_MINUTES, true)
        } else {
            (SLOT_MINUTES, false)
        };

        let end = current.plus_minutes(duration);
        if end > shift_end {
            // A slot overrunning the shift is dropped, and the numbers
            // it consumed are given back.
            *day_slot_number -= 1;
            break;
        }

        let mut slot = TimeSlot::new(&config.id, day, *day_slot_number, current, end);
        if is_break {
            slot = slot.as_break();
        }
        out.push(slot);
        current = end;
    }
}
