//! Input validation for generation runs.
//!
//! Checks structural integrity of the records a run consumes before any
//! placement happens. Detects:
//! - Duplicate IDs and short codes
//! - Faculty with empty availability-day sets
//! - Subjects that request no hours at all
//! - Malformed academic configurations (year format, term/semester parity)

use std::collections::HashSet;

use crate::models::{AcademicConfiguration, FacultyMember, Room, Subject};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID or short code.
    DuplicateId,
    /// A faculty member has no available days.
    EmptyAvailability,
    /// A subject requests zero lecture and zero lab hours.
    NoHoursRequested,
    /// Academic year is not `YYYY-YYYY` with consecutive years.
    InvalidAcademicYear,
    /// Term and semester parity disagree.
    InvalidTermSemester,
    /// A configuration has no shifts, or a shift ends before it starts.
    InvalidShift,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input records for a generation run.
///
/// Checks:
/// 1. No duplicate subject IDs or codes
/// 2. No duplicate faculty IDs or short codes
/// 3. No duplicate room IDs
/// 4. Every faculty member has at least one available day
/// 5. Every subject requests at least one hour
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    subjects: &[Subject],
    faculty: &[FacultyMember],
    rooms: &[Room],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    let mut subject_codes = HashSet::new();
    for s in subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
        if !subject_codes.insert(s.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject code: {}", s.code),
            ));
        }
        if s.lecture_hours == 0 && s.lab_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoHoursRequested,
                format!("Subject '{}' requests no teaching hours", s.code),
            ));
        }
    }

    let mut faculty_ids = HashSet::new();
    let mut faculty_codes = HashSet::new();
    for f in faculty {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }
        if !faculty_codes.insert(f.short_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty short code: {}", f.short_code),
            ));
        }
        if f.available_days.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyAvailability,
                format!("Faculty '{}' has no available days", f.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an academic configuration.
///
/// Checks:
/// 1. Academic year is `YYYY-YYYY` with the second year one past the first
/// 2. Semester 1..=8, even for Jan-June terms, odd for July-Dec
/// 3. At least one shift, each with start strictly before end
pub fn validate_config(config: &AcademicConfiguration) -> ValidationResult {
    let mut errors = Vec::new();

    if !is_valid_academic_year(&config.academic_year) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAcademicYear,
            format!(
                "Invalid academic year '{}' (use YYYY-YYYY)",
                config.academic_year
            ),
        ));
    }

    if let Some(message) = term_semester_error(&config.term, config.semester) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTermSemester,
            message,
        ));
    }

    if config.shifts.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidShift,
            "Configuration has no shifts",
        ));
    }
    for shift in &config.shifts {
        if shift.start >= shift.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidShift,
                format!("Shift '{}' ends at or before it starts", shift.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `YYYY-YYYY` where the second year is exactly one past the first.
fn is_valid_academic_year(year: &str) -> bool {
    let Some((first, second)) = year.split_once('-') else {
        return false;
    };
    match (first.parse::<u32>(), second.parse::<u32>()) {
        (Ok(a), Ok(b)) => first.len() == 4 && second.len() == 4 && b == a + 1,
        _ => false,
    }
}

/// Jan-June terms carry even semesters, July-Dec odd ones.
fn term_semester_error(term: &str, semester: u8) -> Option<String> {
    if !(1..=8).contains(&semester) {
        return Some(format!("Semester must be between 1 and 8, got {semester}"));
    }
    match term {
        "Jan-June" if semester % 2 != 0 => {
            Some("Jan-June term should have even semesters (2,4,6,8)".to_string())
        }
        "July-Dec" if semester % 2 == 0 => {
            Some("July-Dec term should have odd semesters (1,3,5,7)".to_string())
        }
        "Jan-June" | "July-Dec" => None,
        other => Some(format!("Invalid term '{other}'")),
    }
}
