//! Core constants for attendance records.
//!
//! Dates travel through the system as plain strings in the calendar form
//! `YYYY-MM-DD`. The constants below pin down that shape so the validation in
//! [`crate::types::AttendanceDate`] and the user-facing prompts agree.
//!
//! # Usage
//!
//! ```
//! use attendance_core::constants::*;
//!
//! assert_eq!(DATE_LENGTH, DATE_PATTERN.len());
//! assert!(STATUS_VALUES.contains(&STATUS_PRESENT));
//! ```

// ============================================================================
// Dates
// ============================================================================

/// Human-readable date pattern, used in prompts and error messages.
pub const DATE_PATTERN: &str = "YYYY-MM-DD";

/// `chrono` format string matching [`DATE_PATTERN`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exact length of a well-formed date string.
pub const DATE_LENGTH: usize = 10;

/// Byte offsets of the `-` separators inside a date string.
pub const DATE_SEPARATOR_OFFSETS: [usize; 2] = [4, 7];

/// Separator between year, month and day.
pub const DATE_SEPARATOR: u8 = b'-';

// ============================================================================
// Attendance status
// ============================================================================

/// Literal accepted for a present mark.
pub const STATUS_PRESENT: &str = "present";

/// Literal accepted for an absent mark.
pub const STATUS_ABSENT: &str = "absent";

/// Every accepted status literal, in display order.
pub const STATUS_VALUES: [&str; 2] = [STATUS_PRESENT, STATUS_ABSENT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_offsets_fit_pattern() {
        for offset in DATE_SEPARATOR_OFFSETS {
            assert!(offset < DATE_LENGTH);
            assert_eq!(DATE_PATTERN.as_bytes()[offset], DATE_SEPARATOR);
        }
    }

    #[test]
    fn test_status_literals_are_lowercase() {
        for status in STATUS_VALUES {
            assert_eq!(status, status.to_lowercase());
        }
    }
}
