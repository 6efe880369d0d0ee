use attendance_core::{AttendanceDate, AttendanceStatus, Result};
use serde::{Deserialize, Serialize};

/// Attendance record for one person on one calendar date
///
/// Records are validated when they are built and are read-only afterwards, so
/// a record with a malformed date or an unknown status cannot exist.
///
/// # Fields
///
/// * `person_id` - Student or teacher ID the mark belongs to (not checked here)
/// * `date` - Calendar date in `YYYY-MM-DD` form
/// * `status` - `present` or `absent`
///
/// # Validation Order
///
/// The date is checked before the status, so an input that is wrong in both
/// places reports `InvalidDateFormat`.
///
/// # Examples
///
/// ```
/// use attendance_storage::models::AttendanceRecord;
/// use attendance_core::{AttendanceStatus, Error};
///
/// let record = AttendanceRecord::new("S101", "2023-10-26", "present").unwrap();
/// assert_eq!(record.person_id(), "S101");
/// assert_eq!(record.date().as_str(), "2023-10-26");
/// assert_eq!(record.status(), AttendanceStatus::Present);
///
/// let err = AttendanceRecord::new("S101", "2023/10/26", "present").unwrap_err();
/// assert!(matches!(err, Error::InvalidDateFormat(_)));
///
/// let err = AttendanceRecord::new("S101", "2023-10-26", "Present").unwrap_err();
/// assert!(matches!(err, Error::InvalidStatus(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    person_id: String,
    date: AttendanceDate,
    status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Build a record from caller-supplied strings.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidDateFormat` if `date` is not a real `YYYY-MM-DD` date
    /// - `Error::InvalidStatus` if `status` is not exactly `present` or `absent`
    pub fn new(person_id: impl Into<String>, date: &str, status: &str) -> Result<Self> {
        let date = AttendanceDate::parse(date)?;
        let status = AttendanceStatus::parse(status)?;

        Ok(Self {
            person_id: person_id.into(),
            date,
            status,
        })
    }

    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    pub fn date(&self) -> &AttendanceDate {
        &self.date
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attendance_core::Error;
    use rstest::rstest;

    #[test]
    fn test_record_valid() {
        let record = AttendanceRecord::new("T201", "2023-10-27", "absent").unwrap();
        assert_eq!(record.person_id(), "T201");
        assert_eq!(*record.date(), "2023-10-27");
        assert_eq!(record.status(), AttendanceStatus::Absent);
    }

    #[rstest]
    #[case("26-10-2023")]
    #[case("2023/10/26")]
    #[case("October 26, 2023")]
    #[case("20231026")]
    #[case("2023-13-26")]
    fn test_record_invalid_date(#[case] date: &str) {
        let err = AttendanceRecord::new("S101", date, "present").unwrap_err();
        assert_eq!(err, Error::InvalidDateFormat(date.to_string()));
    }

    #[rstest]
    #[case("late")]
    #[case("Present")]
    #[case("")]
    fn test_record_invalid_status(#[case] status: &str) {
        let err = AttendanceRecord::new("S101", "2023-10-26", status).unwrap_err();
        assert_eq!(err, Error::InvalidStatus(status.to_string()));
    }

    #[test]
    fn test_date_checked_before_status() {
        let err = AttendanceRecord::new("S101", "bad-date", "late").unwrap_err();
        assert!(matches!(err, Error::InvalidDateFormat(_)));
    }

    #[test]
    fn test_record_serializes_as_strings() {
        let record = AttendanceRecord::new("S101", "2023-10-26", "present").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "person_id": "S101",
                "date": "2023-10-26",
                "status": "present",
            })
        );
    }
}
