use crate::{
    Result,
    constants::{
        DATE_FORMAT, DATE_LENGTH, DATE_SEPARATOR, DATE_SEPARATOR_OFFSETS, STATUS_ABSENT,
        STATUS_PRESENT,
    },
    error::Error,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which registry a person identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Student => write!(f, "Student"),
            Role::Teacher => write!(f, "Teacher"),
        }
    }
}

/// Calendar date of an attendance mark (`YYYY-MM-DD`).
///
/// Keeps the caller's original string next to the parsed date, so records
/// compare and display exactly as they were entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttendanceDate {
    date: NaiveDate,
    raw: String,
}

impl AttendanceDate {
    /// Parse a date string with validation.
    ///
    /// The input must have the exact shape `YYYY-MM-DD` (ASCII digits, dashes at
    /// positions 5 and 8, no surrounding whitespace) and name a real calendar
    /// day. Year `0000` is rejected.
    ///
    /// # Errors
    /// Returns `Error::InvalidDateFormat` carrying the rejected input.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDateFormat(s.to_string());

        if !has_date_shape(s) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())?;
        if date.year() < 1 {
            return Err(invalid());
        }

        Ok(AttendanceDate {
            date,
            raw: s.to_string(),
        })
    }

    /// Get the date as it was entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == DATE_LENGTH
        && bytes.iter().enumerate().all(|(i, b)| {
            if DATE_SEPARATOR_OFFSETS.contains(&i) {
                *b == DATE_SEPARATOR
            } else {
                b.is_ascii_digit()
            }
        })
}

impl fmt::Display for AttendanceDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for AttendanceDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AttendanceDate::parse(s)
    }
}

impl TryFrom<String> for AttendanceDate {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        AttendanceDate::parse(&value)
    }
}

impl From<AttendanceDate> for String {
    fn from(value: AttendanceDate) -> Self {
        value.raw
    }
}

impl PartialEq<str> for AttendanceDate {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for AttendanceDate {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

/// Attendance outcome for one person on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Parse a status literal.
    ///
    /// Only the exact strings `"present"` and `"absent"` are accepted. Matching
    /// is case-sensitive and the input is not trimmed.
    ///
    /// # Errors
    /// Returns `Error::InvalidStatus` carrying the rejected input.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            STATUS_PRESENT => Ok(AttendanceStatus::Present),
            STATUS_ABSENT => Ok(AttendanceStatus::Absent),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }

    /// Get the status literal.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => STATUS_PRESENT,
            AttendanceStatus::Absent => STATUS_ABSENT,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AttendanceStatus::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2023-10-26", 2023, 10, 26)]
    #[case("2024-02-29", 2024, 2, 29)] // leap day
    #[case("0001-01-01", 1, 1, 1)]
    #[case("9999-12-31", 9999, 12, 31)]
    fn test_date_valid(#[case] input: &str, #[case] y: i32, #[case] m: u32, #[case] d: u32) {
        let date = AttendanceDate::parse(input).unwrap();
        assert_eq!(date.as_str(), input);
        assert_eq!(date.date, NaiveDate::from_ymd_opt(y, m, d).unwrap());
    }

    #[rstest]
    #[case("26-10-2023")]
    #[case("2023/10/26")]
    #[case("October 26, 2023")]
    #[case("20231026")]
    #[case("2023-13-01")] // month 13
    #[case("2023-02-30")] // no such day
    #[case("2023-02-29")] // not a leap year
    #[case("2023-1-5")] // missing zero padding
    #[case(" 2023-10-26")] // leading whitespace
    #[case("2023-10-26 ")] // trailing whitespace
    #[case("+023-10-26")] // sign in year
    #[case("0000-01-01")] // year zero
    #[case("")]
    fn test_date_invalid(#[case] input: &str) {
        let err = AttendanceDate::parse(input).unwrap_err();
        assert_eq!(err, Error::InvalidDateFormat(input.to_string()));
    }

    #[test]
    fn test_date_serde_as_string() {
        let date = AttendanceDate::parse("2023-10-26").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2023-10-26\"");

        let back: AttendanceDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);

        assert!(serde_json::from_str::<AttendanceDate>("\"2023/10/26\"").is_err());
    }

    #[test]
    fn test_date_compares_with_str() {
        let date: AttendanceDate = "2023-10-26".parse().unwrap();
        assert_eq!(date, "2023-10-26");
        assert_eq!(date.to_string(), "2023-10-26");
    }

    #[rstest]
    #[case("present", AttendanceStatus::Present)]
    #[case("absent", AttendanceStatus::Absent)]
    fn test_status_valid(#[case] input: &str, #[case] expected: AttendanceStatus) {
        let status: AttendanceStatus = input.parse().unwrap();
        assert_eq!(status, expected);
        assert_eq!(status.as_str(), input);
    }

    #[rstest]
    #[case("late")]
    #[case("Present")] // wrong case
    #[case("ABSENT")]
    #[case(" present")] // not trimmed
    #[case("")]
    fn test_status_invalid(#[case] input: &str) {
        let err = AttendanceStatus::parse(input).unwrap_err();
        assert_eq!(err, Error::InvalidStatus(input.to_string()));
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&AttendanceStatus::Absent).unwrap();
        assert_eq!(json, "\"absent\"");
    }

    #[test]
    fn test_role() {
        assert_eq!(Role::Student.to_string(), "Student");
        assert_eq!(Role::Teacher.to_string(), "Teacher");
    }
}
