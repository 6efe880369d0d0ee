//! User-facing messages for attendance operations
//!
//! The menu and the network endpoint render store results with the same
//! wording, so both take their text from [`DisplayMessages`].
//!
//! # Usage
//!
//! ```
//! use attendance_storage::messages::DisplayMessages;
//!
//! assert_eq!(DisplayMessages::EXITING, "Exiting program.");
//! assert_eq!(
//!     DisplayMessages::student_added("Alice"),
//!     "Student 'Alice' added successfully."
//! );
//! ```

use crate::models::{AttendanceRecord, Person};

/// Display messages for attendance results
///
/// Constants cover fixed prompts and notices; associated functions format
/// messages that embed caller input or store data.
pub struct DisplayMessages;

impl DisplayMessages {
    /// Menu heading
    pub const MENU_TITLE: &'static str = "Attendance Management System";

    /// Menu entries, in choice order starting at 1
    pub const MENU_OPTIONS: [&'static str; 6] = [
        "Add Student",
        "Add Teacher",
        "Mark Attendance",
        "View Attendance by Person",
        "View Attendance by Date",
        "Exit",
    ];

    pub const PROMPT_CHOICE: &'static str = "Enter your choice: ";
    pub const PROMPT_STUDENT_ID: &'static str = "Enter student ID: ";
    pub const PROMPT_STUDENT_NAME: &'static str = "Enter student name: ";
    pub const PROMPT_TEACHER_ID: &'static str = "Enter teacher ID: ";
    pub const PROMPT_TEACHER_NAME: &'static str = "Enter teacher name: ";
    pub const PROMPT_PERSON_ID: &'static str = "Enter person ID (student or teacher): ";
    pub const PROMPT_DATE: &'static str = "Enter date (YYYY-MM-DD): ";
    pub const PROMPT_STATUS: &'static str = "Enter status (present/absent): ";
    pub const PROMPT_VIEW_PERSON: &'static str = "Enter person ID to view attendance: ";
    pub const PROMPT_VIEW_DATE: &'static str = "Enter date to view attendance (YYYY-MM-DD): ";

    /// Unknown menu choice
    pub const INVALID_CHOICE: &'static str = "Invalid choice. Please try again.";

    /// Printed when the menu loop ends
    pub const EXITING: &'static str = "Exiting program.";

    pub fn student_added(name: &str) -> String {
        format!("Student '{name}' added successfully.")
    }

    pub fn teacher_added(name: &str) -> String {
        format!("Teacher '{name}' added successfully.")
    }

    pub fn attendance_marked(record: &AttendanceRecord) -> String {
        format!(
            "Attendance marked for ID {} on {} as {}.",
            record.person_id(),
            record.date(),
            record.status()
        )
    }

    pub fn no_records_for_person(person_id: &str) -> String {
        format!("No attendance records found for ID {person_id}.")
    }

    pub fn no_records_for_date(date: &str) -> String {
        format!("No attendance records found for date {date}.")
    }

    pub fn person_heading(person_id: &str) -> String {
        format!("Attendance for ID {person_id}:")
    }

    pub fn date_heading(date: &str) -> String {
        format!("Attendance for Date {date}:")
    }

    /// One line of a by-person listing: `Date: 2023-10-26, Status: present`
    pub fn person_record_line(record: &AttendanceRecord) -> String {
        format!("Date: {}, Status: {}", record.date(), record.status())
    }

    /// One line of a by-date listing, labelled with the resolved person
    ///
    /// `Person ID: S101 (Student: Alice), Status: present`
    pub fn date_record_line(record: &AttendanceRecord, person: Option<Person<'_>>) -> String {
        match person {
            Some(person) => format!(
                "Person ID: {} ({person}), Status: {}",
                record.person_id(),
                record.status()
            ),
            None => format!(
                "Person ID: {}, Status: {}",
                record.person_id(),
                record.status()
            ),
        }
    }

    /// Error line shown for a rejected operation
    pub fn error(err: &dyn std::error::Error) -> String {
        format!("Error: {err}")
    }
}
