use serde::{Deserialize, Serialize};

/// Student entity registered under a unique student ID
///
/// Any strings are accepted for both fields; uniqueness of `student_id` is
/// enforced by [`crate::AttendanceStore::add_student`], not here.
///
/// # Examples
///
/// ```
/// use attendance_storage::models::Student;
///
/// let student = Student::new("S101", "Alice");
/// assert_eq!(student.student_id(), "S101");
/// assert_eq!(student.name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    student_id: String,
    name: String,
}

impl Student {
    /// Create a new student
    pub fn new(student_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
        }
    }

    /// Student identifier, unique among students
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }
}
