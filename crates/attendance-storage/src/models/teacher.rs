use serde::{Deserialize, Serialize};

/// Teacher entity registered under a unique teacher ID
///
/// Same shape as [`super::Student`], but lives in its own namespace: a
/// teacher ID never collides with a student ID at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    teacher_id: String,
    name: String,
}

impl Teacher {
    /// Create a new teacher
    pub fn new(teacher_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            name: name.into(),
        }
    }

    /// Teacher identifier, unique among teachers
    pub fn teacher_id(&self) -> &str {
        &self.teacher_id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }
}
