use super::{Student, Teacher};
use attendance_core::Role;
use std::fmt;

/// A registered person resolved from either namespace
///
/// Returned by [`crate::AttendanceStore::find_person`]. When the same ID is
/// registered as both a student and a teacher, the student is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person<'a> {
    Student(&'a Student),
    Teacher(&'a Teacher),
}

impl<'a> Person<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Self::Student(student) => student.student_id(),
            Self::Teacher(teacher) => teacher.teacher_id(),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Student(student) => student.name(),
            Self::Teacher(teacher) => teacher.name(),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Teacher(_) => Role::Teacher,
        }
    }
}

/// Renders as `Student: Alice` / `Teacher: Bob`.
impl fmt::Display for Person<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.role(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_accessors() {
        let student = Student::new("S101", "Alice");
        let person = Person::Student(&student);
        assert_eq!(person.id(), "S101");
        assert_eq!(person.name(), "Alice");
        assert_eq!(person.role(), Role::Student);
        assert_eq!(person.to_string(), "Student: Alice");

        let teacher = Teacher::new("T201", "Bob");
        let person = Person::Teacher(&teacher);
        assert_eq!(person.role(), Role::Teacher);
        assert_eq!(person.to_string(), "Teacher: Bob");
    }
}
