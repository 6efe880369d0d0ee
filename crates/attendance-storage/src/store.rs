//! In-memory attendance store.
//!
//! The store owns two registries (students and teachers, each keyed by its own
//! ID) and one append-only list of attendance records. It is the only place
//! where registration and attendance invariants are enforced:
//!
//! - an ID is registered at most once per registry
//! - attendance can only be marked for a registered person
//! - every stored record has a valid date and status
//! - records are kept in insertion order and never deduplicated
//!
//! The store is synchronous and single-owner. Use [`crate::SharedStore`] when
//! several tasks need access.

use crate::models::{AttendanceRecord, Person, Student, Teacher};
use attendance_core::{AttendanceDate, Error, Result, Role};
use std::collections::HashMap;

/// In-memory registry of students, teachers and attendance records
///
/// # Examples
///
/// ```
/// use attendance_storage::AttendanceStore;
/// use attendance_storage::models::{Student, Teacher};
///
/// # fn main() -> Result<(), attendance_core::Error> {
/// let mut store = AttendanceStore::new();
/// store.add_student(Student::new("S101", "Alice"))?;
/// store.add_teacher(Teacher::new("T201", "Bob"))?;
///
/// store.mark_attendance("S101", "2023-10-26", "present")?;
/// store.mark_attendance("T201", "2023-10-26", "absent")?;
///
/// let records = store.get_attendance_by_date("2023-10-26")?;
/// assert_eq!(records.len(), 2);
/// assert_eq!(store.get_attendance_by_person("S101").len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AttendanceStore {
    students: HashMap<String, Student>,
    teachers: HashMap<String, Teacher>,
    records: Vec<AttendanceRecord>,
}

impl AttendanceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a student.
    ///
    /// # Errors
    /// Returns `Error::DuplicateId` if the student ID is already registered.
    /// The existing student is left untouched.
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.students.contains_key(student.student_id()) {
            return Err(Error::DuplicateId {
                role: Role::Student,
                id: student.student_id().to_string(),
            });
        }

        self.students.insert(student.student_id().to_string(), student);
        Ok(())
    }

    /// Register a teacher.
    ///
    /// # Errors
    /// Returns `Error::DuplicateId` if the teacher ID is already registered.
    pub fn add_teacher(&mut self, teacher: Teacher) -> Result<()> {
        if self.teachers.contains_key(teacher.teacher_id()) {
            return Err(Error::DuplicateId {
                role: Role::Teacher,
                id: teacher.teacher_id().to_string(),
            });
        }

        self.teachers.insert(teacher.teacher_id().to_string(), teacher);
        Ok(())
    }

    /// Append an attendance record for a registered person.
    ///
    /// The existence check runs first: an unknown person reports
    /// `PersonNotFound` even when the date or status is also invalid.
    ///
    /// # Errors
    ///
    /// - `Error::PersonNotFound` if `person_id` is neither a student nor a teacher
    /// - `Error::InvalidDateFormat` / `Error::InvalidStatus` from record validation
    pub fn mark_attendance(
        &mut self,
        person_id: &str,
        date: &str,
        status: &str,
    ) -> Result<&AttendanceRecord> {
        if self.find_person(person_id).is_none() {
            return Err(Error::PersonNotFound(person_id.to_string()));
        }

        let record = AttendanceRecord::new(person_id, date, status)?;
        self.records.push(record);

        // just pushed
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn get_student(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    pub fn get_teacher(&self, teacher_id: &str) -> Option<&Teacher> {
        self.teachers.get(teacher_id)
    }

    /// Resolve an ID in either registry, students first.
    pub fn find_person(&self, person_id: &str) -> Option<Person<'_>> {
        self.get_student(person_id)
            .map(Person::Student)
            .or_else(|| self.get_teacher(person_id).map(Person::Teacher))
    }

    /// All records for `person_id`, in insertion order.
    ///
    /// Unknown IDs yield an empty list.
    pub fn get_attendance_by_person(&self, person_id: &str) -> Vec<&AttendanceRecord> {
        self.records
            .iter()
            .filter(|record| record.person_id() == person_id)
            .collect()
    }

    /// All records on `date`, in insertion order.
    ///
    /// # Errors
    /// Returns `Error::InvalidDateFormat` if `date` is malformed. Validation
    /// happens before any filtering.
    pub fn get_attendance_by_date(&self, date: &str) -> Result<Vec<&AttendanceRecord>> {
        let date = AttendanceDate::parse(date)?;

        Ok(self
            .records
            .iter()
            .filter(|record| *record.date() == date)
            .collect())
    }

    /// Every stored record, in insertion order.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attendance_core::AttendanceStatus;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> AttendanceStore {
        let mut store = AttendanceStore::new();
        store.add_student(Student::new("S101", "Alice")).unwrap();
        store.add_student(Student::new("S102", "Charlie")).unwrap();
        store.add_teacher(Teacher::new("T201", "Bob")).unwrap();
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = AttendanceStore::new();
        assert_eq!(store.student_count(), 0);
        assert_eq!(store.teacher_count(), 0);
        assert_eq!(store.record_count(), 0);
        assert!(store.records().is_empty());
    }

    #[rstest]
    fn test_add_and_get_student(store: AttendanceStore) {
        let student = store.get_student("S101").unwrap();
        assert_eq!(student, &Student::new("S101", "Alice"));
        assert!(store.get_student("S999").is_none());
    }

    #[rstest]
    fn test_add_student_duplicate(mut store: AttendanceStore) {
        let err = store.add_student(Student::new("S101", "Alicia")).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateId {
                role: Role::Student,
                id: "S101".to_string()
            }
        );
        assert_eq!(err.to_string(), "Student with ID S101 already exists.");

        // original registration survives
        assert_eq!(store.get_student("S101").unwrap().name(), "Alice");
        assert_eq!(store.student_count(), 2);
    }

    #[rstest]
    fn test_add_teacher_duplicate(mut store: AttendanceStore) {
        let err = store.add_teacher(Teacher::new("T201", "Bobby")).unwrap_err();
        assert_eq!(err.to_string(), "Teacher with ID T201 already exists.");
        assert_eq!(store.get_teacher("T201").unwrap().name(), "Bob");
        assert!(store.get_teacher("T999").is_none());
    }

    #[rstest]
    fn test_namespaces_are_separate(mut store: AttendanceStore) {
        store.add_teacher(Teacher::new("S101", "Dana")).unwrap();

        assert_eq!(store.get_student("S101").unwrap().name(), "Alice");
        assert_eq!(store.get_teacher("S101").unwrap().name(), "Dana");

        let person = store.find_person("S101").unwrap();
        assert_eq!(person.role(), Role::Student);
        assert_eq!(person.name(), "Alice");
    }

    #[rstest]
    fn test_find_person(store: AttendanceStore) {
        assert_eq!(store.find_person("T201").unwrap().role(), Role::Teacher);
        assert!(store.find_person("X1").is_none());
    }

    #[rstest]
    fn test_mark_attendance_student(mut store: AttendanceStore) {
        let record = store.mark_attendance("S101", "2023-10-26", "present").unwrap();
        assert_eq!(record.person_id(), "S101");

        let records = store.get_attendance_by_person("S101");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date().as_str(), "2023-10-26");
        assert_eq!(records[0].status(), AttendanceStatus::Present);
    }

    #[rstest]
    fn test_mark_attendance_teacher(mut store: AttendanceStore) {
        store.mark_attendance("T201", "2023-10-26", "absent").unwrap();

        let records = store.get_attendance_by_person("T201");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status(), AttendanceStatus::Absent);
    }

    #[rstest]
    #[case("2023-10-26", "present")]
    #[case("not-a-date", "present")]
    #[case("2023-10-26", "late")]
    #[case("bad", "bad")]
    fn test_mark_attendance_unknown_person(
        mut store: AttendanceStore,
        #[case] date: &str,
        #[case] status: &str,
    ) {
        let err = store.mark_attendance("X999", date, status).unwrap_err();
        assert_eq!(err, Error::PersonNotFound("X999".to_string()));
        assert_eq!(store.record_count(), 0);
    }

    #[rstest]
    #[case("26-10-2023")]
    #[case("2023/10/26")]
    #[case("October 26, 2023")]
    #[case("20231026")]
    fn test_mark_attendance_invalid_date(mut store: AttendanceStore, #[case] date: &str) {
        let err = store.mark_attendance("S101", date, "present").unwrap_err();
        assert!(matches!(err, Error::InvalidDateFormat(_)));
        assert_eq!(store.record_count(), 0);
    }

    #[rstest]
    #[case("late")]
    #[case("Present")]
    #[case("")]
    fn test_mark_attendance_invalid_status(mut store: AttendanceStore, #[case] status: &str) {
        let err = store.mark_attendance("S101", "2023-10-26", status).unwrap_err();
        assert!(matches!(err, Error::InvalidStatus(_)));
        assert_eq!(store.record_count(), 0);
    }

    #[rstest]
    fn test_duplicate_marks_are_kept(mut store: AttendanceStore) {
        store.mark_attendance("S101", "2023-10-26", "present").unwrap();
        store.mark_attendance("S101", "2023-10-26", "absent").unwrap();

        let records = store.get_attendance_by_person("S101");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status(), AttendanceStatus::Present);
        assert_eq!(records[1].status(), AttendanceStatus::Absent);
    }

    #[rstest]
    fn test_get_attendance_by_date(mut store: AttendanceStore) {
        store.mark_attendance("S101", "2023-10-26", "present").unwrap();
        store.mark_attendance("T201", "2023-10-26", "absent").unwrap();
        store.mark_attendance("S102", "2023-10-27", "present").unwrap();

        let records = store.get_attendance_by_date("2023-10-26").unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.person_id()).collect();
        assert_eq!(ids, vec!["S101", "T201"]);

        let records = store.get_attendance_by_date("2023-10-27").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].person_id(), "S102");
    }

    #[rstest]
    fn test_empty_queries(store: AttendanceStore) {
        assert!(store.get_attendance_by_person("S101").is_empty());
        assert!(store.get_attendance_by_person("X999").is_empty());
        assert!(store.get_attendance_by_date("2023-01-01").unwrap().is_empty());
    }

    #[rstest]
    fn test_get_attendance_by_date_invalid(mut store: AttendanceStore) {
        store.mark_attendance("S101", "2023-10-26", "present").unwrap();

        let err = store.get_attendance_by_date("2023/10/26").unwrap_err();
        assert_eq!(err, Error::InvalidDateFormat("2023/10/26".to_string()));
    }
}
