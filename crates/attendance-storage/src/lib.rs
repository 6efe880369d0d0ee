//! Storage layer for the attendance tracker.
//!
//! This crate keeps students, teachers and attendance records in memory and
//! enforces the registration and attendance invariants before anything is
//! stored.
//!
//! # Architecture
//!
//! - [`models`] - Entities: [`Student`], [`Teacher`], [`AttendanceRecord`], and
//!   the [`Person`] view over either registry
//! - [`AttendanceStore`] - Single-owner store with validation at the write path
//! - [`SharedStore`] - Mutex-guarded handle for concurrent callers
//! - [`messages`] - Wording used by the menu and the network endpoint
//!
//! # Identifier Namespaces
//!
//! Students and teachers are registered in separate maps. The same ID string
//! may therefore exist once as a student and once as a teacher. Lookups that
//! accept either role ([`AttendanceStore::find_person`] and the existence check
//! in [`AttendanceStore::mark_attendance`]) try students first.
//!
//! # Examples
//!
//! ```
//! use attendance_storage::AttendanceStore;
//! use attendance_storage::models::Student;
//! use attendance_core::Error;
//!
//! let mut store = AttendanceStore::new();
//! store.add_student(Student::new("S101", "Alice")).unwrap();
//!
//! // Duplicate IDs are rejected
//! let err = store.add_student(Student::new("S101", "Alicia")).unwrap_err();
//! assert!(matches!(err, Error::DuplicateId { .. }));
//!
//! // Unknown people cannot be marked
//! let err = store.mark_attendance("X999", "2023-10-26", "present").unwrap_err();
//! assert!(matches!(err, Error::PersonNotFound(_)));
//! ```

pub mod messages;
pub mod models;
pub mod shared;
pub mod store;

pub use messages::DisplayMessages;
pub use models::{AttendanceRecord, Person, Student, Teacher};
pub use shared::SharedStore;
pub use store::AttendanceStore;
