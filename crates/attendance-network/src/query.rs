//! Text queries accepted by the network endpoint.
//!
//! A query is a single line of whitespace-separated words. The first word
//! selects the operation, the remaining words are its arguments:
//!
//! | Query | Store operation |
//! |-------|-----------------|
//! | `add-student <id> <name...>` | [`AttendanceStore::add_student`] |
//! | `add-teacher <id> <name...>` | [`AttendanceStore::add_teacher`] |
//! | `mark <person_id> <date> <status>` | [`AttendanceStore::mark_attendance`] |
//! | `student <id>` | [`AttendanceStore::get_student`] |
//! | `teacher <id>` | [`AttendanceStore::get_teacher`] |
//! | `person <id>` | [`AttendanceStore::get_attendance_by_person`] |
//! | `date <date>` | [`AttendanceStore::get_attendance_by_date`] |
//!
//! Names may contain spaces; they are rejoined with single spaces. Command
//! words are case-insensitive, arguments are passed through unchanged.

use attendance_storage::{AttendanceStore, DisplayMessages, Student, Teacher};
use thiserror::Error;

/// Errors produced while turning query text into a [`Query`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Query text was empty or whitespace only
    #[error("Empty query")]
    Empty,

    /// First word is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument is missing
    #[error("Missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// More words than the command takes
    #[error("Too many arguments for '{command}'")]
    TooManyArguments { command: &'static str },
}

/// A parsed query, ready to run against a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    AddStudent { id: String, name: String },
    AddTeacher { id: String, name: String },
    Mark {
        person_id: String,
        date: String,
        status: String,
    },
    Student { id: String },
    Teacher { id: String },
    ByPerson { person_id: String },
    ByDate { date: String },
}

impl Query {
    /// Parse query text.
    ///
    /// # Errors
    /// Returns a [`QueryError`] naming the first problem found.
    pub fn parse(text: &str) -> Result<Self, QueryError> {
        let mut words = text.split_whitespace();
        let command = words.next().ok_or(QueryError::Empty)?;

        let query = match command.to_ascii_lowercase().as_str() {
            "add-student" => {
                let id = required(&mut words, "add-student", "student ID")?;
                Query::AddStudent {
                    id,
                    name: words.collect::<Vec<_>>().join(" "),
                }
            }
            "add-teacher" => {
                let id = required(&mut words, "add-teacher", "teacher ID")?;
                Query::AddTeacher {
                    id,
                    name: words.collect::<Vec<_>>().join(" "),
                }
            }
            "mark" => {
                let query = Query::Mark {
                    person_id: required(&mut words, "mark", "person ID")?,
                    date: required(&mut words, "mark", "date")?,
                    status: required(&mut words, "mark", "status")?,
                };
                finished(&mut words, "mark")?;
                query
            }
            "student" => {
                let id = required(&mut words, "student", "student ID")?;
                finished(&mut words, "student")?;
                Query::Student { id }
            }
            "teacher" => {
                let id = required(&mut words, "teacher", "teacher ID")?;
                finished(&mut words, "teacher")?;
                Query::Teacher { id }
            }
            "person" => {
                let person_id = required(&mut words, "person", "person ID")?;
                finished(&mut words, "person")?;
                Query::ByPerson { person_id }
            }
            "date" => {
                let date = required(&mut words, "date", "date")?;
                finished(&mut words, "date")?;
                Query::ByDate { date }
            }
            _ => return Err(QueryError::UnknownCommand(command.to_string())),
        };

        Ok(query)
    }

    /// Run the query and render the result as reply text.
    ///
    /// Lookups that find nothing produce a normal reply, not an error.
    ///
    /// # Errors
    /// Store errors are returned unchanged.
    pub fn execute(&self, store: &mut AttendanceStore) -> attendance_core::Result<String> {
        match self {
            Query::AddStudent { id, name } => {
                store.add_student(Student::new(id.as_str(), name.as_str()))?;
                Ok(DisplayMessages::student_added(name))
            }
            Query::AddTeacher { id, name } => {
                store.add_teacher(Teacher::new(id.as_str(), name.as_str()))?;
                Ok(DisplayMessages::teacher_added(name))
            }
            Query::Mark {
                person_id,
                date,
                status,
            } => {
                let record = store.mark_attendance(person_id, date, status)?;
                Ok(DisplayMessages::attendance_marked(record))
            }
            Query::Student { id } => Ok(match store.get_student(id) {
                Some(student) => format!("Student {}: {}", student.student_id(), student.name()),
                None => format!("No student found with ID {id}."),
            }),
            Query::Teacher { id } => Ok(match store.get_teacher(id) {
                Some(teacher) => format!("Teacher {}: {}", teacher.teacher_id(), teacher.name()),
                None => format!("No teacher found with ID {id}."),
            }),
            Query::ByPerson { person_id } => {
                let records = store.get_attendance_by_person(person_id);
                if records.is_empty() {
                    return Ok(DisplayMessages::no_records_for_person(person_id));
                }

                let mut lines = vec![DisplayMessages::person_heading(person_id)];
                lines.extend(
                    records
                        .into_iter()
                        .map(DisplayMessages::person_record_line),
                );
                Ok(lines.join("\n"))
            }
            Query::ByDate { date } => {
                let records = store.get_attendance_by_date(date)?;
                if records.is_empty() {
                    return Ok(DisplayMessages::no_records_for_date(date));
                }

                let mut lines = vec![DisplayMessages::date_heading(date)];
                lines.extend(records.into_iter().map(|record| {
                    DisplayMessages::date_record_line(record, store.find_person(record.person_id()))
                }));
                Ok(lines.join("\n"))
            }
        }
    }
}

fn required<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, QueryError> {
    words
        .next()
        .map(str::to_string)
        .ok_or(QueryError::MissingArgument { command, argument })
}

fn finished<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<(), QueryError> {
    match words.next() {
        Some(_) => Err(QueryError::TooManyArguments { command }),
        None => Ok(()),
    }
}
