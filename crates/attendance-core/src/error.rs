use crate::types::Role;
use thiserror::Error;

/// Caller-input failures raised by the attendance store.
///
/// None of these are infrastructure faults: each one names the piece of input
/// that was rejected, and the store returns it unchanged to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Registration errors
    #[error("{role} with ID {id} already exists.")]
    DuplicateId { role: Role, id: String },

    #[error("Person with ID {0} not found.")]
    PersonNotFound(String),

    // Record validation errors
    #[error("Incorrect date format '{0}', should be YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Status must be 'present' or 'absent', got '{0}'")]
    InvalidStatus(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message_names_role() {
        let err = Error::DuplicateId {
            role: Role::Student,
            id: "S101".to_string(),
        };
        assert_eq!(err.to_string(), "Student with ID S101 already exists.");

        let err = Error::DuplicateId {
            role: Role::Teacher,
            id: "T201".to_string(),
        };
        assert_eq!(err.to_string(), "Teacher with ID T201 already exists.");
    }

    #[test]
    fn test_person_not_found_message() {
        let err = Error::PersonNotFound("X999".to_string());
        assert_eq!(err.to_string(), "Person with ID X999 not found.");
    }

    #[test]
    fn test_validation_messages_quote_input() {
        assert_eq!(
            Error::InvalidDateFormat("2023/10/26".to_string()).to_string(),
            "Incorrect date format '2023/10/26', should be YYYY-MM-DD"
        );
        assert_eq!(
            Error::InvalidStatus("late".to_string()).to_string(),
            "Status must be 'present' or 'absent', got 'late'"
        );
    }
}
