pub mod attendance_record;
pub mod person;
pub mod student;
pub mod teacher;

pub use attendance_record::AttendanceRecord;
pub use person::Person;
pub use student::Student;
pub use teacher::Teacher;
