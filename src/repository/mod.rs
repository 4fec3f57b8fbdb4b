//! Repository layer: the only code that issues SQL for students.

mod student;
pub use student::{SqliteStudentRepository, StudentRepository};
