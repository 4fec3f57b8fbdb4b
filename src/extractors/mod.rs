//! Request extractors that validate input before handlers run.

mod student;
pub use student::{parse_body, parse_id, NameFilter, StudentId, StudentPayload};
