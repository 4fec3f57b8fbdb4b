//! Route tables.

mod common;
mod students;
pub use common::common_routes;
pub use students::student_routes;
