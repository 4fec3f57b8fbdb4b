//! Student service: CRUD over a SQLite `students` table exposed as a JSON REST API.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError, StudentError};
pub use model::{NewStudent, Student};
pub use repository::{SqliteStudentRepository, StudentRepository};
pub use server::build_app;
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_students_table};
