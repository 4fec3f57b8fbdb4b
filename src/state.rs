//! Shared application state for all routes.

use crate::repository::{SqliteStudentRepository, StudentRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    /// State backed by the SQLite repository over `pool`.
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_repository(Arc::new(SqliteStudentRepository::new(pool)))
    }

    pub fn with_repository(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }
}
