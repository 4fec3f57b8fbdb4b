//! Student persistence against SQLite.

use crate::error::StudentError;
use crate::model::{NewStudent, Student};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_STUDENTS: &str = "SELECT id, name FROM students";

/// Data access for students. Every operation is a single statement; driver
/// errors are translated into [`StudentError`] kinds.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students in insertion order, or those whose name equals `name`.
    /// An empty filter is treated as no filter.
    async fn list_students(&self, name: Option<&str>) -> Result<Vec<Student>, StudentError>;

    async fn get_student(&self, id: i64) -> Result<Student, StudentError>;

    /// Insert the candidate's name and return it with the assigned id.
    async fn create_student(&self, candidate: NewStudent) -> Result<Student, StudentError>;

    /// Rename the student with `id`. Only the name is written. A name held by
    /// another student surfaces as `Storage`, not `DuplicateName`.
    async fn update_student(&self, id: i64, candidate: NewStudent) -> Result<Student, StudentError>;

    async fn delete_student(&self, id: i64) -> Result<(), StudentError>;

    /// Round trip to the backing store, used by the readiness route.
    async fn ping(&self) -> Result<(), StudentError>;
}

#[derive(Clone)]
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn list_students(&self, name: Option<&str>) -> Result<Vec<Student>, StudentError> {
        let name = name.filter(|n| !n.is_empty());
        let rows = match name {
            Some(name) => {
                let sql = format!("{} WHERE name = ? ORDER BY id", SELECT_STUDENTS);
                tracing::debug!(sql = %sql, name = %name, "query");
                sqlx::query(&sql).bind(name).fetch_all(&self.pool).await?
            }
            None => {
                let sql = format!("{} ORDER BY id", SELECT_STUDENTS);
                tracing::debug!(sql = %sql, "query");
                sqlx::query(&sql).fetch_all(&self.pool).await?
            }
        };
        let students = rows.iter().map(row_to_student).collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    async fn get_student(&self, id: i64) -> Result<Student, StudentError> {
        let sql = format!("{} WHERE id = ?", SELECT_STUDENTS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StudentError::NotFound)?;
        Ok(row_to_student(&row)?)
    }

    async fn create_student(&self, candidate: NewStudent) -> Result<Student, StudentError> {
        let sql = "INSERT INTO students (name) VALUES (?)";
        tracing::debug!(sql = %sql, name = %candidate.name, "execute");
        let result = sqlx::query(sql)
            .bind(&candidate.name)
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_rowid();
        tracing::info!(id, "student created");
        Ok(candidate.into_student(id))
    }

    async fn update_student(&self, id: i64, candidate: NewStudent) -> Result<Student, StudentError> {
        let sql = "UPDATE students SET name = ? WHERE id = ?";
        tracing::debug!(sql = %sql, id, name = %candidate.name, "execute");
        let result = sqlx::query(sql)
            .bind(&candidate.name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let unique = matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
                if unique {
                    StudentError::Storage(e)
                } else {
                    StudentError::from(e)
                }
            })?;
        if result.rows_affected() == 0 {
            return Err(StudentError::NotFound);
        }
        Ok(candidate.into_student(id))
    }

    async fn delete_student(&self, id: i64) -> Result<(), StudentError> {
        let sql = "DELETE FROM students WHERE id = ?";
        tracing::debug!(sql = %sql, id, "execute");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StudentError::NotFound);
        }
        tracing::info!(id, "student deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StudentError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

fn row_to_student(row: &SqliteRow) -> Result<Student, sqlx::Error> {
    Ok(Student {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        grade: None,
    })
}
