//! Student CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{NameFilter, StudentId, StudentPayload};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

pub async fn list(
    State(state): State<AppState>,
    NameFilter(name): NameFilter,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.students.list_students(name.as_deref()).await?;
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn read(
    State(state): State<AppState>,
    StudentId(id): StudentId,
) -> Result<impl IntoResponse, AppError> {
    let row = state.students.get_student(id).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn create(
    State(state): State<AppState>,
    StudentPayload(candidate): StudentPayload,
) -> Result<impl IntoResponse, AppError> {
    let row = state.students.create_student(candidate).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update(
    State(state): State<AppState>,
    StudentId(id): StudentId,
    StudentPayload(candidate): StudentPayload,
) -> Result<impl IntoResponse, AppError> {
    let row = state.students.update_student(id, candidate).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn delete(
    State(state): State<AppState>,
    StudentId(id): StudentId,
) -> Result<impl IntoResponse, AppError> {
    state.students.delete_student(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
