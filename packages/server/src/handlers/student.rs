use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::metrics;
use sea_orm::*;
use tracing::instrument;

use crate::entity::student;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::student::{StudentRequest, StudentResponse};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Students",
    operation_id = "createStudent",
    summary = "Add a new student",
    description = "Creates a student record. The average score, letter grade and pass/fail label are derived server-side from the three subject scores; out-of-range scores are clamped to 0-100.",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(first_name = %payload.first_name, last_name = %payload.last_name))]
pub async fn create_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<StudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (math, reading, writing) = payload.clamped_scores();
    let summary = metrics::summarize(math, reading, writing);

    let new_student = student::ActiveModel {
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        gender: Set(payload.gender),
        math_score: Set(math),
        reading_score: Set(reading),
        writing_score: Set(writing),
        average_score: Set(summary.average),
        grade: Set(summary.grade),
        pass_fail: Set(summary.pass_fail),
        ..Default::default()
    };

    let model = new_student.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(StudentResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Students",
    operation_id = "listStudents",
    summary = "List all students",
    description = "Returns the full roster as a snapshot, ordered by student ID.",
    responses(
        (status = 200, description = "All student records", body = Vec<StudentResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let rows = student::Entity::find()
        .order_by_asc(student::Column::StudentId)
        .all(&state.db)
        .await?;

    Ok(Json(rows.into_iter().map(StudentResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Students",
    operation_id = "getStudent",
    summary = "Get a student by ID",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student record", body = StudentResponse),
        (status = 404, description = "Student not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StudentResponse>, AppError> {
    let model = find_student(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Students",
    operation_id = "updateStudent",
    summary = "Update a student",
    description = "Overwrites all editable fields of the record and recomputes the derived fields in the same statement. A missing ID leaves storage unchanged.",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Student not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<StudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    let existing = find_student(&state.db, id).await?;

    let (math, reading, writing) = payload.clamped_scores();
    let summary = metrics::summarize(math, reading, writing);

    let mut active: student::ActiveModel = existing.into();
    active.first_name = Set(payload.first_name);
    active.last_name = Set(payload.last_name);
    active.gender = Set(payload.gender);
    active.math_score = Set(math);
    active.reading_score = Set(reading);
    active.writing_score = Set(writing);
    active.average_score = Set(summary.average);
    active.grade = Set(summary.grade);
    active.pass_fail = Set(summary.pass_fail);

    let model = active.update(&state.db).await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Students",
    operation_id = "deleteStudent",
    summary = "Delete a student by ID",
    description = "Permanently removes the record. There is no soft delete; the ID is never reused by the application.",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = student::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Student not found".into()));
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn find_student<C: ConnectionTrait>(db: &C, id: i32) -> Result<student::Model, AppError> {
    student::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".into()))
}
