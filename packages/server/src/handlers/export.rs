use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use sea_orm::*;
use tracing::instrument;

use crate::entity::student;
use crate::error::AppError;
use crate::models::export::{CSV_FILENAME, to_csv};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/export",
    tag = "Export",
    operation_id = "exportStudents",
    summary = "Export the roster as CSV",
    description = "Returns a CSV snapshot of all student records, offered as a file download. An empty roster yields a header-only file.",
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
    ),
)]
#[instrument(skip(state))]
pub async fn export_students(State(state): State<AppState>) -> Result<Response, AppError> {
    let rows = student::Entity::find()
        .order_by_asc(student::Column::StudentId)
        .all(&state.db)
        .await?;

    let csv = to_csv(&rows);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
