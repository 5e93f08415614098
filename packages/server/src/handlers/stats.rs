use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::student;
use crate::error::AppError;
use crate::models::stats::{StatsResponse, compute_stats};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/stats",
    tag = "Statistics",
    operation_id = "studentStats",
    summary = "Aggregates for the performance charts",
    description = "Returns the record count, per-subject mean scores, pass/fail counts, and the Pearson correlation matrix over (math, reading, writing, average). Correlations are null with fewer than two records.",
    responses(
        (status = 200, description = "Roster statistics", body = StatsResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn student_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let rows = student::Entity::find().all(&state.db).await?;
    Ok(Json(compute_stats(&rows)))
}
