use common::{Gender, Grade, PassFail};
use serde::{Deserialize, Serialize};

use crate::entity::student;

/// Upper bound of a subject score; the lower bound is 0.
pub const MAX_SCORE: i32 = 100;

/// Body for both create (POST) and full-overwrite update (PUT).
///
/// A gender outside {Male, Female} fails deserialization and is rejected as a
/// validation error before anything is persisted.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct StudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub math_score: i32,
    pub reading_score: i32,
    pub writing_score: i32,
}

impl StudentRequest {
    /// Score inputs mirror the 0-100 bounded form widgets of the dashboard:
    /// out-of-range values are clamped, not rejected.
    pub fn clamped_scores(&self) -> (i32, i32, i32) {
        (
            self.math_score.clamp(0, MAX_SCORE),
            self.reading_score.clamp(0, MAX_SCORE),
            self.writing_score.clamp(0, MAX_SCORE),
        )
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StudentResponse {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub math_score: i32,
    pub reading_score: i32,
    pub writing_score: i32,
    pub average_score: f64,
    pub grade: Grade,
    pub pass_fail: PassFail,
}

impl From<student::Model> for StudentResponse {
    fn from(m: student::Model) -> Self {
        Self {
            student_id: m.student_id,
            first_name: m.first_name,
            last_name: m.last_name,
            gender: m.gender,
            math_score: m.math_score,
            reading_score: m.reading_score,
            writing_score: m.writing_score,
            average_score: m.average_score,
            grade: m.grade,
            pass_fail: m.pass_fail,
        }
    }
}
