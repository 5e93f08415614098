use common::PassFail;
use serde::Serialize;

use crate::entity::student;

/// Axis order of the correlation matrix.
pub const CORRELATION_AXES: &[&str] = &[
    "math_score",
    "reading_score",
    "writing_score",
    "average_score",
];

#[derive(Serialize, utoipa::ToSchema)]
pub struct SubjectAverages {
    pub math: f64,
    pub reading: f64,
    pub writing: f64,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PassFailCounts {
    pub pass: u64,
    pub fail: u64,
}

/// Aggregates backing the dashboard charts: per-subject bar chart, pass/fail
/// pie chart and the score correlation heatmap.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StatsResponse {
    pub count: u64,
    /// `null` when the roster is empty.
    pub subject_averages: Option<SubjectAverages>,
    pub pass_fail_counts: PassFailCounts,
    /// Row/column order follows [`CORRELATION_AXES`]. `null` with fewer than
    /// two records, where correlation is undefined.
    pub correlations: Option<Vec<Vec<f64>>>,
    pub correlation_axes: Vec<String>,
}

pub fn compute_stats(rows: &[student::Model]) -> StatsResponse {
    let count = rows.len() as u64;
    let pass = rows
        .iter()
        .filter(|r| r.pass_fail == PassFail::Pass)
        .count() as u64;

    let subject_averages = if rows.is_empty() {
        None
    } else {
        Some(SubjectAverages {
            math: mean(rows.iter().map(|r| f64::from(r.math_score))),
            reading: mean(rows.iter().map(|r| f64::from(r.reading_score))),
            writing: mean(rows.iter().map(|r| f64::from(r.writing_score))),
        })
    };

    let correlations = (rows.len() >= 2).then(|| {
        let series: [Vec<f64>; 4] = [
            rows.iter().map(|r| f64::from(r.math_score)).collect(),
            rows.iter().map(|r| f64::from(r.reading_score)).collect(),
            rows.iter().map(|r| f64::from(r.writing_score)).collect(),
            rows.iter().map(|r| r.average_score).collect(),
        ];
        series
            .iter()
            .map(|x| series.iter().map(|y| pearson(x, y)).collect())
            .collect()
    });

    StatsResponse {
        count,
        subject_averages,
        pass_fail_counts: PassFailCounts {
            pass,
            fail: count - pass,
        },
        correlations,
        correlation_axes: CORRELATION_AXES.iter().map(|s| s.to_string()).collect(),
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len() as f64;
    values.sum::<f64>() / n
}

/// Pearson correlation coefficient. A constant series has no defined
/// correlation; it is reported as 1 against itself and 0 otherwise so the
/// matrix stays finite and JSON-serializable.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return if std::ptr::eq(x, y) { 1.0 } else { 0.0 };
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}
