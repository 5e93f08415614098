//! Derived performance metrics for a student record.
//!
//! `average_score`, `grade` and `pass_fail` are never set by callers; they are
//! recomputed from the three subject scores on every create and update via
//! [`summarize`].

#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade derived from the average score.
///
/// Bands are evaluated in descending order with an inclusive lower bound:
/// `A` >= 90, `B` >= 75, `C` >= 60, `D` >= 50, `F` below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum Grade {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "A"))]
    A,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "B"))]
    B,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "C"))]
    C,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "D"))]
    D,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "F"))]
    F,
}

impl Grade {
    /// Maps an average score to its grade band. First match wins, so an
    /// average of exactly 90 is an `A`, not a `B`.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Self::A
        } else if average >= 75.0 {
            Self::B
        } else if average >= 60.0 {
            Self::C
        } else if average >= 50.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass/fail label derived from the average score.
///
/// The threshold (35) is independent of the grade bands: an average of 40 is
/// grade `F` yet `Pass`. This asymmetry is intentional and must not be
/// unified with the `F` band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum PassFail {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Pass"))]
    Pass,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Fail"))]
    Fail,
}

impl PassFail {
    /// Pass threshold on the average score.
    pub const PASS_THRESHOLD: f64 = 35.0;

    pub fn from_average(average: f64) -> Self {
        if average >= Self::PASS_THRESHOLD {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for PassFail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three derived fields of a student record, computed together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreSummary {
    pub average: f64,
    pub grade: Grade,
    pub pass_fail: PassFail,
}

/// Computes the derived fields from the three subject scores.
///
/// Pure and deterministic; the average is the exact arithmetic mean.
pub fn summarize(math: i32, reading: i32, writing: i32) -> ScoreSummary {
    let average = f64::from(math + reading + writing) / 3.0;
    ScoreSummary {
        average,
        grade: Grade::from_average(average),
        pass_fail: PassFail::from_average(average),
    }
}
