use common::{Gender, Grade, PassFail};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub student_id: i32,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub last_name: String,
    pub gender: Gender,

    pub math_score: i32,
    pub reading_score: i32,
    pub writing_score: i32,

    // Derived from the three scores; recomputed on every create/update.
    pub average_score: f64,
    pub grade: Grade,
    pub pass_fail: PassFail,
}

impl ActiveModelBehavior for ActiveModel {}
