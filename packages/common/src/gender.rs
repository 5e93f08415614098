#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender of a student as recorded on the roster form.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in
/// SeaORM entities and is stored as its string value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum Gender {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Male"))]
    Male,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Female"))]
    Female,
}

impl Gender {
    /// All accepted values.
    pub const ALL: &'static [Gender] = &[Self::Male, Self::Female];

    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a value outside the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid gender '{invalid}'. Valid values: Male, Female")]
pub struct ParseGenderError {
    invalid: String,
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            _ => Err(ParseGenderError {
                invalid: s.to_string(),
            }),
        }
    }
}
