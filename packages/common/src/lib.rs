pub mod gender;
pub mod metrics;

pub use gender::Gender;
pub use metrics::{Grade, PassFail, ScoreSummary};
