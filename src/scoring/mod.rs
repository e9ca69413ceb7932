pub mod config;
pub mod engine;
pub mod factors;
pub mod input;
pub mod tips;
pub mod validation;

pub use config::*;
pub use engine::{derive_report, derive_report_with, Deduction, SleepReport, BASE_SCORE};
pub use factors::RangeOp;
pub use input::{Meridiem, ReportForm, SleepSessionInput, TimeOfDay};
pub use tips::{applicable_tips, join_tips, split_tips};
pub use validation::validate_scoring;
