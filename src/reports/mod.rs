pub mod stats;
pub mod storage;
pub mod types;

pub use stats::{compute_stats, GoalProgress, SleepStats};
pub use storage::{get_reports_path, load_report_state, save_report_state, FileReportStore};
pub use types::{ReportState, ReportStore, StoredReport};
