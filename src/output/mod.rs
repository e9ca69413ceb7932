pub mod formatter;

pub use formatter::{
    format_date, format_deductions, format_report_detail, format_report_list, format_score,
    format_stats, should_use_colors,
};
