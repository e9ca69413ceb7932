use std::io::IsTerminal;

use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;

use crate::handlers::ReportView;
use crate::reports::{SleepStats, StoredReport};
use crate::scoring::{Deduction, BASE_SCORE};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a report timestamp in local time, e.g. "May 12, 2023, 8:30 PM"
pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%B %-d, %Y, %-I:%M %p")
        .to_string()
}

/// Format a score out of 100
pub fn format_score(score: u32) -> String {
    format!("{}/{}", score, BASE_SCORE)
}

fn paint_score(score: u32, use_colors: bool) -> String {
    let text = format_score(score);
    if !use_colors {
        return text;
    }
    match score {
        85.. => text.green().bold().to_string(),
        65..=84 => text.yellow().bold().to_string(),
        _ => text.red().bold().to_string(),
    }
}

/// Format the user's reports as a table: id, date, score. No headers.
pub fn format_report_list(reports: &[StoredReport], use_colors: bool) -> String {
    if reports.is_empty() {
        return "No sleep reports yet.".to_string();
    }

    reports
        .iter()
        .map(|r| {
            let id = format!("{:>4}.", r.id);
            let score = format!("{:>7}", format_score(r.sleep_score));
            if use_colors {
                let score = match r.sleep_score {
                    85.. => score.green().to_string(),
                    65..=84 => score.yellow().to_string(),
                    _ => score.red().to_string(),
                };
                format!("{} {}  {}", id.dimmed(), score, format_date(r.created_at))
            } else {
                format!("{} {}  {}", id, score, format_date(r.created_at))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single report with its tips, one per line
pub fn format_report_detail(view: &ReportView, use_colors: bool) -> String {
    let r = &view.report;
    let mut lines = vec![
        format!("Sleep score: {}", paint_score(r.sleep_score, use_colors)),
        format!("  Date: {}", format_date(r.created_at)),
        format!("  Bedtime: {}", r.bedtime),
        format!("  Woke up: {}", r.wakeup),
        format!("  Wakeups: {} times", r.wakeup_count),
        format!("  Alcohol: {} ({} oz)", r.alcohol, r.alcohol_count),
    ];

    if !view.tips.is_empty() {
        lines.push("Tips:".to_string());
        for tip in &view.tips {
            if use_colors {
                lines.push(format!("  {} {}", "*".cyan(), tip));
            } else {
                lines.push(format!("  * {}", tip));
            }
        }
    }

    lines.join("\n")
}

/// Format the score breakdown shown in verbose mode
pub fn format_deductions(deductions: &[Deduction]) -> String {
    let mut lines = vec![format!("Base score: {}", BASE_SCORE)];
    if deductions.is_empty() {
        lines.push("  no deductions".to_string());
    }
    for d in deductions {
        lines.push(format!(
            "  {}: {} matched '{}' -> -{}",
            d.label, d.count, d.range, d.points
        ));
    }
    lines.join("\n")
}

pub fn format_stats(stats: &SleepStats, use_colors: bool) -> String {
    let Some(average) = stats.average_score else {
        return "No sleep reports yet.".to_string();
    };

    let mut lines = vec![
        format!("Reports: {}", stats.count),
        format!("Average score: {:.1}", average),
    ];
    if let (Some(best), Some(worst)) = (stats.best_score, stats.worst_score) {
        lines.push(format!("Best: {}  Worst: {}", format_score(best), format_score(worst)));
    }
    if let Some(latest) = stats.latest_score {
        lines.push(format!("Latest: {}", paint_score(latest, use_colors)));
    }

    match &stats.goal {
        Some(goal) => {
            let status = if goal.average_met {
                "on track"
            } else {
                "below goal"
            };
            let status = match (use_colors, goal.average_met) {
                (true, true) => status.green().to_string(),
                (true, false) => status.red().to_string(),
                (false, _) => status.to_string(),
            };
            lines.push(format!(
                "Goal: {} ({}, met on {} of {} nights)",
                goal.target, status, goal.nights_met, stats.count
            ));
        }
        None => lines.push("Goal: not set".to_string()),
    }

    lines.join("\n")
}
