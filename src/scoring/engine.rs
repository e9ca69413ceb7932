use super::config::{DeductionBucket, ScoringConfig};
use super::factors::RangeOp;
use super::input::SleepSessionInput;
use super::tips::applicable_tips;

/// Score of a night with no penalties.
pub const BASE_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduction {
    pub label: &'static str, // "Wakeups" or "Alcohol"
    pub count: u32,          // normalized count that matched
    pub range: String,       // bucket range that matched, e.g. ">=5"
    pub points: u32,
}

/// Everything derived from one sleep session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepReport {
    pub sleep_score: u32,
    pub tips: Vec<String>,
    pub bedtime_display: String,
    pub wake_display: String,
    pub wakeup_count: u32,
    pub alcohol: String,
    pub alcohol_count: u32,
    pub deductions: Vec<Deduction>,
}

/// Derive a report using the standard deduction tables.
pub fn derive_report(input: &SleepSessionInput) -> SleepReport {
    derive_report_with(input, &ScoringConfig::default())
}

pub fn derive_report_with(input: &SleepSessionInput, config: &ScoringConfig) -> SleepReport {
    let mut deductions = Vec::new();

    if let Some(d) = match_bucket("Wakeups", input.wakeup_count, &config.wakeups) {
        deductions.push(d);
    }
    if let Some(d) = match_bucket("Alcohol", input.alcohol_count, &config.alcohol) {
        deductions.push(d);
    }

    // Floor at zero
    let sleep_score = deductions
        .iter()
        .fold(BASE_SCORE, |score, d| score.saturating_sub(d.points));

    SleepReport {
        sleep_score,
        tips: applicable_tips(input.wakeup_count, input.alcohol_count),
        bedtime_display: input.bedtime.to_string(),
        wake_display: input.wake_time.to_string(),
        wakeup_count: input.wakeup_count,
        alcohol: input.alcohol.clone(),
        alcohol_count: input.alcohol_count,
        deductions,
    }
}

/// First bucket whose range matches wins. Unparseable ranges are skipped;
/// validate_scoring reports them at startup.
fn match_bucket(label: &'static str, count: u32, buckets: &[DeductionBucket]) -> Option<Deduction> {
    buckets.iter().find_map(|bucket| {
        let range = RangeOp::parse(&bucket.range).ok()?;
        range.matches(count).then(|| Deduction {
            label,
            count,
            range: bucket.range.clone(),
            points: bucket.deduction,
        })
    })
}
