//! Request-level operations. Each takes the report store it works on, so the
//! same code serves the CLI, tests, or an HTTP layer.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::ReportError;
use crate::reports::{compute_stats, ReportStore, SleepStats, StoredReport};
use crate::scoring::{derive_report_with, ReportForm, ScoringConfig, SleepReport, SleepSessionInput, BASE_SCORE};

/// A submitted report together with the derivation details behind its score.
#[derive(Debug, Clone)]
pub struct Submission {
    pub stored: StoredReport,
    pub report: SleepReport,
}

/// A stored report prepared for display, tips split back into sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub report: StoredReport,
    pub tips: Vec<String>,
}

pub fn submit_report(
    store: &mut dyn ReportStore,
    user: &str,
    form: &ReportForm,
    scoring: &ScoringConfig,
    now: DateTime<Utc>,
) -> Result<Submission, ReportError> {
    let input = SleepSessionInput::from_form(form)?;
    let report = derive_report_with(&input, scoring);
    debug!(
        wakeups = report.wakeup_count,
        alcohol_oz = report.alcohol_count,
        score = report.sleep_score,
        "derived sleep report"
    );

    let stored = store.insert(user, now, &report)?;
    info!(id = stored.id, user, "inserted report");

    Ok(Submission { stored, report })
}

pub fn list_reports(store: &dyn ReportStore, user: &str) -> Vec<StoredReport> {
    store.reports_for_user(user)
}

/// Look up one of the user's reports. Reports owned by someone else are
/// reported as missing.
pub fn redisplay_report(
    store: &dyn ReportStore,
    user: &str,
    id: u64,
) -> Result<ReportView, ReportError> {
    let report = store
        .get(id)
        .filter(|r| r.user == user)
        .ok_or(ReportError::NotFound(id))?;
    let tips = report.tip_segments();
    Ok(ReportView { report, tips })
}

pub fn user_stats(store: &dyn ReportStore, user: &str) -> SleepStats {
    compute_stats(&store.reports_for_user(user), store.goal(user))
}

pub fn set_goal(store: &mut dyn ReportStore, user: &str, score: u32) -> Result<(), ReportError> {
    if score > BASE_SCORE {
        return Err(ReportError::invalid(
            "goal",
            score.to_string(),
            format!("must be between 0 and {}", BASE_SCORE),
        ));
    }
    store.set_goal(user, score)?;
    info!(user, goal = score, "updated sleep goal");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportState;

    fn form(wakeups: &str, alcohol: &str, ounces: Option<&str>) -> ReportForm {
        ReportForm {
            bedtime_hour: "11".to_string(),
            bedtime_minute: "00".to_string(),
            bedtime_ampm: "PM".to_string(),
            wakeup_hour: "7".to_string(),
            wakeup_minute: "30".to_string(),
            wakeup_ampm: "AM".to_string(),
            wakeup_count: wakeups.to_string(),
            alcohol: alcohol.to_string(),
            alcohol_count: ounces.map(str::to_string),
        }
    }

    #[test]
    fn test_submit_persists_report() {
        let mut store = ReportState::new();
        let submission = submit_report(
            &mut store,
            "ana",
            &form("2", "No", None),
            &ScoringConfig::default(),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(submission.stored.sleep_score, 90);
        assert_eq!(submission.stored.bedtime, "11:00 PM");
        assert_eq!(submission.stored.wakeup, "7:30 AM");
        assert_eq!(submission.report.deductions.len(), 1);
        assert_eq!(list_reports(&store, "ana"), vec![submission.stored]);
    }

    #[test]
    fn test_submit_invalid_input_stores_nothing() {
        let mut store = ReportState::new();
        let err = submit_report(
            &mut store,
            "ana",
            &form("abc", "No", None),
            &ScoringConfig::default(),
            Utc::now(),
        )
        .unwrap_err();

        assert!(err.is_invalid_input());
        assert!(list_reports(&store, "ana").is_empty());
    }

    #[test]
    fn test_redisplay_splits_tips() {
        let mut store = ReportState::new();
        let submission = submit_report(
            &mut store,
            "ana",
            &form("10+ times", "10+ oz", None),
            &ScoringConfig::default(),
            Utc::now(),
        )
        .unwrap();

        let view = redisplay_report(&store, "ana", submission.stored.id).unwrap();
        assert_eq!(view.report.sleep_score, 45);
        assert_eq!(view.tips.len(), 2);
        assert!(view.tips[0].starts_with("You should consider seeing a sleep specialist"));
        assert!(view.tips[1].starts_with("Stop drinking"));
    }

    #[test]
    fn test_redisplay_other_users_report_is_not_found() {
        let mut store = ReportState::new();
        let submission = submit_report(
            &mut store,
            "ana",
            &form("0", "No", None),
            &ScoringConfig::default(),
            Utc::now(),
        )
        .unwrap();

        let err = redisplay_report(&store, "ben", submission.stored.id).unwrap_err();
        assert!(matches!(err, ReportError::NotFound(id) if id == submission.stored.id));
    }

    #[test]
    fn test_stats_with_goal() {
        let mut store = ReportState::new();
        let scoring = ScoringConfig::default();
        for (wakeups, oz) in [("0", None), ("3", None), ("5", Some("5"))] {
            let alcohol = if oz.is_some() { "Yes" } else { "No" };
            submit_report(&mut store, "ana", &form(wakeups, alcohol, oz), &scoring, Utc::now()).unwrap();
        }
        set_goal(&mut store, "ana", 85).unwrap();

        let stats = user_stats(&store, "ana");
        assert_eq!(stats.count, 3);
        assert!((stats.average_score.unwrap() - 230.0 / 3.0).abs() < 0.001);
        let goal = stats.goal.unwrap();
        assert_eq!(goal.nights_met, 2);
        assert!(!goal.average_met);
    }

    #[test]
    fn test_goal_out_of_range() {
        let mut store = ReportState::new();
        assert!(set_goal(&mut store, "ana", 101).unwrap_err().is_invalid_input());
        assert_eq!(store.goal("ana"), None);
    }
}
