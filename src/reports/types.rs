use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ReportError;
use crate::scoring::{join_tips, split_tips, SleepReport};

/// Current on-disk format version.
pub const STATE_VERSION: u32 = 1;

/// A report as persisted. Never modified after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: u64,
    pub user: String,
    pub created_at: DateTime<Utc>,
    pub bedtime: String,
    pub wakeup: String,
    pub wakeup_count: u32,
    pub alcohol: String,
    pub alcohol_count: u32,
    pub sleep_score: u32,
    /// Tip sentences joined with a single space
    pub tips: String,
}

impl StoredReport {
    /// Tip sentences recovered from the stored string, without final punctuation
    pub fn tip_segments(&self) -> Vec<String> {
        split_tips(&self.tips)
    }
}

/// Persistence seam for reports and per-user goals.
pub trait ReportStore {
    fn insert(
        &mut self,
        user: &str,
        created_at: DateTime<Utc>,
        report: &SleepReport,
    ) -> Result<StoredReport, ReportError>;

    /// All reports belonging to `user`, oldest first
    fn reports_for_user(&self, user: &str) -> Vec<StoredReport>;

    fn get(&self, id: u64) -> Option<StoredReport>;

    fn goal(&self, user: &str) -> Option<u32>;

    fn set_goal(&mut self, user: &str, score: u32) -> Result<(), ReportError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportState {
    pub version: u32,
    #[serde(default = "first_id")]
    pub next_id: u64,
    #[serde(default)]
    pub reports: Vec<StoredReport>,
    #[serde(default)]
    pub goals: HashMap<String, u32>,
}

fn first_id() -> u64 {
    1
}

impl Default for ReportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportState {
    /// Create a new empty state with the current version
    pub fn new() -> Self {
        Self {
            version: STATE_VERSION,
            next_id: first_id(),
            reports: Vec::new(),
            goals: HashMap::new(),
        }
    }

    fn push(&mut self, user: &str, created_at: DateTime<Utc>, report: &SleepReport) -> StoredReport {
        let stored = StoredReport {
            id: self.next_id,
            user: user.to_string(),
            created_at,
            bedtime: report.bedtime_display.clone(),
            wakeup: report.wake_display.clone(),
            wakeup_count: report.wakeup_count,
            alcohol: report.alcohol.clone(),
            alcohol_count: report.alcohol_count,
            sleep_score: report.sleep_score,
            tips: join_tips(&report.tips),
        };
        self.next_id += 1;
        self.reports.push(stored.clone());
        stored
    }
}

impl ReportStore for ReportState {
    fn insert(
        &mut self,
        user: &str,
        created_at: DateTime<Utc>,
        report: &SleepReport,
    ) -> Result<StoredReport, ReportError> {
        Ok(self.push(user, created_at, report))
    }

    fn reports_for_user(&self, user: &str) -> Vec<StoredReport> {
        let mut reports: Vec<_> = self
            .reports
            .iter()
            .filter(|r| r.user == user)
            .cloned()
            .collect();
        reports.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        reports
    }

    fn get(&self, id: u64) -> Option<StoredReport> {
        self.reports.iter().find(|r| r.id == id).cloned()
    }

    fn goal(&self, user: &str) -> Option<u32> {
        self.goals.get(user).copied()
    }

    fn set_goal(&mut self, user: &str, score: u32) -> Result<(), ReportError> {
        self.goals.insert(user.to_string(), score);
        Ok(())
    }
}
