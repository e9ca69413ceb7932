use super::types::{ReportState, ReportStore, StoredReport, STATE_VERSION};
use crate::error::ReportError;
use crate::scoring::SleepReport;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default report data file path (~/.config/aisleep/reports.json)
pub fn get_reports_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("reports.json"))
}

/// Load report state from a JSON file
///
/// If the file doesn't exist, returns a new empty state.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_report_state(path: &Path) -> Result<ReportState> {
    if !path.exists() {
        return Ok(ReportState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open report file at {}", path.display()))?;

    let state: ReportState = serde_json::from_reader(file)
        .with_context(|| format!("Failed to load report state from {}", path.display()))?;

    if state.version != STATE_VERSION {
        anyhow::bail!("Unsupported report state version: {}", state.version);
    }

    Ok(state)
}

/// Save report state to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_report_state(path: &Path, state: &ReportState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize report state")?;

    file.commit().context("Failed to save report state")?;

    Ok(())
}

/// Report store backed by a JSON file. Every mutation is written through.
#[derive(Debug)]
pub struct FileReportStore {
    path: PathBuf,
    state: ReportState,
}

impl FileReportStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = load_report_state(&path)?;
        tracing::debug!(
            path = %path.display(),
            reports = state.reports.len(),
            "loaded report state"
        );
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), ReportError> {
        save_report_state(&self.path, &self.state)?;
        Ok(())
    }
}

impl ReportStore for FileReportStore {
    fn insert(
        &mut self,
        user: &str,
        created_at: DateTime<Utc>,
        report: &SleepReport,
    ) -> Result<StoredReport, ReportError> {
        // Write to a copy so a failed save leaves memory matching disk
        let mut next = self.state.clone();
        let stored = next.insert(user, created_at, report)?;
        save_report_state(&self.path, &next)?;
        self.state = next;
        Ok(stored)
    }

    fn reports_for_user(&self, user: &str) -> Vec<StoredReport> {
        self.state.reports_for_user(user)
    }

    fn get(&self, id: u64) -> Option<StoredReport> {
        self.state.get(id)
    }

    fn goal(&self, user: &str) -> Option<u32> {
        self.state.goal(user)
    }

    fn set_goal(&mut self, user: &str, score: u32) -> Result<(), ReportError> {
        let previous = self.state.goals.get(user).copied();
        self.state.set_goal(user, score)?;
        if let Err(e) = self.persist() {
            match previous {
                Some(goal) => self.state.goals.insert(user.to_string(), goal),
                None => self.state.goals.remove(user),
            };
            return Err(e);
        }
        Ok(())
    }
}
