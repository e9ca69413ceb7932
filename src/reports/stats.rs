use super::types::StoredReport;

/// Aggregate view over one user's reports.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepStats {
    pub count: usize,
    pub average_score: Option<f64>,
    pub best_score: Option<u32>,
    pub worst_score: Option<u32>,
    pub latest_score: Option<u32>,
    pub goal: Option<GoalProgress>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub target: u32,
    /// Reports scoring at or above the target
    pub nights_met: usize,
    /// Whether the average score reaches the target
    pub average_met: bool,
}

/// Compute stats for reports that are already sorted oldest first.
pub fn compute_stats(reports: &[StoredReport], goal: Option<u32>) -> SleepStats {
    let count = reports.len();
    let scores = || reports.iter().map(|r| r.sleep_score);

    let average_score = if count == 0 {
        None
    } else {
        Some(scores().map(f64::from).sum::<f64>() / count as f64)
    };

    let goal = goal.map(|target| GoalProgress {
        target,
        nights_met: scores().filter(|s| *s >= target).count(),
        average_met: average_score.is_some_and(|avg| avg >= f64::from(target)),
    });

    SleepStats {
        count,
        average_score,
        best_score: scores().max(),
        worst_score: scores().min(),
        latest_score: reports.last().map(|r| r.sleep_score),
        goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stored(id: u64, score: u32) -> StoredReport {
        StoredReport {
            id,
            user: "ana".to_string(),
            created_at: Utc::now(),
            bedtime: "10:00 PM".to_string(),
            wakeup: "6:00 AM".to_string(),
            wakeup_count: 0,
            alcohol: "No".to_string(),
            alcohol_count: 0,
            sleep_score: score,
            tips: String::new(),
        }
    }

    #[test]
    fn test_empty_history() {
        let stats = compute_stats(&[], Some(80));
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_score, None);
        assert_eq!(stats.best_score, None);
        let goal = stats.goal.unwrap();
        assert_eq!(goal.nights_met, 0);
        assert!(!goal.average_met);
    }

    #[test]
    fn test_average_and_extremes() {
        let reports = vec![stored(1, 100), stored(2, 85), stored(3, 45)];
        let stats = compute_stats(&reports, None);
        assert_eq!(stats.count, 3);
        assert!((stats.average_score.unwrap() - 76.666).abs() < 0.01);
        assert_eq!(stats.best_score, Some(100));
        assert_eq!(stats.worst_score, Some(45));
        assert_eq!(stats.latest_score, Some(45));
        assert!(stats.goal.is_none());
    }

    #[test]
    fn test_goal_progress() {
        let reports = vec![stored(1, 90), stored(2, 80), stored(3, 70)];
        let stats = compute_stats(&reports, Some(80));
        let goal = stats.goal.unwrap();
        assert_eq!(goal.target, 80);
        assert_eq!(goal.nights_met, 2);
        assert!(goal.average_met); // average is exactly 80
    }
}
