use serde::{Deserialize, Serialize};

/// Deduction tables for the sleep score.
///
/// Each table is scanned top to bottom and the first bucket whose range
/// matches the normalized count applies. The wakeup and alcohol tables stack.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   wakeups:
///     - { range: "2", deduction: 10 }
///     - { range: ">=5", deduction: 25 }
///   alcohol:
///     - { range: "1", deduction: 10 }
///     - { range: ">=5", deduction: 30 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Buckets keyed on the number of times the sleeper woke up
    #[serde(default)]
    pub wakeups: Vec<DeductionBucket>,

    /// Buckets keyed on ounces of alcohol before bed
    #[serde(default)]
    pub alcohol: Vec<DeductionBucket>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            wakeups: vec![
                DeductionBucket::new("2", 10),
                DeductionBucket::new("3", 15),
                DeductionBucket::new("4", 20),
                DeductionBucket::new(">=5", 25),
            ],
            alcohol: vec![
                DeductionBucket::new("1", 10),
                DeductionBucket::new("2", 15),
                DeductionBucket::new("3", 20),
                DeductionBucket::new("4", 25),
                DeductionBucket::new(">=5", 30),
            ],
        }
    }
}

/// Maps a count range to the points taken off the score.
/// Range format: "N", "<N", "<=N", ">N", ">=N", "N-M" (inclusive range)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DeductionBucket {
    pub range: String,
    pub deduction: u32,
}

impl DeductionBucket {
    pub fn new(range: &str, deduction: u32) -> Self {
        Self {
            range: range.to_string(),
            deduction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let config = ScoringConfig::default();
        assert_eq!(config.wakeups.len(), 4);
        assert_eq!(config.alcohol.len(), 5);
        assert_eq!(config.alcohol[4], DeductionBucket::new(">=5", 30));
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
wakeups:
  - range: ">=3"
    deduction: 40
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.wakeups, vec![DeductionBucket::new(">=3", 40)]);
        assert!(config.alcohol.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
caffeine:
  - range: "1"
    deduction: 5
"#;
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
