use super::config::{DeductionBucket, ScoringConfig};
use super::factors::RangeOp;
use super::engine::BASE_SCORE;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_buckets("scoring.wakeups", &config.wakeups, &mut errors);
    validate_buckets("scoring.alcohol", &config.alcohol, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_buckets(prefix: &str, buckets: &[DeductionBucket], errors: &mut Vec<String>) {
    for (i, bucket) in buckets.iter().enumerate() {
        if let Err(e) = RangeOp::parse(&bucket.range) {
            errors.push(format!(
                "{}[{}].range: invalid '{}' - {}",
                prefix, i, bucket.range, e
            ));
        }
        if bucket.deduction > BASE_SCORE {
            errors.push(format!(
                "{}[{}].deduction: {} exceeds the maximum score of {}",
                prefix, i, bucket.deduction, BASE_SCORE
            ));
        }
    }
}
