/// Errors surfaced by report derivation and the report store.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("report {0} not found")]
    NotFound(u64),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ReportError {
    pub fn invalid(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<anyhow::Error> for ReportError {
    fn from(e: anyhow::Error) -> Self {
        // {:#} keeps the whole context chain on one line
        Self::Storage(format!("{:#}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = ReportError::invalid("wakeupcount", "abc", "not a whole number");
        assert_eq!(err.to_string(), "invalid wakeupcount 'abc': not a whole number");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_storage_keeps_context_chain() {
        let inner = anyhow::anyhow!("disk full").context("Failed to save report state");
        let err: ReportError = inner.into();
        assert_eq!(
            err.to_string(),
            "storage error: Failed to save report state: disk full"
        );
        assert!(!err.is_invalid_input());
    }
}
