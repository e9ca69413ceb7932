use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Account the CLI acts as when --user is not given
    #[serde(default)]
    pub user: Option<String>,

    /// Report data file (defaults to ~/.config/aisleep/reports.json)
    #[serde(default)]
    pub data_file: Option<String>,

    /// Custom deduction tables; the standard tables apply when absent
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
