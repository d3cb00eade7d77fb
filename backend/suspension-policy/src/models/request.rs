use super::report::{prior_report_count, ViolationReport};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Evaluation input as the admin console sends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub category: String,
    pub severity: String,
    #[serde(default)]
    pub reports: Vec<ViolationReport>,
    /// Derived from `reports` when absent
    #[serde(default)]
    pub prior_report_count: Option<u32>,
    /// Report that triggered this evaluation, excluded from the prior count
    #[serde(default)]
    pub current_report_id: Option<String>,
}

impl EvaluationRequest {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn effective_prior_report_count(&self) -> u32 {
        self.prior_report_count.unwrap_or_else(|| {
            prior_report_count(&self.reports, self.current_report_id.as_deref())
        })
    }
}
