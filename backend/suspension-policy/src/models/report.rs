//! Violation reports filed against a user, as handed over by the caller.
//! The engine only reads them; storage and lifecycle live elsewhere.

use super::violation::ViolationCategory;
use crate::error::PolicyError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review state of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Investigating,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Investigating => "investigating",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Dismissed => "dismissed",
        }
    }

    /// Only reports that completed admin review count as prior violations
    pub fn counts_toward_escalation(&self) -> bool {
        matches!(self, ReportStatus::Resolved)
    }
}

impl FromStr for ReportStatus {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(ReportStatus::Pending),
            "investigating" => Ok(ReportStatus::Investigating),
            "resolved" => Ok(ReportStatus::Resolved),
            "dismissed" => Ok(ReportStatus::Dismissed),
            other => Err(PolicyError::UnknownReportStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single complaint against the subject user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationReport {
    pub id: String,
    /// Free-form at the boundary; see [`ViolationReport::parsed_category`]
    pub category: String,
    pub status: ReportStatus,
    #[serde(default)]
    pub reporter_id: Option<String>,
    #[serde(default)]
    pub reported_user_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl ViolationReport {
    pub fn new(id: impl Into<String>, category: impl Into<String>, status: ReportStatus) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            status,
            reporter_id: None,
            reported_user_id: None,
            description: None,
            created_at: None,
            resolved_at: None,
        }
    }

    pub fn parsed_category(&self) -> Option<ViolationCategory> {
        self.category.parse().ok()
    }

    pub fn is_resolved(&self) -> bool {
        self.status.counts_toward_escalation()
    }
}

/// Resolved-violation counts used by the escalation rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationHistory {
    /// Resolved reports in the category being decided
    pub category_violations: u32,
    /// Resolved reports in any category
    pub total_violations: u32,
}

impl ViolationHistory {
    pub fn summarize(category: ViolationCategory, reports: &[ViolationReport]) -> Self {
        reports
            .iter()
            .filter(|report| report.is_resolved())
            .fold(Self::default(), |mut history, report| {
                history.total_violations += 1;
                if report.parsed_category() == Some(category) {
                    history.category_violations += 1;
                }
                history
            })
    }
}

/// Number of reports other than the one currently being acted on.
///
/// Every status counts here; the number only feeds the narrative wording.
pub fn prior_report_count(reports: &[ViolationReport], current_report_id: Option<&str>) -> u32 {
    let count = reports
        .iter()
        .filter(|report| Some(report.id.as_str()) != current_report_id)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
