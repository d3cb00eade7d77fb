use super::report::ViolationHistory;
use super::violation::{Severity, SuspensionDuration, ViolationCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account state written back to the user document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
    Banned,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Suspended => "suspended",
            AccountStatus::Banned => "banned",
        }
    }
}

/// Outcome of one policy evaluation. Never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspensionDecision {
    pub category: ViolationCategory,
    pub severity: Severity,
    pub duration: SuspensionDuration,
    pub narrative: String,
    pub history: ViolationHistory,
}

/// Fields the admin console writes to the user document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatusUpdate {
    pub account_status: AccountStatus,
    pub suspension_reason: String,
    pub suspended_until: Option<DateTime<Utc>>,
}

impl SuspensionDecision {
    /// Build the account update for a suspension starting at `now`
    pub fn account_update(&self, now: DateTime<Utc>) -> AccountStatusUpdate {
        let account_status = if self.duration.is_permanent() {
            AccountStatus::Banned
        } else {
            AccountStatus::Suspended
        };

        AccountStatusUpdate {
            account_status,
            suspension_reason: self.narrative.clone(),
            suspended_until: self.duration.expires_at(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn decision(duration: SuspensionDuration) -> SuspensionDecision {
        SuspensionDecision {
            category: ViolationCategory::ItemDamage,
            severity: Severity::Low,
            duration,
            narrative: "Minor damage.".to_string(),
            history: ViolationHistory::default(),
        }
    }

    #[test]
    fn test_finite_decision_suspends() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let update = decision(SuspensionDuration::Days(6)).account_update(now);

        assert_eq!(update.account_status, AccountStatus::Suspended);
        assert_eq!(
            update.suspended_until,
            Some(Utc.with_ymd_and_hms(2024, 6, 7, 0, 0, 0).unwrap())
        );
        assert_eq!(update.suspension_reason, "Minor damage.");
    }

    #[test]
    fn test_permanent_decision_bans() {
        let update = decision(SuspensionDuration::Permanent).account_update(Utc::now());

        assert_eq!(update.account_status, AccountStatus::Banned);
        assert!(update.suspended_until.is_none());
    }

    #[test]
    fn test_update_uses_document_field_names() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let value = serde_json::to_value(decision(SuspensionDuration::Days(1)).account_update(now)).unwrap();

        assert_eq!(value["accountStatus"], "suspended");
        assert_eq!(value["suspensionReason"], "Minor damage.");
        assert!(value["suspendedUntil"].is_string());
    }
}
