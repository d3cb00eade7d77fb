use crate::error::PolicyError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rental-platform misconduct classes known to the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    ItemDamage,
    PaymentFraud,
    ItemMisrepresentation,
    RentalAbuse,
    SafetyViolations,
    HarassmentRental,
    FakeListings,
    ReviewManipulation,
}

impl ViolationCategory {
    /// Every category, in catalog order
    pub const ALL: [ViolationCategory; 8] = [
        ViolationCategory::ItemDamage,
        ViolationCategory::PaymentFraud,
        ViolationCategory::ItemMisrepresentation,
        ViolationCategory::RentalAbuse,
        ViolationCategory::SafetyViolations,
        ViolationCategory::HarassmentRental,
        ViolationCategory::FakeListings,
        ViolationCategory::ReviewManipulation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCategory::ItemDamage => "item_damage",
            ViolationCategory::PaymentFraud => "payment_fraud",
            ViolationCategory::ItemMisrepresentation => "item_misrepresentation",
            ViolationCategory::RentalAbuse => "rental_abuse",
            ViolationCategory::SafetyViolations => "safety_violations",
            ViolationCategory::HarassmentRental => "harassment_rental",
            ViolationCategory::FakeListings => "fake_listings",
            ViolationCategory::ReviewManipulation => "review_manipulation",
        }
    }
}

impl FromStr for ViolationCategory {
    type Err = PolicyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        ViolationCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == key)
            .ok_or_else(|| PolicyError::UnknownCategory(key.to_string()))
    }
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl FromStr for Severity {
    type Err = PolicyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == key)
            .ok_or_else(|| PolicyError::UnknownSeverity(key.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suspension length: a finite number of days or permanent revocation.
///
/// Serialized as `{"days": n}` or `{"permanent": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DurationRepr", try_from = "DurationRepr")]
pub enum SuspensionDuration {
    Days(u32),
    Permanent,
}

impl SuspensionDuration {
    pub fn is_permanent(&self) -> bool {
        matches!(self, SuspensionDuration::Permanent)
    }

    pub fn days(&self) -> Option<u32> {
        match self {
            SuspensionDuration::Days(days) => Some(*days),
            SuspensionDuration::Permanent => None,
        }
    }

    /// End of the suspension when it starts at `from`; `None` if permanent.
    pub fn expires_at(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days()
            .map(|days| from + Duration::days(i64::from(days)))
    }
}

impl fmt::Display for SuspensionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuspensionDuration::Days(1) => f.write_str("1 day"),
            SuspensionDuration::Days(days) => write!(f, "{} days", days),
            SuspensionDuration::Permanent => f.write_str("permanent"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DurationRepr {
    Days { days: u32 },
    Permanent { permanent: bool },
}

impl From<SuspensionDuration> for DurationRepr {
    fn from(duration: SuspensionDuration) -> Self {
        match duration {
            SuspensionDuration::Days(days) => DurationRepr::Days { days },
            SuspensionDuration::Permanent => DurationRepr::Permanent { permanent: true },
        }
    }
}

impl TryFrom<DurationRepr> for SuspensionDuration {
    type Error = String;

    fn try_from(repr: DurationRepr) -> Result<Self, Self::Error> {
        match repr {
            DurationRepr::Days { days: 0 } => Err("suspension days must be positive".to_string()),
            DurationRepr::Days { days } => Ok(SuspensionDuration::Days(days)),
            DurationRepr::Permanent { permanent: true } => Ok(SuspensionDuration::Permanent),
            DurationRepr::Permanent { permanent: false } => {
                Err("permanent must be true when days is absent".to_string())
            }
        }
    }
}

/// What one severity tier of a category means and how long it suspends for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityProfile {
    pub description: &'static str,
    pub baseline: SuspensionDuration,
    /// Display only; never consulted by the calculation
    pub examples: &'static [&'static str],
}

/// Catalog entry for one violation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySpec {
    pub category: ViolationCategory,
    pub name: &'static str,
    pub description: &'static str,
    pub low: SeverityProfile,
    pub medium: SeverityProfile,
    pub high: SeverityProfile,
    pub critical: SeverityProfile,
}

impl CategorySpec {
    pub fn profile(&self, severity: Severity) -> &SeverityProfile {
        match severity {
            Severity::Low => &self.low,
            Severity::Medium => &self.medium,
            Severity::High => &self.high,
            Severity::Critical => &self.critical,
        }
    }
}
