//! Violation taxonomy: the fixed catalog of categories and severity tiers.
//!
//! Each tier carries the baseline suspension applied to a first offense.
//! The table is compiled in and never changes at runtime.

use crate::error::Result;
use crate::models::{CategorySpec, Severity, SeverityProfile, SuspensionDuration, ViolationCategory};

const fn days(n: u32) -> SuspensionDuration {
    SuspensionDuration::Days(n)
}

const PERMANENT: SuspensionDuration = SuspensionDuration::Permanent;

static ITEM_DAMAGE: CategorySpec = CategorySpec {
    category: ViolationCategory::ItemDamage,
    name: "Item Damage",
    description: "Damaging rented items beyond normal wear and tear",
    low: SeverityProfile {
        description: "Minor damage to a rented item that affects its appearance but not its function.",
        baseline: days(3),
        examples: &["Small scratches", "Minor stains", "Scuffed surfaces"],
    },
    medium: SeverityProfile {
        description: "Noticeable damage to a rented item that requires repair before it can be rented again.",
        baseline: days(7),
        examples: &["Broken parts", "Torn fabric", "Cracked casing"],
    },
    high: SeverityProfile {
        description: "Severe damage that leaves a rented item unusable or requires costly repairs.",
        baseline: days(30),
        examples: &["Item no longer works", "Water damage", "Major structural damage"],
    },
    critical: SeverityProfile {
        description: "Intentional destruction of a rented item or damage that cannot be repaired.",
        baseline: PERMANENT,
        examples: &["Deliberate destruction", "Total loss of the item", "Repeated intentional damage"],
    },
};

static PAYMENT_FRAUD: CategorySpec = CategorySpec {
    category: ViolationCategory::PaymentFraud,
    name: "Payment Fraud",
    description: "Fraudulent payment activity or attempts to avoid paying for rentals",
    low: SeverityProfile {
        description: "A failed or disputed payment caused by carelessness rather than intent.",
        baseline: days(7),
        examples: &["Expired card used repeatedly", "Late payment without notice"],
    },
    medium: SeverityProfile {
        description: "Deliberate attempts to delay or reduce payment owed for a rental.",
        baseline: days(30),
        examples: &["Unjustified chargeback", "Partial payment after agreeing to full price"],
    },
    high: SeverityProfile {
        description: "Deliberate non-payment or payment made through fraudulent means.",
        baseline: days(90),
        examples: &["Stolen payment method", "Fake payment confirmation", "Multiple chargebacks"],
    },
    critical: SeverityProfile {
        description: "Organized or large-scale payment fraud against the platform or its users.",
        baseline: PERMANENT,
        examples: &["Identity theft", "Coordinated fraud ring", "Money laundering"],
    },
};

static ITEM_MISREPRESENTATION: CategorySpec = CategorySpec {
    category: ViolationCategory::ItemMisrepresentation,
    name: "Item Misrepresentation",
    description: "Listing items with inaccurate descriptions, photos, or condition",
    low: SeverityProfile {
        description: "Minor inaccuracies in an item listing that do not materially affect the rental.",
        baseline: days(3),
        examples: &["Outdated photos", "Slightly wrong dimensions", "Missing minor accessories"],
    },
    medium: SeverityProfile {
        description: "Misleading listing details that affect the renter's experience.",
        baseline: days(7),
        examples: &["Undisclosed defects", "Wrong model or version", "Inaccurate condition rating"],
    },
    high: SeverityProfile {
        description: "Significant misrepresentation that leaves the renter with a substantially different item.",
        baseline: days(30),
        examples: &["Photos of a different item", "Hidden major damage", "Counterfeit item listed as genuine"],
    },
    critical: SeverityProfile {
        description: "Deliberate deception that puts renters at financial or physical risk.",
        baseline: PERMANENT,
        examples: &["Listing stolen goods", "Knowingly renting out unsafe items"],
    },
};

static RENTAL_ABUSE: CategorySpec = CategorySpec {
    category: ViolationCategory::RentalAbuse,
    name: "Rental Abuse",
    description: "Misusing the rental process or breaking rental agreements",
    low: SeverityProfile {
        description: "Minor breaches of a rental agreement.",
        baseline: days(7),
        examples: &["Late return", "Missed pickup without notice", "Using item outside agreed terms"],
    },
    medium: SeverityProfile {
        description: "Repeated or deliberate breaches of rental agreements.",
        baseline: days(14),
        examples: &["Subletting rented items", "Extended late returns", "Frequent last-minute cancellations"],
    },
    high: SeverityProfile {
        description: "Serious abuse of the rental process that causes loss to other users.",
        baseline: days(30),
        examples: &["Failing to return an item", "Using items for prohibited purposes"],
    },
    critical: SeverityProfile {
        description: "Systematic abuse of the rental process amounting to theft or fraud.",
        baseline: PERMANENT,
        examples: &["Keeping or selling rented items", "Running a scheme across multiple rentals"],
    },
};

static SAFETY_VIOLATIONS: CategorySpec = CategorySpec {
    category: ViolationCategory::SafetyViolations,
    name: "Safety Violations",
    description: "Conduct that endangers the safety of other users",
    low: SeverityProfile {
        description: "Careless conduct that creates a minor safety concern.",
        baseline: days(7),
        examples: &["Missing safety instructions", "Ignoring minor safety guidelines"],
    },
    medium: SeverityProfile {
        description: "Conduct that creates a real risk of harm to other users.",
        baseline: days(30),
        examples: &["Renting out items with known hazards", "Unsafe meetup arrangements"],
    },
    high: SeverityProfile {
        description: "Conduct that caused or nearly caused harm to other users.",
        baseline: days(90),
        examples: &["Tampered safety equipment", "Threatening behavior during handover"],
    },
    critical: SeverityProfile {
        description: "Conduct that caused serious harm or poses an ongoing danger to the community.",
        baseline: PERMANENT,
        examples: &["Physical assault", "Deliberately dangerous items", "Credible threats of violence"],
    },
};

static HARASSMENT_RENTAL: CategorySpec = CategorySpec {
    category: ViolationCategory::HarassmentRental,
    name: "Harassment",
    description: "Harassing, threatening, or abusive behavior toward other users during rentals",
    low: SeverityProfile {
        description: "Rude or unprofessional communication with other users.",
        baseline: days(3),
        examples: &["Insulting messages", "Aggressive tone", "Unwanted repeated contact"],
    },
    medium: SeverityProfile {
        description: "Persistent harassment or intimidation of another user.",
        baseline: days(14),
        examples: &["Repeated threatening messages", "Contacting users outside the platform"],
    },
    high: SeverityProfile {
        description: "Severe harassment including discrimination or personal threats.",
        baseline: days(60),
        examples: &["Discriminatory remarks", "Threats to a user's property", "Doxxing attempts"],
    },
    critical: SeverityProfile {
        description: "Harassment involving stalking, threats of violence, or sexual misconduct.",
        baseline: PERMANENT,
        examples: &["Stalking", "Threats of physical harm", "Sexual harassment"],
    },
};

static FAKE_LISTINGS: CategorySpec = CategorySpec {
    category: ViolationCategory::FakeListings,
    name: "Fake Listings",
    description: "Creating listings for items that do not exist or are not available",
    low: SeverityProfile {
        description: "Listings that stay up after the item is no longer available.",
        baseline: days(7),
        examples: &["Stale listings", "Duplicate listings for one item"],
    },
    medium: SeverityProfile {
        description: "Listings created to mislead renters or manipulate search results.",
        baseline: days(30),
        examples: &["Placeholder listings", "Bait-and-switch listings"],
    },
    high: SeverityProfile {
        description: "Listings for items the owner does not have, used to collect payment.",
        baseline: days(90),
        examples: &["Non-existent items", "Stock photos of items not owned"],
    },
    critical: SeverityProfile {
        description: "Coordinated fake listings used to defraud renters at scale.",
        baseline: PERMANENT,
        examples: &["Scam listing networks", "Fake accounts posting listings"],
    },
};

static REVIEW_MANIPULATION: CategorySpec = CategorySpec {
    category: ViolationCategory::ReviewManipulation,
    name: "Review Manipulation",
    description: "Manipulating ratings or reviews on the platform",
    low: SeverityProfile {
        description: "Pressuring other users about the reviews they leave.",
        baseline: days(3),
        examples: &["Asking for positive reviews in exchange for discounts", "Review-related pestering"],
    },
    medium: SeverityProfile {
        description: "Leaving dishonest reviews or retaliating through reviews.",
        baseline: days(7),
        examples: &["Retaliatory negative reviews", "Reviews for rentals that never happened"],
    },
    high: SeverityProfile {
        description: "Systematic manipulation of ratings for personal gain.",
        baseline: days(30),
        examples: &["Trading reviews", "Using secondary accounts to leave reviews"],
    },
    critical: SeverityProfile {
        description: "Large-scale or paid review fraud undermining platform trust.",
        baseline: PERMANENT,
        examples: &["Buying reviews", "Review farms", "Coordinated rating attacks"],
    },
};

static CATALOG: [&CategorySpec; 8] = [
    &ITEM_DAMAGE,
    &PAYMENT_FRAUD,
    &ITEM_MISREPRESENTATION,
    &RENTAL_ABUSE,
    &SAFETY_VIOLATIONS,
    &HARASSMENT_RENTAL,
    &FAKE_LISTINGS,
    &REVIEW_MANIPULATION,
];

pub fn category_spec(category: ViolationCategory) -> &'static CategorySpec {
    match category {
        ViolationCategory::ItemDamage => &ITEM_DAMAGE,
        ViolationCategory::PaymentFraud => &PAYMENT_FRAUD,
        ViolationCategory::ItemMisrepresentation => &ITEM_MISREPRESENTATION,
        ViolationCategory::RentalAbuse => &RENTAL_ABUSE,
        ViolationCategory::SafetyViolations => &SAFETY_VIOLATIONS,
        ViolationCategory::HarassmentRental => &HARASSMENT_RENTAL,
        ViolationCategory::FakeListings => &FAKE_LISTINGS,
        ViolationCategory::ReviewManipulation => &REVIEW_MANIPULATION,
    }
}

pub fn severity_profile(category: ViolationCategory, severity: Severity) -> &'static SeverityProfile {
    category_spec(category).profile(severity)
}

/// Look up a tier by its raw keys. Unknown keys are an error, never a default.
pub fn lookup(category_key: &str, severity_key: &str) -> Result<&'static SeverityProfile> {
    let category: ViolationCategory = category_key.parse()?;
    let severity: Severity = severity_key.parse()?;
    Ok(severity_profile(category, severity))
}

/// All categories in display order, for selection lists
pub fn categories() -> impl Iterator<Item = &'static CategorySpec> {
    CATALOG.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolicyError;

    #[test]
    fn test_catalog_covers_every_category_once() {
        let listed: Vec<ViolationCategory> = categories().map(|spec| spec.category).collect();
        assert_eq!(listed, ViolationCategory::ALL.to_vec());

        for category in ViolationCategory::ALL {
            assert_eq!(category_spec(category).category, category);
        }
    }

    #[test]
    fn test_finite_baselines_are_positive() {
        for spec in categories() {
            for severity in Severity::ALL {
                if let Some(days) = spec.profile(severity).baseline.days() {
                    assert!(days >= 1, "{} {} has a zero baseline", spec.category, severity);
                }
            }
        }
    }

    #[test]
    fn test_critical_is_permanent_in_reference_catalog() {
        for spec in categories() {
            assert!(spec.critical.baseline.is_permanent(), "{}", spec.category);
            assert!(!spec.low.baseline.is_permanent(), "{}", spec.category);
        }
    }

    #[test]
    fn test_baselines_grow_with_severity() {
        for spec in categories() {
            let low = spec.low.baseline.days().unwrap();
            let medium = spec.medium.baseline.days().unwrap();
            let high = spec.high.baseline.days().unwrap();
            assert!(low <= medium && medium <= high, "{}", spec.category);
        }
    }

    #[test]
    fn test_reference_baselines() {
        assert_eq!(
            severity_profile(ViolationCategory::ItemDamage, Severity::Low).baseline,
            SuspensionDuration::Days(3)
        );
        assert_eq!(
            severity_profile(ViolationCategory::RentalAbuse, Severity::Medium).baseline,
            SuspensionDuration::Days(14)
        );
        assert_eq!(
            severity_profile(ViolationCategory::PaymentFraud, Severity::Critical).baseline,
            SuspensionDuration::Permanent
        );
    }

    #[test]
    fn test_lookup_by_key() {
        let profile = lookup("item_damage", "low").unwrap();
        assert_eq!(profile.baseline, SuspensionDuration::Days(3));
        assert!(!profile.examples.is_empty());

        assert!(matches!(
            lookup("not_a_real_category", "low"),
            Err(PolicyError::UnknownCategory(_))
        ));
        assert!(matches!(
            lookup("item_damage", "extreme"),
            Err(PolicyError::UnknownSeverity(_))
        ));
    }
}
