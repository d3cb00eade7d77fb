use crate::config::PolicyConfig;
use crate::error::Result;
use crate::models::{Severity, SuspensionDuration, ViolationCategory, ViolationHistory, ViolationReport};
use crate::services::taxonomy;

/// Turns a baseline suspension into an effective one using the subject's
/// resolved-violation history
#[derive(Debug, Clone, Default)]
pub struct EscalationCalculator {
    config: PolicyConfig,
}

impl EscalationCalculator {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Effective suspension for `category`/`severity` given the report history
    pub fn calculate(
        &self,
        category: ViolationCategory,
        severity: Severity,
        reports: &[ViolationReport],
    ) -> SuspensionDuration {
        let history = ViolationHistory::summarize(category, reports);
        self.apply(category, severity, history)
    }

    /// Same as [`calculate`](Self::calculate) for an already summarized history
    pub fn apply(
        &self,
        category: ViolationCategory,
        severity: Severity,
        history: ViolationHistory,
    ) -> SuspensionDuration {
        let baseline = match taxonomy::severity_profile(category, severity).baseline {
            SuspensionDuration::Days(days) => days,
            SuspensionDuration::Permanent => {
                tracing::debug!(%category, %severity, "Permanent baseline, no escalation applied");
                return SuspensionDuration::Permanent;
            }
        };

        // Rule 1: repeat offenses in the same category
        if history.category_violations >= self.config.category_permanent_threshold {
            tracing::debug!(
                %category,
                category_violations = history.category_violations,
                "Escalation: category cutoff reached (permanent)"
            );
            return SuspensionDuration::Permanent;
        }
        let mut multiplier = 1.0 + f64::from(history.category_violations);

        // Rule 2: offenses across all categories
        if history.total_violations >= self.config.global_permanent_threshold {
            tracing::debug!(
                total_violations = history.total_violations,
                "Escalation: global cutoff reached (permanent)"
            );
            return SuspensionDuration::Permanent;
        }
        if history.total_violations >= self.config.global_escalation_threshold {
            multiplier *= self.config.global_escalation_factor;
            tracing::debug!(
                total_violations = history.total_violations,
                factor = self.config.global_escalation_factor,
                "Escalation: cross-category factor applied"
            );
        }

        let raw = (f64::from(baseline) * multiplier).floor();
        let days = raw.min(f64::from(self.config.max_suspension_days)) as u32;

        tracing::debug!(
            %category,
            %severity,
            baseline,
            multiplier,
            days,
            "Suspension duration calculated"
        );

        SuspensionDuration::Days(days)
    }
}

/// Reference-policy calculation keyed by raw category and severity strings.
///
/// Unknown keys fail with `UnknownCategory`/`UnknownSeverity`.
pub fn compute_suspension_duration(
    category: &str,
    severity: &str,
    reports: &[ViolationReport],
) -> Result<SuspensionDuration> {
    let category: ViolationCategory = category.parse()?;
    let severity: Severity = severity.parse()?;
    Ok(EscalationCalculator::default().calculate(category, severity, reports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolicyError;
    use crate::models::ReportStatus;

    fn resolved(category: &str, count: usize) -> Vec<ViolationReport> {
        (0..count)
            .map(|i| ViolationReport::new(format!("{}-{}", category, i), category, ReportStatus::Resolved))
            .collect()
    }

    #[test]
    fn test_first_offense_uses_baseline() {
        let calculator = EscalationCalculator::default();
        let duration = calculator.calculate(ViolationCategory::ItemDamage, Severity::Low, &[]);
        assert_eq!(duration, SuspensionDuration::Days(3));
    }

    #[test]
    fn test_category_repeat_multipliers() {
        let calculator = EscalationCalculator::default();

        let once = calculator.calculate(ViolationCategory::ItemDamage, Severity::Low, &resolved("item_damage", 1));
        let twice = calculator.calculate(ViolationCategory::ItemDamage, Severity::Low, &resolved("item_damage", 2));
        let thrice = calculator.calculate(ViolationCategory::ItemDamage, Severity::Low, &resolved("item_damage", 3));

        assert_eq!(once, SuspensionDuration::Days(6));
        assert_eq!(twice, SuspensionDuration::Days(9));
        assert_eq!(thrice, SuspensionDuration::Permanent);
    }

    #[test]
    fn test_cross_category_factor() {
        let calculator = EscalationCalculator::default();
        let mut reports = resolved("item_damage", 2);
        reports.extend(resolved("fake_listings", 2));

        let duration = calculator.calculate(ViolationCategory::RentalAbuse, Severity::Medium, &reports);
        assert_eq!(duration, SuspensionDuration::Days(21));
    }

    #[test]
    fn test_factors_multiply() {
        // 60 * 3 * 1.5
        let calculator = EscalationCalculator::default();
        let mut reports = resolved("harassment_rental", 2);
        reports.extend(resolved("item_damage", 2));

        let duration = calculator.calculate(ViolationCategory::HarassmentRental, Severity::High, &reports);
        assert_eq!(duration, SuspensionDuration::Days(270));
    }

    #[test]
    fn test_floor_applied() {
        // 7 * 1.5 = 10.5
        let calculator = EscalationCalculator::default();
        let reports = resolved("review_manipulation", 3);

        let duration = calculator.calculate(ViolationCategory::RentalAbuse, Severity::Low, &reports);
        assert_eq!(duration, SuspensionDuration::Days(10));
    }

    #[test]
    fn test_capped_at_max() {
        // 90 * 3 * 1.5 = 405
        let calculator = EscalationCalculator::default();
        let mut reports = resolved("payment_fraud", 2);
        reports.extend(resolved("item_damage", 1));

        let duration = calculator.calculate(ViolationCategory::PaymentFraud, Severity::High, &reports);
        assert_eq!(duration, SuspensionDuration::Days(365));
    }

    #[test]
    fn test_global_cutoff() {
        let calculator = EscalationCalculator::default();
        let reports = resolved("fake_listings", 5);

        let duration = calculator.calculate(ViolationCategory::ItemDamage, Severity::Low, &reports);
        assert_eq!(duration, SuspensionDuration::Permanent);
    }

    #[test]
    fn test_custom_config() {
        let calculator = EscalationCalculator::new(PolicyConfig {
            max_suspension_days: 10,
            ..Default::default()
        });

        let duration = calculator.calculate(ViolationCategory::SafetyViolations, Severity::High, &[]);
        assert_eq!(duration, SuspensionDuration::Days(10));
    }

    #[test]
    fn test_apply_with_summarized_history() {
        let calculator = EscalationCalculator::default();
        let history = ViolationHistory {
            category_violations: 1,
            total_violations: 3,
        };

        // 7 * 2 * 1.5
        let duration = calculator.apply(ViolationCategory::ItemDamage, Severity::Medium, history);
        assert_eq!(duration, SuspensionDuration::Days(21));
    }

    #[test]
    fn test_string_boundary() {
        assert_eq!(
            compute_suspension_duration("item_damage", "low", &[]).unwrap(),
            SuspensionDuration::Days(3)
        );
        assert!(matches!(
            compute_suspension_duration("not_a_real_category", "low", &[]),
            Err(PolicyError::UnknownCategory(_))
        ));
        assert!(matches!(
            compute_suspension_duration("item_damage", "urgent", &[]),
            Err(PolicyError::UnknownSeverity(_))
        ));
    }
}
