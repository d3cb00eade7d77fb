use crate::models::{Severity, SuspensionDuration, ViolationCategory, ViolationReport};
use crate::services::escalation::EscalationCalculator;
use crate::services::taxonomy;

const PERMANENT_SENTENCE: &str =
    " Due to the severity of this violation, account access has been permanently revoked.";

const APPEAL_SENTENCE: &str =
    " If you believe this decision was made in error, you may submit an appeal through the support center.";

/// Builds the justification text shown to the admin and stored with the suspension
#[derive(Debug, Clone, Default)]
pub struct NarrativeGenerator {
    calculator: EscalationCalculator,
}

impl NarrativeGenerator {
    pub fn new(calculator: EscalationCalculator) -> Self {
        Self { calculator }
    }

    /// Narrative for raw category/severity keys.
    ///
    /// Display text must never block an admin action, so unknown keys fall back
    /// to a generic sentence instead of failing.
    pub fn generate(
        &self,
        category: &str,
        severity: &str,
        reports: &[ViolationReport],
        prior_report_count: u32,
    ) -> String {
        let (parsed_category, parsed_severity) =
            match (category.parse::<ViolationCategory>(), severity.parse::<Severity>()) {
                (Ok(c), Ok(s)) => (c, s),
                (Err(e), _) | (_, Err(e)) => {
                    tracing::warn!(category, severity, error = %e, "Falling back to generic narrative");
                    return fallback(category);
                }
            };

        let duration = self
            .calculator
            .calculate(parsed_category, parsed_severity, reports);
        render(parsed_category, parsed_severity, prior_report_count, duration)
    }
}

/// Compose the narrative for an already computed duration
pub fn render(
    category: ViolationCategory,
    severity: Severity,
    prior_report_count: u32,
    duration: SuspensionDuration,
) -> String {
    let mut narrative = taxonomy::severity_profile(category, severity)
        .description
        .to_string();

    if prior_report_count > 0 {
        narrative.push_str(&format!(
            " This is a repeat violation ({} total reports).",
            u64::from(prior_report_count) + 1
        ));
    }

    match duration {
        SuspensionDuration::Permanent => narrative.push_str(PERMANENT_SENTENCE),
        SuspensionDuration::Days(_) => narrative.push_str(&format!(
            " Account suspended for {} to ensure platform safety and integrity.",
            duration
        )),
    }

    narrative.push_str(APPEAL_SENTENCE);
    narrative
}

fn fallback(category: &str) -> String {
    format!(
        "Account suspended due to {} violation. Please contact support for more information.",
        category.replace('_', " ").to_lowercase()
    )
}

/// Reference-policy narrative keyed by raw category and severity strings
pub fn generate_suspension_narrative(
    category: &str,
    severity: &str,
    reports: &[ViolationReport],
    prior_report_count: u32,
) -> String {
    NarrativeGenerator::default().generate(category, severity, reports, prior_report_count)
}
