use crate::config::PolicyConfig;
use crate::error::Result;
use crate::models::{
    CategorySpec, EvaluationRequest, Severity, SuspensionDecision, ViolationCategory,
    ViolationHistory, ViolationReport,
};
use crate::services::escalation::EscalationCalculator;
use crate::services::{narrative, taxonomy};

/// Entry point used by the admin console: one call yields both the duration
/// and the narrative, computed from the same history summary.
#[derive(Debug, Clone, Default)]
pub struct SuspensionPolicyEngine {
    calculator: EscalationCalculator,
}

impl SuspensionPolicyEngine {
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            calculator: EscalationCalculator::new(config),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(PolicyConfig::from_env()?))
    }

    pub fn config(&self) -> &PolicyConfig {
        self.calculator.config()
    }

    /// Evaluate a suspension. Strict on keys since the numeric decision
    /// depends on them.
    pub fn evaluate(
        &self,
        category: &str,
        severity: &str,
        reports: &[ViolationReport],
        prior_report_count: u32,
    ) -> Result<SuspensionDecision> {
        let category: ViolationCategory = category.parse()?;
        let severity: Severity = severity.parse()?;

        let history = ViolationHistory::summarize(category, reports);
        let duration = self.calculator.apply(category, severity, history);
        let narrative = narrative::render(category, severity, prior_report_count, duration);

        tracing::info!(
            %category,
            %severity,
            %duration,
            category_violations = history.category_violations,
            total_violations = history.total_violations,
            prior_report_count,
            "Suspension decision computed"
        );

        Ok(SuspensionDecision {
            category,
            severity,
            duration,
            narrative,
            history,
        })
    }

    pub fn evaluate_request(&self, request: &EvaluationRequest) -> Result<SuspensionDecision> {
        self.evaluate(
            &request.category,
            &request.severity,
            &request.reports,
            request.effective_prior_report_count(),
        )
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static CategorySpec> {
        taxonomy::categories()
    }
}
