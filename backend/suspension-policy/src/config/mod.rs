use crate::error::{PolicyError, Result};
use serde::Deserialize;
use validator::Validate;

pub const ENV_PREFIX: &str = "SUSPENSION_POLICY_";

/// Escalation thresholds for the suspension policy.
///
/// The defaults are the reference marketplace policy. Every field can be
/// overridden through `SUSPENSION_POLICY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct PolicyConfig {
    /// Upper bound for any finite suspension
    #[serde(default = "default_max_suspension_days")]
    #[validate(range(min = 1, max = 3650))]
    pub max_suspension_days: u32,

    /// Resolved reports in the same category that make a suspension permanent
    #[serde(default = "default_category_permanent_threshold")]
    #[validate(range(min = 1))]
    pub category_permanent_threshold: u32,

    /// Resolved reports in any category that make a suspension permanent
    #[serde(default = "default_global_permanent_threshold")]
    #[validate(range(min = 1))]
    pub global_permanent_threshold: u32,

    /// Resolved reports in any category that trigger the cross-category factor
    #[serde(default = "default_global_escalation_threshold")]
    #[validate(range(min = 1))]
    pub global_escalation_threshold: u32,

    #[serde(default = "default_global_escalation_factor")]
    #[validate(range(min = 1.0, max = 10.0))]
    pub global_escalation_factor: f64,
}

fn default_max_suspension_days() -> u32 {
    365
}

fn default_category_permanent_threshold() -> u32 {
    3
}

fn default_global_permanent_threshold() -> u32 {
    5
}

fn default_global_escalation_threshold() -> u32 {
    3
}

fn default_global_escalation_factor() -> f64 {
    1.5
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_suspension_days: default_max_suspension_days(),
            category_permanent_threshold: default_category_permanent_threshold(),
            global_permanent_threshold: default_global_permanent_threshold(),
            global_escalation_threshold: default_global_escalation_threshold(),
            global_escalation_factor: default_global_escalation_factor(),
        }
    }
}

impl PolicyConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config: PolicyConfig = envy::prefixed(ENV_PREFIX).from_env()?;
        config.check()?;
        Ok(config)
    }

    /// Field ranges plus the cross-field ordering of the escalation thresholds.
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        if self.global_escalation_threshold >= self.global_permanent_threshold {
            return Err(PolicyError::Config(format!(
                "global_escalation_threshold ({}) must be below global_permanent_threshold ({})",
                self.global_escalation_threshold, self.global_permanent_threshold
            )));
        }

        Ok(())
    }
}
