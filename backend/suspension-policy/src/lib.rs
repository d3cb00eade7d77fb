//! Violation-based suspension policy for the rental marketplace admin console.
//!
//! Converts a violation category, a severity tier and the subject's report
//! history into a suspension duration plus a human-readable justification.
//! Pure computation: fetching reports and persisting the resulting account
//! update is the caller's job.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::PolicyConfig;
pub use error::{PolicyError, Result};
pub use models::{
    AccountStatus, AccountStatusUpdate, EvaluationRequest, ReportStatus, Severity,
    SuspensionDecision, SuspensionDuration, ViolationCategory, ViolationHistory, ViolationReport,
};
pub use services::{
    compute_suspension_duration, generate_suspension_narrative, EscalationCalculator,
    NarrativeGenerator, SuspensionPolicyEngine,
};
