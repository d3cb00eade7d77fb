pub mod escalation;
pub mod narrative;
pub mod policy_engine;
pub mod taxonomy;

pub use escalation::{compute_suspension_duration, EscalationCalculator};
pub use narrative::{generate_suspension_narrative, NarrativeGenerator};
pub use policy_engine::SuspensionPolicyEngine;
