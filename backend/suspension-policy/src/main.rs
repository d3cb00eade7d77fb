use anyhow::Context;
use chrono::Utc;
use suspension_policy::{EvaluationRequest, SuspensionPolicyEngine};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: suspension-policy <request.json>")?;

    let engine = SuspensionPolicyEngine::from_env().context("invalid policy configuration")?;
    tracing::info!(
        max_suspension_days = engine.config().max_suspension_days,
        category_permanent_threshold = engine.config().category_permanent_threshold,
        global_permanent_threshold = engine.config().global_permanent_threshold,
        "Policy configuration loaded"
    );

    let request = EvaluationRequest::from_json_file(&path)
        .with_context(|| format!("failed to load request from {}", path))?;

    let decision = match engine.evaluate_request(&request) {
        Ok(decision) => decision,
        Err(e) => {
            tracing::error!(code = e.code(), "Evaluation rejected: {}", e);
            return Err(e.into());
        }
    };
    let update = decision.account_update(Utc::now());

    let output = serde_json::json!({
        "decision": decision,
        "accountUpdate": update,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
