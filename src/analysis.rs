//! Orchestration of the two completion calls.
//!
//! These functions are transport-independent: they take the gateway as a
//! trait object and return typed outcomes, and the HTTP layer only wraps
//! them in JSON. The error-handling asymmetry is deliberate and mirrors the
//! service contract: a facts answer that fails to decode becomes an
//! `{"error": ...}` payload returned with success status, while a brief that
//! fails to decode (and any gateway failure) propagates as a hard error.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::clients::CompletionModel;
use crate::config::Config;
use crate::error::Result;
use crate::prompts;
use crate::schemas::{
    AnalysisFailure, AnalysisOutcome, AnalysisRequest, CombinedOutcome, CompleteAnalysis,
    ProductBrief, StructuredFacts,
};

/// Decode a JSON value out of raw model text, tolerating Markdown fences.
pub fn decode_model_json<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    serde_json::from_str(trimmed)
}

/// Extract the four structured facts from a free-text idea description.
///
/// Gateway failures propagate; an undecodable model answer is recovered
/// locally into `AnalysisOutcome::Failed`.
pub async fn analyze(
    gateway: &dyn CompletionModel,
    cfg: &Config,
    request: &AnalysisRequest,
) -> Result<AnalysisOutcome> {
    let prompt = prompts::facts_prompt(request);
    let raw = gateway.complete(&prompt, cfg.facts_max_tokens).await?;

    match decode_model_json::<StructuredFacts>(&raw) {
        Ok(facts) => Ok(AnalysisOutcome::Facts(facts)),
        Err(err) => {
            warn!("facts answer was not decodable: {err}");
            Ok(AnalysisOutcome::Failed(AnalysisFailure {
                error: "Invalid JSON response from the API.".to_string(),
            }))
        }
    }
}

/// Generate a product brief from a caller-supplied context mapping.
///
/// Unlike `analyze`, a malformed model answer here is a hard failure.
pub async fn generate_brief(
    gateway: &dyn CompletionModel,
    cfg: &Config,
    context: &Map<String, Value>,
) -> Result<ProductBrief> {
    let context_json = serde_json::to_string_pretty(context)?;
    let prompt = prompts::brief_prompt(&context_json);
    let raw = gateway.complete(&prompt, cfg.brief_max_tokens).await?;

    Ok(decode_model_json(&raw)?)
}

/// Run facts extraction and brief generation as one flow.
///
/// A failed facts extraction short-circuits: its error payload is returned
/// as-is and no brief call is made.
pub async fn complete_analysis(
    gateway: &dyn CompletionModel,
    cfg: &Config,
    request: &AnalysisRequest,
) -> Result<CombinedOutcome> {
    let facts = match analyze(gateway, cfg, request).await? {
        AnalysisOutcome::Failed(failure) => return Ok(CombinedOutcome::Failed(failure)),
        AnalysisOutcome::Facts(facts) => facts,
    };

    let product_brief = generate_brief(gateway, cfg, &facts.as_context()).await?;

    Ok(CombinedOutcome::Completed(Box::new(CompleteAnalysis {
        analysis: facts,
        product_brief,
    })))
}
