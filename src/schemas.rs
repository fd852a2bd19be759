//! Request and response shapes for the idea-brief HTTP surface.
//!
//! Model output is never passed through as an arbitrary mapping: everything
//! the completion API returns is decoded into one of the typed records here,
//! and a shape mismatch is a parse failure, not a silently forwarded blob.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-text description of a business idea, as submitted by the caller.
///
/// Fields are taken as-is; there is no content validation beyond the JSON
/// body having the right shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub domain: String,
    pub problem: String,
    pub website: String,
    pub mvp: String,
}

/// The four-key summary extracted from a free-text idea description.
///
/// Each value is either an extracted answer or the literal sentinel
/// `"not enough information"`; the key set is fixed by the facts prompt and
/// anything else the model emits is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructuredFacts {
    pub industry: String,
    pub product: String,
    pub website: String,
    pub minimum_viable_product: String,
}

impl StructuredFacts {
    /// Re-shape the facts into a context mapping for brief generation.
    pub fn as_context(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("industry".into(), Value::String(self.industry.clone()));
        map.insert("product".into(), Value::String(self.product.clone()));
        map.insert("website".into(), Value::String(self.website.clone()));
        map.insert(
            "minimum_viable_product".into(),
            Value::String(self.minimum_viable_product.clone()),
        );
        map
    }
}

/// Local-recovery payload returned when the model's facts answer could not
/// be decoded. Returned with success status; this is data, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
}

/// Outcome of the facts-extraction call: either the four-key summary or the
/// error payload, serialized exactly as the respective inner value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Facts(StructuredFacts),
    Failed(AnalysisFailure),
}

/// Caller-supplied context for brief generation. The mapping is treated
/// opaquely and serialized verbatim into the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefRequest {
    pub context: Map<String, Value>,
}

/// The generated product brief, keyed by the literal section headings of the
/// brief template. All eight sections must be present; section bodies are
/// free-form (the model may answer with a string or a list of bullets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBrief {
    #[serde(rename = "1-Pager", default, skip_serializing_if = "Option::is_none")]
    pub one_pager: Option<Value>,
    #[serde(rename = "Problem Statement")]
    pub problem_statement: Value,
    #[serde(rename = "Target Audience")]
    pub target_audience: Value,
    #[serde(rename = "Why It Matters")]
    pub why_it_matters: Value,
    #[serde(rename = "Proposed Solution")]
    pub proposed_solution: Value,
    #[serde(rename = "Success Criteria")]
    pub success_criteria: Value,
    #[serde(rename = "Risks and Considerations")]
    pub risks_and_considerations: Value,
    #[serde(rename = "Next Steps")]
    pub next_steps: Value,
    #[serde(rename = "Additional Notes")]
    pub additional_notes: Value,
}

/// Both halves of the combined flow, nested under fixed keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteAnalysis {
    pub analysis: StructuredFacts,
    pub product_brief: ProductBrief,
}

/// Outcome of the combined flow. When facts extraction fails, the error
/// payload is returned as-is and brief generation never runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CombinedOutcome {
    Completed(Box<CompleteAnalysis>),
    Failed(AnalysisFailure),
}
