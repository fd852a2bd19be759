//! Prompt templates for the two completion calls.
//!
//! These templates are data, not logic. The facts prompt fixes the four JSON
//! keys and the sentinel string that downstream decoding depends on; the
//! brief prompt fixes the question list and section headings that shape the
//! model's document. Changing any of that literal text changes the service's
//! output contract.

use crate::schemas::AnalysisRequest;

/// Sentinel the model is instructed to emit when the input does not contain
/// enough information to answer a question.
pub const NOT_ENOUGH_INFORMATION: &str = "not enough information";

/// Build the facts-extraction prompt from a caller-supplied idea description.
///
/// Pure template interpolation: identical input yields identical text.
pub fn facts_prompt(input: &AnalysisRequest) -> String {
    format!(
        r#"I'm trying to create an app related to {domain}. The problem it solves is: {problem}. The website of the business is {website}.
The minimum viable product is {mvp}

Provide a structured response in JSON format with the following keys:
"industry": What is the industry of the desired project?
"product": What is the product?
"website": What is the website of the business?
"minimum_viable_product": What is the minimum viable product?

If there isn't enough information to answer these questions, write "{sentinel}".
"#,
        domain = input.domain,
        problem = input.problem,
        website = input.website,
        mvp = input.mvp,
        sentinel = NOT_ENOUGH_INFORMATION,
    )
}

/// Build the product-brief prompt around an already-serialized context
/// mapping.
///
/// The fourteen analysis questions and the eight section headings below are
/// load-bearing: the model is told to mirror them, and the brief decoder
/// expects the headings as keys.
pub fn brief_prompt(context_json: &str) -> String {
    format!(
        r#"You are an experienced product manager creating a product brief. Use the following context and additional context to generate the brief.

Context:
{context_json}

STEP 1: Question Analysis and Ordering
First analyze these questions from the product brief template:
- Who are we solving this problem for?
- What specific problem are we trying to solve?
- How does this problem impact our users or business?
- Why is this problem important to solve now?
- What evidence demonstrates this is a real and significant problem?
- How will we know if we've successfully solved this problem?
- How does solving this problem align with our broader goals or strategy?
- At a high level, what approach are we considering to solve this problem?
- What are the key components or features of this solution?
- What specific metrics or outcomes will indicate success?
- What are the biggest unknowns or challenges we anticipate?
- Are there any potential negative impacts we should be aware of?
- What are the immediate next steps to validate or refine this proposal?
- Who needs to be involved in the next phase of this project?

STEP 2: Answer the logically ordered questions using only the provided context:
- Think step-by-step through each answer
- Skip questions that cannot be reasonably answered with given context
- Do not make up or hallucinate information
- Be clear and concise
- Show your thinking process for each answer

STEP 3: Create a final product brief using EXACTLY this template structure:

1-Pager: [Project Name]

Problem Statement
* What specific problem are we trying to solve?
* How does this problem impact our users or business?

Target Audience
* Who are we solving this problem for?
* (If applicable: what key characteristics define this audience/how are they distinct?)

Why It Matters
* Why is this problem important to solve now?
* What evidence do we have that this is a real and significant problem?
* How does solving this problem align with our broader goals or strategy?

Proposed Solution
* At a high level, what approach are we considering to solve this problem?
* What are the key components or features of this solution?

Success Criteria
* How will we know if we've successfully solved this problem?
* (If applicable: What metrics or outcomes will indicate success?)

Risks and Considerations
* What are the biggest unknowns or challenges we anticipate?
* Are there any potential negative impacts we should be aware of?

Next Steps
* What are the immediate next steps to validate or refine this proposal?
* Who needs to be involved in the next phase of this project?

Additional Notes
* Any other clear decisions made or important information relevant to the engineering, design, and/or marketing teams.
"#
    )
}
