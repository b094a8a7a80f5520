//! System prompts and user-message rendering for the pipeline stages.
//!
//! Each stage owns one system prompt here. The render helpers build the
//! user message from state, always in the same field order, writing `null`
//! for values that are not set yet so the model sees an explicit absence
//! rather than a missing section.

use crate::pipeline::{Critique, Plan};

pub const PLANNER_SYSTEM: &str = "\
You are the Planner agent.
Create a concise plan with steps, key risks, and final output headings.
Return valid JSON matching the schema.
";

pub const RESEARCHER_SYSTEM: &str = "\
You are the Researcher agent.
You do NOT browse the web. You reason from general knowledge.
Produce bullet research notes covering: cost, speed, privacy, reliability, compliance, vendor lock-in, iteration speed, support.
Keep it practical for startups.
";

pub const WRITER_SYSTEM: &str = "\
You are the Writer agent.
Write a structured answer using the plan headings.
Use the research notes.
Be specific, actionable, and include a clear recommendation plus risks.
";

pub const CRITIC_SYSTEM: &str = "\
You are the Critic agent.
Review the draft for:
- missing points
- weak reasoning
- overconfidence
- risky claims
Return JSON matching the schema.
";

pub const FINALIZER_SYSTEM: &str = "\
You are the Finalizer agent.
Given the plan + research notes + (optional) critique, produce the FINAL answer.
If critique exists, incorporate fixes.
Output must be polished and concise with headings and a confidence score.
";

/// Renders a plan as JSON for embedding in a user message, `null` if unset.
pub(crate) fn render_plan(plan: Option<&Plan>) -> String {
    match plan {
        Some(plan) => serde_json::to_string_pretty(plan).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    }
}

/// Renders research notes as one bullet per line, `null` if empty.
pub(crate) fn render_notes(notes: &[String]) -> String {
    if notes.is_empty() {
        return "null".to_string();
    }
    notes
        .iter()
        .map(|n| format!("- {}", n))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a critique as JSON, `null` if unset.
pub(crate) fn render_critique(critique: Option<&Critique>) -> String {
    match critique {
        Some(c) => serde_json::to_string_pretty(c).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    }
}
