//! Pipeline state: the single record threaded through every stage.

use crate::pipeline::{Critique, Plan};

/// State for one pipeline invocation, owned by the graph driver.
///
/// Created fresh per run via [`PipelineState::new`], mutated by exactly one
/// stage at a time, discarded once the terminal draft is read. Nothing is
/// persisted across runs.
///
/// The zero-valued `Default` (empty question, `max_iterations = 0`) is a
/// legal state: with a zero cap the router finalizes immediately after the
/// first critique, so a run over a defaulted record never loops.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PipelineState {
    /// The user's question; set once at initiation, never mutated.
    pub question: String,
    /// Structured plan; absent until the planner runs (exactly once).
    pub plan: Option<Plan>,
    /// Research notes; replaced wholesale by the researcher (runs once).
    pub research_notes: Vec<String>,
    /// Current draft; written by the writer each loop pass, overwritten a
    /// final time by the finalizer as the terminal value.
    pub draft: Option<String>,
    /// Latest critique; overwritten each time the critic runs.
    pub critique: Option<Critique>,
    /// Number of completed critic executions; incremented by exactly 1 per
    /// critic run, never decremented or reset within a run.
    pub iteration: u32,
    /// Revision cap; set once at initiation.
    pub max_iterations: u32,
}

impl PipelineState {
    /// Fresh state for one run.
    pub fn new(question: impl Into<String>, max_iterations: u32) -> Self {
        Self {
            question: question.into(),
            max_iterations,
            ..Self::default()
        }
    }

    /// The terminal draft, once a run has completed.
    pub fn final_draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: new() sets question and cap; everything else starts empty.
    #[test]
    fn new_state_is_empty_apart_from_inputs() {
        let state = PipelineState::new("why is the sky blue?", 2);
        assert_eq!(state.question, "why is the sky blue?");
        assert_eq!(state.max_iterations, 2);
        assert!(state.plan.is_none());
        assert!(state.research_notes.is_empty());
        assert!(state.draft.is_none());
        assert!(state.critique.is_none());
        assert_eq!(state.iteration, 0);
        assert!(state.final_draft().is_none());
    }

    /// **Scenario**: The defaulted record has a zero cap (immediate-finalize fallback).
    #[test]
    fn default_state_has_zero_cap() {
        let state = PipelineState::default();
        assert_eq!(state.iteration, 0);
        assert_eq!(state.max_iterations, 0);
    }
}
