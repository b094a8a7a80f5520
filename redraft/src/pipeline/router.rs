//! Revise-or-finalize routing after the critic.

use crate::state::PipelineState;

/// Drafts scoring below this are revised, cap permitting.
pub const REVISE_SCORE_THRESHOLD: u8 = 80;

/// Routing outcome after a critic pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Loop back to the writer for another pass.
    Revise,
    /// Proceed to the finalizer.
    Finalize,
}

impl Decision {
    /// Stable key used in the graph's conditional path map.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Revise => "revise",
            Decision::Finalize => "finalize",
        }
    }
}

/// Decides whether to revise or finalize, in priority order: the iteration
/// cap wins over everything, then the score threshold. A missing critique
/// counts as a perfect score, so it never triggers a revision on its own.
pub fn route_after_critic(state: &PipelineState) -> Decision {
    let score = state.critique.as_ref().map_or(100, |c| c.score);

    if state.iteration >= state.max_iterations {
        return Decision::Finalize;
    }
    if score < REVISE_SCORE_THRESHOLD {
        return Decision::Revise;
    }
    Decision::Finalize
}
