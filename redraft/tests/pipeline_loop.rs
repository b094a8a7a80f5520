//! End-to-end pipeline runs over a scripted mock client.
//!
//! Covered scenarios: one revision loop driven by a failing critique score;
//! the iteration cap overriding a failing score; a passing first critique
//! skipping the loop; the single-shot responder passthrough.


use std::sync::Arc;

use redraft::{responder, run_pipeline, MockLlm};

const PLAN_JSON: &str = r#"{
    "steps": ["compare options", "weigh tradeoffs", "recommend"],
    "key_risks": ["pricing changes"],
    "desired_output_structure": ["Summary", "Tradeoffs", "Recommendation"]
}"#;

fn critique_json(score: u8) -> String {
    format!(
        r#"{{"issues":["too vague"],"missing_points":["pricing"],"hallucination_risk":[],"score":{},"fix_instructions":["quantify costs"]}}"#,
        score
    )
}

/// **Scenario**: A failing first critique triggers exactly one revision, the
/// second critique passes, and the finalizer's reply is the terminal draft.
#[tokio::test]
async fn pipeline_revises_once_then_finalizes() {
    let llm = Arc::new(MockLlm::scripted([
        PLAN_JSON.to_string(),
        "- cost is low\n- latency varies".to_string(),
        "first draft".to_string(),
        critique_json(60),
        "second draft".to_string(),
        critique_json(90),
        "final answer".to_string(),
    ]));

    let state = run_pipeline(llm.clone(), "Should a startup buy or build auth?", 2)
        .await
        .unwrap();

    assert_eq!(state.final_draft(), Some("final answer"));
    assert_eq!(state.iteration, 2);
    assert_eq!(state.critique.unwrap().score, 90);
    assert_eq!(
        state.research_notes,
        vec!["cost is low".to_string(), "latency varies".to_string()]
    );
    // planner, researcher, writer, critic, writer, critic, finalizer
    assert_eq!(llm.calls(), 7);
    assert_eq!(llm.remaining(), 0);
}

/// **Scenario**: With a cap of 1, a failing score cannot trigger a second
/// loop; the run finalizes after one critic pass.
#[tokio::test]
async fn pipeline_cap_overrides_failing_score() {
    let llm = Arc::new(MockLlm::scripted([
        PLAN_JSON.to_string(),
        "- note".to_string(),
        "only draft".to_string(),
        critique_json(10),
        "final despite low score".to_string(),
    ]));

    let state = run_pipeline(llm.clone(), "question", 1).await.unwrap();

    assert_eq!(state.final_draft(), Some("final despite low score"));
    assert_eq!(state.iteration, 1);
    assert_eq!(llm.calls(), 5);
}

/// **Scenario**: A passing first critique skips the revise loop entirely.
#[tokio::test]
async fn pipeline_passing_score_skips_loop() {
    let llm = Arc::new(MockLlm::scripted([
        PLAN_JSON.to_string(),
        "- note".to_string(),
        "good draft".to_string(),
        critique_json(85),
        "final answer".to_string(),
    ]));

    let state = run_pipeline(llm.clone(), "question", 3).await.unwrap();

    assert_eq!(state.final_draft(), Some("final answer"));
    assert_eq!(state.iteration, 1);
    assert_eq!(llm.calls(), 5);
    assert_eq!(llm.remaining(), 0);
}

/// **Scenario**: A critique whose score fits the integer type but exceeds
/// 100 aborts the run with a schema violation instead of routing on it.
#[tokio::test]
async fn pipeline_rejects_out_of_range_critique_score() {
    let llm = Arc::new(MockLlm::scripted([
        PLAN_JSON.to_string(),
        "- note".to_string(),
        "draft".to_string(),
        critique_json(150),
    ]));

    let err = run_pipeline(llm, "question", 2).await.unwrap_err();
    assert!(
        matches!(
            err,
            redraft::PipelineError::Execution(redraft::AgentError::SchemaViolation { ref schema, .. })
                if schema == "Critique"
        ),
        "expected SchemaViolation for Critique, got {:?}",
        err
    );
}

/// **Scenario**: The responder returns the model reply verbatim in one call.
#[tokio::test]
async fn responder_single_call_passthrough() {
    let llm = MockLlm::fixed("a direct answer");
    let reply = responder::answer(&llm, "why rust?").await.unwrap();
    assert_eq!(reply, "a direct answer");
    assert_eq!(llm.calls(), 1);
}
