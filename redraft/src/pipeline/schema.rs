//! Structured-output contracts: the Plan and Critique schemas.
//!
//! These are the only two schema-enforced replies in the pipeline. Both
//! sides of the contract live here: the JSON-schema document sent with the
//! request ([`Plan::response_schema`], [`Critique::response_schema`]) and
//! the strict decoder applied to the reply ([`decode`]). A reply missing a
//! required field, carrying an unknown field, or holding an out-of-range
//! score is rejected with `SchemaViolation`; fields are never silently
//! defaulted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AgentError;
use crate::llm::ResponseSchema;

/// Planner output: ordered steps, risks, and the headings the final answer
/// should use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    /// Short ordered steps for solving the task.
    pub steps: Vec<String>,
    /// Major risks or unknowns that should be addressed.
    pub key_risks: Vec<String>,
    /// Headings to include in the final answer.
    pub desired_output_structure: Vec<String>,
}

impl Plan {
    /// The named JSON schema sent with the planner's structured request.
    pub fn response_schema() -> ResponseSchema {
        ResponseSchema {
            name: "Plan",
            schema: json!({
                "type": "object",
                "properties": {
                    "steps": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Short ordered steps for solving the task."
                    },
                    "key_risks": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Major risks/unknowns that should be addressed."
                    },
                    "desired_output_structure": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Headings to include in the final answer."
                    }
                },
                "required": ["steps", "key_risks", "desired_output_structure"],
                "additionalProperties": false
            }),
        }
    }
}

/// Critic output: concrete problems with the draft plus a 0–100 score and
/// the fixes a revision pass should apply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Critique {
    /// Concrete problems with the current draft.
    pub issues: Vec<String>,
    /// Important missing considerations.
    pub missing_points: Vec<String>,
    /// Claims that are risky without sources.
    pub hallucination_risk: Vec<String>,
    /// Overall quality score of the draft, 0–100.
    #[serde(deserialize_with = "score_in_range")]
    pub score: u8,
    /// Actionable steps to improve the draft.
    pub fix_instructions: Vec<String>,
}

impl Critique {
    /// The named JSON schema sent with the critic's structured request.
    pub fn response_schema() -> ResponseSchema {
        ResponseSchema {
            name: "Critique",
            schema: json!({
                "type": "object",
                "properties": {
                    "issues": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Concrete problems with the current draft."
                    },
                    "missing_points": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Important missing considerations."
                    },
                    "hallucination_risk": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Claims that might be risky without sources."
                    },
                    "score": {
                        "type": "integer",
                        "minimum": 0,
                        "maximum": 100,
                        "description": "Overall quality score of the draft."
                    },
                    "fix_instructions": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Actionable steps to improve the draft."
                    }
                },
                "required": [
                    "issues",
                    "missing_points",
                    "hallucination_risk",
                    "score",
                    "fix_instructions"
                ],
                "additionalProperties": false
            }),
        }
    }
}

/// The schema sent to the provider bounds the score, but replies on the
/// default (parse-the-text) structured path are only checked here.
fn score_in_range<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let score = u8::deserialize(deserializer)?;
    if score > 100 {
        return Err(serde::de::Error::custom(format!(
            "score {} is out of range 0..=100",
            score
        )));
    }
    Ok(score)
}

/// Decodes a structured reply into its typed shape, strictly.
///
/// Any serde failure (missing field, wrong type, unknown field, integer out
/// of the target range) becomes a `SchemaViolation` naming the schema.
pub(crate) fn decode<T: DeserializeOwned>(
    schema: &ResponseSchema,
    value: serde_json::Value,
) -> Result<T, AgentError> {
    serde_json::from_value(value)
        .map_err(|e| AgentError::schema_violation(schema.name, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// **Scenario**: A complete Plan reply decodes field for field.
    #[test]
    fn plan_decodes_complete_reply() {
        let value = json!({
            "steps": ["outline", "draft"],
            "key_risks": ["stale data"],
            "desired_output_structure": ["Summary", "Recommendation"]
        });
        let plan: Plan = decode(&Plan::response_schema(), value).unwrap();
        assert_eq!(plan.steps, vec!["outline", "draft"]);
        assert_eq!(plan.key_risks, vec!["stale data"]);
        assert_eq!(
            plan.desired_output_structure,
            vec!["Summary", "Recommendation"]
        );
    }

    /// **Scenario**: A Plan reply missing a required field is rejected, not defaulted.
    #[test]
    fn plan_rejects_missing_required_field() {
        let value = json!({
            "steps": ["outline"],
            "key_risks": []
        });
        let err = decode::<Plan>(&Plan::response_schema(), value).unwrap_err();
        match err {
            AgentError::SchemaViolation { schema, detail } => {
                assert_eq!(schema, "Plan");
                assert!(detail.contains("desired_output_structure"), "{}", detail);
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    /// **Scenario**: An unknown field in a Plan reply is a violation.
    #[test]
    fn plan_rejects_unknown_field() {
        let value = json!({
            "steps": [],
            "key_risks": [],
            "desired_output_structure": [],
            "confidence": 80
        });
        assert!(decode::<Plan>(&Plan::response_schema(), value).is_err());
    }

    /// **Scenario**: A complete Critique reply decodes, score included.
    #[test]
    fn critique_decodes_complete_reply() {
        let value = json!({
            "issues": ["vague"],
            "missing_points": ["pricing"],
            "hallucination_risk": [],
            "score": 72,
            "fix_instructions": ["add numbers"]
        });
        let critique: Critique = decode(&Critique::response_schema(), value).unwrap();
        assert_eq!(critique.score, 72);
        assert_eq!(critique.issues, vec!["vague"]);
    }

    /// **Scenario**: A score above 100 cannot be coerced into the contract,
    /// whether it overflows the integer type (400) or fits it (150).
    #[test]
    fn critique_rejects_out_of_range_score() {
        for score in [101u16, 150, 400] {
            let value = json!({
                "issues": [],
                "missing_points": [],
                "hallucination_risk": [],
                "score": score,
                "fix_instructions": []
            });
            let err = decode::<Critique>(&Critique::response_schema(), value).unwrap_err();
            assert!(
                matches!(err, AgentError::SchemaViolation { ref schema, .. } if schema == "Critique"),
                "score {} must be rejected",
                score
            );
        }
    }

    /// **Scenario**: The boundary value 100 is still a legal score.
    #[test]
    fn critique_accepts_boundary_score() {
        let value = json!({
            "issues": [],
            "missing_points": [],
            "hallucination_risk": [],
            "score": 100,
            "fix_instructions": []
        });
        let critique: Critique = decode(&Critique::response_schema(), value).unwrap();
        assert_eq!(critique.score, 100);
    }

    /// **Scenario**: A Critique reply without a score is rejected (no silent default).
    #[test]
    fn critique_rejects_missing_score() {
        let value = json!({
            "issues": [],
            "missing_points": [],
            "hallucination_risk": [],
            "fix_instructions": []
        });
        let err = decode::<Critique>(&Critique::response_schema(), value).unwrap_err();
        match err {
            AgentError::SchemaViolation { detail, .. } => {
                assert!(detail.contains("score"), "{}", detail)
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }
}
