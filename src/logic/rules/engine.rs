use super::{patio, retaining_wall, shed};
use crate::logic::{assemble, normalize};
use crate::models::{AssessmentResult, AttributeSet, Classification, Evaluation, Violation};
use serde_json::Value;
use tracing::debug;

const INVALID_INPUT_MESSAGE: &str =
    "Missing or invalid input data. See the assessment help page for the required attributes.";
const UNKNOWN_DEVELOPMENT_MESSAGE: &str =
    "The requested development type is not supported. Valid options are patio, shed and retain.";

/// Dispatches a normalized attribute set to the evaluator for its category
/// and assembles the final result. Stateless; a single instance serves any
/// number of concurrent assessments.
#[derive(Clone, Copy)]
pub struct AssessmentEngine;

impl AssessmentEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run a full assessment over a raw request payload: normalize, dispatch,
    /// evaluate, assemble. Never fails; malformed input resolves to an
    /// Invalid-classified result.
    pub fn assess(&self, payload: &Value) -> AssessmentResult {
        let evaluation = match normalize::attribute_set(payload) {
            Some(attributes) => {
                debug!(development = attributes.development_type().as_str(), "dispatching assessment");
                self.evaluate(&attributes)
            }
            None if payload.is_object() => invalid(UNKNOWN_DEVELOPMENT_MESSAGE),
            None => invalid(INVALID_INPUT_MESSAGE),
        };
        assemble::assemble(evaluation)
    }

    /// Evaluate an already-normalized attribute set.
    pub fn evaluate(&self, attributes: &AttributeSet) -> Evaluation {
        match attributes {
            AttributeSet::Patio(attrs) => patio::check(attrs),
            AttributeSet::Shed(attrs) => shed::check(attrs),
            AttributeSet::RetainingWall(attrs) => retaining_wall::check(attrs),
        }
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(message: &str) -> Evaluation {
    Evaluation::new(
        Classification::Invalid,
        vec![Violation::uncited(message)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_rural_shed() -> Value {
        json!({
            "development": "shed",
            "zoning": "RU2",
            "area": 7,
            "height": 0,
            "boundary_distance": 6000,
            "building_line": "yes",
            "stormwater": "yes",
            "shipping_container": "no",
            "metal": "no",
            "reflective": "no",
            "bushfire": "no",
            "adjacent_building": "no",
            "distance_dwelling": 6,
            "non_combustible": "no",
            "interfere": "no",
            "habitable": "no",
            "easement": "no",
            "services": "no",
            "existing_structures": "no",
            "heritage": "no",
            "foreshore": "no",
            "sensitive_area": "no"
        })
    }

    #[test]
    fn assess_routes_shed_payload() {
        let engine = AssessmentEngine::new();
        let result = engine.assess(&minimal_rural_shed());
        assert_eq!(result.classification, Classification::Exempt);
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn assess_routes_retain_payload_to_retaining_wall_evaluator() {
        let engine = AssessmentEngine::new();
        let result = engine.assess(&json!({
            "development": "retain",
            "zoning": "R2",
            "height": 700,
            "boundary_distance": 1500,
            "distance_other": 3000,
            "distance_easement": 1500,
            "stormwater": "yes"
        }));
        assert_eq!(result.classification, Classification::NonExempt);
        // Retaining-wall citations, proving the dispatch target
        assert!(result
            .violations
            .iter()
            .any(|v| v.citation == "sec.2.74 (1)(f)"));
    }

    #[test]
    fn unknown_development_is_invalid_without_touching_evaluators() {
        let engine = AssessmentEngine::new();
        let result = engine.assess(&json!({ "development": "pool", "zoning": "R1" }));
        assert_eq!(result.classification, Classification::Invalid);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].message, UNKNOWN_DEVELOPMENT_MESSAGE);
    }

    #[test]
    fn non_object_payload_is_invalid() {
        let engine = AssessmentEngine::new();
        let result = engine.assess(&json!([1, 2, 3]));
        assert_eq!(result.classification, Classification::Invalid);
        assert_eq!(result.violations[0].message, INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn assessment_is_deterministic() {
        let engine = AssessmentEngine::new();
        let payload = minimal_rural_shed();
        assert_eq!(engine.assess(&payload), engine.assess(&payload));
    }
}
