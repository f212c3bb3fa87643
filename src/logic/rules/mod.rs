//! Rule evaluators for the exempt development codes, one per development
//! category. All three share the same evaluation policy: an unsupported zone
//! short-circuits with a single uncited notice; for a supported zone every
//! applicable clause is evaluated and every violation accumulated. Thresholds
//! are strict on the violating side, so boundary-equal values pass.

pub mod engine;
pub mod patio;
pub mod retaining_wall;
pub mod shed;

pub use engine::AssessmentEngine;

use crate::models::{Classification, Evaluation, Violation, Zone};

pub(crate) const UNSUPPORTED_ZONE_MESSAGE: &str =
    "Our tool currently does not support your zone. Please contact Albury City Council for further assistance.";

/// Zoning gate shared by all evaluators. An unrecognized code is the entire
/// outcome: no development standard is evaluated after it.
pub(crate) fn zoning_gate(code: &str) -> std::result::Result<Zone, Evaluation> {
    match Zone::from_code(code) {
        Some(zone) => Ok(zone),
        None => Err(Evaluation::new(
            Classification::NonExempt,
            vec![Violation::uncited(UNSUPPORTED_ZONE_MESSAGE)],
        )),
    }
}

/// Apply the shared verdict policy once all applicable clauses have run:
/// prepend the failure header when anything violated, otherwise emit the
/// single success line carrying the subdivision-level citation.
pub(crate) fn finalize(
    label: &str,
    success_citation: &str,
    violations: Vec<Violation>,
) -> Evaluation {
    if violations.is_empty() {
        Evaluation::new(
            Classification::Exempt,
            vec![Violation::cited(
                format!(
                    "Your proposed {label} qualifies for exempt development, subject to the general requirements of the SEPP exempt development codes."
                ),
                success_citation,
            )],
        )
    } else {
        let mut all = Vec::with_capacity(violations.len() + 1);
        all.push(Violation::uncited(format!(
            "Your proposed {label} DOES NOT qualify for exempt development for the following reasons:"
        )));
        all.extend(violations);
        Evaluation::new(Classification::NonExempt, all)
    }
}
