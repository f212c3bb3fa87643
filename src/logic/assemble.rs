//! Result assembly: turns an evaluation into the flat line sequence returned
//! to clients. Output order mirrors evaluation order (regulatory clause
//! order); nothing is reordered or deduplicated.

use crate::models::{AssessmentResult, Classification, Evaluation};

/// The governing instrument. Citations resolve against its section anchors.
pub const REFERENCE_BASE: &str =
    "https://legislation.nsw.gov.au/view/html/inforce/current/epi-2008-0572#";

/// Resolve a clause path like "sec.2.12 (1)(f)(ii)" to a reference URL. Only
/// the section token anchors into the instrument; the subclause part stays in
/// the citation text.
fn reference_url(citation: &str) -> String {
    let anchor = citation.split_whitespace().next().unwrap_or(citation);
    format!("{REFERENCE_BASE}{anchor}")
}

pub fn assemble(evaluation: Evaluation) -> AssessmentResult {
    let mut lines = Vec::new();

    for violation in &evaluation.violations {
        lines.push(violation.message.clone());
        if violation.has_citation() {
            lines.push(format!(
                "Reference: {} ({})",
                reference_url(&violation.citation),
                violation.citation
            ));
        }
        // Invalid results carry a single guidance message; anything after the
        // first violation is not emitted.
        if evaluation.classification == Classification::Invalid {
            break;
        }
    }

    AssessmentResult {
        classification: evaluation.classification,
        violations: evaluation.violations,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Violation;

    #[test]
    fn reference_url_uses_section_anchor() {
        assert_eq!(
            reference_url("sec.2.12 (1)(f)(ii)"),
            format!("{REFERENCE_BASE}sec.2.12")
        );
        assert_eq!(
            reference_url("pt.2-div.1-sdiv.9"),
            format!("{REFERENCE_BASE}pt.2-div.1-sdiv.9")
        );
    }

    #[test]
    fn lines_follow_evaluation_order_with_references() {
        let evaluation = Evaluation::new(
            Classification::NonExempt,
            vec![
                Violation::uncited("Header."),
                Violation::cited("Area exceeds limits.", "sec.2.12 (1)(b)"),
                Violation::cited("Too close to boundary.", "sec.2.12 (1)(f)(ii)"),
            ],
        );
        let result = assemble(evaluation);
        assert_eq!(result.lines.len(), 5);
        assert_eq!(result.lines[0], "Header.");
        assert_eq!(result.lines[1], "Area exceeds limits.");
        assert!(result.lines[2].starts_with("Reference: "));
        assert!(result.lines[2].contains("sec.2.12"));
        assert_eq!(result.lines[3], "Too close to boundary.");
    }

    #[test]
    fn duplicate_citations_are_preserved() {
        let evaluation = Evaluation::new(
            Classification::NonExempt,
            vec![
                Violation::uncited("Header."),
                Violation::cited("Heritage item.", "sec.2.11 (a)"),
                Violation::cited("Foreshore area.", "sec.2.11 (a)"),
            ],
        );
        let result = assemble(evaluation);
        assert_eq!(result.lines.len(), 5);
    }

    #[test]
    fn invalid_result_emits_only_first_violation() {
        let evaluation = Evaluation::new(
            Classification::Invalid,
            vec![
                Violation::uncited("Missing or invalid input data."),
                Violation::cited("Should never appear.", "sec.2.12 (1)(b)"),
            ],
        );
        let result = assemble(evaluation);
        assert_eq!(result.lines, vec!["Missing or invalid input data.".to_string()]);
    }

    #[test]
    fn uncited_violations_emit_no_reference_line() {
        let evaluation = Evaluation::new(
            Classification::NonExempt,
            vec![Violation::uncited("Zoning is out of scope of this tool.")],
        );
        let result = assemble(evaluation);
        assert_eq!(result.lines.len(), 1);
    }
}
