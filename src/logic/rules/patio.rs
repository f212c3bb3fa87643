//! Patio / deck / pergola evaluator (SEPP Part 2, Division 1, Subdivision 6,
//! clauses 2.11 and 2.12).

use super::{finalize, zoning_gate};
use crate::models::{Evaluation, PatioAttributes, StructureType, Violation};

const SUCCESS_CITATION: &str = "pt.2-div.1-sdiv.6";

pub(crate) fn check(attrs: &PatioAttributes) -> Evaluation {
    let zone = match zoning_gate(&attrs.zoning) {
        Ok(zone) => zone,
        Err(gate) => return gate,
    };

    let mut violations = Vec::new();

    if attrs.structure_type == StructureType::Replacement {
        if attrs.height_existing > 1000.0 {
            violations.push(Violation::cited(
                "The existing deck is higher than 1m above ground level.",
                "sec.2.11 (b)",
            ));
        }
        if attrs.material_quality.is_no() {
            violations.push(Violation::cited(
                "The replacement must use materials of equivalent or improved quality.",
                "sec.2.12 (2)(a)",
            ));
        }
        if attrs.same_size.is_no() {
            violations.push(Violation::cited(
                "The replacement must not change the size or height of the existing deck.",
                "sec.2.12 (2)(b)",
            ));
        }
    }

    if attrs.heritage.is_yes() {
        violations.push(Violation::cited(
            "The property is a heritage item.",
            "sec.2.11 (a)",
        ));
    }

    if attrs.foreshore.is_yes() {
        violations.push(Violation::cited(
            "The property is located in a foreshore area.",
            "sec.2.11 (a)",
        ));
    }

    if attrs.area > 25.0 {
        violations.push(Violation::cited(
            "The structure area is more than 25m2.",
            "sec.2.12 (1)(b)",
        ));
    } else if attrs.land_size > 300.0 {
        if attrs.total_structures_area > 0.15 * attrs.land_size {
            violations.push(Violation::cited(
                "The combined area of these structures is over the limit for this lot size.",
                "sec.2.12 (1)(c)(i)",
            ));
        }
    } else if attrs.total_structures_area > 25.0 {
        violations.push(Violation::cited(
            "The combined area of these structures is over the limit for this lot size.",
            "sec.2.12 (1)(c)(ii)",
        ));
    }

    if attrs.wall_height.is_yes() {
        violations.push(Violation::cited(
            "An enclosing wall is higher than 1.4m.",
            "sec.2.12 (1)(d)",
        ));
    }

    if attrs.behind_building_line.is_no() {
        violations.push(Violation::cited(
            "The structure must be behind the building line of the road frontage.",
            "sec.2.12 (1)(e)(ii)",
        ));
    }

    if zone.is_rural_tier() {
        if attrs.boundary_distance < 5000.0 {
            violations.push(Violation::cited(
                "The structure must be at least 5m from each lot boundary in this zone.",
                "sec.2.12 (1)(f)(i)",
            ));
        }
    } else if attrs.boundary_distance < 900.0 {
        violations.push(Violation::cited(
            "The structure must be at least 900mm from each lot boundary.",
            "sec.2.12 (1)(f)(ii)",
        ));
    }

    if attrs.metal.is_yes() && attrs.reflective.is_no() {
        violations.push(Violation::cited(
            "Metal components must be low-reflective, factory pre-coloured materials.",
            "sec.2.12 (1)(h)",
        ));
    }

    if attrs.floor_height > 1000.0 {
        violations.push(Violation::cited(
            "The floor height exceeds 1m above ground level.",
            "sec.2.12 (1)(i)",
        ));
    }

    if attrs.roof.is_yes() {
        if attrs.overhang > 600.0 {
            violations.push(Violation::cited(
                "The roof overhangs the structure by more than 600mm.",
                "sec.2.12 (1)(i1)",
            ));
        }

        if attrs.attached.is_yes() {
            if attrs.above_gutter.is_yes() {
                violations.push(Violation::cited(
                    "The roof must not extend above the roof gutter line of the dwelling.",
                    "sec.2.12 (1)(j)",
                ));
            }
            if attrs.roof_height > 3.0 {
                violations.push(Violation::cited(
                    "The roof's highest point is more than 3m above ground level.",
                    "sec.2.12 (1)(j1)",
                ));
            }
            if attrs.fascia_connection.is_yes() && attrs.engineer_spec.is_no() {
                violations.push(Violation::cited(
                    "A fascia connection must comply with a professional engineer's specifications.",
                    "sec.2.12 (1)(k)",
                ));
            }
            if attrs.stormwater.is_no() {
                violations.push(Violation::cited(
                    "Roofwater must be disposed of into an existing stormwater drainage system.",
                    "sec.2.12 (1)(l)",
                ));
            }
        }
    }

    if attrs.drainage.is_yes() {
        violations.push(Violation::cited(
            "The structure interferes with existing drainage fixtures or flow paths.",
            "sec.2.12 (1)(m)",
        ));
    }

    if attrs.bushfire.is_yes() && attrs.distance_dwelling < 5.0 && attrs.non_combustible.is_no() {
        violations.push(Violation::cited(
            "On bushfire prone land within 5m of a dwelling the structure must be non-combustible.",
            "sec.2.12 (1)(n)",
        ));
    }

    finalize("patio", SUCCESS_CITATION, violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classification, YesNo};

    /// Baseline patio that satisfies every clause in a standard zone.
    fn compliant() -> PatioAttributes {
        PatioAttributes {
            zoning: "R1".to_string(),
            behind_building_line: YesNo::Yes,
            area: 20.0,
            land_size: 400.0,
            total_structures_area: 20.0,
            boundary_distance: 1000.0,
            floor_height: 500.0,
            ..PatioAttributes::default()
        }
    }

    fn clause_citations(eval: &Evaluation) -> Vec<&str> {
        eval.violations
            .iter()
            .skip(1) // header
            .map(|v| v.citation.as_str())
            .collect()
    }

    #[test]
    fn compliant_patio_is_exempt() {
        let eval = check(&compliant());
        assert_eq!(eval.classification, Classification::Exempt);
        assert_eq!(eval.violations.len(), 1);
        assert_eq!(eval.violations[0].citation, "pt.2-div.1-sdiv.6");
        assert!(eval.violations[0].message.contains("qualifies for exempt development"));
    }

    #[test]
    fn unsupported_zone_short_circuits() {
        let attrs = PatioAttributes {
            zoning: "B2".to_string(),
            // Would otherwise violate several clauses
            area: 100.0,
            heritage: YesNo::Yes,
            ..compliant()
        };
        let eval = check(&attrs);
        assert_eq!(eval.classification, Classification::NonExempt);
        assert_eq!(eval.violations.len(), 1);
        assert!(!eval.violations[0].has_citation());
    }

    #[test]
    fn replacement_taller_than_1m_fails_regardless_of_other_fields() {
        let attrs = PatioAttributes {
            structure_type: StructureType::Replacement,
            height_existing: 1200.0,
            material_quality: YesNo::Yes,
            same_size: YesNo::Yes,
            ..compliant()
        };
        let eval = check(&attrs);
        assert_eq!(eval.classification, Classification::NonExempt);
        assert_eq!(clause_citations(&eval), vec!["sec.2.11 (b)"]);
    }

    #[test]
    fn replacement_at_exactly_1m_passes() {
        let attrs = PatioAttributes {
            structure_type: StructureType::Replacement,
            height_existing: 1000.0,
            material_quality: YesNo::Yes,
            same_size: YesNo::Yes,
            ..compliant()
        };
        assert_eq!(check(&attrs).classification, Classification::Exempt);
    }

    #[test]
    fn evaluation_is_exhaustive_not_first_failure() {
        let attrs = PatioAttributes {
            heritage: YesNo::Yes,
            foreshore: YesNo::Yes,
            area: 30.0,
            wall_height: YesNo::Yes,
            behind_building_line: YesNo::No,
            drainage: YesNo::Yes,
            ..compliant()
        };
        let eval = check(&attrs);
        assert_eq!(eval.classification, Classification::NonExempt);
        assert_eq!(
            clause_citations(&eval),
            vec![
                "sec.2.11 (a)",
                "sec.2.11 (a)",
                "sec.2.12 (1)(b)",
                "sec.2.12 (1)(d)",
                "sec.2.12 (1)(e)(ii)",
                "sec.2.12 (1)(m)",
            ]
        );
    }

    #[test]
    fn boundary_distance_is_strict_below_900_in_standard_zone() {
        let at_limit = PatioAttributes {
            boundary_distance: 900.0,
            ..compliant()
        };
        assert_eq!(check(&at_limit).classification, Classification::Exempt);

        let below = PatioAttributes {
            boundary_distance: 899.0,
            ..compliant()
        };
        let eval = check(&below);
        assert_eq!(clause_citations(&eval), vec!["sec.2.12 (1)(f)(ii)"]);
    }

    #[test]
    fn rural_tier_requires_5m_setback() {
        let attrs = PatioAttributes {
            zoning: "RU2".to_string(),
            boundary_distance: 4999.0,
            ..compliant()
        };
        let eval = check(&attrs);
        assert_eq!(clause_citations(&eval), vec!["sec.2.12 (1)(f)(i)"]);

        let at_limit = PatioAttributes {
            zoning: "RU2".to_string(),
            boundary_distance: 5000.0,
            ..compliant()
        };
        assert_eq!(check(&at_limit).classification, Classification::Exempt);
    }

    #[test]
    fn total_structures_cap_depends_on_lot_size() {
        // Lot over 300m2: 15% of lot size
        let big_lot = PatioAttributes {
            land_size: 400.0,
            total_structures_area: 61.0,
            ..compliant()
        };
        assert_eq!(clause_citations(&check(&big_lot)), vec!["sec.2.12 (1)(c)(i)"]);

        // Lot of 300m2 or less: flat 25m2
        let small_lot = PatioAttributes {
            land_size: 300.0,
            area: 20.0,
            total_structures_area: 26.0,
            ..compliant()
        };
        assert_eq!(
            clause_citations(&check(&small_lot)),
            vec!["sec.2.12 (1)(c)(ii)"]
        );

        // The cap is only consulted when the structure itself is within 25m2
        let oversized = PatioAttributes {
            area: 26.0,
            total_structures_area: 200.0,
            ..compliant()
        };
        assert_eq!(clause_citations(&check(&oversized)), vec!["sec.2.12 (1)(b)"]);
    }

    #[test]
    fn roof_subclauses_apply_only_when_roofed_and_attached() {
        // No roof: overhang and attachment fields are ignored entirely
        let unroofed = PatioAttributes {
            overhang: 900.0,
            above_gutter: YesNo::Yes,
            roof_height: 4.0,
            ..compliant()
        };
        assert_eq!(check(&unroofed).classification, Classification::Exempt);

        // Roofed but free standing: only the overhang clause applies
        let freestanding = PatioAttributes {
            roof: YesNo::Yes,
            overhang: 900.0,
            above_gutter: YesNo::Yes,
            stormwater: YesNo::No,
            ..compliant()
        };
        assert_eq!(
            clause_citations(&check(&freestanding)),
            vec!["sec.2.12 (1)(i1)"]
        );

        // Attached: gutter line, roof height, fascia and stormwater all apply
        let attached = PatioAttributes {
            roof: YesNo::Yes,
            attached: YesNo::Yes,
            above_gutter: YesNo::Yes,
            roof_height: 3.5,
            fascia_connection: YesNo::Yes,
            engineer_spec: YesNo::No,
            stormwater: YesNo::No,
            ..compliant()
        };
        assert_eq!(
            clause_citations(&check(&attached)),
            vec![
                "sec.2.12 (1)(j)",
                "sec.2.12 (1)(j1)",
                "sec.2.12 (1)(k)",
                "sec.2.12 (1)(l)",
            ]
        );
    }

    #[test]
    fn bushfire_clause_needs_proximity_and_combustible_material() {
        let far_away = PatioAttributes {
            bushfire: YesNo::Yes,
            distance_dwelling: 5.0,
            non_combustible: YesNo::No,
            ..compliant()
        };
        assert_eq!(check(&far_away).classification, Classification::Exempt);

        let close = PatioAttributes {
            bushfire: YesNo::Yes,
            distance_dwelling: 4.0,
            non_combustible: YesNo::No,
            ..compliant()
        };
        assert_eq!(clause_citations(&check(&close)), vec!["sec.2.12 (1)(n)"]);

        let close_but_compliant = PatioAttributes {
            bushfire: YesNo::Yes,
            distance_dwelling: 4.0,
            non_combustible: YesNo::Yes,
            ..compliant()
        };
        assert_eq!(check(&close_but_compliant).classification, Classification::Exempt);
    }

    #[test]
    fn metal_components_must_be_low_reflective() {
        let attrs = PatioAttributes {
            metal: YesNo::Yes,
            reflective: YesNo::No,
            ..compliant()
        };
        assert_eq!(clause_citations(&check(&attrs)), vec!["sec.2.12 (1)(h)"]);

        let compliant_metal = PatioAttributes {
            metal: YesNo::Yes,
            reflective: YesNo::Yes,
            ..compliant()
        };
        assert_eq!(check(&compliant_metal).classification, Classification::Exempt);
    }
}
