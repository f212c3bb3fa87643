//! Garden shed / cabana evaluator (SEPP Part 2, Division 1, Subdivision 9,
//! clauses 2.17 and 2.18).

use super::{finalize, zoning_gate};
use crate::models::{Evaluation, ShedAttributes, Violation};

const SUCCESS_CITATION: &str = "pt.2-div.1-sdiv.9";

pub(crate) fn check(attrs: &ShedAttributes) -> Evaluation {
    let zone = match zoning_gate(&attrs.zoning) {
        Ok(zone) => zone,
        Err(gate) => return gate,
    };

    let mut violations = Vec::new();

    if attrs.heritage.is_yes() {
        violations.push(Violation::cited(
            "The property is a heritage item.",
            "sec.2.17",
        ));
    }

    if attrs.foreshore.is_yes() {
        violations.push(Violation::cited(
            "The property is located in a foreshore area.",
            "sec.2.17",
        ));
    }

    if attrs.sensitive_area.is_yes() {
        violations.push(Violation::cited(
            "The property is located in an environmentally sensitive area.",
            "sec.2.17",
        ));
    }

    if zone.is_rural_tier() {
        if attrs.area > 50.0 {
            violations.push(Violation::cited(
                "The floor area exceeds the 50m2 limit for this zone.",
                "sec.2.18 (1)(b)(i)",
            ));
        }
    } else if attrs.area > 20.0 {
        violations.push(Violation::cited(
            "The floor area exceeds the 20m2 limit for this zone.",
            "sec.2.18 (1)(b)(ii)",
        ));
    }

    if attrs.height > 3.0 {
        violations.push(Violation::cited(
            "The structure is higher than 3m above ground level.",
            "sec.2.18 (1)(c)",
        ));
    }

    if zone.is_rural_tier() {
        if attrs.boundary_distance < 5000.0 {
            violations.push(Violation::cited(
                "The structure must be at least 5m from each lot boundary in this zone.",
                "sec.2.18 (1)(d)(i)",
            ));
        }
    } else if attrs.boundary_distance < 900.0 {
        violations.push(Violation::cited(
            "The structure must be at least 900mm from each lot boundary.",
            "sec.2.18 (1)(d)(ii)",
        ));
    }

    // RU zones are exempt from the building-line requirement; R5 is not.
    if attrs.building_line.is_no() && !zone.is_rural_use() {
        violations.push(Violation::cited(
            "The structure must be behind the building line of any road frontage.",
            "sec.2.18 (1)(e)",
        ));
    }

    if attrs.shipping_container.is_yes() {
        violations.push(Violation::cited(
            "The structure must not be a shipping container.",
            "sec.2.18 (1)(f)",
        ));
    }

    if attrs.stormwater.is_no() {
        violations.push(Violation::cited(
            "Roofwater must be disposed of without causing a nuisance to adjoining owners.",
            "sec.2.18 (1)(g)",
        ));
    }

    if attrs.metal.is_yes() && attrs.reflective.is_no() {
        violations.push(Violation::cited(
            "Metal components must be low-reflective, factory pre-coloured materials.",
            "sec.2.18 (1)(h)",
        ));
    }

    if attrs.bushfire.is_yes() && attrs.distance_dwelling < 5.0 && attrs.non_combustible.is_no() {
        violations.push(Violation::cited(
            "On bushfire prone land within 5m of a dwelling the structure must be non-combustible.",
            "sec.2.18 (1)(i)",
        ));
    }

    if attrs.adjacent_building.is_yes() && attrs.interfere.is_yes() {
        violations.push(Violation::cited(
            "The structure interferes with the entry, exit or fire safety measures of an adjacent building.",
            "sec.2.18 (1)(k)",
        ));
    }

    if attrs.habitable.is_yes() {
        violations.push(Violation::cited(
            "The structure must be a Class 10 building and must not be habitable.",
            "sec.2.18 (1)(l)",
        ));
    }

    if attrs.easement.is_yes() {
        violations.push(Violation::cited(
            "The structure must be located at least 1m from any registered easement.",
            "sec.2.18 (1)(m)",
        ));
    }

    if attrs.services.is_yes() {
        violations.push(Violation::cited(
            "The structure must not be connected to water supply or sewerage services.",
            "sec.2.18 (1)(n)",
        ));
    }

    if attrs.existing_structures.is_yes() {
        violations.push(Violation::cited(
            "There are already two similar structures on the lot.",
            "sec.2.18 (2)",
        ));
    }

    finalize("shed", SUCCESS_CITATION, violations)
}
