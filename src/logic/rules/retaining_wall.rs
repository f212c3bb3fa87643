//! Retaining wall evaluator (SEPP Part 2, Division 1, Subdivision 33,
//! clauses 2.73 and 2.74).

use super::{finalize, zoning_gate};
use crate::models::{Evaluation, RetainingWallAttributes, Violation};

const SUCCESS_CITATION: &str = "pt.2-div.1-sdiv.33";

pub(crate) fn check(attrs: &RetainingWallAttributes) -> Evaluation {
    let zone = match zoning_gate(&attrs.zoning) {
        Ok(zone) => zone,
        Err(gate) => return gate,
    };

    let mut violations = Vec::new();

    if attrs.heritage.is_yes() {
        violations.push(Violation::cited(
            "The property is a heritage item.",
            "sec.2.73",
        ));
    }

    if attrs.foreshore.is_yes() {
        violations.push(Violation::cited(
            "The property is located in a foreshore area.",
            "sec.2.73",
        ));
    }

    if attrs.flood_control_lot.is_yes() {
        violations.push(Violation::cited(
            "The property is a flood control lot.",
            "sec.2.73",
        ));
    }

    if attrs.cut_or_fill > 600.0 {
        violations.push(Violation::cited(
            "The wall requires a cut or fill deeper than 600mm below or above ground level.",
            "sec.2.74 (1)(a)",
        ));
    }

    if attrs.boundary_distance < 1000.0 {
        violations.push(Violation::cited(
            "The wall must be at least 1m from each lot boundary.",
            "sec.2.74 (1)(b)",
        ));
    }

    if attrs.heritage_conserv.is_yes() && attrs.rear_yard.is_no() {
        violations.push(Violation::cited(
            "In a heritage conservation area the wall must be located in the rear yard.",
            "sec.2.74 (1)(c)",
        ));
    }

    if attrs.waterbody_within_40m.is_yes() {
        violations.push(Violation::cited(
            "The wall must be at least 40m from a natural waterbody.",
            "sec.2.74 (1)(d)",
        ));
    }

    if attrs.sediment_transfer.is_yes() {
        violations.push(Violation::cited(
            "The wall must not redirect surface or ground water or transport sediment onto adjoining property.",
            "sec.2.74 (1)(e)",
        ));
    }

    if attrs.height > 600.0 {
        violations.push(Violation::cited(
            "The wall is higher than 600mm above ground level.",
            "sec.2.74 (1)(f)",
        ));
    }

    if attrs.distance_other < 2000.0 {
        violations.push(Violation::cited(
            "The wall must be at least 2m from any other retaining wall or structural support.",
            "sec.2.74 (1)(g)",
        ));
    }

    if attrs.distance_easement < 1000.0 {
        violations.push(Violation::cited(
            "The wall must be at least 1m from any registered easement or services main.",
            "sec.2.74 (1)(h)",
        ));
    }

    if attrs.stormwater.is_no() {
        violations.push(Violation::cited(
            "The wall must have adequate drainage lines connected to the existing stormwater system.",
            "sec.2.74 (1)(i)",
        ));
    }

    if attrs.fill_depth > 150.0 && attrs.fill_area > 0.25 * attrs.land_size {
        violations.push(Violation::cited(
            "Fill deeper than 150mm must not cover more than 25% of the lot area.",
            "sec.2.74 (1)(j)",
        ));
    }

    if attrs.imported_fill.is_yes() && attrs.venm.is_no() {
        violations.push(Violation::cited(
            "Imported fill must be virgin excavated natural material.",
            "sec.2.74 (1)(k)",
        ));
    }

    if (zone.is_rural_tier() || attrs.heritage_conserv.is_yes()) && attrs.fill_volume > 100.0 {
        violations.push(Violation::cited(
            "The fill volume exceeds 100m3 for this zone.",
            "sec.2.74 (1)(l)",
        ));
    }

    finalize("retaining wall", SUCCESS_CITATION, violations)
}
