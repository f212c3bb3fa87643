//! Attribute normalization: the one place where the weakly-typed request
//! payload is coerced into a typed attribute record.
//!
//! The policy is deliberately lenient. Missing, null or empty fields become
//! "no"; unparseable numerics become 0.0. Normalization itself never fails;
//! a payload that is not a JSON object or carries an unknown development
//! discriminant surfaces as an Invalid classification downstream.

use crate::models::{
    AttributeSet, DevelopmentType, PatioAttributes, RetainingWallAttributes, ShedAttributes,
    StructureType, YesNo,
};
use serde_json::{Map, Value};

/// String field: trimmed and lowercased. Absent, null and empty values all
/// normalize to "no" so boolean-style questions default to a negative answer.
fn text(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => {
            let s = s.trim().to_lowercase();
            if s.is_empty() {
                "no".to_string()
            } else {
                s
            }
        }
        Some(Value::Bool(true)) => "yes".to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "no".to_string(),
    }
}

/// Zoning codes match against uppercase enums, unlike every other string
/// field.
fn zoning(map: &Map<String, Value>) -> String {
    text(map, "zoning").to_uppercase()
}

fn flag(map: &Map<String, Value>, key: &str) -> YesNo {
    YesNo::from_str(&text(map, key))
}

/// Numeric field: parse as floating point, defaulting to 0.0 on anything
/// unparseable. Numeric strings are accepted.
fn number(map: &Map<String, Value>, key: &str) -> f64 {
    match map.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn patio(map: &Map<String, Value>) -> PatioAttributes {
    PatioAttributes {
        zoning: zoning(map),
        structure_type: StructureType::from_str(&text(map, "structure_type")),
        height_existing: number(map, "height_existing"),
        material_quality: flag(map, "material_quality"),
        same_size: flag(map, "same_size"),
        heritage: flag(map, "heritage"),
        foreshore: flag(map, "foreshore"),
        area: number(map, "area"),
        land_size: number(map, "land_size"),
        total_structures_area: number(map, "total_structures_area"),
        wall_height: flag(map, "wall_height"),
        behind_building_line: flag(map, "behind_building_line"),
        boundary_distance: number(map, "boundary_distance"),
        metal: flag(map, "metal"),
        reflective: flag(map, "reflective"),
        floor_height: number(map, "floor_height"),
        roof: flag(map, "roof"),
        overhang: number(map, "overhang"),
        attached: flag(map, "attached"),
        above_gutter: flag(map, "above_gutter"),
        roof_height: number(map, "roof_height"),
        fascia_connection: flag(map, "fascia_connection"),
        engineer_spec: flag(map, "engineer_spec"),
        stormwater: flag(map, "stormwater"),
        drainage: flag(map, "drainage"),
        bushfire: flag(map, "bushfire"),
        distance_dwelling: number(map, "distance_dwelling"),
        non_combustible: flag(map, "non_combustible"),
    }
}

pub fn shed(map: &Map<String, Value>) -> ShedAttributes {
    ShedAttributes {
        zoning: zoning(map),
        heritage: flag(map, "heritage"),
        foreshore: flag(map, "foreshore"),
        sensitive_area: flag(map, "sensitive_area"),
        area: number(map, "area"),
        height: number(map, "height"),
        boundary_distance: number(map, "boundary_distance"),
        building_line: flag(map, "building_line"),
        shipping_container: flag(map, "shipping_container"),
        stormwater: flag(map, "stormwater"),
        metal: flag(map, "metal"),
        reflective: flag(map, "reflective"),
        bushfire: flag(map, "bushfire"),
        distance_dwelling: number(map, "distance_dwelling"),
        non_combustible: flag(map, "non_combustible"),
        adjacent_building: flag(map, "adjacent_building"),
        interfere: flag(map, "interfere"),
        habitable: flag(map, "habitable"),
        easement: flag(map, "easement"),
        services: flag(map, "services"),
        existing_structures: flag(map, "existing_structures"),
    }
}

pub fn retaining_wall(map: &Map<String, Value>) -> RetainingWallAttributes {
    RetainingWallAttributes {
        zoning: zoning(map),
        heritage: flag(map, "heritage"),
        heritage_conserv: flag(map, "heritage_conserv"),
        foreshore: flag(map, "foreshore"),
        flood_control_lot: flag(map, "flood_control_lot"),
        cut_or_fill: number(map, "cut_or_fill"),
        boundary_distance: number(map, "boundary_distance"),
        rear_yard: flag(map, "rear_yard"),
        waterbody_within_40m: flag(map, "waterbody_within_40m"),
        sediment_transfer: flag(map, "sediment_transfer"),
        height: number(map, "height"),
        distance_other: number(map, "distance_other"),
        distance_easement: number(map, "distance_easement"),
        stormwater: flag(map, "stormwater"),
        fill_depth: number(map, "fill_depth"),
        fill_area: number(map, "fill_area"),
        fill_volume: number(map, "fill_volume"),
        land_size: number(map, "land_size"),
        imported_fill: flag(map, "imported_fill"),
        venm: flag(map, "venm"),
    }
}

/// Normalize a raw payload into a typed attribute set. Returns None when the
/// payload is not a JSON object or the `development` discriminant is not one
/// of "patio" / "shed" / "retain" — the dispatcher maps that to Invalid.
pub fn attribute_set(payload: &Value) -> Option<AttributeSet> {
    let map = payload.as_object()?;
    let development = DevelopmentType::from_str(&text(map, "development"))?;
    Some(match development {
        DevelopmentType::Patio => AttributeSet::Patio(patio(map)),
        DevelopmentType::Shed => AttributeSet::Shed(shed(map)),
        DevelopmentType::RetainingWall => AttributeSet::RetainingWall(retaining_wall(map)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn text_defaults_and_casing() {
        let map = obj(json!({
            "heritage": "  YES  ",
            "foreshore": "",
            "stormwater": null,
        }));
        assert_eq!(text(&map, "heritage"), "yes");
        assert_eq!(text(&map, "foreshore"), "no");
        assert_eq!(text(&map, "stormwater"), "no");
        assert_eq!(text(&map, "absent"), "no");
    }

    #[test]
    fn zoning_is_uppercased() {
        let map = obj(json!({ "zoning": " ru2 " }));
        assert_eq!(zoning(&map), "RU2");

        let missing = obj(json!({}));
        assert_eq!(zoning(&missing), "NO");
    }

    #[test]
    fn number_parses_with_default() {
        let map = obj(json!({
            "area": 25,
            "land_size": "310.5",
            "boundary_distance": "not a number",
            "height": null,
        }));
        assert_eq!(number(&map, "area"), 25.0);
        assert_eq!(number(&map, "land_size"), 310.5);
        assert_eq!(number(&map, "boundary_distance"), 0.0);
        assert_eq!(number(&map, "height"), 0.0);
        assert_eq!(number(&map, "absent"), 0.0);
    }

    #[test]
    fn attribute_set_dispatches_on_development() {
        let patio = attribute_set(&json!({ "development": "patio", "zoning": "R1" }));
        assert!(matches!(patio, Some(AttributeSet::Patio(_))));

        let shed = attribute_set(&json!({ "development": " SHED ", "zoning": "RU2" }));
        assert!(matches!(shed, Some(AttributeSet::Shed(_))));

        let retain = attribute_set(&json!({ "development": "retain" }));
        assert!(matches!(retain, Some(AttributeSet::RetainingWall(_))));

        assert!(attribute_set(&json!({ "development": "pool" })).is_none());
        assert!(attribute_set(&json!({})).is_none());
        assert!(attribute_set(&json!("not an object")).is_none());
    }

    #[test]
    fn normalization_is_deterministic() {
        let payload = json!({
            "development": "shed",
            "zoning": "ru2",
            "area": "7",
            "boundary_distance": 1500,
            "building_line": "YES",
        });
        assert_eq!(attribute_set(&payload), attribute_set(&payload));
    }

    #[test]
    fn missing_fields_fill_defaults() {
        let set = attribute_set(&json!({ "development": "patio" })).unwrap();
        let AttributeSet::Patio(attrs) = set else {
            panic!("expected patio attributes");
        };
        assert_eq!(attrs.zoning, "NO");
        assert_eq!(attrs.area, 0.0);
        assert!(attrs.heritage.is_no());
        assert_eq!(attrs.structure_type, StructureType::New);
    }
}
