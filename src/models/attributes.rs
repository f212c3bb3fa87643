use serde::{Deserialize, Serialize};

/// Land-use zones the tool can assess. Anything outside this set trips the
/// zoning gate before any development standard is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    R1,
    R2,
    R3,
    R4,
    R5,
    RU1,
    RU2,
    RU3,
    RU4,
    RU6,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::R1 => "R1",
            Zone::R2 => "R2",
            Zone::R3 => "R3",
            Zone::R4 => "R4",
            Zone::R5 => "R5",
            Zone::RU1 => "RU1",
            Zone::RU2 => "RU2",
            Zone::RU3 => "RU3",
            Zone::RU4 => "RU4",
            Zone::RU6 => "RU6",
        }
    }

    /// Parse a normalized (uppercased) zoning code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "R1" => Some(Zone::R1),
            "R2" => Some(Zone::R2),
            "R3" => Some(Zone::R3),
            "R4" => Some(Zone::R4),
            "R5" => Some(Zone::R5),
            "RU1" => Some(Zone::RU1),
            "RU2" => Some(Zone::RU2),
            "RU3" => Some(Zone::RU3),
            "RU4" => Some(Zone::RU4),
            "RU6" => Some(Zone::RU6),
            _ => None,
        }
    }

    /// Rural/large-lot tier: the 5m boundary setback and 50m2 shed cap apply
    /// here instead of the standard-zone 900mm / 20m2 figures.
    pub fn is_rural_tier(&self) -> bool {
        matches!(
            self,
            Zone::R5 | Zone::RU1 | Zone::RU2 | Zone::RU3 | Zone::RU4 | Zone::RU6
        )
    }

    /// RU zones are exempt from the shed building-line requirement. R5 is not.
    pub fn is_rural_use(&self) -> bool {
        matches!(
            self,
            Zone::RU1 | Zone::RU2 | Zone::RU3 | Zone::RU4 | Zone::RU6
        )
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boolean-style answer fields. Anything other than "yes" normalizes to No,
/// including absent and empty values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub fn from_str(s: &str) -> Self {
        if s == "yes" {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }

    pub fn is_no(&self) -> bool {
        matches!(self, YesNo::No)
    }
}

/// New build vs replacement of an existing structure (patios only).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureType {
    #[default]
    New,
    Replacement,
}

impl StructureType {
    pub fn from_str(s: &str) -> Self {
        if s == "replacement" {
            StructureType::Replacement
        } else {
            StructureType::New
        }
    }
}

/// The category discriminant carried in the request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevelopmentType {
    Patio,
    Shed,
    RetainingWall,
}

impl DevelopmentType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "patio" => Some(DevelopmentType::Patio),
            "shed" => Some(DevelopmentType::Shed),
            "retain" => Some(DevelopmentType::RetainingWall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DevelopmentType::Patio => "patio",
            DevelopmentType::Shed => "shed",
            DevelopmentType::RetainingWall => "retain",
        }
    }
}

/// Patio / deck / pergola attributes (Subdivision 6). Distances in mm unless
/// noted; areas in m2; `roof_height` and `distance_dwelling` in metres.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatioAttributes {
    pub zoning: String,
    pub structure_type: StructureType,
    pub height_existing: f64,
    pub material_quality: YesNo,
    pub same_size: YesNo,
    pub heritage: YesNo,
    pub foreshore: YesNo,
    pub area: f64,
    pub land_size: f64,
    pub total_structures_area: f64,
    pub wall_height: YesNo,
    pub behind_building_line: YesNo,
    pub boundary_distance: f64,
    pub metal: YesNo,
    pub reflective: YesNo,
    pub floor_height: f64,
    pub roof: YesNo,
    pub overhang: f64,
    pub attached: YesNo,
    pub above_gutter: YesNo,
    pub roof_height: f64,
    pub fascia_connection: YesNo,
    pub engineer_spec: YesNo,
    pub stormwater: YesNo,
    pub drainage: YesNo,
    pub bushfire: YesNo,
    pub distance_dwelling: f64,
    pub non_combustible: YesNo,
}

/// Garden shed / cabana attributes (Subdivision 9).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShedAttributes {
    pub zoning: String,
    pub heritage: YesNo,
    pub foreshore: YesNo,
    pub sensitive_area: YesNo,
    pub area: f64,
    pub height: f64,
    pub boundary_distance: f64,
    pub building_line: YesNo,
    pub shipping_container: YesNo,
    pub stormwater: YesNo,
    pub metal: YesNo,
    pub reflective: YesNo,
    pub bushfire: YesNo,
    pub distance_dwelling: f64,
    pub non_combustible: YesNo,
    pub adjacent_building: YesNo,
    pub interfere: YesNo,
    pub habitable: YesNo,
    pub easement: YesNo,
    pub services: YesNo,
    pub existing_structures: YesNo,
}

/// Retaining wall attributes (Subdivision 33). Depths, heights and distances
/// in mm; fill area and land size in m2; fill volume in m3.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetainingWallAttributes {
    pub zoning: String,
    pub heritage: YesNo,
    pub heritage_conserv: YesNo,
    pub foreshore: YesNo,
    pub flood_control_lot: YesNo,
    pub cut_or_fill: f64,
    pub boundary_distance: f64,
    pub rear_yard: YesNo,
    pub waterbody_within_40m: YesNo,
    pub sediment_transfer: YesNo,
    pub height: f64,
    pub distance_other: f64,
    pub distance_easement: f64,
    pub stormwater: YesNo,
    pub fill_depth: f64,
    pub fill_area: f64,
    pub fill_volume: f64,
    pub land_size: f64,
    pub imported_fill: YesNo,
    pub venm: YesNo,
}

/// Fully-typed, normalized input for one assessment. Constructed once by the
/// normalizer and treated as immutable from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeSet {
    Patio(PatioAttributes),
    Shed(ShedAttributes),
    RetainingWall(RetainingWallAttributes),
}

impl AttributeSet {
    pub fn development_type(&self) -> DevelopmentType {
        match self {
            AttributeSet::Patio(_) => DevelopmentType::Patio,
            AttributeSet::Shed(_) => DevelopmentType::Shed,
            AttributeSet::RetainingWall(_) => DevelopmentType::RetainingWall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_from_code_valid() {
        assert_eq!(Zone::from_code("R1"), Some(Zone::R1));
        assert_eq!(Zone::from_code("RU6"), Some(Zone::RU6));
        assert_eq!(Zone::from_code("R5"), Some(Zone::R5));
    }

    #[test]
    fn zone_from_code_invalid() {
        assert_eq!(Zone::from_code("R9"), None);
        assert_eq!(Zone::from_code("B2"), None);
        assert_eq!(Zone::from_code(""), None);
        // Codes are normalized to uppercase before parsing
        assert_eq!(Zone::from_code("r1"), None);
    }

    #[test]
    fn zone_tiers() {
        assert!(Zone::RU2.is_rural_tier());
        assert!(Zone::R5.is_rural_tier());
        assert!(!Zone::R2.is_rural_tier());

        // R5 gets rural-tier setbacks but not the building-line waiver
        assert!(!Zone::R5.is_rural_use());
        assert!(Zone::RU1.is_rural_use());
    }

    #[test]
    fn yes_no_defaults_to_no() {
        assert_eq!(YesNo::from_str("yes"), YesNo::Yes);
        assert_eq!(YesNo::from_str("no"), YesNo::No);
        assert_eq!(YesNo::from_str(""), YesNo::No);
        assert_eq!(YesNo::from_str("maybe"), YesNo::No);
        assert_eq!(YesNo::default(), YesNo::No);
    }

    #[test]
    fn development_type_from_str() {
        assert_eq!(DevelopmentType::from_str("patio"), Some(DevelopmentType::Patio));
        assert_eq!(DevelopmentType::from_str("shed"), Some(DevelopmentType::Shed));
        assert_eq!(
            DevelopmentType::from_str("retain"),
            Some(DevelopmentType::RetainingWall)
        );
        assert_eq!(DevelopmentType::from_str("pool"), None);
        assert_eq!(DevelopmentType::from_str(""), None);
    }
}
