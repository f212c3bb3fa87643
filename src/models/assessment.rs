use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level verdict of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Exempt,
    #[serde(rename = "Non-Exempt")]
    NonExempt,
    Invalid,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Exempt => "Exempt",
            Classification::NonExempt => "Non-Exempt",
            Classification::Invalid => "Invalid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Exempt" => Some(Classification::Exempt),
            "Non-Exempt" => Some(Classification::NonExempt),
            "Invalid" => Some(Classification::Invalid),
            _ => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One failed clause: a human-readable reason and the clause path that backs
/// it ("sec.2.18 (1)(c)"). An empty citation marks a structural message with
/// no clause behind it, e.g. the unsupported-zone notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub message: String,
    pub citation: String,
}

impl Violation {
    pub fn cited(message: impl Into<String>, citation: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            citation: citation.into(),
        }
    }

    pub fn uncited(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            citation: String::new(),
        }
    }

    pub fn has_citation(&self) -> bool {
        !self.citation.is_empty()
    }
}

/// Raw evaluator output: the ordered violation list (header/success line
/// included) plus the classification, before line assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub classification: Classification,
    pub violations: Vec<Violation>,
}

impl Evaluation {
    pub fn new(classification: Classification, violations: Vec<Violation>) -> Self {
        Self {
            classification,
            violations,
        }
    }
}

/// Final assessment output. Built once per request and never mutated after
/// construction; `lines` mirrors the violation order with resolved reference
/// URLs interleaved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub classification: Classification,
    pub violations: Vec<Violation>,
    pub lines: Vec<String>,
}

/// One row of the append-only audit log. Address and coordinates are filled
/// in by the geocoder when available; they never influence the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Option<i64>,
    pub timestamp: DateTime<Utc>,
    pub classification: Classification,
    pub input_json: String,
    pub response_json: String,
    pub address: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl AssessmentRecord {
    pub fn new(
        classification: Classification,
        input_json: impl Into<String>,
        response_json: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            timestamp: Utc::now(),
            classification,
            input_json: input_json.into(),
            response_json: response_json.into(),
            address: None,
            longitude: None,
            latitude: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_coordinates(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = Some(longitude);
        self.latitude = Some(latitude);
        self
    }
}
