use crate::config::GeocoderConfig;
use crate::error::{AssessError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Client for the ArcGIS single-line geocoding endpoint. Coordinates are
/// purely additive to the audit log; a failed lookup never affects the
/// assessment verdict.
pub struct GeocodeClient {
    client: reqwest::Client,
    config: GeocoderConfig,
}

// ArcGIS geocode API response structures
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    candidates: Vec<GeocodeCandidateRaw>,
}

#[derive(Debug, Deserialize)]
struct GeocodeCandidateRaw {
    address: Option<String>,
    location: GeocodeLocation,
    score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct GeocodeLocation {
    x: f64,
    y: f64,
}

/// Best candidate returned for an address lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub address: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub score: Option<f64>,
}

impl GeocodeClient {
    pub fn new(config: GeocoderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, config })
    }

    /// Look up the best geocode candidate for an address string.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeCandidate> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AssessError::Geocode("Missing address".into()));
        }

        let response = self
            .client
            .get(&self.config.url)
            .query(&[
                ("SingleLine", address),
                ("f", "json"),
                ("token", &self.config.api_key),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: GeocodeResponse = response.json().await?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AssessError::Geocode(format!("No candidates found for '{address}'")))?;

        Ok(GeocodeCandidate {
            address: candidate.address,
            longitude: candidate.location.x,
            latitude: candidate.location.y,
            score: candidate.score,
        })
    }
}
