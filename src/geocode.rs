//! Location lookup for map display.
//!
//! Resolves a free-text location to the first matching coordinate pair using
//! a Nominatim-compatible `search` endpoint. Lookups are independent of the
//! store and never mutate it.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{DirectoryError, Result};

/// Map center used before a location has been resolved.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 51.505,
    lon: -0.09,
};

/// Zoom level the map uses for a resolved location.
pub const DEFAULT_ZOOM: u8 = 13;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lon)
    }
}

/// Something that can turn a location string into coordinates.
pub trait Geocoder {
    /// `Ok(None)` means the location was not found.
    fn locate(&self, query: &str) -> Result<Option<Coordinates>>;
}

// =============================================================================
// Response Parsing
// =============================================================================

/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Parse a `format=json` search response, keeping only the first hit.
pub fn parse_search_response(body: &str) -> Result<Option<Coordinates>> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)
        .map_err(|e| DirectoryError::Geocode(format!("Malformed response: {}", e)))?;

    let Some(first) = hits.into_iter().next() else {
        return Ok(None);
    };

    let lat = parse_coordinate("lat", &first.lat)?;
    let lon = parse_coordinate("lon", &first.lon)?;
    Ok(Some(Coordinates { lat, lon }))
}

fn parse_coordinate(name: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| DirectoryError::Geocode(format!("Invalid {} '{}'", name, value)))
}

// =============================================================================
// Nominatim Client
// =============================================================================

pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Geocoder for NominatimGeocoder {
    fn locate(&self, query: &str) -> Result<Option<Coordinates>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/search", self.base_url);
        debug!(%url, query, "geocoding location");

        let body = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json")])
            .send()?
            .error_for_status()?
            .text()?;

        parse_search_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hit_wins() {
        let body = r#"[
            {"lat": "51.5073219", "lon": "-0.1276474", "display_name": "London"},
            {"lat": "42.9832406", "lon": "-81.243372", "display_name": "London, Ontario"}
        ]"#;
        let coords = parse_search_response(body).unwrap().unwrap();
        assert!((coords.lat - 51.5073219).abs() < 1e-9);
        assert!((coords.lon + 0.1276474).abs() < 1e-9);
    }

    #[test]
    fn test_empty_result_is_not_found() {
        assert_eq!(parse_search_response("[]").unwrap(), None);
    }

    #[test]
    fn test_malformed_response_is_error() {
        assert!(matches!(
            parse_search_response("<html>busy</html>"),
            Err(DirectoryError::Geocode(_))
        ));
        assert!(parse_search_response(r#"[{"lat": "north", "lon": "1"}]"#).is_err());
    }

    #[test]
    fn test_blank_query_skips_request() {
        // Unroutable base URL: a request would fail, a skipped one returns None.
        let geocoder = NominatimGeocoder::new("http://127.0.0.1:9/", "test-agent").unwrap();
        assert_eq!(geocoder.base_url(), "http://127.0.0.1:9");
        assert_eq!(geocoder.locate("   ").unwrap(), None);
    }

    #[test]
    fn test_coordinates_display() {
        assert_eq!(DEFAULT_CENTER.to_string(), "51.50500, -0.09000");
    }
}
