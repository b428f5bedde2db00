use anyhow::anyhow;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{error::LookupError, model::GeoLocation};

use super::truncate_body;

/// Client for the Nominatim-shaped geocoding collaborator.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: Client,
    base_url: String,
}

/// One match from the geocoding response. Latitude and longitude arrive as
/// strings and are parsed before use.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: String,
}

impl GeocodeClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    /// Resolve a free-text place name to the first matching location.
    ///
    /// Fails with [`LookupError::NotFound`] when the match list is empty.
    pub async fn resolve(&self, query: &str) -> Result<GeoLocation, LookupError> {
        debug!("geocoding {query:?}");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LookupError::Unknown(anyhow!(
                "geocoding request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let places: Vec<Place> = serde_json::from_str(&body)
            .map_err(|err| LookupError::Unknown(anyhow!("malformed geocoding response: {err}")))?;

        let place = places.into_iter().next().ok_or(LookupError::NotFound)?;

        let latitude = parse_coordinate(&place.lat, "latitude", 90.0)?;
        let longitude = parse_coordinate(&place.lon, "longitude", 180.0)?;

        debug!("resolved {query:?} to {} ({latitude}, {longitude})", place.display_name);

        Ok(GeoLocation { latitude, longitude, display_name: place.display_name })
    }
}

/// The collaborator emits string-typed coordinates; accept only finite values
/// within the axis bound.
fn parse_coordinate(raw: &str, axis: &str, bound: f64) -> Result<f64, LookupError> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        LookupError::Unknown(anyhow!("non-numeric {axis} {raw:?} in geocoding response"))
    })?;

    if !value.is_finite() || value.abs() > bound {
        return Err(LookupError::Unknown(anyhow!("{axis} {raw:?} is out of range")));
    }

    Ok(value)
}
