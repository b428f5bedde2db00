use anyhow::anyhow;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::LookupError,
    model::{ForecastSeries, HourlySample},
};

use super::truncate_body;

/// Hourly fields requested from the forecast collaborator; the response
/// carries one index-aligned array per field.
const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,rain";

/// Client for the Open-Meteo-shaped forecast collaborator.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    precipitation_probability: Vec<f64>,
    rain: Vec<f64>,
}

impl ForecastClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    /// Fetch the hourly series for the given coordinates.
    ///
    /// Fails with [`LookupError::Upstream`] on a non-success status.
    pub async fn hourly(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastSeries, LookupError> {
        debug!("fetching forecast for ({latitude}, {longitude})");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!("forecast request failed with status {}: {}", status, truncate_body(&body));
            return Err(LookupError::Upstream(status));
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)
            .map_err(|err| LookupError::Unknown(anyhow!("malformed forecast response: {err}")))?;

        normalize(parsed.hourly)
    }
}

/// Zip the four parallel arrays into samples, refusing misaligned input.
fn normalize(hourly: HourlyBlock) -> Result<ForecastSeries, LookupError> {
    let len = hourly.time.len();
    if hourly.temperature_2m.len() != len
        || hourly.precipitation_probability.len() != len
        || hourly.rain.len() != len
    {
        return Err(LookupError::Unknown(anyhow!(
            "hourly arrays are not index-aligned: time={}, temperature={}, probability={}, rain={}",
            len,
            hourly.temperature_2m.len(),
            hourly.precipitation_probability.len(),
            hourly.rain.len(),
        )));
    }

    let mut samples = Vec::with_capacity(len);
    for i in 0..len {
        samples.push(HourlySample {
            timestamp: parse_hour(&hourly.time[i])?,
            temperature_c: hourly.temperature_2m[i],
            precipitation_probability_pct: hourly.precipitation_probability[i],
            rain_mm: hourly.rain[i],
        });
    }

    Ok(ForecastSeries::new(samples))
}

/// The collaborator emits minute-precision ISO-8601 timestamps; some
/// deployments include seconds.
fn parse_hour(raw: &str) -> Result<NaiveDateTime, LookupError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|err| {
            LookupError::Unknown(anyhow!("unparseable hourly timestamp {raw:?}: {err}"))
        })
}
