use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A place resolved from the user's query: coordinates plus the canonical
/// display name reported by the geocoding collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// One hour of forecast data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub precipitation_probability_pct: f64,
    pub rain_mm: f64,
}

/// Ordered hourly samples. Built only from index-aligned upstream arrays, so
/// every sample carries all four fields for the same hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    samples: Vec<HourlySample>,
}

impl ForecastSeries {
    pub fn new(samples: Vec<HourlySample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample treated as "current conditions": the first entry.
    pub fn current(&self) -> Option<&HourlySample> {
        self.samples.first()
    }

    /// Up to `n` upcoming samples, in upstream order.
    pub fn next_hours(&self, n: usize) -> &[HourlySample] {
        &self.samples[..self.samples.len().min(n)]
    }
}

/// The immutable value handed to the presentation layer on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub location: GeoLocation,
    pub series: ForecastSeries,
}

/// Tri-state lookup status driving the presentation layer. Exactly one
/// variant is active at a time; see [`crate::lookup::ForecastLookup`] for the
/// transitions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Success(ForecastResult),
    Failure(String),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
