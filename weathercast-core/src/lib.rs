//! Core library for the `weathercast` CLI.
//!
//! This crate defines:
//! - Configuration for the two upstream endpoints
//! - Clients for the geocoding and forecast collaborators
//! - Shared domain models and the lookup state machine
//!
//! It is used by `weathercast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;

pub use client::{ForecastClient, GeocodeClient};
pub use config::Config;
pub use error::LookupError;
pub use lookup::ForecastLookup;
pub use model::{ForecastResult, ForecastSeries, GeoLocation, HourlySample, LookupState};
