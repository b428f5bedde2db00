use reqwest::Client;

use crate::error::LookupError;

pub mod forecast;
pub mod geocode;

pub use forecast::ForecastClient;
pub use geocode::GeocodeClient;

/// Identifies the application to the upstream services; Nominatim rejects
/// anonymous clients.
const USER_AGENT: &str = concat!("weathercast/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for both collaborators.
pub(crate) fn http_client() -> Result<Client, LookupError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
