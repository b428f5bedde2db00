use reqwest::StatusCode;
use thiserror::Error;

/// Failures a lookup can settle into.
///
/// The `Display` of each variant is the exact message surfaced to the user;
/// diagnostic detail rides along as the source on [`LookupError::Unknown`].
#[derive(Debug, Error)]
pub enum LookupError {
    /// Geocoding returned no match for the query.
    #[error("City not found")]
    NotFound,

    /// The forecast collaborator answered with a non-success status.
    #[error("Failed to fetch weather data")]
    Upstream(StatusCode),

    /// Anything else: transport failures, malformed or misaligned bodies.
    #[error("Unknown error occurred")]
    Unknown(#[source] anyhow::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unknown(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn not_found_message() {
        assert_eq!(LookupError::NotFound.to_string(), "City not found");
    }

    #[test]
    fn upstream_message_hides_status_detail() {
        let err = LookupError::Upstream(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to fetch weather data");
    }

    #[test]
    fn unknown_message_is_generic() {
        let err = LookupError::Unknown(anyhow!("connection reset"));
        assert_eq!(err.to_string(), "Unknown error occurred");
    }
}
