use std::env;

/// Default geocoding endpoint: the public Nominatim search API (no key required).
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Default forecast endpoint: the public Open-Meteo API (no key required).
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Base URLs for the two upstream collaborators.
///
/// Nothing is persisted; the configuration is rebuilt from the process
/// environment on every start.
#[derive(Debug, Clone)]
pub struct Config {
    pub geocode_url: String,
    pub weather_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

impl Config {
    /// Read `GEOCODE_URL` / `WEATHER_URL` overrides, falling back to the
    /// public endpoints when a variable is unset or blank.
    pub fn from_env() -> Self {
        Self {
            geocode_url: override_or(env::var("GEOCODE_URL").ok(), DEFAULT_GEOCODE_URL),
            weather_url: override_or(env::var("WEATHER_URL").ok(), DEFAULT_WEATHER_URL),
        }
    }
}

fn override_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoints() {
        let cfg = Config::default();

        assert_eq!(cfg.geocode_url, DEFAULT_GEOCODE_URL);
        assert_eq!(cfg.weather_url, DEFAULT_WEATHER_URL);
    }

    #[test]
    fn override_wins_when_set() {
        let url = override_or(Some("http://localhost:9100/search".into()), DEFAULT_GEOCODE_URL);
        assert_eq!(url, "http://localhost:9100/search");
    }

    #[test]
    fn unset_override_falls_back_to_default() {
        let url = override_or(None, DEFAULT_WEATHER_URL);
        assert_eq!(url, DEFAULT_WEATHER_URL);
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        let url = override_or(Some("   ".into()), DEFAULT_WEATHER_URL);
        assert_eq!(url, DEFAULT_WEATHER_URL);
    }
}
