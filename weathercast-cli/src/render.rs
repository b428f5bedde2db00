//! Human-friendly output formatting for the forecast card.

use std::fmt::Write as _;

use weathercast_core::{ForecastResult, HourlySample};

/// Number of upcoming entries shown under "Next 5 Hours".
const NEXT_HOURS: usize = 5;

/// Render the summary card: resolved location, current conditions (the first
/// hourly sample), then up to five upcoming entries.
pub fn forecast_card(result: &ForecastResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📍 {}", result.location.display_name);

    if let Some(current) = result.series.current() {
        let _ = writeln!(out, "🌡️ Current Temp: {}°C", current.temperature_c);
        let _ = writeln!(out, "🌧️ Rain Probability: {}%", current.precipitation_probability_pct);
        let _ = writeln!(out, "🌧️ Rainfall: {} mm", current.rain_mm);
    }

    let upcoming = result.series.next_hours(NEXT_HOURS);
    if !upcoming.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Next 5 Hours");
        for sample in upcoming {
            let _ = writeln!(out, "  {}", hourly_line(sample));
        }
    }

    out
}

fn hourly_line(sample: &HourlySample) -> String {
    format!(
        "{} — {}°C, {}% rain, {} mm rainfall",
        sample.timestamp.format("%H:%M"),
        sample.temperature_c,
        sample.precipitation_probability_pct,
        sample.rain_mm,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weathercast_core::{ForecastSeries, GeoLocation};

    fn sample(hour: u32, temp: f64) -> HourlySample {
        let timestamp = NaiveDate::from_ymd_opt(2026, 8, 7)
            .expect("valid date")
            .and_hms_opt(hour, 0, 0)
            .expect("valid time");

        HourlySample {
            timestamp,
            temperature_c: temp,
            precipitation_probability_pct: 40.0,
            rain_mm: 0.2,
        }
    }

    fn result_with_hours(n: u32) -> ForecastResult {
        ForecastResult {
            location: GeoLocation {
                latitude: 17.38,
                longitude: 78.48,
                display_name: "Hyderabad, India".to_string(),
            },
            series: ForecastSeries::new(
                (0..n).map(|h| sample(h, 30.0 - f64::from(h))).collect(),
            ),
        }
    }

    fn upcoming_lines(card: &str) -> Vec<&str> {
        card.lines().filter(|l| l.starts_with("  ")).collect()
    }

    #[test]
    fn card_shows_current_conditions_from_the_first_sample() {
        let card = forecast_card(&result_with_hours(6));

        assert!(card.contains("📍 Hyderabad, India"));
        assert!(card.contains("🌡️ Current Temp: 30°C"));
        assert!(card.contains("🌧️ Rain Probability: 40%"));
        assert!(card.contains("🌧️ Rainfall: 0.2 mm"));
    }

    #[test]
    fn card_lists_at_most_five_upcoming_hours_in_order() {
        let card = forecast_card(&result_with_hours(8));
        let lines = upcoming_lines(&card);

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("  00:00 — 30°C"));
        assert!(lines[4].starts_with("  04:00 — 26°C"));
    }

    #[test]
    fn short_series_lists_every_entry() {
        let card = forecast_card(&result_with_hours(3));
        assert_eq!(upcoming_lines(&card).len(), 3);
    }

    #[test]
    fn empty_series_renders_location_only() {
        let card = forecast_card(&result_with_hours(0));

        assert!(card.contains("📍 Hyderabad, India"));
        assert!(!card.contains("Current Temp"));
        assert!(!card.contains("Next 5 Hours"));
    }

    #[test]
    fn hourly_line_formats_local_time_as_hour_minute() {
        let line = hourly_line(&sample(14, 27.5));
        assert!(line.starts_with("14:00 — 27.5°C"));
    }
}
