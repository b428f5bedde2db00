use anyhow::bail;
use clap::Parser;
use weathercast_core::{Config, ForecastLookup, LookupState};

use crate::render;

/// Default answer for the interactive prompt, matching the app's start-up
/// lookup.
const DEFAULT_CITY: &str = "Hyderabad";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathercast", version, about = "Hourly weather forecast for a city")]
pub struct Cli {
    /// City name to look up; prompts interactively when omitted.
    pub city: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let city = match self.city {
            Some(city) => city,
            None => prompt_city()?,
        };

        // The core contract requires a non-empty, trimmed query.
        let query = city.trim().to_string();
        if query.is_empty() {
            bail!("city name must not be empty");
        }

        let lookup = ForecastLookup::new(&Config::from_env())?;

        eprintln!("⏳ Loading weather...");

        match lookup.run(&query).await {
            LookupState::Success(result) => print!("{}", render::forecast_card(&result)),
            LookupState::Failure(reason) => {
                println!("❌ {reason}");
                std::process::exit(1);
            }
            state @ (LookupState::Idle | LookupState::Loading) => {
                bail!("lookup settled in unexpected state {state:?}");
            }
        }

        Ok(())
    }
}

fn prompt_city() -> anyhow::Result<String> {
    let city = inquire::Text::new("City:").with_default(DEFAULT_CITY).prompt()?;
    Ok(city)
}
