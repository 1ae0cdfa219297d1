use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{ApiError, Config, client_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "NWS forecast resolver")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the upstream base URL and request timeout.
    Configure,

    /// Resolve the forecast for a coordinate pair.
    Get {
        /// The latitude of the desired location (e.g. 39.7456).
        latitude: String,

        /// The longitude of the desired location (e.g. -97.0892).
        longitude: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Get { latitude, longitude } => get(&latitude, &longitude).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let base_url = inquire::Text::new("Upstream base URL (empty for the default NWS endpoint):")
        .with_initial_value(config.base_url.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read base URL")?;

    let timeout = inquire::Text::new("Request timeout in seconds (empty for no timeout):")
        .with_initial_value(
            config.timeout_secs.map(|s| s.to_string()).unwrap_or_default().as_str(),
        )
        .prompt()
        .context("Failed to read timeout")?;

    config.base_url = match base_url.trim() {
        "" => None,
        url => Some(url.to_string()),
    };

    config.timeout_secs = match timeout.trim() {
        "" => None,
        secs => Some(secs.parse().context("Timeout must be a whole number of seconds")?),
    };

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn get(latitude: &str, longitude: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = client_from_config(&config)?;

    match client.get_forecast(latitude, longitude).await {
        Ok(forecast) => {
            println!("{}", serde_json::to_string_pretty(&forecast)?);
            Ok(())
        }
        Err(err) => {
            // Every error kind maps to the same envelope; the core does not
            // distinguish failure kinds at this boundary.
            let envelope = ApiError { message: err.to_string() };
            eprintln!("{}", serde_json::to_string_pretty(&envelope)?);
            std::process::exit(1);
        }
    }
}
