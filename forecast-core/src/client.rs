use crate::{Config, Forecast, ForecastError, client::nws::NwsClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod nws;

/// Abstraction over a forecast source.
///
/// Latitude and longitude are opaque strings: the core never parses or
/// validates them, it forwards them to the upstream as received.
#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    async fn get_forecast(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<Forecast, ForecastError>;
}

/// Construct the default client against the production upstream.
pub fn default_client() -> Box<dyn WeatherClient> {
    Box::new(NwsClient::new())
}

/// Construct a client from config, applying the base URL and timeout overrides.
pub fn client_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherClient>> {
    let client = NwsClient::from_config(config)?;
    Ok(Box::new(client))
}
