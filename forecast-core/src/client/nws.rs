use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::{Config, Forecast, ForecastError};

use super::WeatherClient;

const BASE_URL: &str = "https://api.weather.gov";

const NON_200_FALLBACK: &str = "non 200 response from upstream";

/// Client for the National Weather Service API.
///
/// See https://www.weather.gov/documentation/services-web-api
///
/// Resolving a forecast is a two-hop dependent chain: the point lookup for a
/// coordinate pair yields the URL of the applicable forecast document, which
/// is then fetched and reduced to a [`Forecast`]. Each invocation is
/// stateless, so one client can serve concurrent lookups.
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PointResponse {
    properties: PointProperties,
}

#[derive(Debug, Deserialize)]
struct PointProperties {
    /// Absolute URL of the forecast document for this point.
    forecast: String,
}

#[derive(Debug, Deserialize)]
struct ForecastDocument {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
struct ForecastPeriod {
    #[serde(rename = "shortForecast")]
    short_forecast: String,
    temperature: i32,
}

/// Upstream's own failure shape on non-200 responses.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    detail: String,
}

impl NwsClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Client against an explicit base URL. This is the injection point that
    /// lets tests run against a local mock server instead of the real NWS.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a client applying the config's base URL and timeout overrides.
    /// Without a configured timeout, requests block as long as the transport
    /// allows.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone().unwrap_or_else(|| BASE_URL.to_string()),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET, one decode, no retries.
    ///
    /// Failure classification:
    /// - send or body-read failure: [`ForecastError::Transport`], carrying the
    ///   transport diagnostic verbatim
    /// - status other than 200: [`ForecastError::UpstreamStatus`], carrying the
    ///   upstream `detail` text when the error body parses, otherwise a fixed
    ///   fallback (4xx and 5xx are treated identically)
    /// - 200 with a non-conforming body: [`ForecastError::Decode`]
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ForecastError> {
        debug!(url, "requesting upstream document");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = res.status();
        let body = res.text().await.map_err(transport_error)?;

        if status.as_u16() != 200 {
            // try to get the error
            return match serde_json::from_str::<UpstreamErrorBody>(&body) {
                Ok(upstream) => Err(ForecastError::UpstreamStatus(upstream.detail)),
                Err(_) => Err(ForecastError::UpstreamStatus(NON_200_FALLBACK.to_string())),
            };
        }

        serde_json::from_str(&body).map_err(|e| ForecastError::Decode(e.to_string()))
    }
}

impl Default for NwsClient {
    fn default() -> Self {
        Self::new()
    }
}

/// reqwest's `Display` stops at the outermost error and hides the source
/// chain, which is where the actual diagnostic lives (DNS failure, connection
/// refused, TLS error). Render the whole chain so the caller sees it.
fn transport_error(err: reqwest::Error) -> ForecastError {
    ForecastError::Transport(format!("{:#}", anyhow::Error::from(err)))
}

/// Reduce a forecast document to its summary: the first period,
/// unconditionally.
fn summarize(document: ForecastDocument) -> Result<Forecast, ForecastError> {
    let period = document
        .properties
        .periods
        .into_iter()
        .next()
        .ok_or(ForecastError::EmptyForecast)?;

    Ok(Forecast::from_period(period.short_forecast, period.temperature))
}

#[async_trait]
impl WeatherClient for NwsClient {
    async fn get_forecast(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<Forecast, ForecastError> {
        // Coordinates are substituted as-is; malformed ones surface as
        // whatever error the upstream or transport produces.
        let url = format!("{}/points/{},{}", self.base_url, latitude, longitude);
        let point: PointResponse = self.fetch_json(&url).await?;

        let document: ForecastDocument = self.fetch_json(&point.properties.forecast).await?;

        summarize(document)
    }
}
