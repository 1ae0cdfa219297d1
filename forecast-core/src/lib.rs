//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration handling (upstream base URL override, request timeout)
//! - Abstraction over the upstream weather client
//! - Shared domain models (forecast summary, temperature characterization)
//! - The error taxonomy for upstream failures
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{WeatherClient, client_from_config, default_client, nws::NwsClient};
pub use config::Config;
pub use error::ForecastError;
pub use model::{ApiError, Characterization, Forecast};
