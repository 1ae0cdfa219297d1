use serde::{Deserialize, Serialize};

/// Four-way temperature classification with inclusive, gap-containing bands.
///
/// The 51..=59 and 76..=84 bands are deliberately unclassified and map to
/// `Unknown`. The serialized `"unknown "` label carries a trailing space; the
/// upstream consumers of this shape already depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Characterization {
    #[serde(rename = "hot")]
    Hot,
    #[serde(rename = "cold")]
    Cold,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "unknown ")]
    Unknown,
}

impl Characterization {
    /// Classify a Fahrenheit temperature. Thresholds are ordered first-match.
    pub fn from_temperature(temperature: i32) -> Self {
        if temperature >= 85 {
            return Characterization::Hot;
        }

        if (60..=75).contains(&temperature) {
            return Characterization::Moderate;
        }

        if temperature <= 50 {
            return Characterization::Cold;
        }

        Characterization::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Characterization::Hot => "hot",
            Characterization::Cold => "cold",
            Characterization::Moderate => "moderate",
            Characterization::Unknown => "unknown ",
        }
    }
}

impl std::fmt::Display for Characterization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reduced forecast summary returned to callers: the first upstream
/// period's description and temperature plus its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecast_daily: String,

    #[serde(rename = "temperature_characterization")]
    pub characterization: Characterization,

    /// Degrees Fahrenheit, as reported by the upstream period.
    pub temperature: i32,
}

impl Forecast {
    /// Build a summary from one upstream period's fields.
    pub fn from_period(short_forecast: String, temperature: i32) -> Self {
        Forecast {
            characterization: Characterization::from_temperature(temperature),
            forecast_daily: short_forecast,
            temperature,
        }
    }
}

/// Client-facing failure envelope, serialized by the CLI layer for every
/// error kind uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}
