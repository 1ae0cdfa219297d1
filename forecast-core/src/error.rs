use thiserror::Error;

/// Failures surfaced by the forecast pipeline.
///
/// Every variant is terminal: nothing here is retried or enriched with extra
/// context, and the first error at any stage aborts the whole pipeline. The
/// caller sees only the message text; the core does not map error kinds to
/// HTTP status codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForecastError {
    /// The request never completed (DNS, connection refused, TLS, or a
    /// body-read failure). Carries the transport diagnostic verbatim.
    #[error("{0}")]
    Transport(String),

    /// Upstream answered with a non-200 status. Carries the upstream's own
    /// `detail` text when its error envelope parsed, otherwise a fixed
    /// fallback message.
    #[error("{0}")]
    UpstreamStatus(String),

    /// Upstream answered 200 but the body did not conform to the expected
    /// shape. Carries the parser diagnostic.
    #[error("{0}")]
    Decode(String),

    /// The forecast document's period list was empty, so there is no first
    /// period to summarize.
    #[error("upstream forecast contained no periods")]
    EmptyForecast,
}
