use thiserror::Error;

/// Weather lookup failure. Network errors, empty results and malformed
/// payloads all collapse into this one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("No weather data found for '{0}'")]
    NotFound(String),
}

/// Generative-text call failure, carrying the underlying message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdviceError {
    #[error("{0}")]
    Upstream(String),
}

impl From<reqwest::Error> for AdviceError {
    fn from(err: reqwest::Error) -> Self {
        AdviceError::Upstream(err.to_string())
    }
}
