use thiserror::Error;

/// Everything that can go wrong between issuing a forecast request and
/// holding a validated [`ForecastResponse`](crate::model::ForecastResponse).
///
/// All variants are flattened into the message of
/// [`FetchState::Failure`](crate::fetch::FetchState::Failure) at the fetch
/// boundary; nothing here crosses into the presentation layer.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The forecast endpoint answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The request never produced a usable response (DNS, TLS, timeout...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not the JSON we expect.
    #[error("failed to parse forecast response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON parsed but violated a shape invariant.
    #[error("malformed forecast response: {0}")]
    Shape(String),
}
