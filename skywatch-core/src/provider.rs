use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::{ForecastQuery, ForecastResponse};

pub mod open_meteo;

/// Source of forecast data.
///
/// The dashboard's fetch cycle only ever talks to this trait, so tests can
/// drive the state machine with a canned provider instead of the network.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Issue exactly one request for `query` and return the parsed,
    /// validated response. No caching, no retry.
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResponse, FetchError>;
}
