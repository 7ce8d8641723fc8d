use async_trait::async_trait;
use reqwest::Client;

use crate::error::FetchError;
use crate::model::{ForecastQuery, ForecastResponse};

use super::ForecastProvider;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Client for the Open-Meteo forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    base_url: String,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: OPEN_METEO_URL.to_string(),
        }
    }

    /// Point the provider at a different endpoint. Used by tests to talk to
    /// a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResponse, FetchError> {
        tracing::debug!(
            latitude = query.latitude,
            longitude = query.longitude,
            timezone = %query.timezone,
            "requesting forecast"
        );

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", query.latitude.to_string()),
                ("longitude", query.longitude.to_string()),
                ("current", query.current_param()),
                ("hourly", query.hourly_param()),
                ("timezone", query.timezone.clone()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let body = res.text().await?;
        let parsed: ForecastResponse = serde_json::from_str(&body)?;
        parsed.validate()?;

        Ok(parsed)
    }
}
