//! The fetch lifecycle: one selected city, one three-state fetch result,
//! one generation counter guarding against stale settles.

use anyhow::{Result, anyhow};

use crate::error::FetchError;
use crate::model::{ForecastQuery, ForecastResponse};
use crate::provider::ForecastProvider;
use crate::registry::{self, City};

/// Outcome of the current fetch cycle.
///
/// A tagged union so that illegal combinations (data and error both set)
/// are unrepresentable. Overwritten whole on every transition, never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// No cycle has started yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last cycle settled with data.
    Success(ForecastResponse),
    /// The last cycle settled with an error message.
    Failure(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&ForecastResponse> {
        match self {
            FetchState::Success(resp) => Some(resp),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failure(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Handle for one fetch cycle. Settling with a token from a superseded
/// cycle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleToken {
    generation: u64,
}

/// Owned state of the dashboard: the selected city plus the fetch lifecycle.
///
/// The upstream has no guard against a slow response for a previously
/// selected city landing after a newer one; here every cycle carries a
/// generation and stale settles are discarded.
#[derive(Debug, Default)]
pub struct DashboardState {
    selected_city: Option<String>,
    state: FetchState,
    generation: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// The city the next cycle will fetch for: the selection when one is
    /// stored, the registry default otherwise.
    pub fn city(&self) -> &'static City {
        self.selected_city
            .as_deref()
            .and_then(registry::find)
            .unwrap_or_else(registry::default_city)
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    /// Store a new selection. The caller starts the next cycle; any cycle
    /// already in flight will settle stale and be discarded.
    pub fn select_city(&mut self, key: &str) -> Result<()> {
        let city = registry::find(key)
            .ok_or_else(|| anyhow!("Unknown city '{key}'. Run `skywatch cities` for the list."))?;
        self.selected_city = Some(city.key.to_string());
        Ok(())
    }

    /// Begin a new fetch cycle: state goes to Loading and every earlier
    /// token is invalidated.
    pub fn begin_cycle(&mut self) -> CycleToken {
        self.generation += 1;
        self.state = FetchState::Loading;
        CycleToken { generation: self.generation }
    }

    /// Settle a cycle. Returns `true` when the result was applied, `false`
    /// when the token was stale and the result dropped.
    pub fn settle(
        &mut self,
        token: CycleToken,
        result: Result<ForecastResponse, FetchError>,
    ) -> bool {
        if token.generation != self.generation {
            tracing::warn!(
                stale = token.generation,
                current = self.generation,
                "discarding settle from superseded fetch cycle"
            );
            return false;
        }
        self.state = match result {
            Ok(resp) => FetchState::Success(resp),
            Err(err) => FetchState::Failure(err.to_string()),
        };
        true
    }

    /// Run one full cycle against `provider` for the effective city and
    /// return the settled state.
    pub async fn refresh<P: ForecastProvider + ?Sized>(
        &mut self,
        provider: &P,
        timezone: &str,
    ) -> &FetchState {
        let token = self.begin_cycle();
        let query = ForecastQuery::for_city(self.city(), timezone);
        let result = provider.fetch(&query).await;
        self.settle(token, result);
        &self.state
    }
}
