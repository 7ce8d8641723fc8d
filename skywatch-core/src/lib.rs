//! Core library for the `skywatch` weather dashboard.
//!
//! This crate defines:
//! - The static city registry and configuration handling
//! - Forecast query/response models for the Open-Meteo endpoint
//! - The fetch state machine (loading/success/failure, generation-guarded)
//! - Pure view derivations: indicators, chart series, paginated table rows
//!
//! It is used by `skywatch-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod provider;
pub mod registry;
pub mod view;

pub use config::Config;
pub use error::FetchError;
pub use fetch::{CycleToken, DashboardState, FetchState};
pub use model::{ForecastQuery, ForecastResponse};
pub use provider::{ForecastProvider, open_meteo::OpenMeteoProvider};
pub use registry::City;
