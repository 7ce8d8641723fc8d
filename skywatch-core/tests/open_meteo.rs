//! Integration tests for `OpenMeteoProvider` against a local mock server.

use skywatch_core::{
    DashboardState, FetchError, ForecastProvider, ForecastQuery, OpenMeteoProvider, registry,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORECAST_PATH: &str = "/v1/forecast";

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": -2.2,
        "longitude": -79.9,
        "generationtime_ms": 0.3,
        "utc_offset_seconds": -18000,
        "timezone": "America/Guayaquil",
        "timezone_abbreviation": "-05",
        "elevation": 4.0,
        "current_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature_2m": "°C",
            "relative_humidity_2m": "%",
            "apparent_temperature": "°C",
            "wind_speed_10m": "km/h"
        },
        "current": {
            "time": "2024-01-01T12:00",
            "interval": 900,
            "temperature_2m": 27.9,
            "relative_humidity_2m": 64.0,
            "apparent_temperature": 30.8,
            "wind_speed_10m": 8.2
        },
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "wind_speed_10m": "km/h"
        },
        "hourly": {
            "time": ["2024-01-01T00:00", "2024-01-01T01:00"],
            "temperature_2m": [24.0, 23.7],
            "wind_speed_10m": [5.1, 4.8]
        }
    })
}

fn provider_for(server: &MockServer) -> OpenMeteoProvider {
    OpenMeteoProvider::with_base_url(format!("{}{FORECAST_PATH}", server.uri()))
}

fn default_query() -> ForecastQuery {
    ForecastQuery::for_city(registry::default_city(), "America/Guayaquil")
}

#[tokio::test]
async fn fetch_sends_comma_joined_fields_and_parses_the_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .and(query_param(
            "current",
            "temperature_2m,relative_humidity_2m,apparent_temperature,wind_speed_10m",
        ))
        .and(query_param("hourly", "temperature_2m,wind_speed_10m"))
        .and(query_param("timezone", "America/Guayaquil"))
        .and(query_param("latitude", "-2.1962"))
        .and(query_param("longitude", "-79.8862"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let resp = provider_for(&server).fetch(&default_query()).await.unwrap();

    assert_eq!(resp.timezone, "America/Guayaquil");
    assert_eq!(resp.current.values["temperature_2m"], 27.9);
    assert_eq!(resp.hourly.time.len(), 2);
    assert_eq!(resp.hourly.series["wind_speed_10m"], vec![5.1, 4.8]);
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = provider_for(&server).fetch(&default_query()).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 500 }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn malformed_json_maps_to_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = provider_for(&server).fetch(&default_query()).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn series_shorter_than_time_axis_is_rejected() {
    let server = MockServer::start().await;

    let mut body = forecast_body();
    body["hourly"]["temperature_2m"] = serde_json::json!([24.0]);

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = provider_for(&server).fetch(&default_query()).await.unwrap_err();
    assert!(matches!(err, FetchError::Shape(_)));
    assert!(err.to_string().contains("temperature_2m"));
}

#[tokio::test]
async fn identical_queries_issue_independent_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(2)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let query = default_query();

    let first = provider.fetch(&query).await.unwrap();
    let second = provider.fetch(&query).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn dashboard_refresh_settles_into_success_against_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .and(query_param("latitude", "-0.1807"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let mut dash = DashboardState::new();
    dash.select_city("quito").unwrap();

    let state = dash.refresh(&provider, "America/Guayaquil").await;
    let resp = state.data().expect("refresh must settle into success");

    for (field, series) in &resp.hourly.series {
        assert_eq!(series.len(), resp.hourly.time.len(), "hourly.{field}");
    }
}
