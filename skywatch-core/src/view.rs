//! Pure derivations from a settled [`ForecastResponse`] into the shapes the
//! renderer prints: indicator lines, chart series, table rows. Nothing here
//! mutates fetch state or looks at the network.

use crate::model::ForecastResponse;

/// A chart never shows more than this many leading points per series.
pub const CHART_POINTS: usize = 10;

/// Default rows per table page.
pub const PAGE_SIZE: usize = 5;

/// One current-conditions readout.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub title: String,
    pub value: f64,
    pub unit: String,
}

/// One table row: an hourly timestamp split into its date and time parts,
/// zipped with the value of each requested series at that index.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRow {
    pub id: usize,
    pub date: String,
    pub time: String,
    /// One entry per requested field, `None` when the series or the point
    /// is absent. Direct lookup, no validation.
    pub values: Vec<Option<f64>>,
}

/// One line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<f64>,
}

/// Chart-ready data: hour labels on the x axis, one truncated series per
/// requested field.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub x_labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Human title for the stock dashboard fields, the raw name otherwise.
pub fn field_title(field: &str) -> String {
    match field {
        "temperature_2m" => "Temperature (2m)".to_string(),
        "apparent_temperature" => "Apparent temperature".to_string(),
        "relative_humidity_2m" => "Relative humidity".to_string(),
        "wind_speed_10m" => "Wind speed".to_string(),
        other => other.to_string(),
    }
}

/// One indicator per current field, unit taken from `current_units`.
pub fn indicators(resp: &ForecastResponse) -> Vec<Indicator> {
    resp.current
        .values
        .iter()
        .map(|(field, value)| Indicator {
            title: field_title(field),
            value: *value,
            unit: resp.current_unit(field).to_string(),
        })
        .collect()
}

fn split_timestamp(ts: &str) -> (String, String) {
    match ts.split_once('T') {
        Some((date, time)) => (date.to_string(), time.to_string()),
        None => (ts.to_string(), String::new()),
    }
}

/// Zip the hourly time axis with the named series into table rows.
pub fn hourly_rows(resp: &ForecastResponse, fields: &[&str]) -> Vec<HourlyRow> {
    resp.hourly
        .time
        .iter()
        .enumerate()
        .map(|(id, ts)| {
            let (date, time) = split_timestamp(ts);
            let values = fields
                .iter()
                .map(|field| resp.hourly.series.get(*field).and_then(|s| s.get(id)).copied())
                .collect();
            HourlyRow { id, date, time, values }
        })
        .collect()
}

/// Chart data for the named series, truncated to [`CHART_POINTS`].
pub fn chart(resp: &ForecastResponse, fields: &[&str]) -> Chart {
    let x_labels = resp
        .hourly
        .time
        .iter()
        .take(CHART_POINTS)
        .map(|ts| split_timestamp(ts).1)
        .collect();

    let series = fields
        .iter()
        .map(|field| ChartSeries {
            label: field_title(field),
            points: resp
                .hourly
                .series
                .get(*field)
                .map(|s| s.iter().take(CHART_POINTS).copied().collect())
                .unwrap_or_default(),
        })
        .collect();

    Chart { x_labels, series }
}

/// Client-side paging: the `page`-th slice of at most `page_size` rows.
pub fn page<T>(rows: &[T], page_size: usize, page: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Number of pages needed to show `len` rows.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { len.div_ceil(page_size) }
}
