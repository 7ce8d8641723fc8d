//! Terminal rendering for a settled fetch state: indicator lines, one
//! sparkline per hourly series, and a paginated table.

use chrono::NaiveDateTime;
use skywatch_core::{City, FetchState, ForecastResponse, model, view};

/// Which table page(s) to print.
#[derive(Debug, Clone, Copy)]
pub struct TablePaging {
    pub page: usize,
    pub page_size: usize,
    pub all_pages: bool,
}

/// Render the whole dashboard for the current fetch state.
pub fn dashboard(city: &City, state: &FetchState, pages: &TablePaging) {
    match state {
        FetchState::Idle | FetchState::Loading => println!("Loading data..."),
        FetchState::Failure(msg) => println!("Error: {msg}"),
        FetchState::Success(resp) => render_response(city, resp, pages),
    }
}

fn render_response(city: &City, resp: &ForecastResponse, pages: &TablePaging) {
    let fields: Vec<&str> = model::DEFAULT_HOURLY_FIELDS.to_vec();

    println!("{} (as of {})", city.name, format_observation_time(&resp.current.time));
    println!();

    for ind in view::indicators(resp) {
        println!("  {:<22} {} {}", ind.title, ind.value, ind.unit);
    }
    println!();

    render_chart(resp, &fields);
    println!();

    render_table(resp, &fields, pages);
}

fn format_observation_time(ts: &str) -> String {
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M")
        .map(|dt| dt.format("%b %d, %H:%M").to_string())
        .unwrap_or_else(|_| ts.to_string())
}

const SPARK_BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One block character per point, scaled between the series min and max.
fn sparkline(points: &[f64]) -> String {
    let Some(min) = points.iter().copied().reduce(f64::min) else {
        return String::new();
    };
    let max = points.iter().copied().fold(min, f64::max);
    let span = max - min;

    points
        .iter()
        .map(|v| {
            if span < f64::EPSILON {
                SPARK_BLOCKS[3]
            } else {
                let norm = (v - min) / span;
                SPARK_BLOCKS[((norm * 7.0).round() as usize).min(7)]
            }
        })
        .collect()
}

fn render_chart(resp: &ForecastResponse, fields: &[&str]) {
    let chart = view::chart(resp, fields);
    let (Some(first), Some(last)) = (chart.x_labels.first(), chart.x_labels.last()) else {
        println!("  (no hourly data)");
        return;
    };

    println!("  Hourly, first {} hours ({first} - {last})", chart.x_labels.len());
    for series in &chart.series {
        let Some(min) = series.points.iter().copied().reduce(f64::min) else {
            continue;
        };
        let max = series.points.iter().copied().fold(min, f64::max);
        println!(
            "  {:<22} {}  [{min:.1} .. {max:.1}]",
            series.label,
            sparkline(&series.points)
        );
    }
}

fn render_table(resp: &ForecastResponse, fields: &[&str], pages: &TablePaging) {
    let rows = view::hourly_rows(resp, fields);
    let total = view::page_count(rows.len(), pages.page_size);
    if total == 0 {
        println!("  (no rows)");
        return;
    }

    let page_indexes: Vec<usize> = if pages.all_pages {
        (0..total).collect()
    } else {
        vec![pages.page.min(total - 1)]
    };

    print!("  {:>4}  {:<12}{:<8}", "ID", "Date", "Time");
    for field in fields {
        print!("{:>22}", view::field_title(field));
    }
    println!();

    for index in page_indexes {
        for row in view::page(&rows, pages.page_size, index) {
            print!("  {:>4}  {:<12}{:<8}", row.id, row.date, row.time);
            for value in &row.values {
                match value {
                    Some(v) => print!("{v:>22.1}"),
                    None => print!("{:>22}", "-"),
                }
            }
            println!();
        }
        println!("  page {}/{total}", index + 1);
    }
}
