use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use skywatch_core::{Config, DashboardState, OpenMeteoProvider, registry, view};

use crate::render::{self, TablePaging};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about = "Terminal weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dashboard once for a city.
    Show {
        /// City key, e.g. "guayaquil". Uses the configured default when omitted.
        city: Option<String>,

        /// Table page to print (zero-based).
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Rows per table page.
        #[arg(long, default_value_t = view::PAGE_SIZE)]
        page_size: usize,

        /// Print every table page instead of one.
        #[arg(long)]
        all_pages: bool,
    },

    /// Interactive dashboard: pick cities until you quit (Esc).
    Dashboard,

    /// List the cities the dashboard knows about.
    Cities,

    /// Store the default city and timezone.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Show { city, page, page_size, all_pages } => {
                show(city, TablePaging { page, page_size, all_pages }).await
            }
            Command::Dashboard => dashboard().await,
            Command::Cities => {
                for city in registry::all() {
                    println!(
                        "{:<12} {:<12} lat {:>9.4}  lon {:>10.4}",
                        city.key, city.name, city.latitude, city.longitude
                    );
                }
                Ok(())
            }
            Command::Configure => configure(),
        }
    }
}

async fn show(city: Option<String>, pages: TablePaging) -> Result<()> {
    let config = Config::load()?;
    let mut dash = DashboardState::new();

    if let Some(key) = city.as_deref() {
        dash.select_city(key)?;
    } else {
        dash.select_city(config.resolved_city().key)?;
    }

    let provider = OpenMeteoProvider::new();
    let city = dash.city();
    println!("Loading data for {}...", city.name);
    let state = dash.refresh(&provider, config.resolved_timezone()).await;
    render::dashboard(city, state, &pages);

    Ok(())
}

async fn dashboard() -> Result<()> {
    let config = Config::load()?;
    let provider = OpenMeteoProvider::new();
    let mut dash = DashboardState::new();
    let pages = TablePaging { page: 0, page_size: view::PAGE_SIZE, all_pages: false };

    loop {
        let choice = Select::new("Pick a city (Esc to quit):", registry::all().to_vec())
            .prompt_skippable()?;

        let Some(city) = choice else { break };

        dash.select_city(city.key)?;
        println!("Loading data for {}...", city.name);
        let state = dash.refresh(&provider, config.resolved_timezone()).await;
        render::dashboard(&city, state, &pages);
        println!();
    }

    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let city = Select::new("Default city:", registry::all().to_vec()).prompt()?;
    let timezone = Text::new("Timezone:")
        .with_initial_value(config.resolved_timezone())
        .prompt()?;

    config.default_city = Some(city.key.to_string());
    config.timezone = Some(timezone);
    config.save()?;

    println!("Saved {}", Config::config_file_path()?.display());
    Ok(())
}
