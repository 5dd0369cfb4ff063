//! Command-line front end: the flags play the role of the sidebar, and every
//! invocation is one dashboard run.

use clap::Parser;
use log::{info, warn};
use openaq_dashboard::{
    render, render_header, write_csv, CitySelection, Dashboard, DashboardView, OpenAq,
    OpenAqConfig, OpenAqError, Parameter, Selection, Surface, TerminalSurface, ALL_CITIES,
    DEFAULT_BASE_URL, DEFAULT_COUNTRY,
};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Chart the latest OpenAQ air-quality measurements")]
struct Cli {
    /// Country code to query.
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    country: String,

    /// City to query, or "All Cities" for the whole country.
    #[arg(long, default_value = ALL_CITIES)]
    city: String,

    /// Pollutant parameter: pm25, pm10, no2 or o3.
    #[arg(long, default_value = "pm25")]
    parameter: Parameter,

    /// Print the country selector options and exit.
    #[arg(long)]
    list_countries: bool,

    /// Print the city selector options for --country and exit.
    #[arg(long)]
    list_cities: bool,

    /// Also write the chart series to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write interactive chart and map HTML files into this directory.
    #[cfg(feature = "plotting")]
    #[arg(long)]
    html_dir: Option<PathBuf>,

    #[arg(long, env = "OPENAQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "OPENAQ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let client = OpenAq::with_config(OpenAqConfig {
        base_url: cli.base_url.clone(),
        api_key: cli.api_key.clone(),
        timeout_secs: cli.timeout,
        ..OpenAqConfig::default()
    })?;
    let dashboard = Dashboard::new(client);

    let sidebar = dashboard.sidebar(&cli.country).await?;
    if cli.list_countries {
        for code in &sidebar.countries {
            println!("{code}");
        }
        return Ok(());
    }
    if cli.list_cities {
        for city in &sidebar.cities {
            println!("{city}");
        }
        return Ok(());
    }

    let selection = Selection::new(
        cli.country.clone(),
        CitySelection::from(cli.city.as_str()),
        cli.parameter,
    );
    if !sidebar.countries.contains(&selection.country) {
        warn!("Country {} is not in the OpenAQ country list", selection.country);
    }
    if !sidebar.cities.contains(&selection.city) {
        warn!("City {} is not listed for {}", selection.city, selection.country);
    }
    info!("Running dashboard for {:?}", selection);

    let view = dashboard.run(&selection).await?;

    #[cfg(feature = "plotting")]
    if let Some(dir) = &cli.html_dir {
        let mut surface = openaq_dashboard::PlotlarsSurface::new(dir)?;
        draw(&view, &mut surface)?;
        return export(&view, cli.csv.as_ref());
    }

    draw(&view, &mut TerminalSurface::stdout())?;
    export(&view, cli.csv.as_ref())
}

fn draw(view: &DashboardView, surface: &mut impl Surface) -> Result<(), OpenAqError> {
    render_header(surface).map_err(OpenAqError::Surface)?;
    render(view, surface).map_err(OpenAqError::Surface)
}

fn export(view: &DashboardView, csv: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    let (Some(path), Some(report)) = (csv, view.report()) else {
        return Ok(());
    };
    let mut series = report.series.clone();
    write_csv(&mut series, path).map_err(|e| OpenAqError::Export(path.clone(), e))?;
    info!("Wrote {} rows to {}", series.height(), path.display());
    Ok(())
}
