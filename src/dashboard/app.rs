//! Computes one dashboard run from a selection.

use crate::dashboard::view::{self, DashboardView, Report};
use crate::error::OpenAqError;
use crate::frames::measurement_frame::MeasurementFrame;
use crate::locations::location_resolver::{city_options, country_options};
use crate::measurements::query::MeasurementQuery;
use crate::openaq::OpenAq;
use crate::types::parameter::Parameter;
use crate::types::selection::{CitySelection, Selection};
use log::{info, warn};

/// Options for the three selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    /// Country codes, never empty.
    pub countries: Vec<String>,
    /// "All Cities" first, then the cities of the chosen country.
    pub cities: Vec<CitySelection>,
    pub parameters: [Parameter; 4],
}

/// A dashboard over one [`OpenAq`] client.
///
/// Every call to [`Dashboard::run`] recomputes its view from scratch; only the
/// client's location lookups survive between runs.
pub struct Dashboard {
    client: OpenAq,
}

impl Dashboard {
    pub fn new(client: OpenAq) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &OpenAq {
        &self.client
    }

    /// Resolves the selector options for the chosen `country`.
    pub async fn sidebar(&self, country: &str) -> Result<Sidebar, OpenAqError> {
        let countries = country_options(&self.client.countries().await?);
        let cities = city_options(&self.client.cities(country).await?);
        Ok(Sidebar {
            countries,
            cities,
            parameters: Parameter::ALL,
        })
    }

    /// Fetches the measurements for `selection` and turns them into a view.
    ///
    /// # Errors
    ///
    /// Upstream failures and empty results are views, not errors. Errors are
    /// transport failures, a 200 body that is not a valid results page, and
    /// frame-building failures.
    pub async fn run(&self, selection: &Selection) -> Result<DashboardView, OpenAqError> {
        let query = MeasurementQuery::from(selection);
        let response = self.client.fetch(&query).await?;

        if !response.is_success() {
            warn!(
                "Upstream failure for {}: HTTP {}",
                response.url, response.status
            );
            return Ok(DashboardView::UpstreamError {
                status: response.status,
                message: view::upstream_error_message(response.status),
                diagnostic: response.diagnostic(),
            });
        }

        let rows = response.results()?;
        if rows.is_empty() {
            info!("No rows for {:?}", selection);
            return Ok(DashboardView::NoData {
                warning: view::no_data_warning(selection.place(), selection.parameter),
            });
        }

        let frame = MeasurementFrame::from_measurements(&rows)?;
        let series = frame.chart_series().collect()?;
        let points = frame.map_points().collect()?;
        info!(
            "Charting {} rows, mapping {} of them",
            series.height(),
            points.height()
        );

        Ok(DashboardView::Report(Report {
            heading: view::heading(selection.place(), selection.parameter),
            caption: view::caption(rows.len()),
            chart_title: view::chart_title(selection.parameter),
            series,
            map: (points.height() > 0).then_some(points),
        }))
    }
}
