//! The outcome of one dashboard run, independent of how it is drawn.

use crate::measurements::response::Diagnostic;
use crate::types::parameter::Parameter;
use polars::prelude::DataFrame;
use reqwest::StatusCode;

pub const PAGE_TITLE: &str = "Global Air Quality Dashboard";
pub const INTRO: &str =
    "This dashboard uses free data from [OpenAQ](https://openaq.org/) to show air-quality levels worldwide.";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Failed to fetch data from OpenAQ API";

/// What one run produced. Exactly one of these is drawn per run.
#[derive(Debug, Clone)]
pub enum DashboardView {
    /// At least one measurement came back.
    Report(Report),
    /// The API answered 200 with no rows.
    NoData { warning: String },
    /// The API answered with a status other than 200. Nothing is charted.
    UpstreamError {
        status: StatusCode,
        message: String,
        diagnostic: Diagnostic,
    },
}

/// The chart and map content of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    /// e.g. "Air Quality in Kuala Lumpur (PM25)".
    pub heading: String,
    /// e.g. "Showing latest 100 measurements".
    pub caption: String,
    /// e.g. "PM25 levels over time".
    pub chart_title: String,
    /// `datetime`, `value`, ascending by `datetime`.
    pub series: DataFrame,
    /// `lat`, `lon`, `location`; `None` when no row carried coordinates.
    pub map: Option<DataFrame>,
}

impl DashboardView {
    pub fn report(&self) -> Option<&Report> {
        match self {
            DashboardView::Report(report) => Some(report),
            _ => None,
        }
    }
}

pub(crate) fn heading(place: &str, parameter: Parameter) -> String {
    format!("Air Quality in {} ({})", place, parameter.label())
}

pub(crate) fn caption(rows: usize) -> String {
    format!("Showing latest {} measurements", rows)
}

pub(crate) fn chart_title(parameter: Parameter) -> String {
    format!("{} levels over time", parameter.label())
}

pub(crate) fn no_data_warning(place: &str, parameter: Parameter) -> String {
    format!(
        "No {} data found for {}. Try another city, country or parameter.",
        parameter.label(),
        place
    )
}

pub(crate) fn upstream_error_message(status: StatusCode) -> String {
    format!("{} (HTTP {})", UPSTREAM_ERROR_MESSAGE, status.as_u16())
}
