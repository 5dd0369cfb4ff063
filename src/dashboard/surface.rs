//! The drawing seam between a [`DashboardView`] and an output medium.

use crate::dashboard::view::{DashboardView, INTRO, PAGE_TITLE};
use crate::measurements::response::Diagnostic;
use polars::prelude::DataFrame;
use serde_json::Value;
use std::io;

/// Something a dashboard can be drawn on.
///
/// The text methods mirror the elements of the page: a title, an intro
/// paragraph, a subheader and caption above the chart, and warning / error
/// boxes in place of it.
pub trait Surface {
    fn title(&mut self, text: &str) -> io::Result<()>;
    fn markdown(&mut self, text: &str) -> io::Result<()>;
    fn subheader(&mut self, text: &str) -> io::Result<()>;
    fn caption(&mut self, text: &str) -> io::Result<()>;
    fn warning(&mut self, text: &str) -> io::Result<()>;
    fn error(&mut self, text: &str) -> io::Result<()>;
    fn json(&mut self, value: &Value) -> io::Result<()>;
    fn text(&mut self, text: &str) -> io::Result<()>;
    /// `series` has the `datetime` and `value` columns, ascending by time.
    fn line_chart(&mut self, title: &str, series: &DataFrame) -> io::Result<()>;
    /// `points` has the `lat`, `lon` and `location` columns.
    fn map(&mut self, points: &DataFrame) -> io::Result<()>;
}

/// Draws the fixed page header.
pub fn render_header(surface: &mut impl Surface) -> io::Result<()> {
    surface.title(PAGE_TITLE)?;
    surface.markdown(INTRO)
}

/// Draws one view: heading, caption, chart and map for a report; a single
/// warning for an empty result; an error plus diagnostic for an upstream failure.
pub fn render(view: &DashboardView, surface: &mut impl Surface) -> io::Result<()> {
    match view {
        DashboardView::Report(report) => {
            surface.subheader(&report.heading)?;
            surface.caption(&report.caption)?;
            surface.line_chart(&report.chart_title, &report.series)?;
            if let Some(points) = &report.map {
                surface.map(points)?;
            }
            Ok(())
        }
        DashboardView::NoData { warning } => surface.warning(warning),
        DashboardView::UpstreamError {
            message,
            diagnostic,
            ..
        } => {
            surface.error(message)?;
            match diagnostic {
                Diagnostic::Json(value) => surface.json(value),
                Diagnostic::Text(notice) => surface.text(notice),
            }
        }
    }
}
