//! Interactive HTML charts through plotlars.

use crate::dashboard::surface::Surface;
use crate::dashboard::terminal::TerminalSurface;
use crate::frames::measurement_frame::{map_points, DATETIME, LAT, LON, VALUE};
use plotlars::{Plot, ScatterMap, Text, TimeSeriesPlot};
use polars::prelude::{col, DataFrame, DataType, IntoLazy};
use serde_json::Value;
use std::io;
use std::path::PathBuf;

pub const CHART_FILE: &str = "chart.html";
pub const MAP_FILE: &str = "map.html";

/// Writes the line chart and the map as HTML files into `out_dir`; text
/// elements go to stdout.
pub struct PlotlarsSurface {
    out_dir: PathBuf,
    text: TerminalSurface<io::Stdout>,
}

impl PlotlarsSurface {
    pub fn new(out_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let out_dir = out_dir.into();
        std::fs::create_dir_all(&out_dir)?;
        Ok(Self {
            out_dir,
            text: TerminalSurface::stdout(),
        })
    }

    fn target(&self, file: &str) -> io::Result<String> {
        self.out_dir
            .join(file)
            .to_str()
            .map(str::to_string)
            .ok_or_else(|| io::Error::other("output path is not valid UTF-8"))
    }
}

impl Surface for PlotlarsSurface {
    fn title(&mut self, text: &str) -> io::Result<()> {
        self.text.title(text)
    }

    fn markdown(&mut self, text: &str) -> io::Result<()> {
        self.text.markdown(text)
    }

    fn subheader(&mut self, text: &str) -> io::Result<()> {
        self.text.subheader(text)
    }

    fn caption(&mut self, text: &str) -> io::Result<()> {
        self.text.caption(text)
    }

    fn warning(&mut self, text: &str) -> io::Result<()> {
        self.text.warning(text)
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        self.text.error(text)
    }

    fn json(&mut self, value: &Value) -> io::Result<()> {
        self.text.json(value)
    }

    fn text(&mut self, text: &str) -> io::Result<()> {
        self.text.text(text)
    }

    fn line_chart(&mut self, title: &str, series: &DataFrame) -> io::Result<()> {
        // plotlars labels the time axis from strings.
        let labelled = series
            .clone()
            .lazy()
            .with_column(col(DATETIME).cast(DataType::String))
            .collect()
            .map_err(io::Error::other)?;
        let path = self.target(CHART_FILE)?;

        TimeSeriesPlot::builder()
            .data(&labelled)
            .x(DATETIME)
            .y(VALUE)
            .plot_title(Text::from(title))
            .build()
            .write_html(path.clone());
        self.text.text(&format!("Line chart written to {path}"))
    }

    fn map(&mut self, points: &DataFrame) -> io::Result<()> {
        let parsed = map_points(points).map_err(io::Error::other)?;
        let path = self.target(MAP_FILE)?;

        let center = if parsed.is_empty() {
            [0.0, 0.0]
        } else {
            let n = parsed.len() as f64;
            [
                parsed.iter().map(|p| p.lat).sum::<f64>() / n,
                parsed.iter().map(|p| p.lon).sum::<f64>() / n,
            ]
        };

        ScatterMap::builder()
            .data(points)
            .latitude(LAT)
            .longitude(LON)
            .center(center)
            .zoom(6)
            .plot_title(Text::from("Measurement locations"))
            .build()
            .write_html(path.clone());
        self.text.text(&format!("Map written to {path}"))
    }
}
