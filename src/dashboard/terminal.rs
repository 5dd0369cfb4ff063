//! Plain-text rendering for terminals and logs.

use crate::dashboard::surface::Surface;
use crate::frames::measurement_frame::{chart_points, map_points};
use polars::prelude::DataFrame;
use serde_json::Value;
use std::io::{self, Write};

const BAR_WIDTH: usize = 40;

/// Writes the dashboard as text to any writer.
///
/// The line chart becomes one row per point with a proportional bar, the map
/// a list of coordinates.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn title(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{}", "=".repeat(text.chars().count()))
    }

    fn markdown(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        writeln!(self.out)
    }

    fn subheader(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "## {text}")
    }

    fn caption(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn warning(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "WARNING: {text}")
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "ERROR: {text}")
    }

    fn json(&mut self, value: &Value) -> io::Result<()> {
        let pretty = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(self.out, "{pretty}")
    }

    fn text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn line_chart(&mut self, title: &str, series: &DataFrame) -> io::Result<()> {
        let points = chart_points(series).map_err(io::Error::other)?;
        writeln!(self.out)?;
        writeln!(self.out, "{title}")?;

        let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
        for point in &points {
            let width = if max > 0.0 && point.value > 0.0 {
                ((point.value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            writeln!(
                self.out,
                "{}  {:>10.2}  {}",
                point.datetime.format("%Y-%m-%d %H:%M UTC"),
                point.value,
                "#".repeat(width)
            )?;
        }
        Ok(())
    }

    fn map(&mut self, points: &DataFrame) -> io::Result<()> {
        let points = map_points(points).map_err(io::Error::other)?;
        writeln!(self.out)?;
        writeln!(self.out, "Measurement locations ({})", points.len())?;
        for point in &points {
            writeln!(
                self.out,
                "{:>9.4}, {:>9.4}  {}",
                point.lat,
                point.lon,
                point.location.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}
