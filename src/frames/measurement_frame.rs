//! Contains the `MeasurementFrame` structure that turns measurement rows into
//! the tables behind the line chart and the point map.

use crate::types::measurement::Measurement;
use chrono::{DateTime, Utc};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub const DATETIME: &str = "datetime";
pub const VALUE: &str = "value";
pub const PARAMETER: &str = "parameter";
pub const LOCATION: &str = "location";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const LAT: &str = "lat";
pub const LON: &str = "lon";

/// A wrapper around a Polars `LazyFrame` holding one row per measurement.
///
/// Columns: `datetime` (UTC, millisecond precision), `value`, `parameter`,
/// `location`, `latitude` and `longitude`. The coordinate columns are null for
/// rows that cannot be placed on a map. Row order is the server's order.
#[derive(Clone)]
pub struct MeasurementFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
}

impl MeasurementFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Builds the frame from parsed rows, flattening `date.utc` into the
    /// `datetime` column and `coordinates` into `latitude`/`longitude`.
    ///
    /// # Errors
    ///
    /// Returns a [`PolarsError`] if the columns cannot be assembled.
    pub fn from_measurements(rows: &[Measurement]) -> PolarsResult<Self> {
        let datetimes: Vec<i64> = rows.iter().map(|m| m.date.utc.timestamp_millis()).collect();
        let values: Vec<f64> = rows.iter().map(|m| m.value).collect();
        let parameters: Vec<String> = rows.iter().map(|m| m.parameter.clone()).collect();
        let locations: Vec<Option<String>> = rows.iter().map(|m| m.location.clone()).collect();
        let points: Vec<Option<(f64, f64)>> = rows.iter().map(Measurement::lat_lon).collect();
        let latitudes: Vec<Option<f64>> = points.iter().map(|p| p.map(|(lat, _)| lat)).collect();
        let longitudes: Vec<Option<f64>> = points.iter().map(|p| p.map(|(_, lon)| lon)).collect();

        let df = df!(
            DATETIME => datetimes,
            VALUE => values,
            PARAMETER => parameters,
            LOCATION => locations,
            LATITUDE => latitudes,
            LONGITUDE => longitudes,
        )?;

        Ok(Self::new(df.lazy().with_column(
            col(DATETIME).cast(DataType::Datetime(TimeUnit::Milliseconds, None)),
        )))
    }

    /// `datetime` and `value`, sorted ascending by time for charting.
    pub fn chart_series(&self) -> LazyFrame {
        self.frame
            .clone()
            .select([col(DATETIME), col(VALUE)])
            .sort(
                [DATETIME],
                SortMultipleOptions::default().with_maintain_order(true),
            )
    }

    /// `lat`, `lon` and `location` for every row whose coordinates are both
    /// present. Each such row yields exactly one point.
    pub fn map_points(&self) -> LazyFrame {
        self.frame
            .clone()
            .filter(col(LATITUDE).is_not_null().and(col(LONGITUDE).is_not_null()))
            .select([
                col(LATITUDE).alias(LAT),
                col(LONGITUDE).alias(LON),
                col(LOCATION),
            ])
    }
}

/// One point of a collected chart series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub datetime: DateTime<Utc>,
    pub value: f64,
}

/// One point of a collected map frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    pub location: Option<String>,
}

/// Reads a collected [`MeasurementFrame::chart_series`] back into points.
pub fn chart_points(series: &DataFrame) -> PolarsResult<Vec<ChartPoint>> {
    let millis = series
        .column(DATETIME)?
        .as_materialized_series()
        .cast(&DataType::Int64)?;
    let values = series.column(VALUE)?.as_materialized_series().f64()?;

    millis
        .i64()?
        .into_iter()
        .zip(values.into_iter())
        .filter_map(|(ms, value)| Some((ms?, value?)))
        .map(|(ms, value)| {
            DateTime::from_timestamp_millis(ms)
                .map(|datetime| ChartPoint { datetime, value })
                .ok_or_else(|| {
                    PolarsError::ComputeError(format!("timestamp {ms} ms is out of range").into())
                })
        })
        .collect()
}

/// Reads a collected [`MeasurementFrame::map_points`] back into points.
pub fn map_points(points: &DataFrame) -> PolarsResult<Vec<MapPoint>> {
    let lats = points.column(LAT)?.as_materialized_series().f64()?;
    let lons = points.column(LON)?.as_materialized_series().f64()?;
    let locations = points.column(LOCATION)?.as_materialized_series().str()?;

    Ok(lats
        .into_iter()
        .zip(lons.into_iter())
        .zip(locations.into_iter())
        .filter_map(|((lat, lon), location)| {
            Some(MapPoint {
                lat: lat?,
                lon: lon?,
                location: location.map(str::to_string),
            })
        })
        .collect())
}

/// Writes a collected chart series as CSV with a header row.
pub fn write_csv(series: &mut DataFrame, path: &Path) -> Result<(), std::io::Error> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(series)
        .map_err(std::io::Error::other)
}
