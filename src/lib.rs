mod config;
mod dashboard;
mod error;
mod frames;
mod locations;
mod measurements;
mod openaq;
mod types;
mod utils;

pub use config::{OpenAqConfig, DEFAULT_BASE_URL};
pub use error::OpenAqError;
pub use openaq::*;

pub use dashboard::app::{Dashboard, Sidebar};
pub use dashboard::surface::{render, render_header, Surface};
pub use dashboard::terminal::TerminalSurface;
pub use dashboard::view::{DashboardView, Report, INTRO, PAGE_TITLE, UPSTREAM_ERROR_MESSAGE};

#[cfg(feature = "plotting")]
pub use dashboard::plotlars_surface::PlotlarsSurface;

pub use frames::measurement_frame::*;

pub use locations::error::LocationError;
pub use locations::location_resolver::{city_options, country_options};

pub use measurements::error::MeasurementError;
pub use measurements::query::MeasurementQuery;
pub use measurements::response::{Diagnostic, RawResponse};

pub use types::city::City;
pub use types::country::Country;
pub use types::measurement::{Coordinates, Measurement, MeasurementDate};
pub use types::parameter::{ParseParameterError, Parameter};
pub use types::selection::{CitySelection, Selection, ALL_CITIES, DEFAULT_COUNTRY};
