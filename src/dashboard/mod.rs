pub mod app;
#[cfg(feature = "plotting")]
pub mod plotlars_surface;
pub mod surface;
pub mod terminal;
pub mod view;
