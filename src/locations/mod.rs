pub mod error;
pub mod location_resolver;
