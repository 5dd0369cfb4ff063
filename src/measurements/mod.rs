pub mod error;
pub mod fetcher;
pub mod query;
pub mod response;
