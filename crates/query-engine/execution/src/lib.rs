//! Query execution against an Elasticsearch-style SQL endpoint, and conversion
//! of the tabular result into GeoJSON features.

pub mod client;
pub mod convert;
pub mod error;
pub mod metrics;
pub mod query;
