//! Translate the incoming geoservice request to an ExecutionPlan (SQL and a geometry filter)
//! to be run against the data store.

pub mod error;
pub mod filters_applied;
pub mod geometry;
pub mod query;
pub mod request;
