pub mod connector;
pub mod error;
pub mod health;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;

/// How the provider identifies itself to a host.
pub const PROVIDER_NAME: &str = "elastic-sql";
pub const PROVIDER_TYPE: &str = "provider";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
