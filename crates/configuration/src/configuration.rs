//! Configuration for the provider.

use std::fmt;
use std::time::Duration;

use schemars::{gen::SchemaSettings, schema::RootSchema};
use url::Url;

use query_engine_metadata::metadata;

use crate::version1::ParsedConfiguration;

/// The 'Configuration' type collects all the information necessary to serve queries at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which resolves every secret against the environment.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
    pub connection: ResolvedConnection,
}

/// Connection settings with all secrets resolved.
#[derive(Debug, Clone)]
pub struct ResolvedConnection {
    pub node: Url,
    pub authorization: Option<Authorization>,
    pub request_timeout: Option<Duration>,
}

#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    ApiKey(String),
    Basic { username: String, password: String },
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authorization::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            Authorization::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// The JSON schema of the configuration file.
pub fn generate_latest_schema() -> RootSchema {
    SchemaSettings::openapi3()
        .into_generator()
        .into_root_schema_for::<ParsedConfiguration>()
}
