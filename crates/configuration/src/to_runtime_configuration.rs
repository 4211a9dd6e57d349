//! Convert the parsed configuration into the runtime configuration, resolving secrets.

use std::time::Duration;

use url::Url;

use crate::configuration::{Authorization, Configuration, ResolvedConnection};
use crate::connection_settings::AuthSettings;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::Secret;
use crate::version1::ParsedConfiguration;

/// Convert the parsed configuration metadata to internal engine metadata
/// That can be used by the connector at runtime.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let conn = parsed_config.conn;

    let node = resolve(&conn.node, "conn.node", &environment)?;
    let node = Url::parse(&node).map_err(|err| MakeRuntimeConfigurationError::InvalidNodeUrl {
        node: node.clone(),
        message: err.to_string(),
    })?;

    let authorization = match conn.auth {
        None => None,
        Some(AuthSettings::ApiKey { api_key }) => Some(Authorization::ApiKey(resolve(
            &api_key,
            "conn.auth.apiKey",
            &environment,
        )?)),
        Some(AuthSettings::Basic { username, password }) => Some(Authorization::Basic {
            username,
            password: resolve(&password, "conn.auth.password", &environment)?,
        }),
    };

    Ok(Configuration {
        metadata: parsed_config.metadata,
        connection: ResolvedConnection {
            node,
            authorization,
            request_timeout: conn.request_timeout_secs.map(Duration::from_secs),
        },
    })
}

fn resolve(
    secret: &Secret,
    field: &str,
    environment: &impl Environment,
) -> Result<String, MakeRuntimeConfigurationError> {
    match secret {
        Secret::Plain(value) => Ok(value.clone()),
        Secret::FromEnvironment { variable } => environment
            .read(variable)
            .map_err(|err| MakeRuntimeConfigurationError::missing(field, &err)),
    }
}
