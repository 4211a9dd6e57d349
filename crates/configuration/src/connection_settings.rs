//! Data store connection settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::Variable;
use crate::values::Secret;

pub const DEFAULT_NODE_VARIABLE: &str = "ELASTICSEARCH_NODE";

/// Data store connection settings, the `conn` option.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSettings {
    /// URL of the Elasticsearch node, e.g. `http://localhost:9200`.
    pub node: Secret,
    /// Credentials, if the cluster requires them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthSettings>,
    /// Give up on a query after this many seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Credentials for the data store.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum AuthSettings {
    #[serde(rename_all = "camelCase")]
    ApiKey { api_key: Secret },
    Basic { username: String, password: Secret },
}

impl ConnectionSettings {
    pub fn empty() -> Self {
        Self {
            node: Secret::FromEnvironment {
                variable: Variable::from(DEFAULT_NODE_VARIABLE),
            },
            auth: None,
            request_timeout_secs: None,
        }
    }
}
