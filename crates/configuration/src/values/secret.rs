use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::Variable;

/// A value that is either written in the configuration or read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Secret {
    Plain(String),
    #[serde(rename_all = "camelCase")]
    FromEnvironment { variable: Variable },
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
