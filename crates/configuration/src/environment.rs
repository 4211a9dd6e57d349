//! Infrastructure for reading secrets from the process environment.

use std::collections::HashMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The name of an environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Variable(String);

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("the environment variable {0} is not set")]
    NonExistentVariable(Variable),
    #[error("the environment variable {0} is not valid unicode")]
    NonUnicodeValue(Variable),
}

/// Somewhere to read variables from.
pub trait Environment {
    fn read(&self, variable: &Variable) -> Result<String, Error>;
}

impl<E: Environment> Environment for &E {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        (*self).read(variable)
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        std::env::var(&variable.0).map_err(|err| match err {
            std::env::VarError::NotPresent => Error::NonExistentVariable(variable.clone()),
            std::env::VarError::NotUnicode(_) => Error::NonUnicodeValue(variable.clone()),
        })
    }
}

/// A fixed set of variables, for tests and tools.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment(HashMap<Variable, String>);

impl<const N: usize> From<[(Variable, String); N]> for FixedEnvironment {
    fn from(values: [(Variable, String); N]) -> Self {
        Self(HashMap::from(values))
    }
}

impl Environment for FixedEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        self.0.read(variable)
    }
}

impl Environment for HashMap<Variable, String> {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        self.get(variable)
            .cloned()
            .ok_or_else(|| Error::NonExistentVariable(variable.clone()))
    }
}

/// An empty environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEnvironment;

impl Environment for EmptyEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        Err(Error::NonExistentVariable(variable.clone()))
    }
}
