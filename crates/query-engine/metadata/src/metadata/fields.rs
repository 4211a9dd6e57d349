//! Per-dataset field maps.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The identifier of the table or index a request targets.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct DatasetId(pub String);

impl From<&str> for DatasetId {
    fn from(value: &str) -> Self {
        DatasetId(value.to_string())
    }
}

impl From<String> for DatasetId {
    fn from(value: String) -> Self {
        DatasetId(value)
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DatasetId(name) = self;
        write!(f, "{name}")
    }
}

/// The name of a field (column) of a dataset.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FieldName(pub String);

impl FieldName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(value: &str) -> Self {
        FieldName(value.to_string())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FieldName(name) = self;
        write!(f, "{name}")
    }
}

/// A mapping from dataset identifier to field name.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FieldMap(pub BTreeMap<DatasetId, FieldName>);

impl FieldMap {
    pub fn empty() -> Self {
        FieldMap(BTreeMap::new())
    }

    pub fn lookup(&self, dataset: &DatasetId) -> Option<&FieldName> {
        self.0.get(dataset)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FieldMap {
    fn from(entries: [(&str, &str); N]) -> Self {
        FieldMap(
            entries
                .into_iter()
                .map(|(dataset, field)| (DatasetId::from(dataset), FieldName::from(field)))
                .collect(),
        )
    }
}
