//! Metadata information regarding the indexes we serve and how their fields are bound.

pub mod fields;

// re-export without modules
pub use fields::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
///
/// Both maps are keyed by dataset identifier. A dataset missing from a map
/// simply has no field of that kind.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Dataset identifier to unique identifier field.
    #[serde(default, rename = "idFieldMap")]
    pub id_fields: FieldMap,
    /// Dataset identifier to geometry field.
    #[serde(default, rename = "geometryFieldMap")]
    pub geometry_fields: FieldMap,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            id_fields: FieldMap::empty(),
            geometry_fields: FieldMap::empty(),
        }
    }

    /// Resolve the field bindings of a single dataset.
    pub fn bindings(&self, dataset: &DatasetId) -> FieldBindings {
        FieldBindings {
            id_field: self.id_fields.lookup(dataset).cloned(),
            geometry_field: self.geometry_fields.lookup(dataset).cloned(),
        }
    }
}

/// The fields bound for one dataset.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FieldBindings {
    pub id_field: Option<FieldName>,
    pub geometry_field: Option<FieldName>,
}
