//! The feature collection returned to callers.

use serde::Serialize;

use query_engine_translation::translation::filters_applied::FiltersApplied;

/// A GeoJSON feature collection, plus what the provider knows about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct FeatureCollection {
    pub features: Vec<geojson::Feature>,
    pub metadata: CollectionMetadata,
    /// Filters the caller does not need to apply again.
    pub filters_applied: FiltersApplied,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMetadata {
    /// The unique identifier field of the dataset, when one is bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_field: Option<String>,
}
