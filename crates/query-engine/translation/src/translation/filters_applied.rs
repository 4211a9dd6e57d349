//! Report which filters took effect, so the caller does not apply them a second time.

use serde::Serialize;

use query_engine_metadata::metadata::FieldBindings;

use super::request::GeoserviceQuery;

/// Filters that were applied by the data store. Only applied filters are serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersApplied {
    #[serde(rename = "where", skip_serializing_if = "std::ops::Not::not")]
    pub where_: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub object_ids: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub order_by_fields: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub geometry: bool,
}

impl FiltersApplied {
    pub fn is_empty(&self) -> bool {
        *self == FiltersApplied::default()
    }
}

/// Object ids and geometry only count when the dataset binds the matching field.
pub fn filters_applied(query: &GeoserviceQuery, bindings: &FieldBindings) -> FiltersApplied {
    FiltersApplied {
        where_: query.where_.is_some(),
        object_ids: query.object_ids.is_some() && bindings.id_field.is_some(),
        order_by_fields: query.order_by_fields.is_some(),
        geometry: query.geometry.is_some() && bindings.geometry_field.is_some(),
    }
}
