//! Compile a normalized spatial filter into a `geo_shape` filter clause.

use query_engine_metadata::metadata::FieldName;
use serde_json::json;

use crate::translation::geometry::{NormalizedFilter, SpatialRelation};

/// Relation names understood by the data store.
fn relation_token(relation: &SpatialRelation) -> &'static str {
    match relation {
        SpatialRelation::Contains => "contains",
        SpatialRelation::Within => "within",
        SpatialRelation::Intersects | SpatialRelation::Unrecognized(_) => "intersects",
    }
}

/// Build the filter, keyed by the bound geometry field.
pub fn translate_geo_shape(geometry_field: &FieldName, filter: &NormalizedFilter) -> serde_json::Value {
    let mut clause = serde_json::Map::new();
    clause.insert(
        geometry_field.to_string(),
        json!({
            "shape": shape(&filter.geometry.value),
            "relation": relation_token(&filter.relation),
        }),
    );
    json!({ "geo_shape": clause })
}

/// The geometry with its type name lower-cased and its coordinates untouched.
fn shape(value: &geojson::Value) -> serde_json::Value {
    use geojson::Value;

    let (kind, coordinates) = match value {
        Value::Point(position) => ("point", json!(position)),
        Value::MultiPoint(positions) => ("multipoint", json!(positions)),
        Value::LineString(positions) => ("linestring", json!(positions)),
        Value::MultiLineString(lines) => ("multilinestring", json!(lines)),
        Value::Polygon(rings) => ("polygon", json!(rings)),
        Value::MultiPolygon(polygons) => ("multipolygon", json!(polygons)),
        Value::GeometryCollection(geometries) => {
            return json!({
                "type": "geometrycollection",
                "geometries": geometries
                    .iter()
                    .map(|geometry| shape(&geometry.value))
                    .collect::<Vec<_>>(),
            });
        }
    };
    json!({ "type": kind, "coordinates": coordinates })
}
