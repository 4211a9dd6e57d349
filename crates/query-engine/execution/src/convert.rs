//! Convert a tabular result into GeoJSON features.

use std::str::FromStr;

use serde_json::Value;

use crate::error::ConversionError;
use crate::query::BackendResult;

/// Take the data store results and return them as features, one per row, in row order.
///
/// Every column becomes a property, except the geometry field, whose value becomes
/// the feature geometry. Without a bound geometry field, or when the geometry
/// field is not among the columns, features have no geometry.
pub fn rows_to_features(
    result: BackendResult,
    geometry_field: Option<&str>,
) -> Result<Vec<geojson::Feature>, ConversionError> {
    let names: Vec<String> = result.columns.into_iter().map(|column| column.name).collect();
    let geometry_index =
        geometry_field.and_then(|field| names.iter().position(|name| name == field));

    result
        .rows
        .into_iter()
        .enumerate()
        .map(|(row_index, row)| {
            if row.len() != names.len() {
                return Err(ConversionError::RowLength {
                    row: row_index,
                    expected: names.len(),
                    found: row.len(),
                });
            }

            let geometry = match geometry_index {
                Some(index) => value_to_geometry(row_index, &row[index])?,
                None => None,
            };

            let properties: serde_json::Map<String, Value> = names
                .iter()
                .cloned()
                .zip(row)
                .filter(|(name, _)| Some(name.as_str()) != geometry_field)
                .collect();

            Ok(geojson::Feature {
                bbox: None,
                geometry,
                id: None,
                properties: Some(properties),
                foreign_members: None,
            })
        })
        .collect()
}

/// WKT text is parsed, GeoJSON objects are taken as they are, and
/// null or empty values mean the row has no geometry.
fn value_to_geometry(row: usize, value: &Value) -> Result<Option<geojson::Geometry>, ConversionError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => {
            let geometry = parse_wkt(text)
                .map_err(|message| ConversionError::InvalidWkt { row, message })?;
            Ok(Some(geojson::Geometry::new(geojson::Value::from(&geometry))))
        }
        Value::Object(_) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|err| ConversionError::InvalidGeometry {
                row,
                message: err.to_string(),
            }),
        other => Err(ConversionError::InvalidGeometry {
            row,
            message: format!("expected WKT or GeoJSON, found {other}"),
        }),
    }
}

fn parse_wkt(text: &str) -> Result<geo_types::Geometry<f64>, String> {
    wkt::Wkt::<f64>::from_str(text)
        .map_err(|err| err.to_string())
        .and_then(|wkt| {
            geo_types::Geometry::<f64>::try_from(wkt)
                .map_err(|err: wkt::conversion::Error| err.to_string())
        })
}
