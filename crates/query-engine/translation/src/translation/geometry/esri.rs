//! Read the geometry encodings a geoservice client may send.

use serde_json::{Map, Value};

use super::projection::SpatialReference;
use crate::translation::error::Error;

/// A geometry in its source spatial reference.
pub struct ParsedGeometry {
    pub value: geojson::Value,
    /// The spatial reference embedded in the geometry, if any.
    pub spatial_reference: Option<SpatialReference>,
}

impl From<geojson::Value> for ParsedGeometry {
    fn from(value: geojson::Value) -> Self {
        ParsedGeometry {
            value,
            spatial_reference: None,
        }
    }
}

pub fn parse_geometry(geometry: &Value) -> Result<ParsedGeometry, Error> {
    match geometry {
        Value::String(text) => parse_text(text),
        Value::Object(object) => parse_object(object),
        other => Err(Error::InvalidGeometry(other.to_string())),
    }
}

/// `xmin,ymin,xmax,ymax`, `x,y`, or JSON text.
fn parse_text(text: &str) -> Result<ParsedGeometry, Error> {
    let text = text.trim();
    if text.starts_with('{') {
        let value: Value =
            serde_json::from_str(text).map_err(|err| Error::InvalidGeometry(err.to_string()))?;
        return parse_geometry(&value);
    }

    let numbers = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| Error::InvalidGeometry(text.to_string()))?;

    match numbers.as_slice() {
        [x, y] => Ok(geojson::Value::Point(vec![*x, *y]).into()),
        [xmin, ymin, xmax, ymax] => Ok(envelope(*xmin, *ymin, *xmax, *ymax).into()),
        _ => Err(Error::InvalidGeometry(text.to_string())),
    }
}

fn parse_object(object: &Map<String, Value>) -> Result<ParsedGeometry, Error> {
    if object.contains_key("type") {
        return parse_geojson(object);
    }

    let spatial_reference = object
        .get("spatialReference")
        .map(SpatialReference::parse)
        .transpose()?;

    let number = |key: &str| object.get(key).and_then(Value::as_f64);

    let value = if let (Some(xmin), Some(ymin), Some(xmax), Some(ymax)) = (
        number("xmin"),
        number("ymin"),
        number("xmax"),
        number("ymax"),
    ) {
        envelope(xmin, ymin, xmax, ymax)
    } else if let (Some(x), Some(y)) = (number("x"), number("y")) {
        geojson::Value::Point(vec![x, y])
    } else if let Some(points) = object.get("points") {
        geojson::Value::MultiPoint(positions(points)?)
    } else if let Some(paths) = object.get("paths") {
        let mut paths = paths_of(paths)?;
        if paths.len() == 1 {
            geojson::Value::LineString(paths.remove(0))
        } else {
            geojson::Value::MultiLineString(paths)
        }
    } else if let Some(rings) = object.get("rings") {
        rings_to_polygons(paths_of(rings)?)?
    } else {
        return Err(Error::InvalidGeometry(Value::Object(object.clone()).to_string()));
    };

    Ok(ParsedGeometry {
        value,
        spatial_reference,
    })
}

fn parse_geojson(object: &Map<String, Value>) -> Result<ParsedGeometry, Error> {
    let geometry: geojson::Geometry = serde_json::from_value(Value::Object(object.clone()))
        .map_err(|err| Error::InvalidGeometry(err.to_string()))?;
    if let geojson::Value::GeometryCollection(_) = geometry.value {
        return Err(Error::UnsupportedGeometryType("GeometryCollection".to_string()));
    }
    Ok(geometry.value.into())
}

/// The envelope as a counter-clockwise ring, starting at the lower-left corner.
fn envelope(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> geojson::Value {
    geojson::Value::Polygon(vec![vec![
        vec![xmin, ymin],
        vec![xmax, ymin],
        vec![xmax, ymax],
        vec![xmin, ymax],
        vec![xmin, ymin],
    ]])
}

fn positions(value: &Value) -> Result<Vec<Vec<f64>>, Error> {
    let invalid = || Error::InvalidGeometry(value.to_string());
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|position| {
            let position = position
                .as_array()
                .ok_or_else(invalid)?
                .iter()
                .map(|coordinate| coordinate.as_f64().ok_or_else(invalid))
                .collect::<Result<Vec<f64>, Error>>()?;
            if position.len() < 2 {
                return Err(invalid());
            }
            Ok(position)
        })
        .collect()
}

fn paths_of(value: &Value) -> Result<Vec<Vec<Vec<f64>>>, Error> {
    value
        .as_array()
        .ok_or_else(|| Error::InvalidGeometry(value.to_string()))?
        .iter()
        .map(positions)
        .collect()
}

/// Twice the signed area of a ring. Positive when counter-clockwise.
fn signed_area(ring: &[Vec<f64>]) -> f64 {
    ring.windows(2)
        .map(|pair| pair[0][0] * pair[1][1] - pair[1][0] * pair[0][1])
        .sum()
}

/// Esri polygons list clockwise outer rings, each followed by its
/// counter-clockwise holes. GeoJSON wants the opposite winding.
fn rings_to_polygons(rings: Vec<Vec<Vec<f64>>>) -> Result<geojson::Value, Error> {
    let mut polygons: Vec<Vec<Vec<Vec<f64>>>> = vec![];

    for mut ring in rings {
        if ring.len() < 4 {
            return Err(Error::InvalidGeometry(format!(
                "polygon ring with {} positions",
                ring.len()
            )));
        }
        ring.reverse();
        let is_outer = signed_area(&ring) > 0.0;
        match polygons.last_mut() {
            Some(polygon) if !is_outer => polygon.push(ring),
            _ => polygons.push(vec![ring]),
        }
    }

    match polygons.len() {
        0 => Err(Error::InvalidGeometry("polygon without rings".to_string())),
        1 => Ok(geojson::Value::Polygon(polygons.remove(0))),
        _ => Ok(geojson::Value::MultiPolygon(polygons)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn point_text() {
        let parsed = parse_geometry(&json!("-120, 45.5")).unwrap();
        assert_eq!(parsed.value, geojson::Value::Point(vec![-120.0, 45.5]));
    }

    #[test]
    fn malformed_text() {
        assert!(parse_geometry(&json!("1,2,3")).is_err());
        assert!(parse_geometry(&json!("north")).is_err());
        assert!(parse_geometry(&json!(42)).is_err());
    }

    #[test]
    fn esri_envelope_as_json_text() {
        let parsed = parse_geometry(&json!(
            r#"{"xmin":0,"ymin":0,"xmax":1,"ymax":2,"spatialReference":{"wkid":4326}}"#
        ))
        .unwrap();
        assert_eq!(
            parsed.value,
            geojson::Value::Polygon(vec![vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 2.0],
                vec![0.0, 2.0],
                vec![0.0, 0.0],
            ]])
        );
        assert_eq!(parsed.spatial_reference, Some(SpatialReference(4326)));
    }

    #[test]
    fn esri_polygon_with_hole() {
        // outer ring clockwise, hole counter-clockwise
        let parsed = parse_geometry(&json!({
            "rings": [
                [[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]],
                [[2, 2], [4, 2], [4, 4], [2, 4], [2, 2]]
            ]
        }))
        .unwrap();

        let geojson::Value::Polygon(rings) = parsed.value else {
            panic!("expected a polygon");
        };
        assert_eq!(rings.len(), 2);
        assert!(signed_area(&rings[0]) > 0.0);
        assert!(signed_area(&rings[1]) < 0.0);
    }

    #[test]
    fn esri_polygon_with_two_outer_rings() {
        let parsed = parse_geometry(&json!({
            "rings": [
                [[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]],
                [[5, 5], [5, 6], [6, 6], [6, 5], [5, 5]]
            ]
        }))
        .unwrap();
        assert!(matches!(parsed.value, geojson::Value::MultiPolygon(ref polygons) if polygons.len() == 2));
    }

    #[test]
    fn esri_polylines_and_multipoints() {
        let line = parse_geometry(&json!({ "paths": [[[0, 0], [1, 1]]] })).unwrap();
        assert_eq!(
            line.value,
            geojson::Value::LineString(vec![vec![0.0, 0.0], vec![1.0, 1.0]])
        );

        let points = parse_geometry(&json!({ "points": [[0, 0], [1, 1]] })).unwrap();
        assert_eq!(
            points.value,
            geojson::Value::MultiPoint(vec![vec![0.0, 0.0], vec![1.0, 1.0]])
        );
    }

    #[test]
    fn geojson_passes_through() {
        let parsed = parse_geometry(&json!({ "type": "Point", "coordinates": [1.5, 2.5] })).unwrap();
        assert_eq!(parsed.value, geojson::Value::Point(vec![1.5, 2.5]));

        let collection = parse_geometry(&json!({ "type": "GeometryCollection", "geometries": [] }));
        assert!(matches!(collection, Err(Error::UnsupportedGeometryType(_))));
    }
}
