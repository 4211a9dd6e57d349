//! Spatial references we understand and the transformations between them.

use std::f64::consts::PI;

use crate::translation::error::Error;

/// Semi-major axis of the WGS84 ellipsoid, used as the sphere radius by Web Mercator.
const EARTH_RADIUS: f64 = 6_378_137.0;

/// WKIDs that all denote spherical Web Mercator.
const WEB_MERCATOR_WKIDS: [u32; 4] = [3857, 102_100, 102_113, 900_913];

/// A spatial reference, identified by its well-known id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialReference(pub u32);

/// Longitude/latitude on WGS84. The spatial reference the data store expects.
pub const WGS84: SpatialReference = SpatialReference(4326);

impl SpatialReference {
    /// Read a spatial reference from a number, a numeric string or an
    /// object carrying `latestWkid` or `wkid`.
    pub fn parse(value: &serde_json::Value) -> Result<SpatialReference, Error> {
        let wkid = match value {
            serde_json::Value::Number(number) => number.as_u64(),
            serde_json::Value::String(text) => text.trim().parse::<u64>().ok(),
            serde_json::Value::Object(object) => object
                .get("latestWkid")
                .or_else(|| object.get("wkid"))
                .and_then(serde_json::Value::as_u64),
            _ => None,
        };
        wkid.and_then(|wkid| u32::try_from(wkid).ok())
            .map(SpatialReference)
            .ok_or_else(|| Error::InvalidSpatialReference(value.to_string()))
    }

    fn is_web_mercator(self) -> bool {
        WEB_MERCATOR_WKIDS.contains(&self.0)
    }

    fn is_wgs84(self) -> bool {
        self == WGS84
    }
}

/// Reproject every position of a geometry.
pub fn reproject(
    value: geojson::Value,
    from: SpatialReference,
    to: SpatialReference,
) -> Result<geojson::Value, Error> {
    let transform: fn(&mut [f64]) = if from == to
        || (from.is_web_mercator() && to.is_web_mercator())
    {
        return Ok(value);
    } else if from.is_web_mercator() && to.is_wgs84() {
        mercator_to_wgs84
    } else if from.is_wgs84() && to.is_web_mercator() {
        wgs84_to_mercator
    } else {
        return Err(Error::UnsupportedSpatialReference {
            from: from.0,
            to: to.0,
        });
    };

    Ok(map_positions(value, transform))
}

fn map_positions(value: geojson::Value, transform: fn(&mut [f64])) -> geojson::Value {
    use geojson::Value;

    let line = |mut line: Vec<Vec<f64>>| {
        line.iter_mut().for_each(|position| transform(position));
        line
    };
    let polygon = |rings: Vec<Vec<Vec<f64>>>| rings.into_iter().map(line).collect::<Vec<_>>();

    match value {
        Value::Point(mut position) => {
            transform(&mut position);
            Value::Point(position)
        }
        Value::MultiPoint(points) => Value::MultiPoint(line(points)),
        Value::LineString(points) => Value::LineString(line(points)),
        Value::MultiLineString(lines) => Value::MultiLineString(polygon(lines)),
        Value::Polygon(rings) => Value::Polygon(polygon(rings)),
        Value::MultiPolygon(polygons) => {
            Value::MultiPolygon(polygons.into_iter().map(polygon).collect())
        }
        Value::GeometryCollection(geometries) => Value::GeometryCollection(
            geometries
                .into_iter()
                .map(|geometry| geojson::Geometry::new(map_positions(geometry.value, transform)))
                .collect(),
        ),
    }
}

fn mercator_to_wgs84(position: &mut [f64]) {
    if let [x, y, ..] = position {
        *x = (*x / EARTH_RADIUS).to_degrees();
        *y = (2.0 * (*y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    }
}

fn wgs84_to_mercator(position: &mut [f64]) {
    if let [x, y, ..] = position {
        // the poles are at infinity
        let latitude = y.clamp(-85.051_128_78, 85.051_128_78);
        *x = x.to_radians() * EARTH_RADIUS;
        *y = (PI / 4.0 + latitude.to_radians() / 2.0).tan().ln() * EARTH_RADIUS;
    }
}
