//! Normalize a geoservice spatial filter into a GeoJSON geometry in a fixed
//! spatial reference, plus a canonical spatial relation.

mod esri;
mod projection;

use crate::translation::error::Error;

pub use projection::{SpatialReference, WGS84};

/// A spatial filter as given in the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialFilter<'a> {
    /// Envelope or point text, Esri JSON (object or text) or GeoJSON.
    pub geometry: &'a serde_json::Value,
    /// The request's `inSR`, if any.
    pub in_sr: Option<&'a serde_json::Value>,
    /// The spatial reference the geometry should end up in.
    pub target_sr: SpatialReference,
    /// The request's `spatialRel`, if any.
    pub relation: Option<&'a str>,
}

/// A spatial filter ready to be compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFilter {
    pub geometry: geojson::Geometry,
    pub relation: SpatialRelation,
}

/// A spatial relation between the filter geometry and the stored geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpatialRelation {
    Intersects,
    Contains,
    Within,
    /// A relation name we do not know. Kept verbatim.
    Unrecognized(String),
}

impl SpatialRelation {
    /// Canonicalize a relation name. Accepts the Esri names and the short names.
    pub fn parse(name: Option<&str>) -> SpatialRelation {
        let Some(name) = name else {
            return SpatialRelation::Intersects;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "esrispatialrelintersects" | "intersects" => SpatialRelation::Intersects,
            "esrispatialrelcontains" | "contains" => SpatialRelation::Contains,
            "esrispatialrelwithin" | "within" => SpatialRelation::Within,
            _ => SpatialRelation::Unrecognized(name.to_string()),
        }
    }
}

/// Turns a request's spatial filter into a normalized one.
pub trait GeometryNormalizer: Send + Sync {
    fn normalize(&self, filter: &SpatialFilter<'_>) -> Result<NormalizedFilter, Error>;
}

/// Handles the geometry encodings geoservice clients send, in WGS84 or Web Mercator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNormalizer;

impl GeometryNormalizer for StandardNormalizer {
    fn normalize(&self, filter: &SpatialFilter<'_>) -> Result<NormalizedFilter, Error> {
        let parsed = esri::parse_geometry(filter.geometry)?;

        let source_sr = match filter.in_sr {
            Some(in_sr) => SpatialReference::parse(in_sr)?,
            None => parsed.spatial_reference.unwrap_or(WGS84),
        };

        let value = projection::reproject(parsed.value, source_sr, filter.target_sr)?;

        Ok(NormalizedFilter {
            geometry: geojson::Geometry::new(value),
            relation: SpatialRelation::parse(filter.relation),
        })
    }
}
