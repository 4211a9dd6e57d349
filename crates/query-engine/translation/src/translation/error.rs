//! Errors for translation.

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("geometry type '{0}' is not supported in spatial filters")]
    UnsupportedGeometryType(String),
    #[error("invalid spatial reference: {0}")]
    InvalidSpatialReference(String),
    #[error("reprojection from spatial reference {from} to {to} is not supported")]
    UnsupportedSpatialReference { from: u32, to: u32 },
}
