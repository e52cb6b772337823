//! Coordinate-density reduction of GeoJSON geometries.

mod reduce;

/// Simplify a `Geometry`, `Feature`, `FeatureCollection` or `Document`.
pub mod simplify;
pub use reduce::reduce_coords;
pub use simplify::Simplify;
