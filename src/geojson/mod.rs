//! Typed model of the GeoJSON documents this crate reads and writes.
//!
//! Only the parts that simplification touches are typed. Feature properties, `crs` metadata
//! and any geometry type that is not simplified are carried as raw JSON.

mod document;
mod geometry;
mod position;

pub use document::{Document, Feature, FeatureCollection};
pub use geometry::{Geometry, LineStringType, MultiLineStringType, MultiPolygonType, PolygonType};
pub use position::Position;

/// A JSON object, with its original member order.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
