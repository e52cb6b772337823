//! Reduce the coordinate density of [GeoJSON](https://geojson.org/) documents.
//!
//! Positions closer than a tolerance to the previously kept position are dropped, and lines
//! or rings that collapse are removed. Feature properties and `crs` metadata are passed
//! through untouched.
//!
//! ```
//! use geojson_simplify::algorithm::Simplify;
//! use geojson_simplify::geojson::Document;
//!
//! let document: Document = r#"{"type":"LineString","coordinates":[[0,0],[0,0.00001],[0,1]]}"#
//!     .parse()
//!     .unwrap();
//! let simplified = document.simplify(&0.0001);
//!
//! assert_eq!(
//!     serde_json::to_string(&simplified).unwrap(),
//!     r#"{"type":"LineString","coordinates":[[0.0,0.0],[0.0,1.0],[0.0,0.0]]}"#
//! );
//! ```

pub use error::{Result, SimplifyError};

pub mod algorithm;
pub mod error;
pub mod geojson;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
