//! Reading and writing GeoJSON, and the file-to-file simplification pipeline.

pub mod file;
pub mod geojson;

pub use file::{simplify_file, SimplifyOptions, SimplifyReport, DEFAULT_TOLERANCE};
pub use geojson::{read_geojson, write_geojson};
