use std::io::Read;

use crate::error::Result;
use crate::geojson::Document;

/// Read a GeoJSON document.
///
/// The whole input is buffered in memory before it is decoded.
pub fn read_geojson<R: Read>(mut reader: R) -> Result<Document> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    let document = serde_json::from_slice(&buffer)?;
    Ok(document)
}
