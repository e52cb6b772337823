use std::io::Write;

use crate::error::Result;
use crate::geojson::Document;

/// Write a document as compact GeoJSON, with no whitespace between tokens.
///
/// Coordinates of lines and polygons are written as floats, so an integer `0` in the input
/// comes back as `0.0`. The values are equal, but integer-heavy inputs can grow.
pub fn write_geojson<W: Write>(document: &Document, mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, document)?;
    writer.flush()?;
    Ok(())
}
