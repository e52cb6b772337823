use serde::de::{DeserializeOwned, Error};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::geojson::{JsonObject, Position};

pub type LineStringType = Vec<Position>;
pub type PolygonType = Vec<Vec<Position>>;
pub type MultiLineStringType = Vec<LineStringType>;
pub type MultiPolygonType = Vec<PolygonType>;

/// A GeoJSON geometry object.
///
/// Lines and polygons are decoded into typed coordinates. A `Point` is never simplified,
/// so it keeps its original object, `bbox` and foreign members included. Any other
/// object (a `MultiPoint`, a `GeometryCollection`, a bare `Feature`,
/// an unrecognized or non-string `type`) is kept as [`Geometry::Unknown`] and written back
/// exactly as it was read.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(JsonObject),
    LineString(LineStringType),
    MultiLineString(MultiLineStringType),
    Polygon(PolygonType),
    MultiPolygon(MultiPolygonType),
    Unknown(JsonObject),
}

impl Geometry {
    /// The GeoJSON `type` member of this geometry.
    ///
    /// Returns `None` for an [`Unknown`](Geometry::Unknown) object whose `type` is not a
    /// string.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Geometry::Point(_) => Some("Point"),
            Geometry::LineString(_) => Some("LineString"),
            Geometry::MultiLineString(_) => Some("MultiLineString"),
            Geometry::Polygon(_) => Some("Polygon"),
            Geometry::MultiPolygon(_) => Some("MultiPolygon"),
            Geometry::Unknown(object) => object.get("type").and_then(Value::as_str),
        }
    }

    /// Total number of positions held by this geometry. Unknown geometries count as zero.
    pub fn num_coords(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(line) => line.len(),
            Geometry::MultiLineString(lines) => lines.iter().map(Vec::len).sum(),
            Geometry::Polygon(rings) => rings.iter().map(Vec::len).sum(),
            Geometry::MultiPolygon(polygons) => polygons
                .iter()
                .flat_map(|rings| rings.iter().map(Vec::len))
                .sum(),
            Geometry::Unknown(_) => 0,
        }
    }

    /// Decode a geometry from an already-parsed JSON object.
    ///
    /// The object must carry a `type` member. Line and polygon types must also carry
    /// `coordinates`.
    pub(crate) fn from_object<E: Error>(mut object: JsonObject) -> Result<Self, E> {
        let tag = match object.get("type") {
            None => return Err(E::missing_field("type")),
            Some(value) => value.as_str().map(str::to_owned),
        };
        let Some(tag) = tag else {
            return Ok(Geometry::Unknown(object));
        };
        let geometry = match tag.as_str() {
            "Point" => Geometry::Point(object),
            "LineString" => Geometry::LineString(coordinates(&mut object)?),
            "MultiLineString" => Geometry::MultiLineString(coordinates(&mut object)?),
            "Polygon" => Geometry::Polygon(coordinates(&mut object)?),
            "MultiPolygon" => Geometry::MultiPolygon(coordinates(&mut object)?),
            _ => Geometry::Unknown(object),
        };
        Ok(geometry)
    }
}

fn coordinates<T: DeserializeOwned, E: Error>(object: &mut JsonObject) -> Result<T, E> {
    let value = object
        .remove("coordinates")
        .ok_or_else(|| E::missing_field("coordinates"))?;
    serde_json::from_value(value).map_err(E::custom)
}

fn serialize_tagged<S: Serializer, T: Serialize>(
    serializer: S,
    tag: &str,
    coordinates: &T,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("type", tag)?;
    map.serialize_entry("coordinates", coordinates)?;
    map.end()
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Geometry::LineString(line) => serialize_tagged(serializer, "LineString", line),
            Geometry::MultiLineString(lines) => {
                serialize_tagged(serializer, "MultiLineString", lines)
            }
            Geometry::Polygon(rings) => serialize_tagged(serializer, "Polygon", rings),
            Geometry::MultiPolygon(polygons) => {
                serialize_tagged(serializer, "MultiPolygon", polygons)
            }
            Geometry::Point(object) | Geometry::Unknown(object) => object.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = JsonObject::deserialize(deserializer)?;
        Geometry::from_object(object)
    }
}
