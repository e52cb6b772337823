use std::str::FromStr;

use serde::de::Error;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::SimplifyError;
use crate::geojson::{Geometry, JsonObject};

/// A feature: an opaque `properties` payload plus one geometry.
///
/// `properties` is required but may be `null`. It is never interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub properties: Value,
    pub geometry: Geometry,
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "Feature")?;
        map.serialize_entry("properties", &self.properties)?;
        map.serialize_entry("geometry", &self.geometry)?;
        map.end()
    }
}

/// An ordered list of features plus optional coordinate reference system metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    /// The `crs` member, when the input had one. A present `null` is kept as `Some(Null)`.
    pub crs: Option<Value>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Serialize for FeatureCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.crs.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", "FeatureCollection")?;
        map.serialize_entry("features", &self.features)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

/// A top-level GeoJSON document.
///
/// Anything whose `type` is not `FeatureCollection` is handled as a single [`Geometry`],
/// which means a top-level `Feature` ends up as [`Geometry::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    FeatureCollection(FeatureCollection),
    Geometry(Geometry),
}

impl Document {
    /// Number of features, or `None` when the document is a bare geometry.
    pub fn num_features(&self) -> Option<usize> {
        match self {
            Document::FeatureCollection(collection) => Some(collection.len()),
            Document::Geometry(_) => None,
        }
    }

    /// Total number of positions in every geometry of the document.
    pub fn num_coords(&self) -> usize {
        match self {
            Document::FeatureCollection(collection) => collection
                .features
                .iter()
                .map(|feature| feature.geometry.num_coords())
                .sum(),
            Document::Geometry(geometry) => geometry.num_coords(),
        }
    }
}

impl From<FeatureCollection> for Document {
    fn from(value: FeatureCollection) -> Self {
        Document::FeatureCollection(value)
    }
}

impl From<Geometry> for Document {
    fn from(value: Geometry) -> Self {
        Document::Geometry(value)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Document::FeatureCollection(collection) => collection.serialize(serializer),
            Document::Geometry(geometry) => geometry.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = JsonObject::deserialize(deserializer)?;
        let is_collection = match object.get("type") {
            None => return Err(D::Error::missing_field("type")),
            Some(value) => value.as_str() == Some("FeatureCollection"),
        };
        if !is_collection {
            return Geometry::from_object(object).map(Document::Geometry);
        }

        let features = object
            .remove("features")
            .ok_or_else(|| D::Error::missing_field("features"))?;
        let features = serde_json::from_value(features).map_err(D::Error::custom)?;
        let crs = object.remove("crs");
        Ok(Document::FeatureCollection(FeatureCollection { features, crs }))
    }
}

impl FromStr for Document {
    type Err = SimplifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point_geometry;
    use serde_json::json;

    #[test]
    fn parse_feature_collection() {
        let document: Document = r#"{
            "type": "FeatureCollection",
            "crs": {"type": "name", "properties": {"name": "EPSG:4326"}},
            "features": [
                {"type": "Feature", "properties": {"z": 1, "a": "x"},
                 "geometry": {"type": "Point", "coordinates": [1, 2]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}}
            ]
        }"#
        .parse()
        .unwrap();

        let Document::FeatureCollection(collection) = &document else {
            panic!("expected a feature collection");
        };
        assert_eq!(document.num_features(), Some(2));
        assert_eq!(
            serde_json::to_value(&collection.features[0].geometry).unwrap(),
            json!({"type": "Point", "coordinates": [1, 2]})
        );
        assert_eq!(collection.features[1].properties, Value::Null);
        let keys: Vec<_> = collection.features[0]
            .properties
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["z", "a"]);
        assert_eq!(
            collection.crs,
            Some(json!({"type": "name", "properties": {"name": "EPSG:4326"}}))
        );
    }

    #[test]
    fn null_crs_is_kept() {
        let document: Document = r#"{"type":"FeatureCollection","features":[],"crs":null}"#
            .parse()
            .unwrap();
        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            r#"{"type":"FeatureCollection","features":[],"crs":null}"#
        );
    }

    #[test]
    fn top_level_feature_is_an_unknown_geometry() {
        let input = json!({
            "type": "Feature",
            "properties": {},
            "geometry": {"type": "Point", "coordinates": [0, 0]}
        });
        let document: Document = serde_json::from_value(input.clone()).unwrap();
        assert!(matches!(
            document,
            Document::Geometry(Geometry::Unknown(_))
        ));
        assert_eq!(document.num_features(), None);
        assert_eq!(serde_json::to_value(&document).unwrap(), input);
    }

    #[test]
    fn missing_keys_are_errors() {
        for input in [
            r#"{"features": []}"#,
            r#"{"type": "FeatureCollection"}"#,
            r#"{"type": "FeatureCollection", "features": [{"properties": {}}]}"#,
            r#"{"type": "FeatureCollection", "features": [{"geometry": {"type": "Point", "coordinates": [0, 0]}}]}"#,
            r#"{"type": "FeatureCollection", "features": [{"properties": {}, "geometry": null}]}"#,
            r#"[1, 2]"#,
            r#"{"type": "FeatureCollection", "features": ["#,
        ] {
            assert!(input.parse::<Document>().is_err(), "accepted {input}");
        }
    }

    #[test]
    fn feature_is_written_in_geojson_member_order() {
        let feature = Feature {
            properties: json!({"name": "a"}),
            geometry: point_geometry(1., 2.),
        };
        assert_eq!(
            serde_json::to_string(&feature).unwrap(),
            r#"{"type":"Feature","properties":{"name":"a"},"geometry":{"type":"Point","coordinates":[1.0,2.0]}}"#
        );
    }
}
