use tracing::debug;

use crate::algorithm::reduce_coords;
use crate::geojson::{
    Document, Feature, FeatureCollection, Geometry, LineStringType, MultiPolygonType, PolygonType,
};

/// A reduced line needs at least this many positions to be kept in a `MultiLineString`.
const MIN_LINE_LEN: usize = 2;

/// A reduced ring needs at least this many positions to be kept in a polygon.
const MIN_RING_LEN: usize = 3;

/// How many features pass between two progress events.
const PROGRESS_INTERVAL: usize = 100;

/// Reduces the coordinate density of a geometry.
///
/// Every coordinate sequence is passed through [`reduce_coords`], which drops positions closer
/// than `tolerance` to the last kept one. Lines and rings that collapse are removed from their
/// parent. This is not Douglas-Peucker: topology is not preserved and the result may be
/// an invalid polygon. In particular, a polygon whose exterior ring collapses keeps its
/// surviving holes.
///
/// Points and geometry types that are not simplified are returned unchanged. The input is
/// never modified.
pub trait Simplify {
    type Output;

    /// Returns the simplified representation of a geometry.
    ///
    /// # Examples
    ///
    /// ```
    /// use geojson_simplify::algorithm::Simplify;
    /// use geojson_simplify::geojson::{Geometry, Position};
    ///
    /// let lines = Geometry::MultiLineString(vec![
    ///     vec![Position::new(0., 0.), Position::new(0.00001, 0.)],
    ///     vec![Position::new(0., 0.), Position::new(1., 0.)],
    /// ]);
    ///
    /// let simplified = lines.simplify(&0.0001);
    ///
    /// let expected = Geometry::MultiLineString(vec![vec![
    ///     Position::new(0., 0.),
    ///     Position::new(1., 0.),
    ///     Position::new(0., 0.),
    /// ]]);
    ///
    /// assert_eq!(expected, simplified);
    /// ```
    fn simplify(&self, tolerance: &f64) -> Self::Output;
}

fn simplify_lines(lines: &[LineStringType], tolerance: f64) -> Vec<LineStringType> {
    lines
        .iter()
        .map(|line| reduce_coords(line, tolerance))
        .filter(|line| line.len() >= MIN_LINE_LEN)
        .collect()
}

fn simplify_rings(rings: &[LineStringType], tolerance: f64) -> PolygonType {
    rings
        .iter()
        .map(|ring| reduce_coords(ring, tolerance))
        .filter(|ring| ring.len() >= MIN_RING_LEN)
        .collect()
}

fn simplify_polygons(polygons: &[PolygonType], tolerance: f64) -> MultiPolygonType {
    polygons
        .iter()
        .map(|rings| simplify_rings(rings, tolerance))
        .filter(|rings| !rings.is_empty())
        .collect()
}

impl Simplify for Geometry {
    type Output = Self;

    fn simplify(&self, tolerance: &f64) -> Self {
        let tolerance = *tolerance;
        match self {
            Geometry::LineString(line) => Geometry::LineString(reduce_coords(line, tolerance)),
            Geometry::MultiLineString(lines) => {
                Geometry::MultiLineString(simplify_lines(lines, tolerance))
            }
            Geometry::Polygon(rings) => Geometry::Polygon(simplify_rings(rings, tolerance)),
            Geometry::MultiPolygon(polygons) => {
                Geometry::MultiPolygon(simplify_polygons(polygons, tolerance))
            }
            Geometry::Point(_) | Geometry::Unknown(_) => self.clone(),
        }
    }
}

impl Simplify for Feature {
    type Output = Self;

    fn simplify(&self, tolerance: &f64) -> Self {
        Feature {
            properties: self.properties.clone(),
            geometry: self.geometry.simplify(tolerance),
        }
    }
}

impl Simplify for FeatureCollection {
    type Output = Self;

    fn simplify(&self, tolerance: &f64) -> Self {
        let total = self.features.len();
        FeatureCollection {
            features: self
                .features
                .iter()
                .enumerate()
                .map(|(idx, feature)| {
                    if idx % PROGRESS_INTERVAL == 0 {
                        debug!("Simplifying feature {idx}/{total}");
                    }
                    feature.simplify(tolerance)
                })
                .collect(),
            crs: self.crs.clone(),
        }
    }
}

impl Simplify for Document {
    type Output = Self;

    fn simplify(&self, tolerance: &f64) -> Self {
        match self {
            Document::FeatureCollection(collection) => {
                Document::FeatureCollection(collection.simplify(tolerance))
            }
            Document::Geometry(geometry) => Document::Geometry(geometry.simplify(tolerance)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{feature_collection, point_geometry, positions};
    use serde_json::{json, Value};

    #[test]
    fn point_is_identity() {
        let point = point_geometry(1., 2.);
        assert_eq!(point.simplify(&10.), point);
    }

    #[test]
    fn point_with_bbox_passes_through_document() {
        let input = json!({
            "type": "Point",
            "bbox": [1, 2, 1, 2],
            "coordinates": [1, 2]
        });
        let document: Document = serde_json::from_value(input.clone()).unwrap();

        let simplified = document.simplify(&0.0001);

        assert_eq!(simplified, document);
        assert_eq!(serde_json::to_value(&simplified).unwrap(), input);
    }

    #[test]
    fn line_string_is_reduced_and_closed() {
        let line = Geometry::LineString(positions(&[[0., 0.], [0.00001, 0.], [1., 0.]]));
        assert_eq!(
            line.simplify(&0.0001),
            Geometry::LineString(positions(&[[0., 0.], [1., 0.], [0., 0.]]))
        );
    }

    #[test]
    fn collapsed_line_string_is_kept_as_is() {
        let line = Geometry::LineString(positions(&[[0., 0.], [0.00001, 0.]]));
        assert_eq!(
            line.simplify(&0.0001),
            Geometry::LineString(positions(&[[0., 0.]]))
        );
    }

    #[test]
    fn multi_line_string_drops_collapsed_lines() {
        let lines = Geometry::MultiLineString(vec![
            positions(&[[5., 5.], [6., 5.]]),
            positions(&[[0., 0.], [0.00001, 0.]]),
            positions(&[[1., 1.], [1., 2.], [1., 1.]]),
        ]);
        let expected = Geometry::MultiLineString(vec![
            positions(&[[5., 5.], [6., 5.], [5., 5.]]),
            positions(&[[1., 1.], [1., 2.], [1., 1.]]),
        ]);
        assert_eq!(lines.simplify(&0.0001), expected);
    }

    #[test]
    fn polygon_drops_collapsed_rings() {
        let exterior = positions(&[[0., 0.], [1., 0.], [1., 1.], [0., 1.], [0., 0.]]);
        let hole = positions(&[[0.5, 0.5], [0.50001, 0.5], [0.5, 0.50001], [0.5, 0.5]]);
        let polygon = Geometry::Polygon(vec![exterior.clone(), hole]);
        assert_eq!(polygon.simplify(&0.0001), Geometry::Polygon(vec![exterior]));
    }

    #[test]
    fn polygon_with_only_collapsed_rings_has_no_rings() {
        let polygon = Geometry::Polygon(vec![positions(&[
            [0., 0.],
            [0.00001, 0.],
            [0., 0.00001],
            [0., 0.],
        ])]);
        assert_eq!(polygon.simplify(&0.0001), Geometry::Polygon(vec![]));
    }

    #[test]
    fn polygon_keeps_hole_when_exterior_collapses() {
        let exterior = positions(&[[0., 0.], [0.00001, 0.], [0., 0.00001], [0., 0.]]);
        let hole = positions(&[[2., 2.], [3., 2.], [3., 3.], [2., 2.]]);
        let polygon = Geometry::Polygon(vec![exterior, hole.clone()]);
        assert_eq!(polygon.simplify(&0.0001), Geometry::Polygon(vec![hole]));
    }

    #[test]
    fn multi_polygon_drops_empty_polygons() {
        let tiny = vec![positions(&[[9., 9.], [9.00001, 9.], [9., 9.]])];
        let first = vec![positions(&[[0., 0.], [1., 0.], [1., 1.], [0., 0.]])];
        let second = vec![positions(&[[5., 5.], [6., 5.], [6., 6.], [5., 5.]])];
        let polygons = Geometry::MultiPolygon(vec![first.clone(), tiny, second.clone()]);
        assert_eq!(
            polygons.simplify(&0.0001),
            Geometry::MultiPolygon(vec![first, second])
        );
    }

    #[test]
    fn unknown_geometry_is_unchanged() {
        let geometry: Geometry = serde_json::from_value(json!({
            "type": "MultiPoint",
            "coordinates": [[0, 0], [0.000001, 0]]
        }))
        .unwrap();
        assert_eq!(geometry.simplify(&0.0001), geometry);
    }

    #[test]
    fn input_is_not_modified() {
        let line = Geometry::LineString(positions(&[[0., 0.], [0.00001, 0.], [1., 0.]]));
        let before = line.clone();
        let _ = line.simplify(&0.0001);
        assert_eq!(line, before);
    }

    #[test]
    fn feature_collection_keeps_every_feature() {
        let collection = feature_collection();
        let simplified = collection.simplify(&0.0001);

        assert_eq!(simplified.len(), collection.len());
        assert_eq!(simplified.crs, collection.crs);
        for (before, after) in collection.features.iter().zip(&simplified.features) {
            assert_eq!(before.properties, after.properties);
            assert_eq!(before.geometry.type_name(), after.geometry.type_name());
        }
        assert_eq!(
            simplified.features[1].geometry,
            Geometry::Polygon(vec![])
        );
        assert_eq!(simplified.features[2].properties, Value::Null);
    }

    #[test]
    fn document_dispatch() {
        let collection = feature_collection();
        let document = Document::from(collection.clone());
        assert_eq!(
            document.simplify(&0.0001),
            Document::FeatureCollection(collection.simplify(&0.0001))
        );

        let line = Geometry::LineString(positions(&[[0., 0.], [0.00001, 0.], [1., 0.]]));
        assert_eq!(
            Document::from(line.clone()).simplify(&0.0001),
            Document::Geometry(line.simplify(&0.0001))
        );
    }
}
