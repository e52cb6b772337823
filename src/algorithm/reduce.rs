use geo::Coord;

use crate::geojson::Position;

/// Planar distance as `sqrt(dx² + dy²)`. Not `hypot`: the two can differ in the last bit.
fn planar_distance(a: Coord, b: Coord) -> f64 {
    let delta = a - b;
    (delta.x * delta.x + delta.y * delta.y).sqrt()
}

/// Drop every position that lies within `tolerance` of the last position kept.
///
/// The first position is always kept. A later position is kept only when its planar
/// distance from the most recently kept position is strictly greater than `tolerance`.
/// Distances are plain Euclidean distances on the raw coordinates (degrees), with no
/// geodesic correction.
///
/// If more than one position survives and the result does not already end where it
/// starts, the first position is appended again. This closing step applies to every
/// multi-position result, lines included.
///
/// Sequences of fewer than two positions are returned unchanged.
///
/// # Examples
///
/// ```
/// use geojson_simplify::algorithm::reduce_coords;
/// use geojson_simplify::geojson::Position;
///
/// let ring = vec![
///     Position::new(0., 0.),
///     Position::new(0., 0.00001),
///     Position::new(0., 0.0002),
///     Position::new(0., 0.),
/// ];
///
/// let reduced = reduce_coords(&ring, 0.0001);
///
/// assert_eq!(
///     reduced,
///     vec![Position::new(0., 0.), Position::new(0., 0.0002), Position::new(0., 0.)]
/// );
/// ```
pub fn reduce_coords(coords: &[Position], tolerance: f64) -> Vec<Position> {
    let Some((first, rest)) = coords.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return coords.to_vec();
    }

    let mut reduced = vec![first.clone()];
    let mut last_kept = Coord::from(first);
    for coord in rest {
        let current = Coord::from(coord);
        if planar_distance(current, last_kept) > tolerance {
            reduced.push(coord.clone());
            last_kept = current;
        }
    }

    if reduced.len() > 1 && reduced.last() != Some(first) {
        reduced.push(first.clone());
    }
    reduced
}
