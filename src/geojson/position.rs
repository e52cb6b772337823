use serde::de::{Deserialize, Deserializer, Error};
use serde::{Serialize, Serializer};

/// A GeoJSON position: longitude, latitude and any further ordinates (e.g. altitude).
///
/// Always holds at least two numbers. Only the first two take part in distance
/// computations, but equality compares every ordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(Vec<f64>);

impl Position {
    /// A two-dimensional position.
    pub fn new(x: f64, y: f64) -> Self {
        Self(vec![x, y])
    }

    /// Longitude.
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    /// Latitude.
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Every ordinate, in input order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<[f64; 3]> for Position {
    fn from(value: [f64; 3]) -> Self {
        Self(value.to_vec())
    }
}

impl From<&Position> for geo::Coord {
    fn from(value: &Position) -> Self {
        geo::coord! { x: value.x(), y: value.y() }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        if values.len() < 2 {
            return Err(D::Error::invalid_length(
                values.len(),
                &"a position with at least two numbers",
            ));
        }
        Ok(Self(values))
    }
}
