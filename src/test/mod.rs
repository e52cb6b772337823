
pub(crate) use coords::{point_geometry, positions};
pub(crate) use feature_collection::feature_collection;
