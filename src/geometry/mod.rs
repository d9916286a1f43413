//! Geometry over whole compositions: bounds, counting, point mapping and
//! region placement. Every other component builds on these.

pub(crate) mod bounds;
pub(crate) mod placement;
