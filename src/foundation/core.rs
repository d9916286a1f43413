pub use kurbo::{Affine, Point, Rect, Vec2};

/// Decimal places kept for every normalized coordinate.
pub const COORDINATE_PRECISION: i32 = 3;

/// Nominal canvas edge (in source pixels) of normalized subjects and scenes.
pub const CANVAS_SIZE: u32 = 255;

/// Clamp a coordinate into the normalized `[0, 1]` domain.
#[inline]
pub fn clamp_coordinate(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Round half away from zero to `decimals` places.
#[inline]
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

/// Round a coordinate to the canonical precision.
#[inline]
pub fn round_coordinate(v: f64) -> f64 {
    round_to(v, COORDINATE_PRECISION)
}

/// Clamp then round: the canonical form of every coordinate an operation moves.
#[inline]
pub fn snap_coordinate(v: f64) -> f64 {
    round_coordinate(clamp_coordinate(v))
}

#[inline]
pub fn snap_point(p: Point) -> Point {
    Point::new(snap_coordinate(p.x), snap_coordinate(p.y))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
