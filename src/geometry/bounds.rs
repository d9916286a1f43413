use crate::{
    composition::model::{Composition, Stroke},
    foundation::core::{Point, Rect},
};

/// Inverted bounds returned for a composition with no points.
///
/// Its width and height are negative, so [`has_area`] is false for it.
pub const EMPTY_BOUNDS: Rect = Rect::new(f64::MAX, f64::MAX, f64::MIN, f64::MIN);

/// Axis-aligned bounds of every point in every stroke of every fragment.
///
/// Returns [`EMPTY_BOUNDS`] when there are no points; callers must guard
/// against zero or negative extents.
pub fn bounding_box(comp: &Composition) -> Rect {
    comp.strokes()
        .flat_map(Stroke::points)
        .fold(EMPTY_BOUNDS, include_point)
}

fn include_point(b: Rect, p: Point) -> Rect {
    Rect::new(b.x0.min(p.x), b.y0.min(p.y), b.x1.max(p.x), b.y1.max(p.y))
}

/// True when both extents are strictly positive.
pub fn has_area(bounds: Rect) -> bool {
    bounds.width() > 0.0 && bounds.height() > 0.0
}

/// Total number of points across all strokes.
pub fn count_points(comp: &Composition) -> usize {
    comp.strokes().map(Stroke::point_count).sum()
}

/// Total number of strokes across all fragments.
pub fn count_strokes(comp: &Composition) -> usize {
    comp.doodle_fragments.iter().map(|f| f.strokes.len()).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bounds.rs"]
mod tests;
