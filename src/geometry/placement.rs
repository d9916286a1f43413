use crate::{
    composition::model::Composition,
    foundation::core::{Point, Rect, Vec2, snap_point},
    geometry::bounds::{bounding_box, has_area},
};

/// Apply `f` to every point of every stroke in every fragment.
///
/// Fragment count, per-fragment stroke count, per-stroke point count and the
/// timing channel are preserved. `tags: None` keeps the source tags. `f` is
/// responsible for clamping and rounding what it returns.
pub fn transform_points(
    comp: &Composition,
    mut f: impl FnMut(Point) -> Point,
    tags: Option<Vec<String>>,
) -> Composition {
    let mapped = comp.map_strokes(|stroke| stroke.map_points(&mut f));
    match tags {
        Some(tags) => mapped.with_tags(tags),
        None => mapped,
    }
}

/// Uniformly scale and center `comp` into `region`.
///
/// The scale is `min(region.w / bbox.w, region.h / bbox.h) * fill_factor`.
/// A composition whose bounds have zero width or height cannot be scaled and
/// is returned unchanged.
pub fn place_in_region(comp: &Composition, region: Rect, fill_factor: f64) -> Composition {
    let bbox = bounding_box(comp);
    if !has_area(bbox) {
        return comp.clone();
    }

    let scale = (region.width() / bbox.width()).min(region.height() / bbox.height()) * fill_factor;
    let offset = Vec2::new(
        region.x0 + (region.width() - bbox.width() * scale) / 2.0,
        region.y0 + (region.height() - bbox.height() * scale) / 2.0,
    );
    let origin = bbox.origin();

    transform_points(
        comp,
        |p| snap_point(((p - origin) * scale + offset).to_point()),
        None,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/placement.rs"]
mod tests;
