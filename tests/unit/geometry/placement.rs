use super::*;
use crate::composition::dsl::{CompositionBuilder, FragmentBuilder};

fn vee() -> Composition {
    CompositionBuilder::normalized()
        .tag("test")
        .tag("cat")
        .fragment(FragmentBuilder::new().stroke([0.1, 0.5, 0.9], [0.2, 0.6, 0.2]))
        .build()
        .unwrap()
}

#[test]
fn transform_points_preserves_structure() {
    let comp = CompositionBuilder::normalized()
        .tag("cat")
        .fragment(
            FragmentBuilder::new()
                .timed_stroke([0.1, 0.2], [0.3, 0.4], [0.0, 7.0])
                .stroke([0.5], [0.5]),
        )
        .fragment(FragmentBuilder::new().stroke([0.9, 0.8, 0.7], [0.1, 0.1, 0.1]))
        .build()
        .unwrap();

    let out = transform_points(&comp, |p| Point::new(p.y, p.x), None);
    assert_eq!(out.tags, comp.tags);
    assert_eq!(out.doodle_fragments.len(), 2);
    assert_eq!(out.doodle_fragments[0].stroke_count(), 2);
    assert_eq!(out.doodle_fragments[1].strokes[0].point_count(), 3);
    assert_eq!(out.doodle_fragments[0].strokes[0].xs, vec![0.3, 0.4]);
    assert_eq!(out.doodle_fragments[0].strokes[0].timing, vec![0.0, 7.0]);
}

#[test]
fn transform_points_replaces_tags_when_given() {
    let out = transform_points(&vee(), |p| p, Some(vec!["other".to_string()]));
    assert_eq!(out.tags, vec!["other"]);
}

#[test]
fn place_in_region_scales_and_centers() {
    let region = Rect::new(0.0, 0.0, 0.5, 0.5);
    let placed = place_in_region(&vee(), region, 1.0);

    // scale = min(0.5 / 0.8, 0.5 / 0.4) = 0.625 -> 0.5 x 0.25, centered vertically.
    let stroke = &placed.doodle_fragments[0].strokes[0];
    assert_eq!(stroke.xs, vec![0.0, 0.25, 0.5]);
    assert_eq!(stroke.ys, vec![0.125, 0.375, 0.125]);

    let b = bounding_box(&placed);
    assert!(b.x0 >= 0.0 && b.y0 >= 0.0 && b.x1 <= 0.5 && b.y1 <= 0.5);
    assert_eq!(placed.tags, vee().tags);
}

#[test]
fn place_in_region_applies_fill_factor() {
    let region = Rect::new(0.5, 0.5, 1.0, 1.0);
    let placed = place_in_region(&vee(), region, 0.8);
    let b = bounding_box(&placed);
    assert!((b.width() - 0.4).abs() < 1e-9, "width {}", b.width());
    assert!((b.height() - 0.2).abs() < 1e-9, "height {}", b.height());
    assert!((b.center().x - 0.75).abs() < 1e-9);
    assert!((b.center().y - 0.75).abs() < 1e-9);
}

#[test]
fn place_in_region_leaves_degenerate_input_unchanged() {
    let line = CompositionBuilder::normalized()
        .fragment(FragmentBuilder::new().stroke([0.3, 0.3, 0.3], [0.1, 0.5, 0.9]))
        .build()
        .unwrap();
    let placed = place_in_region(&line, Rect::new(0.0, 0.0, 0.2, 0.2), 1.0);
    assert_eq!(placed, line);

    let empty = CompositionBuilder::normalized().build().unwrap();
    assert_eq!(place_in_region(&empty, Rect::new(0.0, 0.0, 1.0, 1.0), 0.75), empty);
}
