use super::*;
use crate::composition::dsl::{CompositionBuilder, FragmentBuilder};
use crate::test_support::{assert_canonical, single_stroke, zigzag};

#[test]
fn smoothing_inserts_resolution_points_per_segment() {
    let source = single_stroke(&[0.0, 0.5, 1.0], &[0.0, 0.0, 0.0]);
    let out = StrokeSmoothing::default().apply(&source);
    let s = &out.doodle_fragments[0].strokes[0];

    assert_eq!(s.point_count(), 2 * 4 + 1);
    assert_eq!((s.xs[0], s.xs[4], s.xs[8]), (0.0, 0.5, 1.0));
    // First segment with a repeated leading point: 0.5 * (0.5t + t^2 - 0.5t^3) at t = 0.5.
    assert_eq!(s.xs[2], 0.219);
    assert!(s.ys.iter().all(|&y| y == 0.0));
    assert!(s.xs.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn smoothing_skips_short_strokes_and_keeps_timing() {
    let comp = CompositionBuilder::normalized()
        .tag("cat")
        .fragment(
            FragmentBuilder::new()
                .stroke([0.1, 0.9], [0.1, 0.9])
                .timed_stroke([0.1, 0.4, 0.8, 0.9], [0.5, 0.2, 0.7, 0.5], [0.0, 1.0, 2.0, 3.0]),
        )
        .build()
        .unwrap();
    let out = StrokeSmoothing { resolution: 2 }.apply(&comp);
    let strokes = &out.doodle_fragments[0].strokes;
    assert_eq!(strokes[0], comp.doodle_fragments[0].strokes[0]);
    assert_eq!(strokes[1].point_count(), 3 * 3 + 1);
    assert_eq!(strokes[1].timing, vec![0.0, 1.0, 2.0, 3.0]);
    assert_canonical(&out);
}

#[test]
fn refinement_target_count() {
    let r = StrokeRefinement::default();
    assert_eq!(r.target_count(2), 10);
    assert_eq!(r.target_count(3), 10);
    assert_eq!(r.target_count(4), 12);
    assert_eq!(r.target_count(5), 15);
}

#[test]
fn refinement_spaces_points_by_arc_length() {
    let source = single_stroke(&[0.0, 0.9], &[0.5, 0.5]);
    let out = StrokeRefinement::default().apply(&source);
    let s = &out.doodle_fragments[0].strokes[0];
    let expected: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
    assert_eq!(s.xs, expected);
    assert_eq!(s.ys, vec![0.5; 10]);
    assert_eq!(s.timing, vec![0.0]);
}

#[test]
fn refinement_follows_corners() {
    // An L of total length 0.8; with 10 samples the 5th lands near the corner.
    let source = single_stroke(&[0.1, 0.5, 0.5], &[0.1, 0.1, 0.5]);
    let out = StrokeRefinement::default().apply(&source);
    let s = &out.doodle_fragments[0].strokes[0];
    assert_eq!(s.point_count(), 10);
    assert!(s.points().all(|p| p.x == 0.5 || p.y == 0.1), "{s:?}");
}

#[test]
fn refinement_preserves_endpoints() {
    let source = zigzag(3, 6);
    let out = StrokeRefinement::default().apply(&source);
    for (before, after) in source.strokes().zip(out.strokes()) {
        assert_eq!(after.point_count(), 18);
        assert_eq!(after.first_point(), before.first_point());
        assert_eq!(after.last_point(), before.last_point());
        assert_eq!(after.timing, before.timing);
    }
}

#[test]
fn refinement_leaves_degenerate_strokes_unchanged() {
    let comp = CompositionBuilder::normalized()
        .tag("cat")
        .fragment(
            FragmentBuilder::new()
                .stroke([0.3], [0.3])
                .stroke([0.4, 0.4, 0.4], [0.6, 0.6, 0.6]),
        )
        .build()
        .unwrap();
    assert_eq!(StrokeRefinement::default().apply(&comp), comp);
}
