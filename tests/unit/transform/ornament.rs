use super::*;
use crate::composition::dsl::{CompositionBuilder, FragmentBuilder};
use crate::test_support::{ScriptedRandom, assert_canonical, single_stroke, zigzag};

fn two_strokes() -> Composition {
    CompositionBuilder::normalized()
        .tag("cat")
        .fragment(
            FragmentBuilder::new()
                .timed_stroke([0.2, 0.4], [0.2, 0.4], [0.0, 12.0])
                .stroke([0.6, 0.8, 0.7], [0.3, 0.3, 0.6]),
        )
        .build()
        .unwrap()
}

#[test]
fn normals_are_left_hand_unit_vectors() {
    let pts = [Point::new(0.0, 0.5), Point::new(0.5, 0.5), Point::new(1.0, 0.5)];
    for n in stroke_normals(&pts) {
        assert!(n.x.abs() < 1e-12 && (n.y - 1.0).abs() < 1e-12, "{n:?}");
    }

    let bent = [Point::new(0.0, 0.0), Point::new(0.0, 0.0), Point::new(0.0, 0.3)];
    let normals = stroke_normals(&bent);
    assert_eq!(normals[0], Vec2::ZERO);
    assert!((normals[1].x + 1.0).abs() < 1e-12);
    assert!((normals[2].x + 1.0).abs() < 1e-12);
}

#[test]
fn elaboration_adds_signed_parallel_copies() {
    let source = single_stroke(&[0.2, 0.5, 0.8], &[0.5, 0.5, 0.5]);
    let mut rng = ScriptedRandom::new(&[0.0], &[2]);
    let out = StrokeElaboration::default().apply(&source, &mut rng);

    let strokes = &out.doodle_fragments[0].strokes;
    assert_eq!(strokes.len(), 3);
    assert_eq!(strokes[0], source.doodle_fragments[0].strokes[0]);
    assert_eq!(strokes[1].ys, vec![0.508; 3]);
    assert_eq!(strokes[2].ys, vec![0.492; 3]);
    assert_eq!(strokes[1].xs, vec![0.2, 0.5, 0.8]);
    assert_eq!(strokes[2].timing, vec![0.0]);
}

#[test]
fn elaboration_draws_once_per_fragment() {
    let comp = CompositionBuilder::normalized()
        .tag("cat")
        .fragment(FragmentBuilder::new().stroke([0.1, 0.2], [0.1, 0.2]).stroke([0.5], [0.5]))
        .fragment(FragmentBuilder::new().stroke([0.7, 0.9], [0.7, 0.7]))
        .build()
        .unwrap();
    let mut rng = ScriptedRandom::new(&[1.0], &[1]);
    let out = StrokeElaboration::default().apply(&comp, &mut rng);

    assert_eq!(rng.float_draws(), 2);
    assert_eq!(rng.int_draws(), 2);
    // One copy per multi-point stroke; the single point is kept without copies.
    assert_eq!(out.doodle_fragments[0].stroke_count(), 3);
    assert_eq!(out.doodle_fragments[1].stroke_count(), 2);
    assert_eq!(out.doodle_fragments[1].strokes[1].ys, vec![0.725, 0.725]);
}

#[test]
fn elaboration_of_zero_length_stroke_copies_in_place() {
    let dot = single_stroke(&[0.3, 0.3], &[0.3, 0.3]);
    let out = StrokeElaboration::default().apply(&dot, &mut ScriptedRandom::new(&[0.5], &[2]));
    let strokes = &out.doodle_fragments[0].strokes;
    assert_eq!(strokes.len(), 3);
    assert!(strokes.iter().all(|s| s == &strokes[0]));
}

#[test]
fn mode_draw_covers_all_three() {
    let modes: Vec<_> = (0..3)
        .map(|i| EmbellishmentMode::draw(&mut ScriptedRandom::new(&[], &[i])))
        .collect();
    assert_eq!(
        modes,
        vec![EmbellishmentMode::Shadow, EmbellishmentMode::Echo, EmbellishmentMode::Connectors]
    );
}

#[test]
fn shadow_copies_come_first() {
    let source = two_strokes();
    let mut rng = ScriptedRandom::floats(&[0.0, 1.0]);
    let out = StrokeEmbellishment::default().apply_mode(&source, EmbellishmentMode::Shadow, &mut rng);

    let strokes = &out.doodle_fragments[0].strokes;
    assert_eq!(strokes.len(), 4);
    assert_eq!(strokes[0].xs, vec![0.21, 0.41]);
    assert_eq!(strokes[0].ys, vec![0.22, 0.42]);
    assert_eq!(strokes[0].timing, vec![0.0, 12.0]);
    assert_eq!(strokes[2..], source.doodle_fragments[0].strokes[..]);
}

#[test]
fn echo_follows_each_original() {
    let comp = CompositionBuilder::normalized()
        .tag("cat")
        .fragment(
            FragmentBuilder::new()
                .stroke([0.1, 0.5], [0.4, 0.4])
                .stroke([0.9], [0.9]),
        )
        .build()
        .unwrap();
    let mut rng = ScriptedRandom::floats(&[0.5]);
    let out = StrokeEmbellishment::default().apply_mode(&comp, EmbellishmentMode::Echo, &mut rng);

    let strokes = &out.doodle_fragments[0].strokes;
    assert_eq!(strokes.len(), 3);
    assert_eq!(strokes[0], comp.doodle_fragments[0].strokes[0]);
    // Factor 0.95 about centroid x = 0.3.
    assert_eq!(strokes[1].xs, vec![0.11, 0.49]);
    assert_eq!(strokes[1].ys, vec![0.4, 0.4]);
    assert_eq!(strokes[2], comp.doodle_fragments[0].strokes[1]);
}

#[test]
fn connectors_link_consecutive_strokes() {
    let source = two_strokes();
    let mut rng = ScriptedRandom::default();
    let out = StrokeEmbellishment::default().apply_mode(&source, EmbellishmentMode::Connectors, &mut rng);

    let strokes = &out.doodle_fragments[0].strokes;
    assert_eq!(strokes.len(), 3);
    assert_eq!(strokes[..2], source.doodle_fragments[0].strokes[..]);
    assert_eq!(strokes[2], Stroke::fresh(vec![0.4, 0.6], vec![0.4, 0.3]));
    assert_eq!(rng.float_draws(), 0);
}

#[test]
fn connectors_skip_single_stroke_fragments() {
    let source = single_stroke(&[0.1, 0.2], &[0.1, 0.2]);
    let out = StrokeEmbellishment::default().apply_mode(
        &source,
        EmbellishmentMode::Connectors,
        &mut ScriptedRandom::default(),
    );
    assert_eq!(out, source);
}

#[test]
fn embellishment_stays_canonical() {
    let source = zigzag(4, 5);
    for mode in 0..3 {
        let mut rng = ScriptedRandom::new(&[0.99, 0.01, 0.5], &[mode]);
        let out = StrokeEmbellishment::default().apply(&source, &mut rng);
        assert_canonical(&out);
        assert!(out.doodle_fragments[0].stroke_count() > 4);
    }
}
