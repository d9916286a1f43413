use super::*;

#[test]
fn builders_create_expected_structure() {
    let comp = CompositionBuilder::normalized()
        .tag("test")
        .tag("cat")
        .fragment(
            FragmentBuilder::new()
                .stroke([0.1, 0.5, 0.9], [0.2, 0.6, 0.2])
                .timed_stroke([0.3, 0.4], [0.3, 0.8], [0.0, 5.0]),
        )
        .fragment(FragmentBuilder::new().stroke([0.5], [0.5]))
        .build()
        .unwrap();

    assert_eq!((comp.width, comp.height), (255, 255));
    assert_eq!(comp.doodle_fragments.len(), 2);
    assert_eq!(comp.doodle_fragments[0].stroke_count(), 2);
    assert_eq!(comp.doodle_fragments[0].strokes[0].timing, vec![0.0]);
    assert_eq!(comp.doodle_fragments[0].strokes[1].timing, vec![0.0, 5.0]);
    assert_eq!(comp.tags, vec!["test", "cat"]);
    assert!(comp.is_scene());
}

#[test]
fn build_rejects_duplicate_tags() {
    let err = CompositionBuilder::normalized()
        .tag("cat")
        .tag("cat")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("duplicate tag"));
}

#[test]
fn build_rejects_mismatched_stroke() {
    let res = CompositionBuilder::new(100, 80)
        .fragment(FragmentBuilder::new().stroke([0.1, 0.2], [0.1]))
        .build();
    assert!(res.is_err());
}
